//! Integration tests for push notification verification through the client.

use shopee_api::auth::signing::compute_signature;
use shopee_api::{Client, PartnerId, PartnerKey, PushRequest, ShopeeConfig, WebhookError};

const URL: &str = "https://example.com/shopee/push";
const BODY: &str = r#"{"shop_id":600000,"code":3,"timestamp":1700000000,"data":{"ordersn":"2311150001","status":"READY_TO_SHIP"}}"#;
const SIGNATURE: &str = "f916ea16247bb7119caf09e56c651e4b1316fd2ccf23431d73976f8454a9d4c5";

fn create_test_client() -> Client {
    let config = ShopeeConfig::builder()
        .partner_id(PartnerId::new(123_456))
        .partner_key(PartnerKey::new("test_partner_key").unwrap())
        .build()
        .unwrap();
    Client::new(config)
}

fn sign(url: &str, body: &[u8]) -> String {
    compute_signature([url.as_bytes(), "|".as_bytes(), body].concat(), "test_partner_key")
}

#[test]
fn test_order_status_push_is_verified_and_parsed() {
    let client = create_test_client();
    let request = PushRequest::new(URL, BODY.as_bytes().to_vec(), SIGNATURE);

    assert!(client.is_valid_push_request(&request));

    let message = client.verify_push_request(&request).unwrap();
    assert_eq!(message.code, 3);
    assert_eq!(message.shop_id, Some(600_000));
    assert_eq!(message.data["ordersn"], "2311150001");
}

#[test]
fn test_partner_level_push_without_shop() {
    let client = create_test_client();
    let body = br#"{"code":12,"timestamp":1700000000,"data":{}}"#.to_vec();
    let signature = sign(URL, &body);

    let message = client
        .verify_push_request(&PushRequest::new(URL, body, signature))
        .unwrap();

    assert_eq!(message.shop_id, None);
    assert_eq!(message.code, 12);
}

#[test]
fn test_push_signed_with_another_partner_key_is_rejected() {
    let client = create_test_client();
    let signature = compute_signature(
        [URL.as_bytes(), "|".as_bytes(), BODY.as_bytes()].concat(),
        "another_partner_key",
    );
    let request = PushRequest::new(URL, BODY.as_bytes().to_vec(), signature);

    assert!(!client.is_valid_push_request(&request));
    assert!(matches!(
        client.verify_push_request(&request),
        Err(WebhookError::InvalidSignature)
    ));
}

#[test]
fn test_re_serialized_body_no_longer_verifies() {
    let client = create_test_client();
    let reparsed: serde_json::Value = serde_json::from_str(BODY).unwrap();
    let pretty = serde_json::to_vec_pretty(&reparsed).unwrap();

    let request = PushRequest::new(URL, pretty, SIGNATURE);
    assert!(!client.is_valid_push_request(&request));
}

#[test]
fn test_empty_signature_is_rejected() {
    let client = create_test_client();
    let request = PushRequest::new(URL, BODY.as_bytes().to_vec(), "");

    assert!(!client.is_valid_push_request(&request));
}

#[test]
fn test_signature_only_check_accepts_any_body_shape() {
    let client = create_test_client();
    let body = br#"{"event":"video_upload","payload":[1,2,3]}"#.to_vec();
    let signature = sign(URL, &body);
    let request = PushRequest::new(URL, body, signature);

    assert!(client.check_push_signature(&request).is_ok());
    assert!(matches!(
        client.verify_push_request(&request),
        Err(WebhookError::InvalidPayload { .. })
    ));
}
