//! Integration tests for the resource groups.
//!
//! Each test drives one resource method against a mock server and checks
//! how its arguments are shaped into the outgoing request.

use serde_json::json;
use shopee_api::resources::{params, Params};
use shopee_api::{Client, PartnerId, PartnerKey, Session, ShopeeConfig, TimeSource, UploadFile};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const NOW: i64 = 1_700_000_000;

/// Creates a client with a session, pointed at the mock server.
fn create_test_client(server: &MockServer) -> Client {
    let config = ShopeeConfig::builder()
        .partner_id(PartnerId::new(123_456))
        .partner_key(PartnerKey::new("test_partner_key").unwrap())
        .api_host(format!("{}/api/v2/", server.uri()))
        .time_source(TimeSource::fixed(NOW))
        .build()
        .unwrap();
    let client = Client::new(config);
    client.set_session(Session::new(600_000, "tok"));
    client
}

fn ok() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"error": "", "message": "", "response": {}}))
}

/// Returns the body of the only request the server received, as text.
async fn single_request_body(server: &MockServer) -> String {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    String::from_utf8_lossy(&requests[0].body).into_owned()
}

// ============================================================================
// Order
// ============================================================================

#[tokio::test]
async fn test_order_list_defaults() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    Mock::given(method("GET"))
        .and(path("/api/v2/order/get_order_list"))
        .and(query_param("time_range_field", "create_time"))
        .and(query_param("time_from", "1699395200"))
        .and(query_param("time_to", "1700000000"))
        .and(query_param("page_size", "20"))
        .and(query_param("order_status", "READY_TO_SHIP"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client
        .order()
        .get_order_list(params(json!({"order_status": "READY_TO_SHIP"})))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_order_list_caller_overrides_defaults() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    Mock::given(method("GET"))
        .and(path("/api/v2/order/get_order_list"))
        .and(query_param("page_size", "100"))
        .and(query_param("time_range_field", "update_time"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client
        .order()
        .get_order_list(params(json!({"page_size": 100, "time_range_field": "update_time"})))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_shipment_list_forces_page_size() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    Mock::given(method("GET"))
        .and(path("/api/v2/order/get_shipment_list"))
        .and(query_param("page_size", "20"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client
        .order()
        .get_shipment_list(params(json!({"page_size": 50})))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_order_detail_joins_order_numbers() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    Mock::given(method("GET"))
        .and(path("/api/v2/order/get_order_detail"))
        .and(query_param("order_sn_list", "2311150001,2311150002"))
        .and(query_param("response_optional_fields", "buyer_user_id"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client
        .order()
        .get_order_detail(
            ["2311150001", "2311150002"],
            params(json!({"response_optional_fields": "buyer_user_id"})),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_single_order_number_is_promoted_to_list() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    Mock::given(method("POST"))
        .and(path("/api/v2/order/get_buyer_invoice_info"))
        .and(body_json(json!({"queries": [{"order_sn": "2311150001"}]})))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client
        .order()
        .get_buyer_invoice_info("2311150001")
        .await
        .unwrap();
}

// ============================================================================
// Product
// ============================================================================

#[tokio::test]
async fn test_product_boost_item_scalar_becomes_array() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    Mock::given(method("POST"))
        .and(path("/api/v2/product/boost_item"))
        .and(body_json(json!({"item_id_list": [800_001]})))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client.product().boost_item(800_001_u64).await.unwrap();
}

#[tokio::test]
async fn test_product_brand_list_forces_category() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    Mock::given(method("GET"))
        .and(path("/api/v2/product/get_brand_list"))
        .and(query_param("category_id", "100"))
        .and(query_param("offset", "0"))
        .and(query_param("page_size", "10"))
        .and(query_param("status", "1"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client
        .product()
        .get_brand_list(100, params(json!({"category_id": 5})))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_product_base_info_flags() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    Mock::given(method("GET"))
        .and(path("/api/v2/product/get_item_base_info"))
        .and(query_param("item_id_list", "1,2"))
        .and(query_param("need_tax_info", "true"))
        .and(query_param("need_complaint_policy", "false"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client
        .product()
        .get_item_base_info(vec![1_u64, 2], true, false)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_product_attributes_omit_missing_language() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    Mock::given(method("GET"))
        .and(path("/api/v2/product/get_attributes"))
        .and(query_param("category_id", "100"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client.product().get_attributes(100, None).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0]
        .url
        .query_pairs()
        .all(|(key, _)| key != "language"));
}

// ============================================================================
// Chat
// ============================================================================

#[tokio::test]
async fn test_chat_text_message_is_wrapped() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    Mock::given(method("POST"))
        .and(path("/api/v2/sellerchat/send_message"))
        .and(body_json(json!({
            "to_id": 88_001,
            "message_type": "text",
            "content": {"text": "Hello!"}
        })))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client
        .chat()
        .send_message(88_001, "text", "Hello!", 0, 0)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_chat_business_context_requires_both_values() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    Mock::given(method("POST"))
        .and(path("/api/v2/sellerchat/send_message"))
        .and(body_json(json!({
            "to_id": 1,
            "message_type": "sticker",
            "content": {"sticker_id": "s"},
            "business_type": 11,
            "conversation_id": 42
        })))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client
        .chat()
        .send_message(1, "sticker", json!({"sticker_id": "s"}), 11, 42)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_chat_conversation_list_defaults() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    Mock::given(method("GET"))
        .and(path("/api/v2/sellerchat/get_conversation_list"))
        .and(query_param("direction", "latest"))
        .and(query_param("type", "all"))
        .and(query_param("page_size", "25"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client
        .chat()
        .get_conversation_list(params(json!({"page_size": 25})))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_chat_upload_image_uses_file_field() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    Mock::given(method("POST"))
        .and(path("/api/v2/sellerchat/upload_image"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client
        .chat()
        .upload_image(UploadFile::bytes(b"jpeg-bytes".to_vec()))
        .await
        .unwrap();

    let body = single_request_body(&server).await;
    assert!(body.contains(r#"name="file""#));
    assert!(body.contains(r#"filename="image.jpg""#));
    assert!(body.contains("jpeg-bytes"));
}

// ============================================================================
// Media Space
// ============================================================================

#[tokio::test]
async fn test_media_space_upload_image_with_scene() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    Mock::given(method("POST"))
        .and(path("/api/v2/media_space/upload_image"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client
        .media_space()
        .upload_image(
            UploadFile::bytes(b"png".to_vec()).with_filename("logo.png"),
            Some("normal"),
            None,
        )
        .await
        .unwrap();

    let body = single_request_body(&server).await;
    assert!(body.contains(r#"name="image""#));
    assert!(body.contains(r#"filename="logo.png""#));
    assert!(body.contains(r#"name="scene""#));
    assert!(body.contains("normal"));
    assert!(!body.contains(r#"name="ratio""#));
}

#[tokio::test]
async fn test_upload_from_path_sends_file_contents() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    Mock::given(method("POST"))
        .and(path("/api/v2/media_space/upload_image"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    let file = std::env::temp_dir().join(format!("shopee-it-{}.png", std::process::id()));
    tokio::fs::write(&file, b"from-disk").await.unwrap();

    client
        .media_space()
        .upload_image(UploadFile::path(&file), None, None)
        .await
        .unwrap();
    tokio::fs::remove_file(&file).await.unwrap();

    let body = single_request_body(&server).await;
    assert!(body.contains("from-disk"));
    assert!(body.contains(&format!(
        r#"filename="{}""#,
        file.file_name().unwrap().to_str().unwrap()
    )));
}

// ============================================================================
// Returns
// ============================================================================

#[tokio::test]
async fn test_returns_convert_image_sends_query_and_multipart() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    Mock::given(method("POST"))
        .and(path("/api/v2/returns/convert_image"))
        .and(query_param("return_sn", "R1"))
        .and(query_param("shop_id", "600000"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client
        .returns()
        .convert_image("R1", UploadFile::bytes(b"img".to_vec()))
        .await
        .unwrap();

    let body = single_request_body(&server).await;
    assert!(body.contains(r#"name="upload_image""#));
}

#[tokio::test]
async fn test_returns_list_defaults() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    Mock::given(method("GET"))
        .and(path("/api/v2/returns/get_return_list"))
        .and(query_param("page_no", "1"))
        .and(query_param("page_size", "50"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client.returns().get_return_list(Params::new()).await.unwrap();
}

// ============================================================================
// First Mile
// ============================================================================

#[tokio::test]
async fn test_first_mile_tracking_list_defaults_to_last_week() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    Mock::given(method("GET"))
        .and(path("/api/v2/first_mile/get_tracking_number_list"))
        .and(query_param("from_date", "2023-11-07"))
        .and(query_param("to_date", "2023-11-14"))
        .and(query_param("page_size", "50"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client
        .first_mile()
        .get_tracking_number_list(Params::new())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_first_mile_detail_skips_empty_cursor() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    Mock::given(method("GET"))
        .and(path("/api/v2/first_mile/get_detail"))
        .and(query_param("first_mile_tracking_number", "FM1"))
        .respond_with(ok())
        .expect(2)
        .mount(&server)
        .await;

    client.first_mile().get_detail("FM1", Some("")).await.unwrap();
    client.first_mile().get_detail("FM1", Some("c2")).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let cursors: Vec<Option<String>> = requests
        .iter()
        .map(|request| {
            request
                .url
                .query_pairs()
                .find(|(key, _)| key == "cursor")
                .map(|(_, value)| value.into_owned())
        })
        .collect();
    assert_eq!(cursors, vec![None, Some("c2".to_string())]);
}

#[tokio::test]
async fn test_first_mile_unbind_order_list_defaults() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    Mock::given(method("GET"))
        .and(path("/api/v2/first_mile/get_unbind_order_list"))
        .and(query_param("page_size", "50"))
        .and(query_param(
            "response_optional_fields",
            "logistics_status,package_number",
        ))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client
        .first_mile()
        .get_unbind_order_list(Params::new())
        .await
        .unwrap();
}

// ============================================================================
// Logistics
// ============================================================================

#[tokio::test]
async fn test_logistics_ship_order_omits_absent_options() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    Mock::given(method("POST"))
        .and(path("/api/v2/logistics/ship_order"))
        .and(body_json(json!({
            "order_sn": "2311150001",
            "pickup": {"address_id": 1, "pickup_time_id": "t"}
        })))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client
        .logistic()
        .ship_order(
            "2311150001",
            None,
            Some(json!({"address_id": 1, "pickup_time_id": "t"})),
            None,
            None,
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_logistics_ship_booking_non_integrated() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    Mock::given(method("POST"))
        .and(path("/api/v2/logistics/ship_booking"))
        .and(body_json(json!({
            "booking_sn": "B2311150001",
            "non_integrated": {"tracking_number": "TRK123"}
        })))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client
        .logistic()
        .ship_booking(
            "B2311150001",
            None,
            None,
            Some(json!({"tracking_number": "TRK123"})),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_logistics_download_can_be_saved() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    let pdf = b"%PDF-1.4 label".to_vec();
    Mock::given(method("POST"))
        .and(path("/api/v2/logistics/download_shipping_document"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(pdf.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let document = client
        .logistic()
        .download_shipping_document(json!([{"order_sn": "2311150001"}]), Some("NORMAL_AIR_WAYBILL"))
        .await
        .unwrap();

    let target = std::env::temp_dir().join(format!("shopee-label-{}.pdf", std::process::id()));
    document.save_to(&target).await.unwrap();
    assert_eq!(tokio::fs::read(&target).await.unwrap(), pdf);
    tokio::fs::remove_file(&target).await.unwrap();
}

// ============================================================================
// Promotions
// ============================================================================

#[tokio::test]
async fn test_discount_get_forces_discount_id() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    Mock::given(method("GET"))
        .and(path("/api/v2/discount/get_discount"))
        .and(query_param("discount_id", "7"))
        .and(query_param("page_no", "1"))
        .and(query_param("page_size", "50"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client
        .discount()
        .get_discount(7, params(json!({"discount_id": 99})))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_voucher_list_defaults() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    Mock::given(method("GET"))
        .and(path("/api/v2/voucher/get_voucher_list"))
        .and(query_param("page_no", "1"))
        .and(query_param("page_size", "100"))
        .and(query_param("status", "upcoming"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client
        .voucher()
        .get_voucher_list(params(json!({"status": "upcoming"})))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_shop_category_update_defaults_status() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    Mock::given(method("POST"))
        .and(path("/api/v2/shop_category/update_shop_category"))
        .and(body_json(json!({
            "shop_category_id": 3,
            "name": "Sale",
            "status": "NORMAL"
        })))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client
        .shop_category()
        .update_shop_category(3, Some("Sale"), None, None)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_merchant_warehouse_list_cursor_default() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    Mock::given(method("POST"))
        .and(path("/api/v2/merchant/get_merchant_warehouse_list"))
        .and(body_json(json!({"cursor": {"page_size": 10}})))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client
        .merchant()
        .get_merchant_warehouse_list(None, None)
        .await
        .unwrap();
}

// ============================================================================
// Lookup
// ============================================================================

#[tokio::test]
async fn test_lookup_by_name() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    let resource = client.resource("first_mile").unwrap();
    assert_eq!(resource.prefix(), "first_mile");

    let error = client.resource("Warehouse").unwrap_err();
    assert_eq!(error.to_string(), "Invalid resource 'Warehouse'");
}
