//! Integration tests for the Shopee API SDK.
//!
//! These tests verify end-to-end functionality of the configuration system.

use shopee_api::{Client, ConfigError, PartnerId, PartnerKey, Region, ShopeeConfig, TimeSource};

fn partner_key() -> PartnerKey {
    PartnerKey::new("test_partner_key").unwrap()
}

#[test]
fn test_full_workflow_build_config_access_fields() {
    let config = ShopeeConfig::builder()
        .partner_id("123456".parse().unwrap())
        .partner_key(partner_key())
        .region(Region::Brazil)
        .debug_mode(false)
        .user_agent_prefix("TestApp/1.0")
        .build()
        .unwrap();

    assert_eq!(config.partner_id().get(), 123_456);
    assert_eq!(config.partner_key().as_ref(), "test_partner_key");
    assert_eq!(config.region(), Region::Brazil);
    assert!(!config.debug_mode());
    assert_eq!(config.user_agent_prefix(), Some("TestApp/1.0"));
    assert_eq!(config.base_url(), "https://openplatform.shopee.com.br/api/v2/");
}

#[test]
fn test_region_and_debug_select_base_url() {
    let cases = [
        (Region::Default, false, "https://partner.shopeemobile.com/api/v2/"),
        (Region::Default, true, "https://partner.test-stable.shopeemobile.com/api/v2/"),
        (Region::China, false, "https://openplatform.shopee.cn/api/v2/"),
        (Region::China, true, "https://openplatform.test-stable.shopee.cn/api/v2/"),
        (Region::Brazil, false, "https://openplatform.shopee.com.br/api/v2/"),
        (Region::Brazil, true, "https://openplatform.test-stable.shopee.com.br/api/v2/"),
    ];

    for (region, debug, expected) in cases {
        let config = ShopeeConfig::builder()
            .partner_id(PartnerId::new(1))
            .partner_key(partner_key())
            .region(region)
            .debug_mode(debug)
            .build()
            .unwrap();
        assert_eq!(config.base_url(), expected, "{region} debug={debug}");
    }
}

#[test]
fn test_last_region_choice_wins() {
    let config = ShopeeConfig::builder()
        .partner_id(PartnerId::new(1))
        .partner_key(partner_key())
        .china_region()
        .brazil_region()
        .build()
        .unwrap();

    assert_eq!(config.region(), Region::Brazil);
}

#[test]
fn test_api_host_override_wins_over_region() {
    let config = ShopeeConfig::builder()
        .partner_id(PartnerId::new(1))
        .partner_key(partner_key())
        .china_region()
        .debug_mode(true)
        .api_host("http://localhost:8080/api/v2")
        .build()
        .unwrap();

    assert_eq!(config.base_url(), "http://localhost:8080/api/v2/");
}

#[test]
fn test_multi_tenant_scenario_independent_clients() {
    let client_a = Client::new(
        ShopeeConfig::builder()
            .partner_id(PartnerId::new(111))
            .partner_key(PartnerKey::new("key-a").unwrap())
            .build()
            .unwrap(),
    );
    let client_b = Client::new(
        ShopeeConfig::builder()
            .partner_id(PartnerId::new(222))
            .partner_key(PartnerKey::new("key-b").unwrap())
            .china_region()
            .build()
            .unwrap(),
    );

    client_a.set_session(shopee_api::Session::new(1, "token-a"));

    assert_eq!(client_a.config().partner_id().get(), 111);
    assert_eq!(client_b.config().partner_id().get(), 222);
    assert_eq!(client_b.config().region(), Region::China);
    assert!(client_b.session().is_none());
}

#[test]
fn test_fixed_time_source_is_used_for_signing() {
    let client = Client::new(
        ShopeeConfig::builder()
            .partner_id(PartnerId::new(123_456))
            .partner_key(partner_key())
            .time_source(TimeSource::fixed(1_700_000_000))
            .build()
            .unwrap(),
    );

    let signed = client
        .http()
        .sign("/api/v2/shop/get_shop_info", Default::default());

    assert_eq!(signed.get("timestamp"), Some("1700000000"));
    assert_eq!(
        signed.sign(),
        "8d210783de694d241511d4b314db209d432ce66faefe85fc0f9f79c8dd872998"
    );
}

// ============================================================================
// Error Cases
// ============================================================================

#[test]
fn test_missing_partner_id() {
    let result = ShopeeConfig::builder().partner_key(partner_key()).build();

    assert!(matches!(
        result,
        Err(ConfigError::MissingRequiredField {
            field: "partner_id"
        })
    ));
}

#[test]
fn test_missing_partner_key() {
    let result = ShopeeConfig::builder()
        .partner_id(PartnerId::new(1))
        .build();

    assert!(matches!(
        result,
        Err(ConfigError::MissingRequiredField {
            field: "partner_key"
        })
    ));
}

#[test]
fn test_empty_partner_key_is_rejected() {
    assert_eq!(PartnerKey::new("").unwrap_err(), ConfigError::EmptyPartnerKey);
}

#[test]
fn test_invalid_partner_id_string() {
    let error = "shop-123".parse::<PartnerId>().unwrap_err();
    assert!(matches!(error, ConfigError::InvalidPartnerId { .. }));
    assert!(error.to_string().contains("shop-123"));
}

#[test]
fn test_relative_api_host_is_rejected() {
    let result = ShopeeConfig::builder()
        .partner_id(PartnerId::new(1))
        .partner_key(partner_key())
        .api_host("api/v2")
        .build();

    assert!(matches!(result, Err(ConfigError::InvalidApiHost { .. })));
}

#[test]
fn test_partner_key_is_redacted_in_debug_output() {
    let config = ShopeeConfig::builder()
        .partner_id(PartnerId::new(1))
        .partner_key(partner_key())
        .build()
        .unwrap();

    let debug = format!("{config:?}");
    assert!(!debug.contains("test_partner_key"));
}
