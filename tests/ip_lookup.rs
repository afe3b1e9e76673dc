//! IP lookup client tests
//!
//! All tests use wiremock to stand in for ipapi.co - no real API calls are made.
#![cfg(feature = "lookup")]

use ironfence_tools::{IpApiClient, IpClass, IpLookup, LookupError, LookupPanel};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn record_json(ip: &str, org: Option<&str>) -> serde_json::Value {
    serde_json::json!({
        "ip": ip,
        "city": "Mountain View",
        "region": "California",
        "country_name": "United States",
        "org": org,
        "timezone": "America/Los_Angeles"
    })
}

#[tokio::test]
async fn test_lookup_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/8.8.8.8/json/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(record_json("8.8.8.8", Some("GOOGLE"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = IpApiClient::new(server.uri());
    let record = client.lookup(" 8.8.8.8 ").await.expect("lookup should succeed");

    assert_eq!(record.ip.as_deref(), Some("8.8.8.8"));
    assert_eq!(record.location(), "Mountain View, California United States");
    assert_eq!(record.classify(), IpClass::Datacenter);
}

#[tokio::test]
async fn test_lookup_api_error_field() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/10.0.0.1/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ip": "10.0.0.1",
            "error": true,
            "reason": "Reserved IP Address"
        })))
        .mount(&server)
        .await;

    let client = IpApiClient::new(server.uri());
    let err = client.lookup("10.0.0.1").await.unwrap_err();

    assert!(matches!(err, LookupError::Api(ref reason) if reason == "Reserved IP Address"));
}

#[tokio::test]
async fn test_lookup_api_error_without_reason() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "error": true })))
        .mount(&server)
        .await;

    let client = IpApiClient::new(server.uri());
    let err = client.lookup("1.1.1.1").await.unwrap_err();
    assert_eq!(err.to_string(), "IP lookup failed");
}

#[tokio::test]
async fn test_lookup_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>rate limited</html>"))
        .mount(&server)
        .await;

    let client = IpApiClient::new(server.uri());
    let err = client.lookup("1.1.1.1").await.unwrap_err();
    assert!(matches!(err, LookupError::Http(_)));
}

#[tokio::test]
async fn test_lookup_invalid_ip_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = IpApiClient::new(server.uri());
    let err = client.lookup("not-an-ip").await.unwrap_err();
    assert!(matches!(err, LookupError::InvalidIp(_)));
}

#[tokio::test]
async fn test_lookup_self() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(record_json("203.0.113.7", Some("Comcast Cable"))),
        )
        .mount(&server)
        .await;

    let client = IpApiClient::new(server.uri());
    let record = client.lookup_self().await.expect("self lookup should succeed");

    assert_eq!(record.ip_or_unknown(), "203.0.113.7");
    assert_eq!(record.classify(), IpClass::Normal);
}

#[tokio::test]
async fn test_lookup_self_without_ip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "city": "Paris" })))
        .mount(&server)
        .await;

    let client = IpApiClient::new(server.uri());
    let err = client.lookup_self().await.unwrap_err();
    assert!(matches!(err, LookupError::IpNotDetected));
}

#[tokio::test]
async fn test_later_response_overwrites_panel() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1.1.1.1/json/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(record_json("1.1.1.1", Some("Cloudflare"))),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/9.9.9.9/json/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(record_json("9.9.9.9", Some("Quad9 VPN"))),
        )
        .mount(&server)
        .await;

    let client = IpApiClient::new(server.uri());
    let mut panel = LookupPanel::new();

    let (first, second) = tokio::join!(client.lookup("1.1.1.1"), client.lookup("9.9.9.9"));
    // shown in the order the responses are handled
    panel.show(first);
    panel.show(second);

    let shown = panel.current().expect("panel shows a result").as_ref().unwrap();
    assert_eq!(shown.ip.as_deref(), Some("9.9.9.9"));
    assert_eq!(shown.classify(), IpClass::PotentialVpnProxy);
}
