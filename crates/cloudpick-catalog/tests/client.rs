//! Integration tests for `CatalogClient` and `GeolocationClient` using
//! wiremock HTTP mocks.

use cloudpick_catalog::{CatalogClient, CatalogError, GeolocationClient};
use cloudpick_core::Location;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn catalog_client(server: &MockServer) -> CatalogClient {
    CatalogClient::new(&format!("{}/v1/clouds", server.uri()), 5, "cloudpick-test/0.1")
        .expect("client construction should not fail")
}

fn geolocation_client(server: &MockServer) -> GeolocationClient {
    GeolocationClient::new(&format!("{}/json", server.uri()), 5, "cloudpick-test/0.1")
        .expect("client construction should not fail")
}

fn three_clouds_json() -> serde_json::Value {
    json!({
        "clouds": [
            {
                "cloud_description": "Europe, Finland - Google Cloud: Finland",
                "cloud_name": "google-europe-north1",
                "geo_latitude": 60.5693,
                "geo_longitude": 27.1878,
                "geo_region": "europe",
                "provider_description": "Google Cloud Platform"
            },
            {
                "cloud_description": "Asia, Japan - Azure: Japan East",
                "cloud_name": "azure-japaneast",
                "geo_latitude": 35.68,
                "geo_longitude": 139.68,
                "geo_region": "east asia"
            },
            {
                "cloud_description": "United States, California - Amazon Web Services: N. California",
                "cloud_name": "aws-us-west-1",
                "geo_latitude": 37.78,
                "geo_longitude": -122.42,
                "geo_region": "north america"
            }
        ]
    })
}

// ---------------------------------------------------------------------------
// catalog
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_regions_returns_parsed_records_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/clouds"))
        .and(header("user-agent", "cloudpick-test/0.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(three_clouds_json()))
        .expect(1)
        .mount(&server)
        .await;

    let regions = catalog_client(&server)
        .fetch_regions()
        .await
        .expect("should parse catalog");

    let names: Vec<&str> = regions.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["google-europe-north1", "azure-japaneast", "aws-us-west-1"]
    );
    assert_eq!(regions[1].region, "east asia");
    assert!(regions.iter().all(|r| r.distance.is_none()));
}

#[tokio::test]
async fn fetch_regions_without_clouds_key_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/clouds"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let regions = catalog_client(&server).fetch_regions().await.unwrap();
    assert!(regions.is_empty());
}

#[tokio::test]
async fn fetch_regions_server_error_is_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/clouds"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let result = catalog_client(&server).fetch_regions().await;
    assert!(
        matches!(result, Err(CatalogError::UnexpectedStatus { status: 503, .. })),
        "expected UnexpectedStatus(503), got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_regions_malformed_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/clouds"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let result = catalog_client(&server).fetch_regions().await;
    assert!(
        matches!(result, Err(CatalogError::Deserialize { ref context, .. }) if context.contains("region catalog")),
        "expected Deserialize, got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_regions_connection_refused_is_http_error() {
    // Nothing listens on port 1.
    let client = CatalogClient::new("http://127.0.0.1:1/v1/clouds", 5, "cloudpick-test/0.1")
        .expect("client construction should not fail");

    let result = client.fetch_regions().await;
    assert!(
        matches!(result, Err(CatalogError::Http(_))),
        "expected Http, got: {result:?}"
    );
}

// ---------------------------------------------------------------------------
// geolocation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn locate_returns_coordinates_on_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "country": "Germany",
            "city": "Berlin",
            "lat": 52.52,
            "lon": 13.405
        })))
        .mount(&server)
        .await;

    let location = geolocation_client(&server).locate().await.unwrap();
    assert_eq!(location, Location::new(52.52, 13.405));
}

#[tokio::test]
async fn locate_fail_status_is_geolocation_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "fail",
            "message": "reserved range",
            "query": "127.0.0.1"
        })))
        .mount(&server)
        .await;

    let result = geolocation_client(&server).locate().await;
    assert!(
        matches!(result, Err(CatalogError::Geolocation(ref m)) if m == "reserved range"),
        "expected Geolocation(reserved range), got: {result:?}"
    );
}

#[tokio::test]
async fn locate_rate_limited_is_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let result = geolocation_client(&server).locate().await;
    assert!(
        matches!(result, Err(CatalogError::UnexpectedStatus { status: 429, .. })),
        "expected UnexpectedStatus(429), got: {result:?}"
    );
}
