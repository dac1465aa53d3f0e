//! Integration tests for `MapsClient` using wiremock HTTP mocks.

use shared::{Error, MapsClient, QueryParams};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> MapsClient {
    MapsClient::with_base_url(reqwest::Client::new(), &server.uri())
        .expect("client construction should not fail")
}

fn params(pairs: &[(&str, &str)]) -> QueryParams {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[tokio::test]
async fn geocode_sends_params_and_parses_results() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "results": [{
            "formatted_address": "1600 Amphitheatre Pkwy, Mountain View, CA 94043, USA",
            "geometry": {
                "location": {"lat": 37.4224764, "lng": -122.0842499},
                "location_type": "ROOFTOP"
            },
            "place_id": "ChIJ2eUgeAK6j4ARbn5u_wAGqWA"
        }],
        "status": "OK"
    });

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .and(query_param("address", "1600 Amphitheatre Parkway"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let response = client
        .geocode(&params(&[
            ("address", "1600 Amphitheatre Parkway"),
            ("key", "test-key"),
        ]))
        .await
        .expect("should parse geocode response");

    assert_eq!(response.status, "OK");
    assert_eq!(response.results.len(), 1);
    assert_eq!(
        response.results[0].place_id.as_deref(),
        Some("ChIJ2eUgeAK6j4ARbn5u_wAGqWA")
    );
}

#[tokio::test]
async fn find_place_parses_candidates() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "candidates": [{
            "formatted_address": "140 George St, The Rocks NSW 2000, Australia",
            "name": "Museum of Contemporary Art Australia",
            "rating": 4.4
        }],
        "status": "OK"
    });

    Mock::given(method("GET"))
        .and(path("/place/findplacefromtext/json"))
        .and(query_param("input", "Museum of Contemporary Art Australia"))
        .and(query_param("inputtype", "textquery"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let response = client
        .find_place(&params(&[
            ("input", "Museum of Contemporary Art Australia"),
            ("inputtype", "textquery"),
            ("key", "test-key"),
        ]))
        .await
        .expect("should parse find place response");

    assert_eq!(response.candidates.len(), 1);
    assert_eq!(response.candidates[0].rating, Some(4.4));
}

#[tokio::test]
async fn nearby_search_hits_nearby_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/place/nearbysearch/json"))
        .and(query_param("location", "-33.8670522,151.1957362"))
        .and(query_param("radius", "1500"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"html_attributions": [], "results": [], "status": "ZERO_RESULTS"})),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    let response = client
        .nearby_search(&params(&[
            ("location", "-33.8670522,151.1957362"),
            ("radius", "1500"),
            ("key", "test-key"),
        ]))
        .await
        .expect("should parse nearby response");

    assert_eq!(response.status, "ZERO_RESULTS");
    assert!(response.results.is_empty());
}

#[tokio::test]
async fn non_200_is_upstream_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .geocode(&params(&[("address", "anywhere"), ("key", "test-key")]))
        .await
        .unwrap_err();

    assert!(
        matches!(err, Error::UpstreamStatus { status: 500 }),
        "expected UpstreamStatus, got: {err:?}"
    );
    assert_eq!(err.to_string(), "status not OK");
}

#[tokio::test]
async fn non_json_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .nearby_search(&params(&[("location", "1,2"), ("radius", "10"), ("key", "k")]))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Decode(_)), "expected Decode, got: {err:?}");
}

#[tokio::test]
async fn schema_mismatch_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"results": "nope"})))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .geocode(&params(&[("address", "x"), ("key", "k")]))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Decode(_)), "expected Decode, got: {err:?}");
}

#[tokio::test]
async fn unreachable_upstream_is_transport_error() {
    // Reserve a free port, then release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let uri = format!("http://{}", listener.local_addr().expect("local addr"));
    drop(listener);

    let client = MapsClient::with_base_url(reqwest::Client::new(), &uri).unwrap();
    let err = client
        .geocode(&params(&[("address", "x"), ("key", "k")]))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Transport(_)), "expected Transport, got: {err:?}");
}
