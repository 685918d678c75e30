use serde_json::json;
use spindle_discogs::{Currency, DiscogsClient, DiscogsConfig, DiscogsError};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer, token: Option<&str>) -> DiscogsClient {
    let mut config = DiscogsConfig::new("SpindleTest/0.1").base_url(server.uri());
    if let Some(token) = token {
        config = config.token(token);
    }
    DiscogsClient::new(&config).expect("client builds")
}

#[tokio::test]
async fn test_authorization_sent_when_token_configured() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/artists/1"))
        .and(header("authorization", "Discogs token=test-token"))
        .and(header("user-agent", "SpindleTest/0.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "name": "The Persuader"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let artist = client(&server, Some("test-token"))
        .database()
        .artist(1)
        .await
        .unwrap();
    assert_eq!(artist.name, "The Persuader");
}

#[tokio::test]
async fn test_authorization_absent_without_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/artists/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1 })))
        .expect(1)
        .mount(&server)
        .await;

    client(&server, None).database().artist(1).await.unwrap();

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
    assert_eq!(
        requests[0].headers.get("content-type").unwrap(),
        "application/json"
    );
}

#[tokio::test]
async fn test_configured_currency_sent_verbatim() {
    for currency in Currency::ALL {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/releases/249504"))
            .and(query_param("curr_abbr", currency.code()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 249504,
                "title": "Never Gonna Give You Up"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let config = DiscogsConfig::new("SpindleTest/0.1")
            .base_url(server.uri())
            .currency(currency.code());
        let client = DiscogsClient::new(&config).unwrap();

        let release = client.database().release(249504).await.unwrap();
        assert_eq!(release.id, 249504);
    }
}

#[tokio::test]
async fn test_unauthorized_maps_to_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/database/search"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "You must authenticate to access this resource."
        })))
        .mount(&server)
        .await;

    let result = client(&server, None)
        .search()
        .search(&Default::default())
        .await;

    assert!(matches!(result.unwrap_err(), DiscogsError::Unauthorized));
}

#[tokio::test]
async fn test_rate_limit_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/masters/1000"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server, None).database().master(1000).await;

    assert!(matches!(result.unwrap_err(), DiscogsError::TooManyRequests));
}

#[tokio::test]
async fn test_server_error_is_unknown_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/labels/1"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let err = client(&server, None).database().label(1).await.unwrap_err();

    assert!(matches!(err, DiscogsError::UnknownStatus(_)));
    assert_eq!(err.to_string(), "unknown error: 502 Bad Gateway");
}

#[tokio::test]
async fn test_malformed_json_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/releases/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{ invalid json"))
        .mount(&server)
        .await;

    let result = client(&server, None).database().release(1).await;

    assert!(matches!(result.unwrap_err(), DiscogsError::Decode(_)));
}

#[tokio::test]
async fn test_no_content_yields_default() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/artists/5"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let artist = client(&server, None).database().artist(5).await.unwrap();
    assert_eq!(artist, Default::default());
}

#[tokio::test]
async fn test_clients_keep_independent_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/artists/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1 })))
        .expect(2)
        .mount(&server)
        .await;

    let with_token = client(&server, Some("first"));
    let without_token = client(&server, None);

    with_token.database().artist(1).await.unwrap();
    without_token.database().artist(1).await.unwrap();

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(
        requests[0].headers.get("authorization").unwrap(),
        "Discogs token=first"
    );
    assert!(!requests[1].headers.contains_key("authorization"));
}
