//! HTTP contract tests for the player-data service client.
//!
//! They check the two request shapes sent to the service and how each
//! response shape is normalized into a list of players.

use playersearch_infrastructure::services::players_service::HttpPlayersService;
use playersearch_infrastructure::settings::Service;
use playersearch_interface::errors::AppError;
use playersearch_interface::players::model::SearchMode;
use playersearch_interface::players::service::PlayersService;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpPlayersService {
    HttpPlayersService::new(&Service {
        base_url: server.uri(),
        timeout_seconds: None,
    })
    .expect("valid mock server address")
}

#[tokio::test]
async fn test_search_by_name_encodes_query_and_returns_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players"))
        .and(query_param("search", "LeBron James"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": 1,
                "first_name": "LeBron",
                "last_name": "James",
                "position": "F",
                "team": {"id": 14, "full_name": "Los Angeles Lakers"}
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let players = client_for(&server)
        .search_by_name("LeBron James")
        .await
        .unwrap();

    assert_eq!(players.len(), 1);
    assert_eq!(players[0].full_name(), "LeBron James");
    assert_eq!(players[0].team_name(), Some("Los Angeles Lakers"));
}

#[tokio::test]
async fn test_search_by_name_without_data_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"meta": {}})))
        .mount(&server)
        .await;

    let players = client_for(&server).search_by_name("Nobody").await.unwrap();

    assert!(players.is_empty());
}

#[tokio::test]
async fn test_search_by_id_wraps_single_record() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players/237"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": 237, "first_name": "Kevin", "last_name": "Durant", "weight": 240}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let players = client_for(&server).search_by_id("237").await.unwrap();

    assert_eq!(players.len(), 1);
    assert_eq!(players[0].id, 237);
    assert_eq!(players[0].weight.as_deref(), Some("240"));
    assert_eq!(players[0].height, None);
}

#[tokio::test]
async fn test_search_by_id_with_empty_record_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players/0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .mount(&server)
        .await;

    let players = client_for(&server).search_by_id("0").await.unwrap();

    assert!(players.is_empty());
}

#[tokio::test]
async fn test_not_found_is_a_fetch_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players/237"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = client_for(&server).search_by_id("237").await;

    assert!(matches!(result, Err(AppError::FetchError { .. })));
}

#[tokio::test]
async fn test_server_error_is_a_fetch_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let result = client_for(&server).search_by_name("James").await;

    match result {
        Err(AppError::FetchError { msg }) => assert!(msg.contains("500"), "{msg}"),
        other => panic!("expected a fetch error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_undecodable_body_is_a_fetch_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let result = client_for(&server).search_by_name("James").await;

    assert!(matches!(result, Err(AppError::FetchError { .. })));
}

#[tokio::test]
async fn test_connection_refused_is_a_fetch_error() {
    // Nothing listens on port 1.
    let client = HttpPlayersService::new(&Service {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout_seconds: Some(5),
    })
    .unwrap();

    let result = client.search_by_name("James").await;

    assert!(matches!(result, Err(AppError::FetchError { .. })));
}

#[tokio::test]
async fn test_search_dispatches_on_mode() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players/23"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": 23, "first_name": "Michael", "last_name": "Jordan"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/players"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(0)
        .mount(&server)
        .await;

    let players = client_for(&server)
        .search(SearchMode::ById, "23")
        .await
        .unwrap();

    assert_eq!(players.len(), 1);
    assert_eq!(players[0].full_name(), "Michael Jordan");
}
