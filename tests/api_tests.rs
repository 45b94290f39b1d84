mod common;

use std::collections::HashSet;
use std::sync::Arc;

use axum::http::{header, HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::Value;

use artist_pool_api::{
    middleware::request_id::REQUEST_ID_HEADER,
    models::Artist,
    routes::{create_router, AppState},
};
use common::{build_service, FakeCatalog, FakeSeeds, FakeSimilarity};

fn create_test_server(seeds: FakeSeeds) -> TestServer {
    let similarity = Arc::new(FakeSimilarity::new(&[
        ("Alpha", &["Beta"]),
        ("Beta", &["Alpha", "Gamma"]),
    ]));
    let catalog = Arc::new(FakeCatalog::new(&[("Beta", "b1")]));

    let service = build_service(seeds, similarity, catalog);
    let app = create_router(Arc::new(AppState::new(service)));
    TestServer::new(app).unwrap()
}

fn alpha_seeds() -> FakeSeeds {
    FakeSeeds::Artists(vec![Artist::new("s1", "Alpha")])
}

fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {}", token)).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server(alpha_seeds());
    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_artist_pool_returns_shuffled_artists() {
    let server = create_test_server(alpha_seeds());

    let response = server
        .get("/api/v1/artist-pool")
        .add_header(header::AUTHORIZATION, bearer("token"))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let artists = body["artists"].as_array().unwrap();

    let ids: HashSet<&str> = artists.iter().filter_map(|a| a["id"].as_str()).collect();
    assert_eq!(ids, HashSet::from(["s1", "b1"]));

    let beta = artists.iter().find(|a| a["id"] == "b1").unwrap();
    assert_eq!(beta["name"], "Beta");
    assert_eq!(
        beta["external_urls"]["spotify"],
        "https://open.spotify.com/artist/b1"
    );
    assert!(beta["images"].is_array());
    assert!(beta["genres"].is_array());
    assert_eq!(beta["popularity"], 0);
}

#[tokio::test]
async fn test_artist_pool_accepts_cookie_token() {
    let server = create_test_server(alpha_seeds());

    let response = server
        .get("/api/v1/artist-pool")
        .add_header(
            header::COOKIE,
            HeaderValue::from_static("spotify_access_token=cookie-token"),
        )
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_artist_pool_without_credentials_is_401() {
    let server = create_test_server(alpha_seeds());

    let response = server.get("/api/v1/artist-pool").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["error"], "Not authenticated");
}

#[tokio::test]
async fn test_artist_pool_expired_token_is_401() {
    let server = create_test_server(FakeSeeds::Unauthenticated);

    let response = server
        .get("/api/v1/artist-pool")
        .add_header(header::AUTHORIZATION, bearer("expired"))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["error"], "Token expired");
}

#[tokio::test]
async fn test_artist_pool_upstream_failure_is_500() {
    let server = create_test_server(FakeSeeds::Unavailable);

    let response = server
        .get("/api/v1/artist-pool")
        .add_header(header::AUTHORIZATION, bearer("token"))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "Failed to fetch top artists");
}

#[tokio::test]
async fn test_top_artists_returns_items() {
    let server = create_test_server(alpha_seeds());

    let response = server
        .get("/api/v1/top-artists")
        .add_header(header::AUTHORIZATION, bearer("token"))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["items"][0]["id"], "s1");
}

#[tokio::test]
async fn test_request_id_echoed() {
    let server = create_test_server(alpha_seeds());
    let request_id = "2f1c8a4e-7b7d-4d8e-9f1a-3c5b6d7e8f90";

    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static(REQUEST_ID_HEADER),
            HeaderValue::from_static(request_id),
        )
        .await;

    assert_eq!(response.header(HeaderName::from_static(REQUEST_ID_HEADER)), request_id);
}

#[tokio::test]
async fn test_request_id_generated_when_missing() {
    let server = create_test_server(alpha_seeds());

    let response = server.get("/health").await;

    let generated = response.header(HeaderName::from_static(REQUEST_ID_HEADER));
    assert!(uuid::Uuid::parse_str(generated.to_str().unwrap()).is_ok());
}
