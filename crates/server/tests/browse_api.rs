//! Browse/search endpoint tests against the mock catalog.

mod common;

use axum::http::StatusCode;

use common::{fixtures, TestFixture};
use marquee_core::{Genre, MediaKind};

#[tokio::test]
async fn test_health_endpoint() {
    let fixture = TestFixture::new();
    let response = fixture.get("/api/v1/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}

#[tokio::test]
async fn test_config_endpoint_redacts_api_key() {
    let fixture = TestFixture::new();
    let response = fixture.get("/api/v1/config").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["catalog"]["api_key_configured"], true);
    assert!(response.body["catalog"].get("api_key").is_none());
}

#[tokio::test]
async fn test_browse_returns_processed_page() {
    let fixture = TestFixture::new();
    fixture
        .catalog
        .set_page(fixtures::single_page(vec![
            fixtures::content_item(1, "Iron Man", Some("/a.jpg")),
            fixtures::content_item(2, "NoPoster", None),
        ]))
        .await;

    let response = fixture.get("/api/v1/browse/movie").await;
    assert_eq!(response.status, StatusCode::OK);

    let results = response.body["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["title"], "Iron Man");
    assert_eq!(response.body["total_pages"], 1);
}

#[tokio::test]
async fn test_browse_search_mode_prefix_boost() {
    let fixture = TestFixture::new();
    fixture
        .catalog
        .set_page(fixtures::single_page(vec![
            fixtures::ranked_item(1, "Man of Steel", 90.0),
            fixtures::ranked_item(2, "Iron Man", 40.0),
        ]))
        .await;

    let response = fixture.get("/api/v1/browse/movie?query=Iron").await;
    assert_eq!(response.status, StatusCode::OK);

    let results = response.body["results"].as_array().unwrap();
    assert_eq!(results[0]["title"], "Iron Man");
    assert_eq!(results[1]["title"], "Man of Steel");
}

#[tokio::test]
async fn test_browse_filters_forwarded_upstream() {
    let fixture = TestFixture::new();

    let response = fixture
        .get("/api/v1/browse/tv?genre=18&min_rating=8&year_from=2008&year_to=2013&sort=rating_desc&page=3")
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let plans = fixture.catalog.executed_plans().await;
    assert_eq!(plans.len(), 1);
    let plan = &plans[0];
    assert_eq!(plan.kind, MediaKind::Tv);
    assert_eq!(plan.get("with_genres"), Some("18"));
    assert_eq!(plan.get("vote_average.gte"), Some("8.0"));
    assert_eq!(plan.get("first_air_date.gte"), Some("2008-01-01"));
    assert_eq!(plan.get("first_air_date.lte"), Some("2013-12-31"));
    assert_eq!(plan.get("sort_by"), Some("vote_average.desc"));
    assert_eq!(plan.get("page"), Some("3"));
}

#[tokio::test]
async fn test_browse_invalid_filters_rejected() {
    let fixture = TestFixture::new();

    let response = fixture
        .get("/api/v1/browse/movie?year_from=2020&year_to=2010")
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["error"].as_str().unwrap().contains("year"));

    let response = fixture.get("/api/v1/browse/movie?min_rating=11").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    // Nothing reached the catalog.
    assert!(fixture.catalog.executed_plans().await.is_empty());
}

#[tokio::test]
async fn test_browse_degrades_to_empty_page_on_upstream_fault() {
    let fixture = TestFixture::new();
    fixture.catalog.fail_next().await;

    let response = fixture.get("/api/v1/browse/movie").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["results"].as_array().unwrap().len(), 0);
    assert_eq!(response.body["total_pages"], 0);
}

#[tokio::test]
async fn test_browse_unknown_kind_rejected() {
    let fixture = TestFixture::new();
    let response = fixture.get("/api/v1/browse/podcast").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_genres_endpoint_memoizes() {
    let fixture = TestFixture::new();
    fixture
        .catalog
        .set_genres(
            MediaKind::Movie,
            vec![Genre {
                id: 28,
                name: "Action".to_string(),
            }],
        )
        .await;

    let first = fixture.get("/api/v1/genres/movie").await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body[0]["name"], "Action");

    let second = fixture.get("/api/v1/genres/movie").await;
    assert_eq!(second.body, first.body);
    assert_eq!(fixture.catalog.genre_calls(), 1);
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let fixture = TestFixture::new();
    fixture.get("/api/v1/health").await;

    let request = axum::http::Request::builder()
        .uri("/api/v1/metrics")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(fixture.router.clone(), request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
