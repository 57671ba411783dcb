use crate::ApiError;

use cw_core::CoreError;
use cw_crawl::CrawlError;
use cw_db::DbError;
use cw_sync::SyncError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn given_validation_error_when_rendered_then_400_with_field() {
    let error = ApiError::from(CoreError::validation("certUrl", "Missing certUrl"));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["message"], "Missing certUrl");
    assert_eq!(json["error"]["field"], "certUrl");
}

#[tokio::test]
async fn given_link_not_found_when_rendered_then_404() {
    let error = ApiError::from(SyncError::Crawl(CrawlError::link_not_found(
        "https://www.credential.net/x",
    )));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "LINK_NOT_FOUND");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn given_navigation_error_when_rendered_then_502() {
    let error = ApiError::from(CrawlError::navigation(
        "https://www.credential.net/x",
        "net::ERR_TIMED_OUT",
    ));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["error"]["code"], "NAVIGATION_ERROR");
}

#[tokio::test]
async fn given_session_timeout_when_rendered_then_502() {
    let error = ApiError::from(CrawlError::Timeout {
        after_secs: 90,
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["error"]["message"], "Browser session timed out after 90s");
}

#[tokio::test]
async fn given_database_error_when_rendered_then_500_without_details() {
    let error = ApiError::from(SyncError::Persistence(DbError::Initialization {
        message: "disk I/O error at /secret/path".into(),
        location: ErrorLocation::from(Location::caller()),
    }));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "Database operation failed");
}
