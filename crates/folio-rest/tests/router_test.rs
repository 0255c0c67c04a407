//! End-to-end router tests against in-memory repositories.

use axum::{
    async_trait,
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use folio_config::{PagingConfig, ServerConfig};
use folio_core::{AuditInterceptor, HealthCheck, HealthStatus, Member};
use folio_repository::{
    InMemoryMemberRepository, InMemoryTeamRepository, MemberRepository, RepositoryHealthCheck,
    TeamRepository,
};
use folio_rest::{create_router, AppState};
use folio_service::MemberServiceImpl;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

async fn app_with(paging: PagingConfig) -> Router {
    let members: Arc<dyn MemberRepository> = Arc::new(InMemoryMemberRepository::new(
        AuditInterceptor::with_auditor("test"),
    ));
    let teams: Arc<dyn TeamRepository> = Arc::new(InMemoryTeamRepository::default());

    for i in 1..=5 {
        members
            .save(Member::with_age(format!("member{i}"), 10))
            .await
            .unwrap();
    }

    let service = Arc::new(MemberServiceImpl::new(members.clone(), teams));
    let state = AppState::new(service, paging)
        .with_health_check(Arc::new(RepositoryHealthCheck::new(members)));
    create_router(state, &ServerConfig::default())
}

struct DownCheck;

#[async_trait]
impl HealthCheck for DownCheck {
    fn name(&self) -> &str {
        "downstream"
    }

    async fn check(&self) -> HealthStatus {
        HealthStatus::Unhealthy("connection refused".to_string())
    }
}

async fn app() -> Router {
    app_with(PagingConfig::default()).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_health_endpoints() {
    let (status, body) = get_json(app().await, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = get_json(app().await, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ready"], true);
    assert_eq!(body["checks"][0]["name"], "repository");

    let (status, _) = get(app().await, "/live").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_readiness_fails_when_a_check_is_unhealthy() {
    let members: Arc<dyn MemberRepository> = Arc::new(InMemoryMemberRepository::default());
    let teams: Arc<dyn TeamRepository> = Arc::new(InMemoryTeamRepository::default());
    let service = Arc::new(MemberServiceImpl::new(members.clone(), teams));
    let state = AppState::new(service, PagingConfig::default())
        .with_health_check(Arc::new(RepositoryHealthCheck::new(members)))
        .with_health_check(Arc::new(DownCheck));
    let app = create_router(state, &ServerConfig::default());

    let (status, body) = get_json(app, "/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["ready"], false);
    assert_eq!(body["checks"][0]["status"], "healthy");
    assert_eq!(body["checks"][1]["name"], "downstream");
    assert_eq!(body["checks"][1]["status"], "unhealthy");
    assert_eq!(body["checks"][1]["detail"], "connection refused");
}

#[tokio::test]
async fn test_native_page_is_zero_based() {
    let (status, body) = get_json(app().await, "/api/v1/members?page=1&size=3&sort=id").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["number"], 1);
    assert_eq!(body["size"], 3);
    assert_eq!(body["totalElements"], 5);
    assert_eq!(body["totalPages"], 2);
    assert_eq!(body["last"], true);
    assert_eq!(body["content"].as_array().unwrap().len(), 2);
    assert_eq!(body["content"][0]["username"], "member4");
}

#[tokio::test]
async fn test_display_page_is_one_based() {
    let (status, body) = get_json(
        app().await,
        "/api/v1/members/display?page=1&size=3&sort=username,desc",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pageNumber"], 2);
    assert_eq!(body["pageSize"], 3);
    assert_eq!(body["totalPages"], 2);
    assert_eq!(body["totalElements"], 5);
    assert_eq!(body["first"], false);
    assert_eq!(body["last"], true);
    assert_eq!(body["numberOfElements"], 2);
    assert_eq!(body["content"][0]["username"], "member2");
    assert_eq!(body["pageable"]["pageNumber"], 2);
    assert_eq!(body["pageable"]["offset"], 3);
    assert_eq!(
        body["sort"],
        json!([{ "field": "username", "direction": "DESC" }])
    );
}

#[tokio::test]
async fn test_display_page_defaults() {
    let (status, body) = get_json(app().await, "/api/v1/members/display").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pageNumber"], 1);
    assert_eq!(body["pageSize"], 20);
    assert_eq!(body["numberOfElements"], 5);
}

#[tokio::test]
async fn test_one_indexed_page_parameter() {
    let paging = PagingConfig {
        one_indexed_parameters: true,
        ..PagingConfig::default()
    };
    let (status, body) = get_json(app_with(paging).await, "/api/v1/members/display?page=2&size=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pageNumber"], 2);
    assert_eq!(body["numberOfElements"], 2);
}

#[tokio::test]
async fn test_display_page_past_the_end_passes_through() {
    let (status, body) = get_json(app().await, "/api/v1/members/display?page=5&size=3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pageNumber"], 6);
    assert_eq!(body["totalPages"], 2);
    assert_eq!(body["totalElements"], 5);
    assert_eq!(body["empty"], true);
    assert_eq!(body["first"], false);
    assert_eq!(body["last"], true);
    assert_eq!(body["numberOfElements"], 0);
}

#[tokio::test]
async fn test_slice_omits_totals() {
    let (status, body) = get_json(app().await, "/api/v1/members/slice?age=10&size=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pageNumber"], 1);
    assert_eq!(body["last"], false);
    assert!(body.get("totalPages").is_none());
    assert!(body.get("totalElements").is_none());
}

#[tokio::test]
async fn test_invalid_paging_is_bad_request() {
    for uri in [
        "/api/v1/members/display?page=-1",
        "/api/v1/members/display?size=0",
        "/api/v1/members?size=-3",
        "/api/v1/members?page=abc",
        "/api/v1/members?sort=email",
    ] {
        let (status, body) = get_json(app().await, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["code"], "INVALID_ARGUMENT", "{uri}");
    }
}

#[tokio::test]
async fn test_get_member_returns_username() {
    let (status, body) = get(app().await, "/api/v1/members/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"member1");

    let (status, _) = get(app().await, "/api/v1/members/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(app().await, "/api/v1/members/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_body_carries_request_id() {
    let request = Request::get("/api/v1/members/999")
        .header("x-request-id", "req-42")
        .body(Body::empty())
        .unwrap();
    let response = app().await.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.headers()["x-request-id"], "req-42");

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["trace_id"], "req-42");
}

#[tokio::test]
async fn test_error_body_gets_generated_request_id() {
    let (status, body) = get_json(app().await, "/api/v1/members/display?size=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!body["trace_id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_username_projection() {
    let (status, body) = get_json(app().await, "/api/v1/members/projections?username=member3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "username": "member3" }]));
}

#[tokio::test]
async fn test_create_member() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/members")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "username": "newbie", "age": 21, "team_name": "teamA" }).to_string(),
        ))
        .unwrap();

    let (status, body) = send(app().await, request).await;
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 6);
    assert_eq!(body["team_name"], "teamA");
    assert_eq!(body["created_by"], "test");
}

#[tokio::test]
async fn test_create_member_validation() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/members")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "username": "9lives" }).to_string()))
        .unwrap();

    let (status, body) = send(app().await, request).await;
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["details"][0]["field"], "username");
    assert!(body["trace_id"].is_string());
}
