//! Member controller.
//!
//! `GET /` answers in the framework-native zero-based page shape;
//! `/display` and `/slice` answer with one-based display pages.

use crate::{
    extractors::{Pageable, ValidatedJson},
    responses::{created, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use folio_core::{DisplayPage, FolioError, MemberId, Page};
use folio_service::{CreateMemberRequest, MemberDto, UsernameOnlyDto};
use serde::Deserialize;
use tracing::debug;

/// Query for the age slice endpoint.
#[derive(Debug, Deserialize)]
pub struct AgeQuery {
    pub age: u32,
}

/// Query for the username projection endpoint.
#[derive(Debug, Deserialize)]
pub struct UsernameQuery {
    pub username: String,
}

/// Creates the member router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_members).post(create_member))
        .route("/display", get(list_members_display))
        .route("/slice", get(slice_members_by_age))
        .route("/projections", get(username_projection))
        .route("/:id", get(get_member))
}

/// Username of a member.
async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, AppError> {
    debug!("Get member request: {}", id);

    let member_id = parse_member_id(&id)?;
    let member = state.member_service.get_member(member_id).await?;
    Ok(member.username)
}

/// Zero-based page of members.
async fn list_members(
    State(state): State<AppState>,
    Pageable(request): Pageable,
) -> ApiResult<Page<MemberDto>> {
    debug!("List members request: {:?}", request);

    let page = state.member_service.list_members(request).await?;
    ok(page)
}

/// One-based page of members.
async fn list_members_display(
    State(state): State<AppState>,
    Pageable(request): Pageable,
) -> ApiResult<DisplayPage<MemberDto>> {
    let page = state.member_service.list_members_display(request).await?;
    ok(page)
}

/// One-based slice of members of one age.
async fn slice_members_by_age(
    State(state): State<AppState>,
    Query(query): Query<AgeQuery>,
    Pageable(request): Pageable,
) -> ApiResult<DisplayPage<MemberDto>> {
    let page = state
        .member_service
        .slice_members_by_age(query.age, request)
        .await?;
    ok(page)
}

async fn username_projection(
    State(state): State<AppState>,
    Query(query): Query<UsernameQuery>,
) -> ApiResult<Vec<UsernameOnlyDto>> {
    let result = state
        .member_service
        .username_projection(&query.username)
        .await?;
    ok(result)
}

/// Create a new member.
async fn create_member(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateMemberRequest>,
) -> Result<(StatusCode, Json<MemberDto>), AppError> {
    debug!("Create member request: {}", request.username);

    let member = state.member_service.create_member(request).await?;
    Ok(created(member))
}

fn parse_member_id(id: &str) -> Result<MemberId, AppError> {
    MemberId::parse(id)
        .map_err(|_| AppError(FolioError::invalid_argument(format!("Invalid member ID: {id}"))))
}
