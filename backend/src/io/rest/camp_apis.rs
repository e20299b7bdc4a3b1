//! # REST API for Camps
//!
//! Search, listing and owner/admin management endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use shared::{lenient, CampCategory, CategoryListResponse, CreateCampRequest, FilterCriteria, UpdateCampRequest};
use tracing::{info, warn};

use super::auth::{AuthenticatedUser, MaybeUser};
use super::mappers::CampMapper;
use crate::domain::models::query::Visibility;
use crate::domain::models::user::UserIdentity;
use crate::AppState;

/// Search options that are not part of the filter criteria
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchOptions {
    /// Honoured for admins only
    #[serde(deserialize_with = "lenient::optional")]
    pub include_deleted: Option<bool>,
}

fn visibility_for(user: Option<&UserIdentity>, options: &SearchOptions) -> Visibility {
    if options.include_deleted != Some(true) {
        return Visibility::ActiveOnly;
    }
    match user {
        Some(user) if user.is_admin() => Visibility::IncludeDeleted,
        _ => {
            warn!("includeDeleted requested without admin role, ignoring");
            Visibility::ActiveOnly
        }
    }
}

async fn run_search(
    state: &AppState,
    user: Option<&UserIdentity>,
    criteria: FilterCriteria,
    options: SearchOptions,
) -> axum::response::Response {
    let visibility = visibility_for(user, &options);

    match state.camp_service.search_camps(&criteria, visibility).await {
        Ok(camps) => (StatusCode::OK, Json(CampMapper::to_dto_list(camps))).into_response(),
        Err(e) => state.errors.internal("Failed to search camps", &e).into_response(),
    }
}

/// List every publicly visible camp
pub async fn list_camps(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/camps");

    match state.camp_service.list_camps().await {
        Ok(camps) => (StatusCode::OK, Json(CampMapper::to_dto_list(camps))).into_response(),
        Err(e) => state.errors.internal("Failed to list camps", &e).into_response(),
    }
}

/// Search camps with criteria in the query string
pub async fn search_camps(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Query(criteria): Query<FilterCriteria>,
    Query(options): Query<SearchOptions>,
) -> impl IntoResponse {
    info!("GET /api/camps/search - criteria: {:?}", criteria);
    run_search(&state, user.as_ref(), criteria, options).await
}

/// Search camps with criteria in a JSON body
pub async fn search_camps_body(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Query(options): Query<SearchOptions>,
    Json(criteria): Json<FilterCriteria>,
) -> impl IntoResponse {
    info!("POST /api/camps/search - criteria: {:?}", criteria);
    run_search(&state, user.as_ref(), criteria, options).await
}

/// Get a camp by ID
pub async fn get_camp(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Path(camp_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/camps/{}", camp_id);

    match state.camp_service.get_camp(&camp_id, user.as_ref()).await {
        Ok(camp) => (StatusCode::OK, Json(CampMapper::to_dto(camp))).into_response(),
        Err(e) => state.errors.service_error("Failed to get camp", e).into_response(),
    }
}

/// Create a camp listing owned by the caller
pub async fn create_camp(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(request): Json<CreateCampRequest>,
) -> impl IntoResponse {
    info!("POST /api/camps - request: {:?}", request);

    let command = match CampMapper::to_create_command(request) {
        Ok(command) => command,
        Err(e) => return e.into_response(),
    };

    match state.camp_service.create_camp(&user, command).await {
        Ok(camp) => (StatusCode::CREATED, Json(CampMapper::to_dto(camp))).into_response(),
        Err(e) => state.errors.service_error("Failed to create camp", e).into_response(),
    }
}

/// Partially update a camp listing
pub async fn update_camp(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(camp_id): Path<String>,
    Json(request): Json<UpdateCampRequest>,
) -> impl IntoResponse {
    info!("PUT /api/camps/{} - request: {:?}", camp_id, request);

    let command = match CampMapper::to_update_command(request) {
        Ok(command) => command,
        Err(e) => return e.into_response(),
    };

    match state.camp_service.update_camp(&user, &camp_id, command).await {
        Ok(camp) => (StatusCode::OK, Json(CampMapper::to_dto(camp))).into_response(),
        Err(e) => state.errors.service_error("Failed to update camp", e).into_response(),
    }
}

/// Soft delete a camp listing
pub async fn delete_camp(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(camp_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/camps/{}", camp_id);

    match state.camp_service.soft_delete_camp(&user, &camp_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => state.errors.service_error("Failed to delete camp", e).into_response(),
    }
}

/// List the category labels offered in search
pub async fn list_categories() -> impl IntoResponse {
    info!("GET /api/categories");

    let response = CategoryListResponse {
        categories: CampCategory::ALL
            .iter()
            .map(|category| category.label().to_string())
            .collect(),
    };
    (StatusCode::OK, Json(response))
}
