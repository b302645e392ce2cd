//! President Routes
//!
//! HTTP handlers that delegate to PresidentService for business logic.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};

use presidents::DomainError;

use crate::models::{PaginationQuery, PresidentDto, PresidentPageResponse};
use crate::AppState;

fn into_http_error(e: DomainError) -> (StatusCode, String) {
    let status = match e {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        DomainError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        tracing::error!("Request failed: {}", e);
    }
    (status, e.to_string())
}

/// List all Presidents
#[utoipa::path(
    get,
    path = "/presidents",
    responses(
        (status = 200, description = "List of all Presidents", body = Vec<PresidentDto>),
        (status = 500, description = "Internal server error")
    ),
    tag = "President"
)]
pub async fn list_presidents(
    State(state): State<AppState>,
) -> Result<Json<Vec<PresidentDto>>, (StatusCode, String)> {
    let presidents = state
        .president_service
        .list_all()
        .await
        .map_err(into_http_error)?;

    Ok(Json(presidents))
}

/// List Presidents one page at a time
#[utoipa::path(
    get,
    path = "/presidents/paginated",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Page of Presidents", body = PresidentPageResponse),
        (status = 400, description = "Negative page number or page size below one"),
        (status = 500, description = "Internal server error")
    ),
    tag = "President"
)]
pub async fn list_presidents_paginated(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<PresidentPageResponse>, (StatusCode, String)> {
    let (page_number, page_size) = query.resolve(state.config.default_page_size);
    let page = state
        .president_service
        .list_paginated(page_number, page_size)
        .await
        .map_err(into_http_error)?;

    Ok(Json(page.into()))
}

/// Find Presidents by name
#[utoipa::path(
    get,
    path = "/presidents/name/{name}",
    params(
        ("name" = String, Path, description = "Exact first name")
    ),
    responses(
        (status = 200, description = "Presidents with that name", body = Vec<PresidentDto>),
        (status = 404, description = "No President with that name"),
        (status = 500, description = "Internal server error")
    ),
    tag = "President"
)]
pub async fn find_presidents_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<PresidentDto>>, (StatusCode, String)> {
    let presidents = state
        .president_service
        .find_by_name(&name)
        .await
        .map_err(into_http_error)?;

    Ok(Json(presidents))
}

/// Find Presidents by political party
#[utoipa::path(
    get,
    path = "/presidents/party/{party}",
    params(
        ("party" = String, Path, description = "Exact political party")
    ),
    responses(
        (status = 200, description = "Presidents of that party (possibly none)", body = Vec<PresidentDto>),
        (status = 500, description = "Internal server error")
    ),
    tag = "President"
)]
pub async fn find_presidents_by_party(
    State(state): State<AppState>,
    Path(party): Path<String>,
) -> Result<Json<Vec<PresidentDto>>, (StatusCode, String)> {
    let presidents = state
        .president_service
        .find_by_party(&party)
        .await
        .map_err(into_http_error)?;

    Ok(Json(presidents))
}

/// Create new President
#[utoipa::path(
    post,
    path = "/presidents",
    request_body = PresidentDto,
    responses(
        (status = 201, description = "President created", body = PresidentDto),
        (status = 500, description = "Internal server error")
    ),
    tag = "President"
)]
pub async fn create_president(
    State(state): State<AppState>,
    Json(payload): Json<PresidentDto>,
) -> Result<(StatusCode, Json<PresidentDto>), (StatusCode, String)> {
    let created = state
        .president_service
        .create(payload)
        .await
        .map_err(into_http_error)?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace every field of a President, creating it when the id is unknown
#[utoipa::path(
    put,
    path = "/presidents",
    request_body = PresidentDto,
    responses(
        (status = 200, description = "President replaced or created", body = PresidentDto),
        (status = 400, description = "Missing id"),
        (status = 500, description = "Internal server error")
    ),
    tag = "President"
)]
pub async fn update_president(
    State(state): State<AppState>,
    Json(payload): Json<PresidentDto>,
) -> Result<Json<PresidentDto>, (StatusCode, String)> {
    let president = state
        .president_service
        .full_update(payload)
        .await
        .map_err(into_http_error)?;

    Ok(Json(president))
}

/// Update only the fields present in the request
#[utoipa::path(
    patch,
    path = "/presidents",
    request_body = PresidentDto,
    responses(
        (status = 200, description = "President updated", body = PresidentDto),
        (status = 400, description = "Missing id"),
        (status = 404, description = "President not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "President"
)]
pub async fn patch_president(
    State(state): State<AppState>,
    Json(payload): Json<PresidentDto>,
) -> Result<Json<PresidentDto>, (StatusCode, String)> {
    let president = state
        .president_service
        .partial_update(payload)
        .await
        .map_err(into_http_error)?;

    Ok(Json(president))
}

/// Delete President
#[utoipa::path(
    delete,
    path = "/presidents/{id}",
    params(
        ("id" = i64, Path, description = "President ID")
    ),
    responses(
        (status = 204, description = "President deleted, or never existed"),
        (status = 500, description = "Internal server error")
    ),
    tag = "President"
)]
pub async fn delete_president(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, (StatusCode, String)> {
    state
        .president_service
        .delete(id)
        .await
        .map_err(into_http_error)?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/presidents",
            get(list_presidents)
                .post(create_president)
                .put(update_president)
                .patch(patch_president),
        )
        .route("/presidents/paginated", get(list_presidents_paginated))
        .route("/presidents/name/:name", get(find_presidents_by_name))
        .route("/presidents/party/:party", get(find_presidents_by_party))
        .route("/presidents/:id", delete(delete_president))
}
