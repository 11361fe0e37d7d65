use axum::{
    Json,
    extract::{Path, Query, State},
};
use feed_core::domain::{
    common::UserId,
    user_status::{
        entities::{InsertUserStatusInput, UpdateUserStatusRequest, UserStatus, UserStatusId},
        ports::UserStatusService,
    },
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::http::server::{ApiError, AppState, Response};

/// Query parameters accepted by the status listing endpoint.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListStatusesQuery {
    /// Restrict the list to one owner.
    pub user_id: Option<String>,
}

#[utoipa::path(
    post,
    path = "/statuses",
    tag = "statuses",
    request_body = InsertUserStatusInput,
    responses(
        (status = 201, description = "Status created successfully", body = UserStatus),
        (status = 503, description = "Store unavailable")
    )
)]
pub async fn create_status(
    State(state): State<AppState>,
    Json(input): Json<InsertUserStatusInput>,
) -> Result<Response<UserStatus>, ApiError> {
    let status = state.service.create_user_status(input).await?;
    Ok(Response::created(status))
}

#[utoipa::path(
    get,
    path = "/statuses/{id}",
    tag = "statuses",
    params(
        ("id" = String, Path, description = "Status ID")
    ),
    responses(
        (status = 200, description = "Status retrieved successfully", body = UserStatus),
        (status = 404, description = "Status not found"),
        (status = 503, description = "Store unavailable")
    )
)]
pub async fn get_status(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<UserStatus>, ApiError> {
    let status_id = UserStatusId::from(id);
    let status = state
        .service
        .get_user_status(&status_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Status with id {status_id} not found")))?;
    Ok(Response::ok(status))
}

#[utoipa::path(
    get,
    path = "/statuses",
    tag = "statuses",
    params(ListStatusesQuery),
    responses(
        (status = 200, description = "List of statuses, newest first", body = Vec<UserStatus>),
        (status = 503, description = "Store unavailable")
    )
)]
pub async fn list_statuses(
    State(state): State<AppState>,
    Query(query): Query<ListStatusesQuery>,
) -> Result<Response<Vec<UserStatus>>, ApiError> {
    let owner = query.user_id.map(UserId);
    let statuses = state.service.list_user_statuses(owner.as_ref()).await?;
    Ok(Response::ok(statuses))
}

#[utoipa::path(
    put,
    path = "/statuses/{id}",
    tag = "statuses",
    params(
        ("id" = String, Path, description = "Status ID")
    ),
    request_body = UpdateUserStatusRequest,
    responses(
        (status = 200, description = "Status updated successfully", body = UserStatus),
        (status = 404, description = "Status not found"),
        (status = 503, description = "Store unavailable")
    )
)]
pub async fn update_status(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(request): Json<UpdateUserStatusRequest>,
) -> Result<Response<UserStatus>, ApiError> {
    let input = request.into_input(UserStatusId::from(id));
    let status = state.service.update_user_status(input).await?;
    Ok(Response::ok(status))
}

#[utoipa::path(
    delete,
    path = "/statuses/{id}",
    tag = "statuses",
    params(
        ("id" = String, Path, description = "Status ID")
    ),
    responses(
        (status = 200, description = "Status deleted successfully"),
        (status = 404, description = "Status not found"),
        (status = 503, description = "Store unavailable")
    )
)]
pub async fn delete_status(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_user_status(&UserStatusId::from(id))
        .await?;
    Ok(Response::deleted(()))
}
