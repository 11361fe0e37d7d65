use axum::{
    Json,
    extract::{Path, State},
};
use feed_core::domain::{
    comment::{
        entities::{Comment, CommentId, InsertCommentInput, UpdateCommentRequest},
        ports::CommentService,
    },
    post::entities::PostId,
};

use crate::http::server::{ApiError, AppState, Response};

#[utoipa::path(
    post,
    path = "/comments",
    tag = "comments",
    request_body = InsertCommentInput,
    responses(
        (status = 201, description = "Comment created successfully", body = Comment),
        (status = 400, description = "Bad request - Missing parent post ID"),
        (status = 503, description = "Store unavailable")
    )
)]
pub async fn create_comment(
    State(state): State<AppState>,
    Json(input): Json<InsertCommentInput>,
) -> Result<Response<Comment>, ApiError> {
    let comment = state.service.create_comment(input).await?;
    Ok(Response::created(comment))
}

#[utoipa::path(
    get,
    path = "/comments/{id}",
    tag = "comments",
    params(
        ("id" = String, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Comment retrieved successfully", body = Comment),
        (status = 404, description = "Comment not found"),
        (status = 503, description = "Store unavailable")
    )
)]
pub async fn get_comment(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<Comment>, ApiError> {
    let comment_id = CommentId::from(id);
    let comment = state
        .service
        .get_comment(&comment_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Comment with id {comment_id} not found")))?;
    Ok(Response::ok(comment))
}

#[utoipa::path(
    get,
    path = "/posts/{id}/comments",
    tag = "comments",
    params(
        ("id" = String, Path, description = "Parent post ID")
    ),
    responses(
        (status = 200, description = "The post's comments, newest first", body = Vec<Comment>),
        (status = 503, description = "Store unavailable")
    )
)]
pub async fn list_post_comments(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<Vec<Comment>>, ApiError> {
    let comments = state.service.list_comments(&PostId::from(id)).await?;
    Ok(Response::ok(comments))
}

#[utoipa::path(
    put,
    path = "/comments/{id}",
    tag = "comments",
    params(
        ("id" = String, Path, description = "Comment ID")
    ),
    request_body = UpdateCommentRequest,
    responses(
        (status = 200, description = "Comment updated successfully", body = Comment),
        (status = 404, description = "Comment not found"),
        (status = 503, description = "Store unavailable")
    )
)]
pub async fn update_comment(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(request): Json<UpdateCommentRequest>,
) -> Result<Response<Comment>, ApiError> {
    let input = request.into_input(CommentId::from(id));
    let comment = state.service.update_comment(input).await?;
    Ok(Response::ok(comment))
}

#[utoipa::path(
    delete,
    path = "/comments/{id}",
    tag = "comments",
    params(
        ("id" = String, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Comment deleted successfully"),
        (status = 404, description = "Comment not found"),
        (status = 503, description = "Store unavailable")
    )
)]
pub async fn delete_comment(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<()>, ApiError> {
    state.service.delete_comment(&CommentId::from(id)).await?;
    Ok(Response::deleted(()))
}
