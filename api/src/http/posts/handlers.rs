use axum::{
    Json,
    extract::{Path, Query, State},
};
use feed_core::domain::{
    common::UserId,
    post::{
        entities::{InsertPostInput, LikePostRequest, Post, PostId, UpdatePostRequest},
        ports::PostService,
    },
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::http::server::{ApiError, AppState, Response};

/// Query parameters accepted by the post listing endpoint.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPostsQuery {
    /// Restrict the feed to one author.
    pub user_id: Option<String>,
}

#[utoipa::path(
    post,
    path = "/posts",
    tag = "posts",
    request_body = InsertPostInput,
    responses(
        (status = 201, description = "Post created successfully", body = Post),
        (status = 400, description = "Bad request - Missing required field"),
        (status = 503, description = "Store unavailable")
    )
)]
pub async fn create_post(
    State(state): State<AppState>,
    Json(input): Json<InsertPostInput>,
) -> Result<Response<Post>, ApiError> {
    let post = state.service.create_post(input).await?;
    Ok(Response::created(post))
}

#[utoipa::path(
    get,
    path = "/posts/{id}",
    tag = "posts",
    params(
        ("id" = String, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post retrieved successfully", body = Post),
        (status = 404, description = "Post not found"),
        (status = 503, description = "Store unavailable")
    )
)]
pub async fn get_post(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<Post>, ApiError> {
    let post_id = PostId::from(id);
    let post = state
        .service
        .get_post(&post_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Post with id {post_id} not found")))?;
    Ok(Response::ok(post))
}

#[utoipa::path(
    get,
    path = "/posts",
    tag = "posts",
    params(ListPostsQuery),
    responses(
        (status = 200, description = "List of posts, newest first", body = Vec<Post>),
        (status = 503, description = "Store unavailable")
    )
)]
pub async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<ListPostsQuery>,
) -> Result<Response<Vec<Post>>, ApiError> {
    let author = query.user_id.map(UserId);
    let posts = state.service.list_posts(author.as_ref()).await?;
    Ok(Response::ok(posts))
}

#[utoipa::path(
    get,
    path = "/posts/user/{user_id}",
    tag = "posts",
    params(
        ("user_id" = String, Path, description = "Author user ID")
    ),
    responses(
        (status = 200, description = "The author's posts, newest first", body = Vec<Post>),
        (status = 503, description = "Store unavailable")
    )
)]
pub async fn list_posts_by_user(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<Vec<Post>>, ApiError> {
    let author = UserId(user_id);
    let posts = state.service.list_posts(Some(&author)).await?;
    Ok(Response::ok(posts))
}

#[utoipa::path(
    put,
    path = "/posts/{id}",
    tag = "posts",
    params(
        ("id" = String, Path, description = "Post ID")
    ),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated successfully", body = Post),
        (status = 404, description = "Post not found"),
        (status = 503, description = "Store unavailable")
    )
)]
pub async fn update_post(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(request): Json<UpdatePostRequest>,
) -> Result<Response<Post>, ApiError> {
    let input = request.into_input(PostId::from(id));
    let post = state.service.update_post(input).await?;
    Ok(Response::ok(post))
}

#[utoipa::path(
    delete,
    path = "/posts/{id}",
    tag = "posts",
    params(
        ("id" = String, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post deleted successfully"),
        (status = 404, description = "Post not found"),
        (status = 503, description = "Store unavailable")
    )
)]
pub async fn delete_post(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<()>, ApiError> {
    state.service.delete_post(&PostId::from(id)).await?;
    Ok(Response::deleted(()))
}

#[utoipa::path(
    post,
    path = "/posts/{id}/like",
    tag = "posts",
    params(
        ("id" = String, Path, description = "Post ID")
    ),
    request_body = LikePostRequest,
    responses(
        (status = 200, description = "Like toggled; returns the updated post", body = Post),
        (status = 404, description = "Post not found"),
        (status = 503, description = "Store unavailable")
    )
)]
pub async fn like_post(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(request): Json<LikePostRequest>,
) -> Result<Response<Post>, ApiError> {
    let post = state
        .service
        .toggle_like(&PostId::from(id), &request.user_id)
        .await?;
    Ok(Response::ok(post))
}
