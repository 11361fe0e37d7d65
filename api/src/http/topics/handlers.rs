use axum::{
    Json,
    extract::{Path, Query, State},
};
use feed_core::domain::{
    common::UserId,
    topic::{
        entities::{InsertTopicInput, Topic, TopicId, UpdateTopicRequest},
        ports::TopicService,
    },
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::http::server::{ApiError, AppState, Response};

/// Query parameters accepted by the topic listing endpoint.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListTopicsQuery {
    /// Restrict the list to one owner.
    pub user_id: Option<String>,
}

#[utoipa::path(
    post,
    path = "/topics",
    tag = "topics",
    request_body = InsertTopicInput,
    responses(
        (status = 201, description = "Topic created successfully", body = Topic),
        (status = 503, description = "Store unavailable")
    )
)]
pub async fn create_topic(
    State(state): State<AppState>,
    Json(input): Json<InsertTopicInput>,
) -> Result<Response<Topic>, ApiError> {
    let topic = state.service.create_topic(input).await?;
    Ok(Response::created(topic))
}

#[utoipa::path(
    get,
    path = "/topics/{id}",
    tag = "topics",
    params(
        ("id" = String, Path, description = "Topic ID")
    ),
    responses(
        (status = 200, description = "Topic retrieved successfully", body = Topic),
        (status = 404, description = "Topic not found"),
        (status = 503, description = "Store unavailable")
    )
)]
pub async fn get_topic(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<Topic>, ApiError> {
    let topic_id = TopicId::from(id);
    let topic = state
        .service
        .get_topic(&topic_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Topic with id {topic_id} not found")))?;
    Ok(Response::ok(topic))
}

#[utoipa::path(
    get,
    path = "/topics",
    tag = "topics",
    params(ListTopicsQuery),
    responses(
        (status = 200, description = "List of topics, newest first", body = Vec<Topic>),
        (status = 503, description = "Store unavailable")
    )
)]
pub async fn list_topics(
    State(state): State<AppState>,
    Query(query): Query<ListTopicsQuery>,
) -> Result<Response<Vec<Topic>>, ApiError> {
    let owner = query.user_id.map(UserId);
    let topics = state.service.list_topics(owner.as_ref()).await?;
    Ok(Response::ok(topics))
}

#[utoipa::path(
    put,
    path = "/topics/{id}",
    tag = "topics",
    params(
        ("id" = String, Path, description = "Topic ID")
    ),
    request_body = UpdateTopicRequest,
    responses(
        (status = 200, description = "Topic updated successfully", body = Topic),
        (status = 404, description = "Topic not found"),
        (status = 503, description = "Store unavailable")
    )
)]
pub async fn update_topic(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(request): Json<UpdateTopicRequest>,
) -> Result<Response<Topic>, ApiError> {
    let input = request.into_input(TopicId::from(id));
    let topic = state.service.update_topic(input).await?;
    Ok(Response::ok(topic))
}

#[utoipa::path(
    delete,
    path = "/topics/{id}",
    tag = "topics",
    params(
        ("id" = String, Path, description = "Topic ID")
    ),
    responses(
        (status = 200, description = "Topic deleted successfully"),
        (status = 404, description = "Topic not found"),
        (status = 503, description = "Store unavailable")
    )
)]
pub async fn delete_topic(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<()>, ApiError> {
    state.service.delete_topic(&TopicId::from(id)).await?;
    Ok(Response::deleted(()))
}
