use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    http::server::AppState,
    http::topics::handlers::{
        __path_create_topic, __path_delete_topic, __path_get_topic, __path_list_topics,
        __path_update_topic, create_topic, delete_topic, get_topic, list_topics, update_topic,
    },
};

pub fn topic_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_topic))
        .routes(routes!(get_topic))
        .routes(routes!(list_topics))
        .routes(routes!(update_topic))
        .routes(routes!(delete_topic))
}
