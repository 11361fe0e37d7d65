use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    http::server::AppState,
    http::statuses::handlers::{
        __path_create_status, __path_delete_status, __path_get_status, __path_list_statuses,
        __path_update_status, create_status, delete_status, get_status, list_statuses,
        update_status,
    },
};

pub fn status_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_status))
        .routes(routes!(get_status))
        .routes(routes!(list_statuses))
        .routes(routes!(update_status))
        .routes(routes!(delete_status))
}
