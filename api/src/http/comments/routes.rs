use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    http::comments::handlers::{
        __path_create_comment, __path_delete_comment, __path_get_comment,
        __path_list_post_comments, __path_update_comment, create_comment, delete_comment,
        get_comment, list_post_comments, update_comment,
    },
    http::server::AppState,
};

pub fn comment_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_comment))
        .routes(routes!(get_comment))
        .routes(routes!(list_post_comments))
        .routes(routes!(update_comment))
        .routes(routes!(delete_comment))
}
