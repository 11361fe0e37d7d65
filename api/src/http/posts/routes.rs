use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    http::posts::handlers::{
        __path_create_post, __path_delete_post, __path_get_post, __path_like_post,
        __path_list_posts, __path_list_posts_by_user, __path_update_post, create_post,
        delete_post, get_post, like_post, list_posts, list_posts_by_user, update_post,
    },
    http::server::AppState,
};

pub fn post_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_post))
        .routes(routes!(get_post))
        .routes(routes!(list_posts))
        .routes(routes!(list_posts_by_user))
        .routes(routes!(update_post))
        .routes(routes!(delete_post))
        .routes(routes!(like_post))
}
