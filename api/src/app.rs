use axum::Router;
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

use feed_core::{FeedService, create_store};

use crate::config::Config;
use crate::http::comments::routes::comment_routes;
use crate::http::health::routes::health_routes;
use crate::http::posts::routes::post_routes;
use crate::http::server::{ApiError, AppState};
use crate::http::statuses::routes::status_routes;
use crate::http::topics::routes::topic_routes;

#[derive(OpenApi)]
#[openapi(info(
    title = "Social Feed API",
    description = "Posts, comments, topics and user statuses over a document store"
))]
struct ApiDoc;

pub struct App {
    config: Config,
    state: AppState,
}

impl App {
    pub async fn new(config: Config) -> Result<Self, ApiError> {
        let store = create_store(&config.store.uri, &config.store.database).await?;
        let state = AppState::new(FeedService::new(store));

        Ok(Self { config, state })
    }

    pub fn router(&self) -> Result<Router, ApiError> {
        let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(post_routes())
            .merge(comment_routes())
            .merge(topic_routes())
            .merge(status_routes())
            .split_for_parts();

        let origin = self
            .config
            .server
            .cors_origin
            .parse::<HeaderValue>()
            .map_err(|e| ApiError::BadRequest(format!("Invalid CORS origin: {e}")))?;
        let cors = CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE]);

        Ok(router
            .merge(health_routes())
            .merge(Scalar::with_url("/docs", api))
            .layer(cors)
            .with_state(self.state.clone()))
    }

    pub async fn start(&self) -> Result<(), ApiError> {
        let router = self.router()?;

        let addr = format!("0.0.0.0:{}", self.config.server.api_port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        info!(
            addr = %addr,
            environment = ?self.config.environment,
            "Social Feed API listening"
        );

        axum::serve(listener, router).await?;
        Ok(())
    }
}
