use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::domain::comment::entities::CommentId;
use crate::domain::post::entities::PostId;
use crate::domain::topic::entities::TopicId;
use crate::domain::user_status::entities::UserStatusId;

pub mod services;

/// Identifier of a user as issued by the external identity provider.
/// Opaque to this service; never parsed or validated beyond non-emptiness.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct UserId(pub String);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        UserId(id)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        UserId(id.to_string())
    }
}

#[derive(Error, Debug, Clone)]
pub enum CoreError {
    #[error("Store is currently unavailable: {msg}")]
    StoreUnavailable { msg: String },

    #[error("Post with id {id} not found")]
    PostNotFound { id: PostId },

    #[error("Comment with id {id} not found")]
    CommentNotFound { id: CommentId },

    #[error("Topic with id {id} not found")]
    TopicNotFound { id: TopicId },

    #[error("User status with id {id} not found")]
    UserStatusNotFound { id: UserStatusId },

    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },
}
