use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::UserId;
use crate::domain::post::entities::PostId;
use crate::domain::store::{
    DocumentCodec, DocumentId, FieldMap, FieldValue, StoredDocument, timestamp_value,
};

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct CommentId(pub String);

impl std::fmt::Display for CommentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CommentId {
    fn from(id: String) -> Self {
        CommentId(id)
    }
}

impl From<DocumentId> for CommentId {
    fn from(id: DocumentId) -> Self {
        CommentId(id.0)
    }
}

impl From<&CommentId> for DocumentId {
    fn from(id: &CommentId) -> Self {
        DocumentId(id.0.clone())
    }
}

/// A comment under a post. The parent post id is required but never
/// checked against the posts collection; deleting a post leaves its
/// comments behind.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub user_id: UserId,
    pub username: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct InsertCommentInput {
    pub post_id: PostId,
    pub user_id: UserId,
    pub username: String,
    pub comment: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct UpdateCommentInput {
    pub id: CommentId,
    pub comment: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct UpdateCommentRequest {
    pub comment: Option<String>,
}

impl UpdateCommentRequest {
    pub fn into_input(self, id: CommentId) -> UpdateCommentInput {
        UpdateCommentInput {
            id,
            comment: self.comment,
        }
    }
}

impl DocumentCodec for Comment {
    fn encode(&self) -> FieldMap {
        let mut fields = FieldMap::new();
        fields.insert("postId".into(), FieldValue::Str(self.post_id.0.clone()));
        fields.insert("userId".into(), FieldValue::Str(self.user_id.0.clone()));
        fields.insert("username".into(), FieldValue::Str(self.username.clone()));
        fields.insert("comment".into(), FieldValue::Str(self.comment.clone()));
        fields.insert("createdAt".into(), timestamp_value(self.created_at));
        fields
    }

    fn decode(doc: &StoredDocument) -> Self {
        Comment {
            id: CommentId(doc.id.0.clone()),
            post_id: PostId(doc.str_field("postId")),
            user_id: UserId(doc.str_field("userId")),
            username: doc.str_field("username"),
            comment: doc.str_field("comment"),
            created_at: doc.timestamp_field("createdAt"),
        }
    }
}
