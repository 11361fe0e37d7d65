use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::UserId;
use crate::domain::store::{
    DocumentCodec, DocumentId, FieldMap, FieldValue, StoredDocument, timestamp_value,
};

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct PostId(pub String);

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PostId {
    fn from(id: String) -> Self {
        PostId(id)
    }
}

impl From<DocumentId> for PostId {
    fn from(id: DocumentId) -> Self {
        PostId(id.0)
    }
}

impl From<&PostId> for DocumentId {
    fn from(id: &PostId) -> Self {
        DocumentId(id.0.clone())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct Post {
    pub id: PostId,
    pub user_id: UserId,
    pub username: String,
    pub description: String,
    pub user_image: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Users who liked the post. Set-like: no duplicates, order irrelevant.
    pub likes: Vec<UserId>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct InsertPostInput {
    pub user_id: UserId,
    pub username: String,
    pub description: String,
    pub user_image: Option<String>,
    /// Defaults to the time of the write when unset.
    pub created_at: Option<DateTime<Utc>>,
    /// Defaults to empty when unset.
    pub likes: Option<Vec<UserId>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct UpdatePostInput {
    pub id: PostId,
    pub description: Option<String>,
    pub user_image: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct UpdatePostRequest {
    pub description: Option<String>,
    pub user_image: Option<String>,
}

impl UpdatePostRequest {
    pub fn into_input(self, id: PostId) -> UpdatePostInput {
        UpdatePostInput {
            id,
            description: self.description,
            user_image: self.user_image,
        }
    }
}

/// Body of the like endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct LikePostRequest {
    pub user_id: UserId,
}

impl DocumentCodec for Post {
    fn encode(&self) -> FieldMap {
        let mut fields = FieldMap::new();
        fields.insert("userId".into(), FieldValue::Str(self.user_id.0.clone()));
        fields.insert("username".into(), FieldValue::Str(self.username.clone()));
        fields.insert(
            "description".into(),
            FieldValue::Str(self.description.clone()),
        );
        fields.insert(
            "userImage".into(),
            FieldValue::Str(self.user_image.clone().unwrap_or_default()),
        );
        fields.insert("createdAt".into(), timestamp_value(self.created_at));
        fields.insert(
            "likes".into(),
            FieldValue::StrList(self.likes.iter().map(|user| user.0.clone()).collect()),
        );
        fields
    }

    fn decode(doc: &StoredDocument) -> Self {
        Post {
            id: PostId(doc.id.0.clone()),
            user_id: UserId(doc.str_field("userId")),
            username: doc.str_field("username"),
            description: doc.str_field("description"),
            user_image: doc.opt_str_field("userImage"),
            created_at: doc.timestamp_field("createdAt"),
            likes: doc
                .str_list_field("likes")
                .into_iter()
                .map(UserId)
                .collect(),
        }
    }
}
