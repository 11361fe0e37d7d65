use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::UserId;
use crate::domain::store::{
    DocumentCodec, DocumentId, FieldMap, FieldValue, StoredDocument, timestamp_value,
};

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct UserStatusId(pub String);

impl std::fmt::Display for UserStatusId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserStatusId {
    fn from(id: String) -> Self {
        UserStatusId(id)
    }
}

impl From<DocumentId> for UserStatusId {
    fn from(id: DocumentId) -> Self {
        UserStatusId(id.0)
    }
}

impl From<&UserStatusId> for DocumentId {
    fn from(id: &UserStatusId) -> Self {
        DocumentId(id.0.clone())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct UserStatus {
    pub id: UserStatusId,
    pub user_id: UserId,
    pub username: String,
    pub description: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct InsertUserStatusInput {
    pub user_id: UserId,
    pub username: String,
    pub description: String,
    pub image_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct UpdateUserStatusInput {
    pub id: UserStatusId,
    pub username: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct UpdateUserStatusRequest {
    pub username: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl UpdateUserStatusRequest {
    pub fn into_input(self, id: UserStatusId) -> UpdateUserStatusInput {
        UpdateUserStatusInput {
            id,
            username: self.username,
            description: self.description,
            image_url: self.image_url,
        }
    }
}

impl DocumentCodec for UserStatus {
    fn encode(&self) -> FieldMap {
        let mut fields = FieldMap::new();
        fields.insert("userId".into(), FieldValue::Str(self.user_id.0.clone()));
        fields.insert("username".into(), FieldValue::Str(self.username.clone()));
        fields.insert(
            "description".into(),
            FieldValue::Str(self.description.clone()),
        );
        fields.insert(
            "imageUrl".into(),
            FieldValue::Str(self.image_url.clone().unwrap_or_default()),
        );
        fields.insert("createdAt".into(), timestamp_value(self.created_at));
        fields
    }

    fn decode(doc: &StoredDocument) -> Self {
        UserStatus {
            id: UserStatusId(doc.id.0.clone()),
            user_id: UserId(doc.str_field("userId")),
            username: doc.str_field("username"),
            description: doc.str_field("description"),
            image_url: doc.opt_str_field("imageUrl"),
            created_at: doc.timestamp_field("createdAt"),
        }
    }
}
