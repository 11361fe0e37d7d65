use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::UserId;
use crate::domain::store::{
    DocumentCodec, DocumentId, FieldMap, FieldValue, StoredDocument, timestamp_value,
};

/// A topic always carries exactly this many slots.
pub const SLOT_COUNT: usize = 5;

/// Document field names for each slot, in slot order.
const SLOT_FIELDS: [(&str, &str); SLOT_COUNT] = [
    ("topicOne", "topicOneDescription"),
    ("topicTwo", "topicTwoDescription"),
    ("topicThree", "topicThreeDescription"),
    ("topicFour", "topicFourDescription"),
    ("topicFive", "topicFiveDescription"),
];

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct TopicId(pub String);

impl std::fmt::Display for TopicId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TopicId {
    fn from(id: String) -> Self {
        TopicId(id)
    }
}

impl From<DocumentId> for TopicId {
    fn from(id: DocumentId) -> Self {
        TopicId(id.0)
    }
}

impl From<&TopicId> for DocumentId {
    fn from(id: &TopicId) -> Self {
        DocumentId(id.0.clone())
    }
}

/// One of the five (name, description) pairs a topic carries.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq, ToSchema)]
pub struct TopicSlot {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct Topic {
    pub id: TopicId,
    pub user_id: UserId,
    /// Progress percentage. Stored as supplied; out-of-range values are
    /// kept, not clamped or rejected.
    pub progress: i32,
    /// Always [`SLOT_COUNT`] entries; short inputs are padded with empty
    /// slots, long ones truncated.
    pub slots: Vec<TopicSlot>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct InsertTopicInput {
    pub user_id: UserId,
    /// Defaults to 0 when unset.
    pub progress: Option<i32>,
    pub slots: Vec<TopicSlot>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct UpdateTopicInput {
    pub id: TopicId,
    pub progress: Option<i32>,
    pub slots: Option<Vec<TopicSlot>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct UpdateTopicRequest {
    pub progress: Option<i32>,
    pub slots: Option<Vec<TopicSlot>>,
}

impl UpdateTopicRequest {
    pub fn into_input(self, id: TopicId) -> UpdateTopicInput {
        UpdateTopicInput {
            id,
            progress: self.progress,
            slots: self.slots,
        }
    }
}

/// Pad or truncate to exactly [`SLOT_COUNT`] entries.
pub(crate) fn normalize_slots(mut slots: Vec<TopicSlot>) -> Vec<TopicSlot> {
    slots.truncate(SLOT_COUNT);
    slots.resize_with(SLOT_COUNT, TopicSlot::default);
    slots
}

impl DocumentCodec for Topic {
    fn encode(&self) -> FieldMap {
        let mut fields = FieldMap::new();
        fields.insert("userId".into(), FieldValue::Str(self.user_id.0.clone()));
        fields.insert("progress".into(), FieldValue::Int(i64::from(self.progress)));
        for (slot, (name_field, description_field)) in self.slots.iter().zip(SLOT_FIELDS) {
            fields.insert(name_field.to_string(), FieldValue::Str(slot.name.clone()));
            fields.insert(
                description_field.to_string(),
                FieldValue::Str(slot.description.clone()),
            );
        }
        fields.insert("createdAt".into(), timestamp_value(self.created_at));
        fields
    }

    fn decode(doc: &StoredDocument) -> Self {
        Topic {
            id: TopicId(doc.id.0.clone()),
            user_id: UserId(doc.str_field("userId")),
            progress: doc.i32_field("progress"),
            slots: SLOT_FIELDS
                .iter()
                .map(|&(name_field, description_field)| TopicSlot {
                    name: doc.str_field(name_field),
                    description: doc.str_field(description_field),
                })
                .collect(),
            created_at: doc.timestamp_field("createdAt"),
        }
    }
}
