use chrono::Utc;

use crate::domain::{
    common::{CoreError, UserId, services::Service},
    store::{
        DocumentCodec, DocumentId, FieldValue, millis_precision,
        ports::{DocumentStore, OrderDirection},
    },
    topic::{
        entities::{InsertTopicInput, Topic, TopicId, UpdateTopicInput, normalize_slots},
        ports::TopicService,
    },
};

const COLLECTION: &str = "topics";

impl<S> TopicService for Service<S>
where
    S: DocumentStore,
{
    async fn create_topic(&self, input: InsertTopicInput) -> Result<Topic, CoreError> {
        let mut topic = Topic {
            id: TopicId::default(),
            user_id: input.user_id,
            progress: input.progress.unwrap_or(0),
            slots: normalize_slots(input.slots),
            created_at: millis_precision(input.created_at.unwrap_or_else(Utc::now)),
        };

        let assigned = self.store.insert(COLLECTION, topic.encode()).await?;
        topic.id = TopicId::from(assigned);

        Ok(topic)
    }

    async fn get_topic(&self, id: &TopicId) -> Result<Option<Topic>, CoreError> {
        let doc = self.store.get(COLLECTION, &DocumentId::from(id)).await?;

        Ok(doc.as_ref().map(Topic::decode))
    }

    async fn list_topics(&self, owner: Option<&UserId>) -> Result<Vec<Topic>, CoreError> {
        let filter = owner.map(|user| ("userId", FieldValue::Str(user.0.clone())));

        let docs = self
            .store
            .query(COLLECTION, filter, "createdAt", OrderDirection::Descending)
            .await?;

        Ok(docs.iter().map(Topic::decode).collect())
    }

    async fn update_topic(&self, input: UpdateTopicInput) -> Result<Topic, CoreError> {
        let doc = self
            .store
            .get(COLLECTION, &DocumentId::from(&input.id))
            .await?
            .ok_or_else(|| CoreError::TopicNotFound {
                id: input.id.clone(),
            })?;

        let mut topic = Topic::decode(&doc);
        if let Some(progress) = input.progress {
            topic.progress = progress;
        }
        if let Some(slots) = input.slots {
            topic.slots = normalize_slots(slots);
        }

        let replaced = self
            .store
            .replace(COLLECTION, &doc.id, topic.encode())
            .await?;
        if !replaced {
            return Err(CoreError::TopicNotFound { id: input.id });
        }

        Ok(topic)
    }

    async fn delete_topic(&self, id: &TopicId) -> Result<(), CoreError> {
        let deleted = self.store.delete(COLLECTION, &DocumentId::from(id)).await?;
        if !deleted {
            return Err(CoreError::TopicNotFound { id: id.clone() });
        }

        Ok(())
    }
}
