use crate::domain::common::{CoreError, UserId};
use crate::domain::topic::entities::{InsertTopicInput, Topic, TopicId, UpdateTopicInput};

/// Business operations on topics.
pub trait TopicService: Send + Sync {
    fn create_topic(
        &self,
        input: InsertTopicInput,
    ) -> impl Future<Output = Result<Topic, CoreError>> + Send;

    /// Absence is `Ok(None)`, not an error.
    fn get_topic(
        &self,
        id: &TopicId,
    ) -> impl Future<Output = Result<Option<Topic>, CoreError>> + Send;

    /// Lists topics newest-first, optionally restricted to one owner.
    fn list_topics(
        &self,
        owner: Option<&UserId>,
    ) -> impl Future<Output = Result<Vec<Topic>, CoreError>> + Send;

    /// Overwrites slots and progress; id, owner and creation timestamp are
    /// never changed.
    fn update_topic(
        &self,
        input: UpdateTopicInput,
    ) -> impl Future<Output = Result<Topic, CoreError>> + Send;

    fn delete_topic(&self, id: &TopicId) -> impl Future<Output = Result<(), CoreError>> + Send;
}
