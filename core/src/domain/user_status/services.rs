use chrono::Utc;

use crate::domain::{
    common::{CoreError, UserId, services::Service},
    store::{
        DocumentCodec, DocumentId, FieldValue, millis_precision,
        ports::{DocumentStore, OrderDirection},
    },
    user_status::{
        entities::{InsertUserStatusInput, UpdateUserStatusInput, UserStatus, UserStatusId},
        ports::UserStatusService,
    },
};

const COLLECTION: &str = "user_statuses";

impl<S> UserStatusService for Service<S>
where
    S: DocumentStore,
{
    async fn create_user_status(
        &self,
        input: InsertUserStatusInput,
    ) -> Result<UserStatus, CoreError> {
        let mut status = UserStatus {
            id: UserStatusId::default(),
            user_id: input.user_id,
            username: input.username,
            description: input.description,
            image_url: input.image_url,
            created_at: millis_precision(input.created_at.unwrap_or_else(Utc::now)),
        };

        let assigned = self.store.insert(COLLECTION, status.encode()).await?;
        status.id = UserStatusId::from(assigned);

        Ok(status)
    }

    async fn get_user_status(&self, id: &UserStatusId) -> Result<Option<UserStatus>, CoreError> {
        let doc = self.store.get(COLLECTION, &DocumentId::from(id)).await?;

        Ok(doc.as_ref().map(UserStatus::decode))
    }

    async fn list_user_statuses(
        &self,
        owner: Option<&UserId>,
    ) -> Result<Vec<UserStatus>, CoreError> {
        let filter = owner.map(|user| ("userId", FieldValue::Str(user.0.clone())));

        let docs = self
            .store
            .query(COLLECTION, filter, "createdAt", OrderDirection::Descending)
            .await?;

        Ok(docs.iter().map(UserStatus::decode).collect())
    }

    async fn update_user_status(
        &self,
        input: UpdateUserStatusInput,
    ) -> Result<UserStatus, CoreError> {
        let doc = self
            .store
            .get(COLLECTION, &DocumentId::from(&input.id))
            .await?
            .ok_or_else(|| CoreError::UserStatusNotFound {
                id: input.id.clone(),
            })?;

        let mut status = UserStatus::decode(&doc);
        if let Some(username) = input.username {
            status.username = username;
        }
        if let Some(description) = input.description {
            status.description = description;
        }
        if let Some(image_url) = input.image_url {
            status.image_url = Some(image_url);
        }

        let replaced = self
            .store
            .replace(COLLECTION, &doc.id, status.encode())
            .await?;
        if !replaced {
            return Err(CoreError::UserStatusNotFound { id: input.id });
        }

        Ok(status)
    }

    async fn delete_user_status(&self, id: &UserStatusId) -> Result<(), CoreError> {
        let deleted = self.store.delete(COLLECTION, &DocumentId::from(id)).await?;
        if !deleted {
            return Err(CoreError::UserStatusNotFound { id: id.clone() });
        }

        Ok(())
    }
}
