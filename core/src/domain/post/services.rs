use chrono::Utc;

use crate::domain::{
    common::{CoreError, UserId, services::Service},
    post::{
        entities::{InsertPostInput, Post, PostId, UpdatePostInput},
        ports::PostService,
    },
    store::{
        DocumentCodec, DocumentId, FieldValue, millis_precision,
        ports::{DocumentStore, OrderDirection},
    },
};

const COLLECTION: &str = "posts";

impl<S> PostService for Service<S>
where
    S: DocumentStore,
{
    async fn create_post(&self, input: InsertPostInput) -> Result<Post, CoreError> {
        if input.user_id.0.trim().is_empty() {
            return Err(CoreError::MissingField { field: "userId" });
        }
        if input.username.trim().is_empty() {
            return Err(CoreError::MissingField { field: "username" });
        }
        if input.description.trim().is_empty() {
            return Err(CoreError::MissingField { field: "description" });
        }

        let mut post = Post {
            id: PostId::default(),
            user_id: input.user_id,
            username: input.username,
            description: input.description,
            user_image: input.user_image,
            created_at: millis_precision(input.created_at.unwrap_or_else(Utc::now)),
            likes: input.likes.unwrap_or_default(),
        };

        let assigned = self.store.insert(COLLECTION, post.encode()).await?;
        post.id = PostId::from(assigned);

        Ok(post)
    }

    async fn get_post(&self, id: &PostId) -> Result<Option<Post>, CoreError> {
        let doc = self.store.get(COLLECTION, &DocumentId::from(id)).await?;

        Ok(doc.as_ref().map(Post::decode))
    }

    async fn list_posts(&self, author: Option<&UserId>) -> Result<Vec<Post>, CoreError> {
        let filter = author.map(|user| ("userId", FieldValue::Str(user.0.clone())));

        let docs = self
            .store
            .query(COLLECTION, filter, "createdAt", OrderDirection::Descending)
            .await?;

        Ok(docs.iter().map(Post::decode).collect())
    }

    async fn update_post(&self, input: UpdatePostInput) -> Result<Post, CoreError> {
        let doc = self
            .store
            .get(COLLECTION, &DocumentId::from(&input.id))
            .await?
            .ok_or_else(|| CoreError::PostNotFound {
                id: input.id.clone(),
            })?;

        let mut post = Post::decode(&doc);
        if let Some(description) = input.description {
            post.description = description;
        }
        if let Some(user_image) = input.user_image {
            post.user_image = Some(user_image);
        }

        let replaced = self.store.replace(COLLECTION, &doc.id, post.encode()).await?;
        if !replaced {
            return Err(CoreError::PostNotFound { id: input.id });
        }

        Ok(post)
    }

    async fn delete_post(&self, id: &PostId) -> Result<(), CoreError> {
        let deleted = self.store.delete(COLLECTION, &DocumentId::from(id)).await?;
        if !deleted {
            return Err(CoreError::PostNotFound { id: id.clone() });
        }

        Ok(())
    }

    async fn toggle_like(&self, id: &PostId, user: &UserId) -> Result<Post, CoreError> {
        let doc = self
            .store
            .get(COLLECTION, &DocumentId::from(id))
            .await?
            .ok_or_else(|| CoreError::PostNotFound { id: id.clone() })?;

        let mut post = Post::decode(&doc);
        match post.likes.iter().position(|liker| liker == user) {
            Some(index) => {
                post.likes.remove(index);
            }
            None => post.likes.push(user.clone()),
        }

        let replaced = self.store.replace(COLLECTION, &doc.id, post.encode()).await?;
        if !replaced {
            return Err(CoreError::PostNotFound { id: id.clone() });
        }

        Ok(post)
    }
}
