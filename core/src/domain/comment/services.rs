use chrono::Utc;

use crate::domain::{
    comment::{
        entities::{Comment, CommentId, InsertCommentInput, UpdateCommentInput},
        ports::CommentService,
    },
    common::{CoreError, services::Service},
    post::entities::PostId,
    store::{
        DocumentCodec, DocumentId, FieldValue, millis_precision,
        ports::{DocumentStore, OrderDirection},
    },
};

const COLLECTION: &str = "comments";

impl<S> CommentService for Service<S>
where
    S: DocumentStore,
{
    async fn create_comment(&self, input: InsertCommentInput) -> Result<Comment, CoreError> {
        if input.post_id.0.trim().is_empty() {
            return Err(CoreError::MissingField { field: "postId" });
        }

        let mut comment = Comment {
            id: CommentId::default(),
            post_id: input.post_id,
            user_id: input.user_id,
            username: input.username,
            comment: input.comment,
            created_at: millis_precision(input.created_at.unwrap_or_else(Utc::now)),
        };

        let assigned = self.store.insert(COLLECTION, comment.encode()).await?;
        comment.id = CommentId::from(assigned);

        Ok(comment)
    }

    async fn get_comment(&self, id: &CommentId) -> Result<Option<Comment>, CoreError> {
        let doc = self.store.get(COLLECTION, &DocumentId::from(id)).await?;

        Ok(doc.as_ref().map(Comment::decode))
    }

    async fn list_comments(&self, post_id: &PostId) -> Result<Vec<Comment>, CoreError> {
        let filter = Some(("postId", FieldValue::Str(post_id.0.clone())));

        let docs = self
            .store
            .query(COLLECTION, filter, "createdAt", OrderDirection::Descending)
            .await?;

        Ok(docs.iter().map(Comment::decode).collect())
    }

    async fn update_comment(&self, input: UpdateCommentInput) -> Result<Comment, CoreError> {
        let doc = self
            .store
            .get(COLLECTION, &DocumentId::from(&input.id))
            .await?
            .ok_or_else(|| CoreError::CommentNotFound {
                id: input.id.clone(),
            })?;

        let mut comment = Comment::decode(&doc);
        if let Some(text) = input.comment {
            comment.comment = text;
        }

        let replaced = self
            .store
            .replace(COLLECTION, &doc.id, comment.encode())
            .await?;
        if !replaced {
            return Err(CoreError::CommentNotFound { id: input.id });
        }

        Ok(comment)
    }

    async fn delete_comment(&self, id: &CommentId) -> Result<(), CoreError> {
        let deleted = self.store.delete(COLLECTION, &DocumentId::from(id)).await?;
        if !deleted {
            return Err(CoreError::CommentNotFound { id: id.clone() });
        }

        Ok(())
    }
}
