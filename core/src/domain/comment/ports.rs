use crate::domain::comment::entities::{Comment, CommentId, InsertCommentInput, UpdateCommentInput};
use crate::domain::common::CoreError;
use crate::domain::post::entities::PostId;

/// Business operations on comments. Same read-modify-write caveats as
/// [`crate::domain::post::ports::PostService`]: no version token, no
/// transaction, concurrent updates to one comment can lose writes.
pub trait CommentService: Send + Sync {
    /// Creates a comment. The parent `post_id` must be present but is not
    /// validated against the posts collection.
    fn create_comment(
        &self,
        input: InsertCommentInput,
    ) -> impl Future<Output = Result<Comment, CoreError>> + Send;

    /// Absence is `Ok(None)`, not an error.
    fn get_comment(
        &self,
        id: &CommentId,
    ) -> impl Future<Output = Result<Option<Comment>, CoreError>> + Send;

    /// Lists the comments under one post, newest-first.
    fn list_comments(
        &self,
        post_id: &PostId,
    ) -> impl Future<Output = Result<Vec<Comment>, CoreError>> + Send;

    /// Overwrites the comment text only; id, parent, author and creation
    /// timestamp are never changed.
    fn update_comment(
        &self,
        input: UpdateCommentInput,
    ) -> impl Future<Output = Result<Comment, CoreError>> + Send;

    fn delete_comment(
        &self,
        id: &CommentId,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
