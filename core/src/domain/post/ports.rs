use crate::domain::common::{CoreError, UserId};
use crate::domain::post::entities::{InsertPostInput, Post, PostId, UpdatePostInput};

/// Business operations on posts.
///
/// Follows the ports and adapters pattern: this trait is the port the HTTP
/// layer programs against, implemented over the shared document store.
///
/// # Concurrency
///
/// `update_post`, `delete_post` and `toggle_like` are read-modify-write
/// with no version token and no transaction around the read and the write.
/// Two concurrent writers to the same post race, and the loser's effect can
/// be silently overwritten by the winner's stale read (lost update). Callers
/// that need stronger guarantees must serialize externally.
pub trait PostService: Send + Sync {
    /// Creates a post.
    ///
    /// Validates that `user_id`, `username` and `description` are present,
    /// defaults the creation timestamp to now and the like set to empty,
    /// then inserts and writes the store-assigned id back onto the returned
    /// post.
    ///
    /// # Returns
    ///
    /// - `Ok(Post)` - the created post, id populated
    /// - `Err(CoreError::MissingField)` - a required field was empty
    /// - `Err(CoreError)` - the store was unavailable
    fn create_post(
        &self,
        input: InsertPostInput,
    ) -> impl Future<Output = Result<Post, CoreError>> + Send;

    /// Fetches a post by id. Absence is `Ok(None)`, not an error; the
    /// caller decides whether a missing post is a failure.
    fn get_post(
        &self,
        id: &PostId,
    ) -> impl Future<Output = Result<Option<Post>, CoreError>> + Send;

    /// Lists posts newest-first, optionally restricted to one author.
    fn list_posts(
        &self,
        author: Option<&UserId>,
    ) -> impl Future<Output = Result<Vec<Post>, CoreError>> + Send;

    /// Overwrites the mutable subset of a post (`description`,
    /// `user_image`). The id and creation timestamp are never changed.
    ///
    /// # Returns
    ///
    /// - `Ok(Post)` - the merged post as written
    /// - `Err(CoreError::PostNotFound)` - no post with that id
    fn update_post(
        &self,
        input: UpdatePostInput,
    ) -> impl Future<Output = Result<Post, CoreError>> + Send;

    /// Hard-deletes a post. Fails with [`CoreError::PostNotFound`] when the
    /// id does not resolve.
    fn delete_post(&self, id: &PostId) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Flips `user`'s membership in the post's like set: removes it when
    /// present, appends it otherwise. Two sequential calls return the set
    /// to its original state.
    fn toggle_like(
        &self,
        id: &PostId,
        user: &UserId,
    ) -> impl Future<Output = Result<Post, CoreError>> + Send;
}
