use crate::domain::common::{CoreError, UserId};
use crate::domain::user_status::entities::{
    InsertUserStatusInput, UpdateUserStatusInput, UserStatus, UserStatusId,
};

/// Business operations on user statuses.
pub trait UserStatusService: Send + Sync {
    fn create_user_status(
        &self,
        input: InsertUserStatusInput,
    ) -> impl Future<Output = Result<UserStatus, CoreError>> + Send;

    /// Absence is `Ok(None)`, not an error.
    fn get_user_status(
        &self,
        id: &UserStatusId,
    ) -> impl Future<Output = Result<Option<UserStatus>, CoreError>> + Send;

    /// Lists statuses newest-first, optionally restricted to one owner.
    fn list_user_statuses(
        &self,
        owner: Option<&UserId>,
    ) -> impl Future<Output = Result<Vec<UserStatus>, CoreError>> + Send;

    /// Overwrites display name, description and image; id, owner and
    /// creation timestamp are never changed.
    fn update_user_status(
        &self,
        input: UpdateUserStatusInput,
    ) -> impl Future<Output = Result<UserStatus, CoreError>> + Send;

    fn delete_user_status(
        &self,
        id: &UserStatusId,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
