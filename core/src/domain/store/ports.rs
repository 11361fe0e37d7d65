use crate::domain::common::CoreError;
use crate::domain::store::{DocumentId, FieldMap, FieldValue, StoredDocument};

/// Sort direction for [`DocumentStore::query`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderDirection {
    Ascending,
    Descending,
}

/// The one capability the entity services hold on the backing store.
///
/// Documents are addressed by (collection, id) and carry no schema beyond
/// their field map; one implementation exists per backend. Every call is
/// single-shot: an I/O failure surfaces as
/// [`CoreError::StoreUnavailable`] and is never retried at this layer.
///
/// The trait requires `Send + Sync` to support concurrent access from
/// request handlers.
pub trait DocumentStore: Send + Sync {
    /// Fetch one document. Absence is `Ok(None)`, not an error; callers
    /// decide whether a missing document is a failure.
    fn get(
        &self,
        collection: &str,
        id: &DocumentId,
    ) -> impl Future<Output = Result<Option<StoredDocument>, CoreError>> + Send;

    /// Insert a new document; the store assigns and returns its id.
    fn insert(
        &self,
        collection: &str,
        fields: FieldMap,
    ) -> impl Future<Output = Result<DocumentId, CoreError>> + Send;

    /// Overwrite the whole document at `id`. Returns `false` when no
    /// document with that id exists.
    fn replace(
        &self,
        collection: &str,
        id: &DocumentId,
        fields: FieldMap,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    /// Hard delete. Returns `false` when no document with that id exists.
    fn delete(
        &self,
        collection: &str,
        id: &DocumentId,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    /// Equality-filtered, ordered scan. A `None` filter returns the whole
    /// collection, still ordered by `order_by`.
    fn query(
        &self,
        collection: &str,
        filter: Option<(&str, FieldValue)>,
        order_by: &str,
        direction: OrderDirection,
    ) -> impl Future<Output = Result<Vec<StoredDocument>, CoreError>> + Send;
}
