use std::future::Future;
use std::pin::Pin;

use frontdesk_core::{FilterSet, Record, RecordId};

use crate::error::StorageError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Access to one record collection.
///
/// Every call is asynchronous and may fail with a [`StorageError`].
/// Methods return boxed futures for dyn compatibility, so the dashboard can
/// hold `Arc<dyn RecordClient<R>>` without knowing the backend.
pub trait RecordClient<R: Record>: Send + Sync {
    /// Snapshot of the collection, newest first. With `filters`, only
    /// records matching them.
    fn get_all(&self, filters: Option<FilterSet>) -> BoxFuture<'_, Result<Vec<R>, StorageError>>;

    /// `Ok(None)` when no record has this id.
    fn get_by_id(&self, id: RecordId) -> BoxFuture<'_, Result<Option<R>, StorageError>>;

    /// Store a new record. The backend assigns the id.
    fn create(&self, draft: R::Draft) -> BoxFuture<'_, Result<R, StorageError>>;

    /// Merge `patch` into the record and return the result.
    fn update(&self, id: RecordId, patch: R::Patch) -> BoxFuture<'_, Result<R, StorageError>>;

    /// Remove one or more records.
    fn delete(&self, ids: Vec<RecordId>) -> BoxFuture<'_, Result<bool, StorageError>>;
}
