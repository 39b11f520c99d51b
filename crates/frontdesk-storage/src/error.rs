use frontdesk_core::{Collection, CoreError, Record, RecordId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{collection} record not found: {id}")]
    NotFound { collection: Collection, id: RecordId },

    #[error("object not found: {key}")]
    ObjectNotFound { key: String },

    #[error("record was modified by another writer: {key}")]
    Conflict { key: String },

    #[error("{collection} record {id} rejected the update: {source}")]
    Rejected {
        collection: Collection,
        id: RecordId,
        source: CoreError,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("S3 GetObject error: {0}")]
    GetObject(String),

    #[error("S3 PutObject error: {0}")]
    PutObject(String),

    #[error("S3 DeleteObject error: {0}")]
    DeleteObject(String),

    #[error("S3 ListObjects error: {0}")]
    ListObjects(String),

    /// No response arrived. S3 timeouts and connection failures land here;
    /// other backends use it for the same class of failure.
    #[error("transport error: {0}")]
    Transport(String),
}

impl StorageError {
    pub(crate) fn rejected<R: Record>(id: &RecordId, source: CoreError) -> Self {
        StorageError::Rejected {
            collection: R::COLLECTION,
            id: id.clone(),
            source,
        }
    }
}
