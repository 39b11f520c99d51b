use frontdesk_core::{CoreError, RecordId};
use frontdesk_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// Rejected before any transport call.
    #[error(transparent)]
    Validation(#[from] CoreError),

    #[error(transparent)]
    Transport(#[from] StorageError),

    #[error("record {0} is still waiting for the store to confirm it")]
    Pending(RecordId),
}

impl DashboardError {
    pub fn is_validation(&self) -> bool {
        matches!(self, DashboardError::Validation(_) | DashboardError::Pending(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DashboardError::Transport(StorageError::NotFound { .. }))
    }
}
