use thiserror::Error;

use crate::models::appointment::AppointmentStatus;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0} is required")]
    MissingField(String),

    #[error("invalid status: {0}")]
    InvalidStatus(String),

    #[error("invalid appointment type: {0}")]
    InvalidAppointmentType(String),

    #[error("invalid collection: {0}")]
    InvalidCollection(String),

    #[error("cannot move appointment from {from} to {to}")]
    InvalidTransition {
        from: AppointmentStatus,
        to: AppointmentStatus,
    },

    #[error("invalid date or time: {0}")]
    InvalidDateTime(String),
}
