use frontdesk_core::RecordId;
use frontdesk_core::models::appointment::{Appointment, AppointmentDraft, AppointmentPatch, AppointmentStatus};
use frontdesk_storage::StorageError;

use crate::dashboard::Dashboard;
use crate::error::DashboardError;
use crate::state::TransitionCheck;

impl Dashboard {
    /// Schedule a new appointment.
    ///
    /// Missing required fields fail before any transport call. Otherwise the
    /// appointment appears at the top of the list as pending while the store
    /// call runs; on success the store's record (with its id) replaces it and
    /// the compose form resets, on failure the pending entry is removed.
    pub async fn create_appointment(
        &self,
        draft: AppointmentDraft,
    ) -> Result<Appointment, DashboardError> {
        let token = match self.state.lock().await.begin_create(&draft) {
            Ok(token) => token,
            Err(e) => {
                self.notifier.error(&e.to_string());
                return Err(e.into());
            }
        };

        match self.clients.appointments.create(draft).await {
            Ok(record) => {
                let confirmation = self
                    .state
                    .lock()
                    .await
                    .confirm_create(token, record.clone());
                tracing::info!(id = %record.id, ?confirmation, "appointment scheduled");
                self.notifier.success("Appointment scheduled successfully");
                Ok(record)
            }
            Err(e) => {
                self.state.lock().await.abandon_create(token);
                tracing::warn!(error = %e, "appointment create failed");
                self.notifier.error("Failed to schedule appointment");
                Err(e.into())
            }
        }
    }

    /// Submit the compose form.
    pub async fn submit_compose(&self) -> Result<Appointment, DashboardError> {
        let form = self.state.lock().await.compose().clone();
        let draft = match form.to_draft() {
            Ok(draft) => draft,
            Err(e) => {
                self.notifier.error(&e.to_string());
                return Err(e.into());
            }
        };
        self.create_appointment(draft).await
    }

    /// Move one appointment to `next`.
    ///
    /// Only the status is sent. The local copy is patched with the status the
    /// store returns; a failure leaves local state untouched. The store checks
    /// the transition again against its own copy, so a record that is not
    /// loaded locally, or that another writer moved first, is still refused.
    pub async fn update_appointment_status(
        &self,
        id: &RecordId,
        next: AppointmentStatus,
    ) -> Result<(), DashboardError> {
        let check = self.state.lock().await.check_transition(id, next);
        let from = match check {
            Ok(from) => from,
            Err(TransitionCheck::Invalid(e)) => {
                self.notifier.error(&e.to_string());
                return Err(e.into());
            }
            Err(TransitionCheck::Pending) => {
                self.notifier.error("Appointment is still being scheduled");
                return Err(DashboardError::Pending(id.clone()));
            }
        };

        match self
            .clients
            .appointments
            .update(id.clone(), AppointmentPatch::status(next))
            .await
        {
            Ok(stored) => {
                self.state.lock().await.apply_status(id, stored.status);
                tracing::info!(id = %id, from = ?from, to = %stored.status, "appointment status changed");
                self.notifier.success(&format!("Appointment {next}"));
                Ok(())
            }
            Err(StorageError::Rejected { source, .. }) => {
                tracing::warn!(id = %id, error = %source, "store refused status change");
                self.notifier.error(&source.to_string());
                Err(source.into())
            }
            Err(e) => {
                tracing::warn!(id = %id, error = %e, "appointment status update failed");
                self.notifier.error("Failed to update appointment");
                Err(e.into())
            }
        }
    }
}
