use frontdesk_core::models::appointment::Appointment;
use frontdesk_core::models::patient::Patient;
use frontdesk_core::models::prescription::Prescription;
use frontdesk_core::{Collection, FilterSet};

use crate::dashboard::Dashboard;
use crate::error::DashboardError;
use crate::state::{LoadOutcome, LoadTicket, TabRecord};
use crate::tabs;

impl Dashboard {
    /// Switch tabs and load the new tab's collection. Always issues exactly
    /// one load, even when `tab` is already active.
    pub async fn select_tab(&self, tab: Collection) -> Result<LoadOutcome, DashboardError> {
        let ticket = self.state.lock().await.begin_load_for(tab);
        self.run(ticket).await
    }

    /// Fetch the active tab's collection and replace local state with it.
    ///
    /// A transport failure sets the error, keeps the previous list, emits an
    /// error notice and returns the error. A result that arrives after a newer
    /// load was issued is dropped as `Superseded`, failure included.
    pub async fn load(&self) -> Result<LoadOutcome, DashboardError> {
        let ticket = self.state.lock().await.begin_load();
        self.run(ticket).await
    }

    async fn run(&self, ticket: LoadTicket) -> Result<LoadOutcome, DashboardError> {
        tracing::debug!(tab = %ticket.tab, seq = ticket.seq, "load issued");
        match ticket.tab {
            Collection::Appointments => self.fetch::<Appointment>(ticket).await,
            Collection::Patients => self.fetch::<Patient>(ticket).await,
            Collection::Prescriptions => self.fetch::<Prescription>(ticket).await,
        }
    }

    /// User-triggered repeat of the active tab's load.
    pub async fn retry(&self) -> Result<LoadOutcome, DashboardError> {
        self.load().await
    }

    /// Replace the whole filter set. With server-side filtering the active
    /// tab is reloaded; otherwise the view simply re-derives and `None` is
    /// returned.
    pub async fn apply_filters(
        &self,
        filters: FilterSet,
    ) -> Result<Option<LoadOutcome>, DashboardError> {
        *self.state.lock().await.filters_mut() = filters;
        if self.config.server_side_filters {
            self.load().await.map(Some)
        } else {
            Ok(None)
        }
    }

    async fn fetch<R: TabRecord>(&self, ticket: LoadTicket) -> Result<LoadOutcome, DashboardError> {
        let filters = self
            .config
            .server_side_filters
            .then(|| ticket.filters.clone());
        let fetched = R::client(&self.clients).get_all(filters).await;

        let (result, failure) = match fetched {
            Ok(records) => (Ok(records), None),
            Err(e) => (Err(e.to_string()), Some(e)),
        };
        let outcome = self.state.lock().await.finish_load::<R>(&ticket, result);

        match &outcome {
            LoadOutcome::Applied { tab, count } => {
                tracing::info!(tab = %tab, seq = ticket.seq, count, "collection loaded");
            }
            LoadOutcome::Superseded { tab, seq } => {
                tracing::debug!(tab = %tab, seq, "dropping superseded load result");
            }
            LoadOutcome::Failed { tab, message } => {
                tracing::warn!(tab = %tab, seq = ticket.seq, error = %message, "load failed");
                self.notifier.error(&tabs::load_failed_message(*tab));
                if let Some(e) = failure {
                    return Err(e.into());
                }
            }
        }
        Ok(outcome)
    }
}
