use std::sync::Arc;

use frontdesk_core::models::appointment::AppointmentStatus;
use frontdesk_core::models::patient::Patient;
use frontdesk_core::{Collection, FilterSet};
use jiff::civil::Date;
use serde::Serialize;
use tokio::sync::Mutex;

use crate::clients::Clients;
use crate::compose::{AppointmentForm, DEFAULT_DOCTOR};
use crate::error::DashboardError;
use crate::notify::Notifier;
use crate::state::DashboardState;
use crate::tabs::{self, TabSpec};
use crate::view::{self, QuickStats, TabView};

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub today: Date,
    pub default_doctor: String,
    /// Send the filter set with every load instead of filtering locally.
    pub server_side_filters: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            today: jiff::Zoned::now().date(),
            default_doctor: DEFAULT_DOCTOR.to_string(),
            server_side_filters: false,
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub active_tab: Collection,
    pub tab: TabSpec,
    pub filters: FilterSet,
    pub loading: bool,
    pub error: Option<String>,
    pub view: TabView,
    pub stats: QuickStats,
    pub compose_open: bool,
    pub compose: AppointmentForm,
}

/// The front-office view: shared state plus the transport it drives.
///
/// Cloning is cheap and clones share state, so several calls may be in
/// flight at once the way UI events are. The state lock is never held
/// across a transport call.
#[derive(Clone)]
pub struct Dashboard {
    pub(crate) state: Arc<Mutex<DashboardState>>,
    pub(crate) clients: Clients,
    pub(crate) notifier: Arc<dyn Notifier>,
    pub(crate) config: Arc<DashboardConfig>,
}

impl Dashboard {
    pub fn new(clients: Clients, notifier: Arc<dyn Notifier>, config: DashboardConfig) -> Self {
        let state = DashboardState::new(config.today, config.default_doctor.clone());
        Self {
            state: Arc::new(Mutex::new(state)),
            clients,
            notifier,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Run `f` against the current state.
    pub async fn inspect<T>(&self, f: impl FnOnce(&DashboardState) -> T) -> T {
        let state = self.state.lock().await;
        f(&state)
    }

    pub async fn snapshot(&self) -> DashboardSnapshot {
        let state = self.state.lock().await;
        DashboardSnapshot {
            active_tab: state.active_tab(),
            tab: *tabs::spec(state.active_tab()),
            filters: state.filters().clone(),
            loading: state.is_loading(),
            error: state.error().map(str::to_string),
            view: view::tab_view(&state),
            stats: view::quick_stats(&state),
            compose_open: state.is_compose_open(),
            compose: state.compose().clone(),
        }
    }

    pub async fn view(&self) -> TabView {
        view::tab_view(&*self.state.lock().await)
    }

    pub async fn set_search(&self, text: impl Into<String>) {
        self.state.lock().await.filters_mut().search = text.into();
    }

    /// `None` means all statuses.
    pub async fn set_status_filter(&self, status: Option<AppointmentStatus>) {
        self.state.lock().await.filters_mut().status = status;
    }

    /// `None` means any date.
    pub async fn set_date_filter(&self, date: Option<Date>) {
        self.state.lock().await.filters_mut().date = date;
    }

    pub async fn open_compose(&self) {
        self.state.lock().await.set_compose_open(true);
    }

    pub async fn close_compose(&self) {
        self.state.lock().await.set_compose_open(false);
    }

    pub async fn edit_compose(&self, edit: impl FnOnce(&mut AppointmentForm)) {
        edit(self.state.lock().await.compose_mut());
    }

    /// First `limit` patients straight from the store, independent of the
    /// active tab.
    pub async fn recent_patients(&self, limit: usize) -> Result<Vec<Patient>, DashboardError> {
        let mut patients = self.clients.patients.get_all(None).await?;
        patients.truncate(limit);
        Ok(patients)
    }
}
