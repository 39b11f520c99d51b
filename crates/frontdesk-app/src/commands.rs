//! UI-facing commands. Each takes the shared [`AppState`] and returns
//! `Result<T, String>` so a frontend can show the error as-is.

use frontdesk_core::models::appointment::{Appointment, AppointmentDraft, AppointmentStatus};
use frontdesk_core::models::patient::Patient;
use frontdesk_core::{Collection, FilterSet, RecordId};
use frontdesk_dashboard::compose::AppointmentForm;
use frontdesk_dashboard::{Dashboard, DashboardSnapshot, LoadOutcome, Notice};

use crate::backend;
use crate::config::{self, ConfigInfo, FrontdeskConfig};
use crate::state::AppState;

/// Patients shown in the sidebar.
pub const RECENT_PATIENTS: usize = 8;

async fn require_dashboard(state: &AppState) -> Result<Dashboard, String> {
    state
        .dashboard
        .lock()
        .await
        .clone()
        .ok_or_else(|| "not connected: call connect() first".to_string())
}

/// Build the backend for `config` and replace the current dashboard.
pub async fn connect(state: &AppState, config: FrontdeskConfig) -> Result<(), String> {
    let clients = backend::build_clients(&config.backend)
        .await
        .map_err(|e| e.to_string())?;
    let dashboard = Dashboard::new(
        clients,
        state.notices.clone(),
        backend::dashboard_config(&config),
    );

    *state.dashboard.lock().await = Some(dashboard);
    *state.config.lock().await = Some(config);
    Ok(())
}

pub async fn config_info(state: &AppState) -> Result<ConfigInfo, String> {
    state
        .config
        .lock()
        .await
        .as_ref()
        .map(config::config_info)
        .ok_or_else(|| "not connected: call connect() first".to_string())
}

pub fn list_aws_profiles() -> Vec<String> {
    crate::aws::list_aws_profiles()
}

pub async fn get_snapshot(state: &AppState) -> Result<DashboardSnapshot, String> {
    Ok(require_dashboard(state).await?.snapshot().await)
}

/// `tab` is the collection name, e.g. `"patients"`.
pub async fn select_tab(state: &AppState, tab: String) -> Result<LoadOutcome, String> {
    let tab = tab.parse::<Collection>().map_err(|e| e.to_string())?;
    require_dashboard(state)
        .await?
        .select_tab(tab)
        .await
        .map_err(|e| e.to_string())
}

pub async fn retry(state: &AppState) -> Result<LoadOutcome, String> {
    require_dashboard(state)
        .await?
        .retry()
        .await
        .map_err(|e| e.to_string())
}

pub async fn set_search(state: &AppState, text: String) -> Result<(), String> {
    require_dashboard(state).await?.set_search(text).await;
    Ok(())
}

/// `None` or `"all"` clears the status filter.
pub async fn set_status_filter(state: &AppState, status: Option<String>) -> Result<(), String> {
    let status = match status.as_deref() {
        None | Some("all") => None,
        Some(s) => Some(s.parse::<AppointmentStatus>().map_err(|e| e.to_string())?),
    };
    require_dashboard(state).await?.set_status_filter(status).await;
    Ok(())
}

/// `date` is `YYYY-MM-DD`; `None` or empty clears the date filter.
pub async fn set_date_filter(state: &AppState, date: Option<String>) -> Result<(), String> {
    let date = match date.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(s) => Some(
            s.parse::<jiff::civil::Date>()
                .map_err(|e| format!("invalid date {s:?}: {e}"))?,
        ),
    };
    require_dashboard(state).await?.set_date_filter(date).await;
    Ok(())
}

/// Replace all filters at once. Reloads only with server-side filtering.
pub async fn apply_filters(
    state: &AppState,
    filters: FilterSet,
) -> Result<Option<LoadOutcome>, String> {
    require_dashboard(state)
        .await?
        .apply_filters(filters)
        .await
        .map_err(|e| e.to_string())
}

pub async fn open_compose(state: &AppState) -> Result<(), String> {
    require_dashboard(state).await?.open_compose().await;
    Ok(())
}

pub async fn close_compose(state: &AppState) -> Result<(), String> {
    require_dashboard(state).await?.close_compose().await;
    Ok(())
}

pub async fn update_compose(state: &AppState, form: AppointmentForm) -> Result<(), String> {
    require_dashboard(state)
        .await?
        .edit_compose(|current| *current = form)
        .await;
    Ok(())
}

pub async fn submit_compose(state: &AppState) -> Result<Appointment, String> {
    require_dashboard(state)
        .await?
        .submit_compose()
        .await
        .map_err(|e| e.to_string())
}

pub async fn create_appointment(
    state: &AppState,
    draft: AppointmentDraft,
) -> Result<Appointment, String> {
    require_dashboard(state)
        .await?
        .create_appointment(draft)
        .await
        .map_err(|e| e.to_string())
}

pub async fn update_appointment_status(
    state: &AppState,
    id: String,
    status: String,
) -> Result<(), String> {
    let status = status
        .parse::<AppointmentStatus>()
        .map_err(|e| e.to_string())?;
    require_dashboard(state)
        .await?
        .update_appointment_status(&RecordId::new(id), status)
        .await
        .map_err(|e| e.to_string())
}

pub async fn recent_patients(state: &AppState) -> Result<Vec<Patient>, String> {
    require_dashboard(state)
        .await?
        .recent_patients(RECENT_PATIENTS)
        .await
        .map_err(|e| e.to_string())
}

/// Notices raised since the last call, oldest first.
pub fn drain_notices(state: &AppState) -> Vec<Notice> {
    state.notices.drain()
}
