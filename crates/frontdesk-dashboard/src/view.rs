//! Read-time view model. Recomputed from state on every call, never stored.

use frontdesk_core::models::appointment::{Appointment, AppointmentStatus, StatusAction};
use frontdesk_core::models::patient::Patient;
use frontdesk_core::models::prescription::{Prescription, PrescriptionStatus};
use frontdesk_core::{Collection, RecordId};
use serde::Serialize;

use crate::state::{DashboardState, TabRecord};
use crate::tabs;

/// One list row, renderer-agnostic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRow {
    pub id: RecordId,
    pub title: String,
    pub subtitle: String,
    pub badge: String,
    pub details: Vec<String>,
    pub actions: Vec<StatusAction>,
    /// Optimistic entry the store has not confirmed yet.
    pub pending: bool,
}

pub trait Render {
    fn row(&self) -> DisplayRow;
}

fn or_na(value: &str) -> String {
    if value.is_empty() {
        "N/A".to_string()
    } else {
        value.to_string()
    }
}

impl Render for Appointment {
    fn row(&self) -> DisplayRow {
        let title = if self.patient_name.is_empty() {
            "Unknown Patient".to_string()
        } else {
            self.patient_name.clone()
        };

        let mut details = vec![
            format!("Time: {}", self.date_time.strftime("%Y-%m-%d %H:%M")),
            format!("Type: {}", self.appointment_type.label()),
        ];
        if !self.notes.is_empty() {
            details.push(format!("Notes: {}", self.notes));
        }

        DisplayRow {
            id: self.id.clone(),
            title,
            subtitle: format!("Doctor: {}", or_na(&self.doctor_name)),
            badge: self.status.to_string(),
            details,
            actions: self.status.next_actions().to_vec(),
            pending: false,
        }
    }
}

impl Render for Patient {
    fn row(&self) -> DisplayRow {
        let info = &self.personal_info;
        let last_visit = info
            .last_visit
            .map(|d| d.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        let age = if info.age == 0 {
            "N/A".to_string()
        } else {
            info.age.to_string()
        };

        DisplayRow {
            id: self.id.clone(),
            title: self.full_name().trim().to_string(),
            subtitle: format!("ID: {}", self.id),
            badge: or_na(&info.blood_type),
            details: vec![
                format!("Age: {age}"),
                format!("Last Visit: {last_visit}"),
                format!("Phone: {}", or_na(&info.phone)),
            ],
            actions: Vec::new(),
            pending: false,
        }
    }
}

impl Render for Prescription {
    fn row(&self) -> DisplayRow {
        let medications = if self.medications.is_empty() {
            "No medications listed".to_string()
        } else {
            self.medications.join(", ")
        };

        let mut details = vec![
            format!("Issued: {}", self.date_issued.strftime("%b %-d, %Y")),
            format!("Medications: {medications}"),
        ];
        if !self.duration.is_empty() {
            details.push(format!("Duration: {}", self.duration));
        }
        if !self.dosage.is_empty() {
            details.push(format!("Dosage: {}", self.dosage));
        }

        DisplayRow {
            id: self.id.clone(),
            title: or_na(&self.patient_name),
            subtitle: or_na(&self.doctor_name),
            badge: self.status.to_string(),
            details,
            actions: Vec::new(),
            pending: false,
        }
    }
}

/// What the active tab shows, in precedence order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TabView {
    Loading { message: String },
    Failed { message: String },
    Empty { message: String, action: Option<String> },
    Rows { rows: Vec<DisplayRow> },
}

/// Filtered rows for the active collection.
pub fn visible_rows(state: &DashboardState) -> Vec<DisplayRow> {
    match state.active_tab() {
        Collection::Appointments => rows_for::<Appointment>(state),
        Collection::Patients => rows_for::<Patient>(state),
        Collection::Prescriptions => rows_for::<Prescription>(state),
    }
}

fn rows_for<R: TabRecord>(state: &DashboardState) -> Vec<DisplayRow> {
    R::slot(state)
        .derive(state.filters())
        .into_iter()
        .map(|entry| {
            let mut row = entry.record.row();
            if entry.is_pending() {
                row.pending = true;
                row.actions.clear();
            }
            row
        })
        .collect()
}

pub fn tab_view(state: &DashboardState) -> TabView {
    let tab = state.active_tab();
    if state.is_loading() {
        return TabView::Loading {
            message: tabs::loading_message(tab),
        };
    }
    if let Some(error) = state.error() {
        return TabView::Failed {
            message: format!("Error: {error}"),
        };
    }

    let rows = visible_rows(state);
    if rows.is_empty() {
        return TabView::Empty {
            message: tabs::empty_message(tab),
            action: tabs::spec(tab).empty_action.map(str::to_string),
        };
    }
    TabView::Rows { rows }
}

/// Header counters, computed from whatever has been loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QuickStats {
    pub todays_appointments: usize,
    pub in_progress: usize,
    pub scheduled: usize,
    pub active_prescriptions: usize,
}

pub fn quick_stats(state: &DashboardState) -> QuickStats {
    let today = state.today();
    let mut stats = QuickStats::default();
    for appointment in state.appointments.records() {
        if appointment.date_time.date() == today {
            stats.todays_appointments += 1;
        }
        match appointment.status {
            AppointmentStatus::InProgress => stats.in_progress += 1,
            AppointmentStatus::Scheduled => stats.scheduled += 1,
            _ => {}
        }
    }
    stats.active_prescriptions = state
        .prescriptions
        .records()
        .filter(|p| p.status == PrescriptionStatus::Active)
        .count();
    stats
}
