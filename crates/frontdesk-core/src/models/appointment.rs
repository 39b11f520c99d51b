use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::filter::{FilterSet, contains_ci};
use crate::record::{Collection, Record, RecordId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Appointment {
    pub id: RecordId,
    pub patient_name: String,
    pub doctor_name: String,
    pub date_time: jiff::civil::DateTime,
    pub appointment_type: AppointmentType,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum AppointmentType {
    #[default]
    Consultation,
    FollowUp,
    Emergency,
    #[serde(alias = "check-up")]
    Routine,
}

impl AppointmentType {
    pub const ALL: [AppointmentType; 4] = [
        AppointmentType::Consultation,
        AppointmentType::FollowUp,
        AppointmentType::Emergency,
        AppointmentType::Routine,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentType::Consultation => "consultation",
            AppointmentType::FollowUp => "follow-up",
            AppointmentType::Emergency => "emergency",
            AppointmentType::Routine => "routine",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppointmentType::Consultation => "Consultation",
            AppointmentType::FollowUp => "Follow-up",
            AppointmentType::Emergency => "Emergency",
            AppointmentType::Routine => "Routine Check",
        }
    }
}

impl fmt::Display for AppointmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "consultation" => Ok(AppointmentType::Consultation),
            "follow-up" => Ok(AppointmentType::FollowUp),
            "emergency" => Ok(AppointmentType::Emergency),
            "routine" | "check-up" => Ok(AppointmentType::Routine),
            other => Err(CoreError::InvalidAppointmentType(other.to_string())),
        }
    }
}

/// Appointment lifecycle.
///
/// `Scheduled` moves to `InProgress` or `Cancelled`; `InProgress` moves to
/// `Completed`. `Completed` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

/// A user-facing transition offered for an appointment in a given status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusAction {
    pub label: &'static str,
    pub target: AppointmentStatus,
}

const SCHEDULED_ACTIONS: &[StatusAction] = &[
    StatusAction {
        label: "Start",
        target: AppointmentStatus::InProgress,
    },
    StatusAction {
        label: "Cancel",
        target: AppointmentStatus::Cancelled,
    },
];

const IN_PROGRESS_ACTIONS: &[StatusAction] = &[StatusAction {
    label: "Complete",
    target: AppointmentStatus::Completed,
}];

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 4] = [
        AppointmentStatus::Scheduled,
        AppointmentStatus::InProgress,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::InProgress => "in-progress",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "Scheduled",
            AppointmentStatus::InProgress => "In Progress",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, AppointmentStatus::Completed | AppointmentStatus::Cancelled)
    }

    pub fn next_actions(&self) -> &'static [StatusAction] {
        match self {
            AppointmentStatus::Scheduled => SCHEDULED_ACTIONS,
            AppointmentStatus::InProgress => IN_PROGRESS_ACTIONS,
            AppointmentStatus::Completed | AppointmentStatus::Cancelled => &[],
        }
    }

    pub fn can_transition_to(&self, next: AppointmentStatus) -> bool {
        self.next_actions().iter().any(|a| a.target == next)
    }

    /// Check a transition, returning the error the mutator surfaces.
    pub fn transition_to(&self, next: AppointmentStatus) -> Result<AppointmentStatus, CoreError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(CoreError::InvalidTransition {
                from: *self,
                to: next,
            })
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AppointmentStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CoreError::InvalidStatus(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AppointmentDraft {
    pub patient_name: String,
    pub doctor_name: String,
    pub date_time: jiff::civil::DateTime,
    #[serde(default)]
    pub appointment_type: AppointmentType,
    #[serde(default)]
    pub notes: String,
}

impl AppointmentDraft {
    /// Required-field check. Blank (whitespace-only) counts as missing.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.patient_name.trim().is_empty() {
            return Err(CoreError::MissingField("Patient name".to_string()));
        }
        if self.doctor_name.trim().is_empty() {
            return Err(CoreError::MissingField("Doctor name".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AppointmentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AppointmentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<jiff::civil::DateTime>,
}

impl AppointmentPatch {
    pub fn status(status: AppointmentStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

impl Record for Appointment {
    type Draft = AppointmentDraft;
    type Patch = AppointmentPatch;

    const COLLECTION: Collection = Collection::Appointments;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, draft: AppointmentDraft) -> Self {
        Self {
            id,
            patient_name: draft.patient_name,
            doctor_name: draft.doctor_name,
            date_time: draft.date_time,
            appointment_type: draft.appointment_type,
            // Every appointment starts its lifecycle as scheduled.
            status: AppointmentStatus::Scheduled,
            notes: draft.notes,
        }
    }

    fn apply_patch(&mut self, patch: &AppointmentPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(notes) = &patch.notes {
            self.notes = notes.clone();
        }
        if let Some(date_time) = patch.date_time {
            self.date_time = date_time;
        }
    }

    /// A status in the patch must be reachable from the current one.
    /// Repeating the current status is accepted.
    fn check_patch(&self, patch: &AppointmentPatch) -> Result<(), CoreError> {
        match patch.status {
            Some(next) if next != self.status => self.status.transition_to(next).map(|_| ()),
            _ => Ok(()),
        }
    }

    fn matches(&self, filters: &FilterSet) -> bool {
        let search = contains_ci(&self.patient_name, &filters.search)
            || contains_ci(&self.doctor_name, &filters.search);
        let status = filters.status.is_none_or(|s| s == self.status);
        // Same calendar day, i.e. the date is a prefix of the date-time.
        let date = filters.date.is_none_or(|d| self.date_time.date() == d);
        search && status && date
    }
}
