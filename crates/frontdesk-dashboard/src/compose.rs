use frontdesk_core::CoreError;
use frontdesk_core::models::appointment::{AppointmentDraft, AppointmentType};
use jiff::civil::{Date, Time};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DOCTOR: &str = "Dr. Sarah Johnson";
pub const DEFAULT_TIME: &str = "09:00";

/// The "schedule new appointment" form, as raw user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentForm {
    pub patient_name: String,
    pub doctor_name: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`, 24-hour
    pub time: String,
    pub appointment_type: AppointmentType,
    pub notes: String,
}

impl AppointmentForm {
    /// A blank form for `today`.
    pub fn blank(today: Date, doctor: &str) -> Self {
        Self {
            patient_name: String::new(),
            doctor_name: doctor.to_string(),
            date: today.to_string(),
            time: DEFAULT_TIME.to_string(),
            appointment_type: AppointmentType::default(),
            notes: String::new(),
        }
    }

    /// Combine date and time into a draft.
    ///
    /// Only the date/time shape is checked here; required fields are checked
    /// by the mutator before anything is sent.
    pub fn to_draft(&self) -> Result<AppointmentDraft, CoreError> {
        let date: Date = self
            .date
            .trim()
            .parse()
            .map_err(|e| CoreError::InvalidDateTime(format!("date {:?}: {e}", self.date)))?;
        let time = Time::strptime("%H:%M", self.time.trim())
            .map_err(|e| CoreError::InvalidDateTime(format!("time {:?}: {e}", self.time)))?;

        Ok(AppointmentDraft {
            patient_name: self.patient_name.trim().to_string(),
            doctor_name: self.doctor_name.trim().to_string(),
            date_time: date.to_datetime(time),
            appointment_type: self.appointment_type,
            notes: self.notes.clone(),
        })
    }
}
