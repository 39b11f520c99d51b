pub mod appointment;
pub mod patient;
pub mod prescription;

pub use appointment::{Appointment, AppointmentDraft, AppointmentPatch, AppointmentStatus, AppointmentType};
pub use patient::{Patient, PatientDraft, PatientPatch, PersonalInfo};
pub use prescription::{Prescription, PrescriptionDraft, PrescriptionPatch, PrescriptionStatus};
