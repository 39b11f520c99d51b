//! Bundled sample data for the in-memory store.

use frontdesk_core::{Collection, Record};

use crate::error::StorageError;

const APPOINTMENTS: &str = include_str!("../seed/appointments.json");
const PATIENTS: &str = include_str!("../seed/patients.json");
const PRESCRIPTIONS: &str = include_str!("../seed/prescriptions.json");

/// Parse the sample records for `R`'s collection.
pub fn load<R: Record>() -> Result<Vec<R>, StorageError> {
    let raw = match R::COLLECTION {
        Collection::Appointments => APPOINTMENTS,
        Collection::Patients => PATIENTS,
        Collection::Prescriptions => PRESCRIPTIONS,
    };
    Ok(serde_json::from_str(raw)?)
}
