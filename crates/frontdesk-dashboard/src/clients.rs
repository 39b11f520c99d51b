use std::sync::Arc;

use frontdesk_core::models::appointment::Appointment;
use frontdesk_core::models::patient::Patient;
use frontdesk_core::models::prescription::Prescription;
use frontdesk_storage::{Latency, MemoryStore, RecordClient, StorageError};

/// One transport client per collection.
#[derive(Clone)]
pub struct Clients {
    pub appointments: Arc<dyn RecordClient<Appointment>>,
    pub patients: Arc<dyn RecordClient<Patient>>,
    pub prescriptions: Arc<dyn RecordClient<Prescription>>,
}

impl Clients {
    pub fn new(
        appointments: Arc<dyn RecordClient<Appointment>>,
        patients: Arc<dyn RecordClient<Patient>>,
        prescriptions: Arc<dyn RecordClient<Prescription>>,
    ) -> Self {
        Self {
            appointments,
            patients,
            prescriptions,
        }
    }

    /// In-memory stores holding the sample data. `latency_scale` multiplies
    /// the default artificial delays; 0 disables them.
    pub fn sample(latency_scale: f64) -> Result<Self, StorageError> {
        fn store<R: frontdesk_core::Record>(scale: f64) -> Result<MemoryStore<R>, StorageError> {
            let latency = Latency::for_collection(R::COLLECTION).scaled(scale);
            Ok(MemoryStore::<R>::seeded()?.with_latency(latency))
        }

        Ok(Self::new(
            Arc::new(store::<Appointment>(latency_scale)?),
            Arc::new(store::<Patient>(latency_scale)?),
            Arc::new(store::<Prescription>(latency_scale)?),
        ))
    }
}
