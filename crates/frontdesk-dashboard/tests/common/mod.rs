#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use frontdesk_core::models::appointment::{Appointment, AppointmentDraft, AppointmentType};
use frontdesk_core::models::patient::Patient;
use frontdesk_core::models::prescription::Prescription;
use frontdesk_core::{FilterSet, Record, RecordId};
use frontdesk_dashboard::{Clients, Dashboard, DashboardConfig, MemoryNotifier};
use frontdesk_storage::{BoxFuture, Latency, MemoryStore, RecordClient, StorageError};
use jiff::civil::{Date, date};

pub const TODAY: Date = date(2024, 3, 15);

/// How the next scripted call behaves. Unscripted calls run immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct Step {
    pub delay: Duration,
    pub fail: bool,
}

impl Step {
    pub fn slow(ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(ms),
            fail: false,
        }
    }

    pub fn fail() -> Self {
        Self {
            delay: Duration::ZERO,
            fail: true,
        }
    }

    pub fn slow_fail(ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(ms),
            fail: true,
        }
    }
}

/// Seeded in-memory store that counts calls and plays back a script of
/// delays and failures.
pub struct ScriptedClient<R: Record> {
    inner: MemoryStore<R>,
    script: Mutex<VecDeque<Step>>,
    pub list_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub update_calls: AtomicUsize,
    pub last_filters: Mutex<Option<Option<FilterSet>>>,
}

impl<R: Record> ScriptedClient<R> {
    pub fn seeded() -> Self {
        Self {
            inner: MemoryStore::<R>::seeded().unwrap().with_latency(Latency::NONE),
            script: Mutex::new(VecDeque::new()),
            list_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
            last_filters: Mutex::new(None),
        }
    }

    pub fn push(&self, step: Step) {
        self.script.lock().unwrap().push_back(step);
    }

    pub fn lists(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn creates(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn updates(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub async fn stored(&self) -> Vec<R> {
        self.inner.snapshot().await
    }

    async fn play(&self) -> Result<(), StorageError> {
        let step = self.script.lock().unwrap().pop_front().unwrap_or_default();
        if !step.delay.is_zero() {
            tokio::time::sleep(step.delay).await;
        }
        if step.fail {
            return Err(StorageError::Transport("connection reset".to_string()));
        }
        Ok(())
    }
}

impl<R: Record> RecordClient<R> for ScriptedClient<R> {
    fn get_all(&self, filters: Option<FilterSet>) -> BoxFuture<'_, Result<Vec<R>, StorageError>> {
        Box::pin(async move {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            *self.last_filters.lock().unwrap() = Some(filters.clone());
            self.play().await?;
            self.inner.get_all(filters).await
        })
    }

    fn get_by_id(&self, id: RecordId) -> BoxFuture<'_, Result<Option<R>, StorageError>> {
        Box::pin(async move {
            self.play().await?;
            self.inner.get_by_id(id).await
        })
    }

    fn create(&self, draft: R::Draft) -> BoxFuture<'_, Result<R, StorageError>> {
        Box::pin(async move {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            self.play().await?;
            self.inner.create(draft).await
        })
    }

    fn update(&self, id: RecordId, patch: R::Patch) -> BoxFuture<'_, Result<R, StorageError>> {
        Box::pin(async move {
            self.update_calls.fetch_add(1, Ordering::SeqCst);
            self.play().await?;
            self.inner.update(id, patch).await
        })
    }

    fn delete(&self, ids: Vec<RecordId>) -> BoxFuture<'_, Result<bool, StorageError>> {
        Box::pin(async move {
            self.play().await?;
            self.inner.delete(ids).await
        })
    }
}

pub struct Harness {
    pub dashboard: Dashboard,
    pub notifier: Arc<MemoryNotifier>,
    pub appointments: Arc<ScriptedClient<Appointment>>,
    pub patients: Arc<ScriptedClient<Patient>>,
    pub prescriptions: Arc<ScriptedClient<Prescription>>,
}

pub fn config() -> DashboardConfig {
    DashboardConfig {
        today: TODAY,
        ..DashboardConfig::default()
    }
}

pub fn harness() -> Harness {
    harness_with(config())
}

pub fn harness_with(config: DashboardConfig) -> Harness {
    let appointments = Arc::new(ScriptedClient::<Appointment>::seeded());
    let patients = Arc::new(ScriptedClient::<Patient>::seeded());
    let prescriptions = Arc::new(ScriptedClient::<Prescription>::seeded());
    let notifier = Arc::new(MemoryNotifier::default());

    let clients = Clients::new(appointments.clone(), patients.clone(), prescriptions.clone());
    let dashboard = Dashboard::new(clients, notifier.clone(), config);

    Harness {
        dashboard,
        notifier,
        appointments,
        patients,
        prescriptions,
    }
}

pub fn draft(patient: &str) -> AppointmentDraft {
    AppointmentDraft {
        patient_name: patient.to_string(),
        doctor_name: "Dr. Michael Chen".to_string(),
        date_time: TODAY.at(16, 30, 0, 0),
        appointment_type: AppointmentType::FollowUp,
        notes: "Walk-in".to_string(),
    }
}

/// Ids of the loaded appointments, in list order.
pub async fn appointment_ids(dashboard: &Dashboard) -> Vec<String> {
    dashboard
        .inspect(|s| s.appointments.records().map(|a| a.id.to_string()).collect())
        .await
}
