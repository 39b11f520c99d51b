//! Synchronous dashboard state and its transitions.
//!
//! Nothing here awaits. The async driver takes the lock, calls a `begin_*`
//! method, releases the lock for the transport call, then takes it again to
//! `finish_*`. Two tokens keep late completions honest:
//!
//! - every load carries the sequence number issued for it; only the most
//!   recently issued load may touch state when it completes.
//! - every optimistic create carries a correlation token; the confirmed
//!   record replaces the pending entry holding that token.

use frontdesk_core::models::appointment::{Appointment, AppointmentDraft, AppointmentPatch, AppointmentStatus};
use frontdesk_core::models::patient::Patient;
use frontdesk_core::models::prescription::Prescription;
use frontdesk_core::{Collection, CoreError, FilterSet, Record, RecordId};
use frontdesk_storage::RecordClient;
use jiff::civil::Date;
use std::sync::Arc;
use uuid::Uuid;

use crate::clients::Clients;
use crate::compose::AppointmentForm;
use crate::view::Render;

/// One local copy of a record. `correlation` is set while the store has not
/// yet confirmed an optimistic create.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<R> {
    pub record: R,
    pub correlation: Option<Uuid>,
}

impl<R> Entry<R> {
    pub fn is_pending(&self) -> bool {
        self.correlation.is_some()
    }
}

/// How a confirmed create landed in local state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// The pending entry was swapped for the canonical record.
    Replaced,
    /// The pending entry was gone (a reload replaced the list); the record was prepended.
    Prepended,
    /// The reload already brought the record in.
    AlreadyPresent,
}

#[derive(Debug, Clone)]
pub struct CollectionState<R> {
    entries: Vec<Entry<R>>,
    loaded: bool,
}

impl<R> Default for CollectionState<R> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            loaded: false,
        }
    }
}

impl<R: Record> CollectionState<R> {
    pub fn entries(&self) -> &[Entry<R>] {
        &self.entries
    }

    pub fn records(&self) -> impl Iterator<Item = &R> {
        self.entries.iter().map(|e| &e.record)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a load has ever been applied.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn find(&self, id: &RecordId) -> Option<&Entry<R>> {
        self.entries.iter().find(|e| e.record.id() == id)
    }

    /// Replace the whole list with a fresh snapshot.
    pub fn replace_all(&mut self, records: Vec<R>) {
        self.entries = records
            .into_iter()
            .map(|record| Entry {
                record,
                correlation: None,
            })
            .collect();
        self.loaded = true;
    }

    /// Merge `patch` into the record with this id. False if absent.
    pub fn patch(&mut self, id: &RecordId, patch: &R::Patch) -> bool {
        match self.entries.iter_mut().find(|e| e.record.id() == id) {
            Some(entry) => {
                entry.record.apply_patch(patch);
                true
            }
            None => false,
        }
    }

    pub fn push_pending(&mut self, token: Uuid, record: R) {
        self.entries.insert(
            0,
            Entry {
                record,
                correlation: Some(token),
            },
        );
    }

    pub fn confirm(&mut self, token: Uuid, record: R) -> Confirmation {
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| e.correlation == Some(token))
        {
            *entry = Entry {
                record,
                correlation: None,
            };
            return Confirmation::Replaced;
        }
        if self.find(record.id()).is_some() {
            return Confirmation::AlreadyPresent;
        }
        self.entries.insert(
            0,
            Entry {
                record,
                correlation: None,
            },
        );
        Confirmation::Prepended
    }

    /// Drop the pending entry for `token`. False if it was already gone.
    pub fn discard(&mut self, token: Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.correlation != Some(token));
        self.entries.len() != before
    }

    /// Entries passing `filters`, in list order.
    pub fn derive(&self, filters: &FilterSet) -> Vec<&Entry<R>> {
        self.entries
            .iter()
            .filter(|e| e.record.matches(filters))
            .collect()
    }
}

/// Dispatch from a record type to its tab's slot and transport client.
pub trait TabRecord: Record + Render {
    fn slot(state: &DashboardState) -> &CollectionState<Self>;
    fn slot_mut(state: &mut DashboardState) -> &mut CollectionState<Self>;
    fn client(clients: &Clients) -> &Arc<dyn RecordClient<Self>>;
}

impl TabRecord for Appointment {
    fn slot(state: &DashboardState) -> &CollectionState<Self> {
        &state.appointments
    }
    fn slot_mut(state: &mut DashboardState) -> &mut CollectionState<Self> {
        &mut state.appointments
    }
    fn client(clients: &Clients) -> &Arc<dyn RecordClient<Self>> {
        &clients.appointments
    }
}

impl TabRecord for Patient {
    fn slot(state: &DashboardState) -> &CollectionState<Self> {
        &state.patients
    }
    fn slot_mut(state: &mut DashboardState) -> &mut CollectionState<Self> {
        &mut state.patients
    }
    fn client(clients: &Clients) -> &Arc<dyn RecordClient<Self>> {
        &clients.patients
    }
}

impl TabRecord for Prescription {
    fn slot(state: &DashboardState) -> &CollectionState<Self> {
        &state.prescriptions
    }
    fn slot_mut(state: &mut DashboardState) -> &mut CollectionState<Self> {
        &mut state.prescriptions
    }
    fn client(clients: &Clients) -> &Arc<dyn RecordClient<Self>> {
        &clients.prescriptions
    }
}

/// Issued by [`DashboardState::begin_load`], handed back on completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub seq: u64,
    pub tab: Collection,
    /// Filters in effect when the load was issued.
    pub filters: FilterSet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied { tab: Collection, count: usize },
    Failed { tab: Collection, message: String },
    /// A newer load was issued; this result was dropped.
    Superseded { tab: Collection, seq: u64 },
}

#[derive(Debug, Clone)]
pub struct DashboardState {
    active_tab: Collection,
    filters: FilterSet,
    loading: bool,
    error: Option<String>,
    issued_seq: u64,
    today: Date,
    default_doctor: String,
    compose: AppointmentForm,
    compose_open: bool,
    pub appointments: CollectionState<Appointment>,
    pub patients: CollectionState<Patient>,
    pub prescriptions: CollectionState<Prescription>,
}

impl DashboardState {
    /// Opens on the appointments tab, filtered to `today`.
    pub fn new(today: Date, default_doctor: impl Into<String>) -> Self {
        let default_doctor = default_doctor.into();
        Self {
            active_tab: Collection::Appointments,
            filters: FilterSet::for_day(today),
            loading: false,
            error: None,
            issued_seq: 0,
            today,
            compose: AppointmentForm::blank(today, &default_doctor),
            default_doctor,
            compose_open: false,
            appointments: CollectionState::default(),
            patients: CollectionState::default(),
            prescriptions: CollectionState::default(),
        }
    }

    pub fn active_tab(&self) -> Collection {
        self.active_tab
    }

    pub fn set_active_tab(&mut self, tab: Collection) {
        self.active_tab = tab;
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut FilterSet {
        &mut self.filters
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn today(&self) -> Date {
        self.today
    }

    /// Sequence number of the most recently issued load; 0 before the first.
    pub fn issued_seq(&self) -> u64 {
        self.issued_seq
    }

    /// Switch to `tab` and issue its load in one step, so the ticket is
    /// always scoped to the tab that was selected.
    pub fn begin_load_for(&mut self, tab: Collection) -> LoadTicket {
        self.active_tab = tab;
        self.begin_load()
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued_seq += 1;
        self.loading = true;
        self.error = None;
        LoadTicket {
            seq: self.issued_seq,
            tab: self.active_tab,
            filters: self.filters.clone(),
        }
    }

    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.seq == self.issued_seq
    }

    /// Apply a completed load. Failure keeps the previous list visible.
    pub fn finish_load<R: TabRecord>(
        &mut self,
        ticket: &LoadTicket,
        result: Result<Vec<R>, String>,
    ) -> LoadOutcome {
        debug_assert_eq!(ticket.tab, R::COLLECTION);
        if !self.is_current(ticket) {
            return LoadOutcome::Superseded {
                tab: ticket.tab,
                seq: ticket.seq,
            };
        }

        self.loading = false;
        match result {
            Ok(records) => {
                let count = records.len();
                R::slot_mut(self).replace_all(records);
                LoadOutcome::Applied {
                    tab: ticket.tab,
                    count,
                }
            }
            Err(message) => {
                self.error = Some(message.clone());
                LoadOutcome::Failed {
                    tab: ticket.tab,
                    message,
                }
            }
        }
    }

    /// Validate `draft` and show it at the top of the list as pending.
    /// Returns the correlation token for [`Self::confirm_create`].
    pub fn begin_create(&mut self, draft: &AppointmentDraft) -> Result<Uuid, CoreError> {
        draft.validate()?;
        let token = Uuid::new_v4();
        let record = Appointment::from_draft(RecordId::provisional(token), draft.clone());
        self.appointments.push_pending(token, record);
        Ok(token)
    }

    /// The store accepted the create: swap in its canonical record, then
    /// reset and close the compose form.
    pub fn confirm_create(&mut self, token: Uuid, record: Appointment) -> Confirmation {
        let confirmation = self.appointments.confirm(token, record);
        self.reset_compose();
        self.compose_open = false;
        confirmation
    }

    pub fn abandon_create(&mut self, token: Uuid) -> bool {
        self.appointments.discard(token)
    }

    /// Check that `next` is reachable from the local copy's status.
    ///
    /// An id that is not loaded locally passes; the store decides.
    pub fn check_transition(
        &self,
        id: &RecordId,
        next: AppointmentStatus,
    ) -> Result<Option<AppointmentStatus>, TransitionCheck> {
        match self.appointments.find(id) {
            Some(entry) if entry.is_pending() => Err(TransitionCheck::Pending),
            Some(entry) => entry
                .record
                .status
                .transition_to(next)
                .map(|_| Some(entry.record.status))
                .map_err(TransitionCheck::Invalid),
            None => Ok(None),
        }
    }

    /// Patch only the status of the local copy. False if not loaded.
    pub fn apply_status(&mut self, id: &RecordId, status: AppointmentStatus) -> bool {
        self.appointments.patch(id, &AppointmentPatch::status(status))
    }

    pub fn compose(&self) -> &AppointmentForm {
        &self.compose
    }

    pub fn compose_mut(&mut self) -> &mut AppointmentForm {
        &mut self.compose
    }

    pub fn is_compose_open(&self) -> bool {
        self.compose_open
    }

    pub fn set_compose_open(&mut self, open: bool) {
        self.compose_open = open;
    }

    pub fn reset_compose(&mut self) {
        self.compose = AppointmentForm::blank(self.today, &self.default_doctor);
    }
}

/// Why a status change was refused locally.
#[derive(Debug)]
pub enum TransitionCheck {
    Invalid(CoreError),
    Pending,
}
