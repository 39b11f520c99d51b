use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;
use crate::filter::FilterSet;

/// Opaque record identifier. Unique within one collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// A fresh store-assigned identifier. UUID v7, so ids generated later
    /// sort after earlier ones.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Placeholder id for a record the store has not confirmed yet.
    pub fn provisional(token: Uuid) -> Self {
        Self(format!("pending-{token}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The three record collections. One dashboard tab per collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Collection {
    Appointments,
    Patients,
    Prescriptions,
}

impl Collection {
    pub const ALL: [Collection; 3] = [
        Collection::Appointments,
        Collection::Patients,
        Collection::Prescriptions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Appointments => "appointments",
            Collection::Patients => "patients",
            Collection::Prescriptions => "prescriptions",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "appointments" => Ok(Collection::Appointments),
            "patients" => Ok(Collection::Patients),
            "prescriptions" => Ok(Collection::Prescriptions),
            other => Err(CoreError::InvalidCollection(other.to_string())),
        }
    }
}

/// Contract shared by every collection's entity type.
///
/// `Draft` carries the fields supplied at create time (the store assigns the
/// id). `Patch` is a partial update where `None` leaves a field unchanged.
pub trait Record: Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    type Draft: Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static;
    type Patch: Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static;

    const COLLECTION: Collection;

    fn id(&self) -> &RecordId;

    /// Build the full record from a draft once an id is known.
    fn from_draft(id: RecordId, draft: Self::Draft) -> Self;

    /// Merge the fields present in `patch` into `self`.
    fn apply_patch(&mut self, patch: &Self::Patch);

    /// Reject a patch the record's current state does not allow. Stores call
    /// this before [`Record::apply_patch`].
    fn check_patch(&self, _patch: &Self::Patch) -> Result<(), CoreError> {
        Ok(())
    }

    /// Read-time search/filter predicate. Order-independent, pure.
    fn matches(&self, filters: &FilterSet) -> bool;
}
