use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::filter::{FilterSet, contains_ci};
use crate::record::{Collection, Record, RecordId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Prescription {
    pub id: RecordId,
    pub patient_name: String,
    pub doctor_name: String,
    #[serde(default)]
    pub medications: Vec<String>,
    #[serde(default)]
    pub dosage: String,
    #[serde(default)]
    pub duration: String,
    pub date_issued: jiff::Timestamp,
    pub status: PrescriptionStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum PrescriptionStatus {
    #[default]
    Active,
    Inactive,
    Renewed,
    Expired,
}

impl PrescriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrescriptionStatus::Active => "active",
            PrescriptionStatus::Inactive => "inactive",
            PrescriptionStatus::Renewed => "renewed",
            PrescriptionStatus::Expired => "expired",
        }
    }
}

impl fmt::Display for PrescriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrescriptionStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(PrescriptionStatus::Active),
            "inactive" => Ok(PrescriptionStatus::Inactive),
            "renewed" => Ok(PrescriptionStatus::Renewed),
            "expired" => Ok(PrescriptionStatus::Expired),
            _ => Err(CoreError::InvalidStatus(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PrescriptionDraft {
    pub patient_name: String,
    pub doctor_name: String,
    #[serde(default)]
    pub medications: Vec<String>,
    #[serde(default)]
    pub dosage: String,
    #[serde(default)]
    pub duration: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PrescriptionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PrescriptionStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medications: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

impl Record for Prescription {
    type Draft = PrescriptionDraft;
    type Patch = PrescriptionPatch;

    const COLLECTION: Collection = Collection::Prescriptions;

    fn id(&self) -> &RecordId {
        &self.id
    }

    /// New prescriptions are issued now and start active.
    fn from_draft(id: RecordId, draft: PrescriptionDraft) -> Self {
        Self {
            id,
            patient_name: draft.patient_name,
            doctor_name: draft.doctor_name,
            medications: draft.medications,
            dosage: draft.dosage,
            duration: draft.duration,
            date_issued: jiff::Timestamp::now(),
            status: PrescriptionStatus::Active,
        }
    }

    fn apply_patch(&mut self, patch: &PrescriptionPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(medications) = &patch.medications {
            self.medications = medications.clone();
        }
        if let Some(dosage) = &patch.dosage {
            self.dosage = dosage.clone();
        }
        if let Some(duration) = &patch.duration {
            self.duration = duration.clone();
        }
    }

    fn matches(&self, filters: &FilterSet) -> bool {
        contains_ci(&self.patient_name, &filters.search)
            || contains_ci(&self.doctor_name, &filters.search)
    }
}
