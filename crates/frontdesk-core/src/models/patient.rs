use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::filter::FilterSet;
use crate::record::{Collection, Record, RecordId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Patient {
    pub id: RecordId,
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub medical_history: Vec<String>,
    /// Historical appointment ids. Not resolved against the appointments collection.
    #[serde(default)]
    pub appointments: Vec<RecordId>,
    #[serde(default)]
    pub prescriptions: Vec<RecordId>,
    #[serde(default)]
    pub insurance_info: Option<InsuranceInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub blood_type: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub last_visit: Option<jiff::civil::Date>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InsuranceInfo {
    pub provider: String,
    pub policy_number: String,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.personal_info.first_name, self.personal_info.last_name
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientDraft {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub blood_type: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub medical_history: Vec<String>,
    #[serde(default)]
    pub insurance_info: Option<InsuranceInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_info: Option<PersonalInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_history: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance_info: Option<InsuranceInfo>,
}

impl Record for Patient {
    type Draft = PatientDraft;
    type Patch = PatientPatch;

    const COLLECTION: Collection = Collection::Patients;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, draft: PatientDraft) -> Self {
        Self {
            id,
            personal_info: PersonalInfo {
                first_name: draft.first_name,
                last_name: draft.last_name,
                age: draft.age,
                blood_type: draft.blood_type,
                phone: draft.phone,
                email: draft.email,
                address: draft.address,
                last_visit: Some(jiff::Zoned::now().date()),
            },
            medical_history: draft.medical_history,
            appointments: Vec::new(),
            prescriptions: Vec::new(),
            insurance_info: draft.insurance_info,
        }
    }

    fn apply_patch(&mut self, patch: &PatientPatch) {
        if let Some(info) = &patch.personal_info {
            self.personal_info = info.clone();
        }
        if let Some(history) = &patch.medical_history {
            self.medical_history = history.clone();
        }
        if let Some(insurance) = &patch.insurance_info {
            self.insurance_info = Some(insurance.clone());
        }
    }

    /// Name and id match case-insensitively; phone is a raw substring match.
    fn matches(&self, filters: &FilterSet) -> bool {
        let needle = filters.search.to_lowercase();
        self.full_name().to_lowercase().contains(&needle)
            || self.id.as_str().to_lowercase().contains(&needle)
            || self.personal_info.phone.contains(&filters.search)
    }
}
