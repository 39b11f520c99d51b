//! Read-time filter set and the shared matching helpers.
//!
//! Each collection's predicate lives on its `Record` impl; this module only
//! holds what they share.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::appointment::AppointmentStatus;
use crate::record::Record;

/// Active filters. Empty search, `status: None` ("all") and `date: None`
/// always pass. Status and date only constrain appointments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FilterSet {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: Option<AppointmentStatus>,
    #[serde(default)]
    pub date: Option<jiff::civil::Date>,
}

impl FilterSet {
    /// Filters the appointments view opens with: everything on `today`.
    pub fn for_day(today: jiff::civil::Date) -> Self {
        Self {
            date: Some(today),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.status.is_none() && self.date.is_none()
    }
}

/// Case-insensitive substring test. An empty needle always matches.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Apply `filters` to `records`, preserving order.
pub fn filter_records<'a, R: Record>(records: &'a [R], filters: &FilterSet) -> Vec<&'a R> {
    records.iter().filter(|r| r.matches(filters)).collect()
}
