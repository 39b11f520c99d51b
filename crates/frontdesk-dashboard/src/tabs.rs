//! Tab registry.
//!
//! One tab per collection. Everything tab-specific the view needs is data
//! here; fetching, filtering and row rendering dispatch through
//! [`crate::state::TabRecord`].

use frontdesk_core::Collection;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TabSpec {
    pub tab: Collection,
    pub label: &'static str,
    pub icon: &'static str,
    pub search_placeholder: &'static str,
    /// Call to action shown when the tab has nothing to list.
    pub empty_action: Option<&'static str>,
    pub supports_compose: bool,
    pub supports_status_filter: bool,
    pub supports_date_filter: bool,
}

const TABS: [TabSpec; 3] = [
    TabSpec {
        tab: Collection::Appointments,
        label: "Appointments",
        icon: "Calendar",
        search_placeholder: "Search appointments...",
        empty_action: Some("Schedule First Appointment"),
        supports_compose: true,
        supports_status_filter: true,
        supports_date_filter: true,
    },
    TabSpec {
        tab: Collection::Patients,
        label: "Patient Search",
        icon: "Search",
        search_placeholder: "Search patients...",
        empty_action: None,
        supports_compose: false,
        supports_status_filter: false,
        supports_date_filter: false,
    },
    TabSpec {
        tab: Collection::Prescriptions,
        label: "Prescriptions",
        icon: "Pill",
        search_placeholder: "Search prescriptions...",
        empty_action: None,
        supports_compose: false,
        supports_status_filter: false,
        supports_date_filter: false,
    },
];

pub fn tabs() -> &'static [TabSpec] {
    &TABS
}

pub fn spec(tab: Collection) -> &'static TabSpec {
    match tab {
        Collection::Appointments => &TABS[0],
        Collection::Patients => &TABS[1],
        Collection::Prescriptions => &TABS[2],
    }
}

pub fn loading_message(tab: Collection) -> String {
    format!("Loading {tab}...")
}

pub fn empty_message(tab: Collection) -> String {
    format!("No {tab} found")
}

pub fn load_failed_message(tab: Collection) -> String {
    format!("Failed to load {tab}")
}
