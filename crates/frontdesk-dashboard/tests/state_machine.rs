use frontdesk_core::models::appointment::{Appointment, AppointmentDraft, AppointmentStatus, AppointmentType};
use frontdesk_core::models::patient::Patient;
use frontdesk_core::{Collection, Record, RecordId};
use frontdesk_dashboard::state::{Confirmation, TransitionCheck};
use frontdesk_dashboard::{DashboardState, LoadOutcome};
use jiff::civil::date;

fn state() -> DashboardState {
    DashboardState::new(date(2024, 3, 15), "Dr. Sarah Johnson")
}

fn appointment(id: &str, status: AppointmentStatus) -> Appointment {
    Appointment {
        id: RecordId::from(id),
        patient_name: "John Smith".to_string(),
        doctor_name: "Dr. Sarah Johnson".to_string(),
        date_time: date(2024, 3, 15).at(9, 0, 0, 0),
        appointment_type: AppointmentType::Consultation,
        status,
        notes: String::new(),
    }
}

fn draft() -> AppointmentDraft {
    AppointmentDraft {
        patient_name: "Nora Quinn".to_string(),
        doctor_name: "Dr. Sarah Johnson".to_string(),
        date_time: date(2024, 3, 15).at(11, 0, 0, 0),
        appointment_type: AppointmentType::Emergency,
        notes: String::new(),
    }
}

#[test]
fn opens_on_appointments_filtered_to_today() {
    let s = state();
    assert_eq!(s.active_tab(), Collection::Appointments);
    assert_eq!(s.filters().date, Some(date(2024, 3, 15)));
    assert!(s.filters().search.is_empty());
    assert_eq!(s.filters().status, None);
    assert!(!s.is_loading());
    assert_eq!(s.issued_seq(), 0);
    assert_eq!(s.compose().doctor_name, "Dr. Sarah Johnson");
    assert_eq!(s.compose().date, "2024-03-15");
}

#[test]
fn begin_load_clears_the_error_and_numbers_the_ticket() {
    let mut s = state();
    let first = s.begin_load();
    s.finish_load::<Appointment>(&first, Err("boom".to_string()));
    assert_eq!(s.error(), Some("boom"));

    let second = s.begin_load();
    assert_eq!(second.seq, first.seq + 1);
    assert!(s.is_loading());
    assert_eq!(s.error(), None);
}

#[test]
fn begin_load_for_scopes_the_ticket_to_the_selected_tab() {
    let mut s = state();
    let ticket = s.begin_load_for(Collection::Prescriptions);
    assert_eq!(ticket.tab, Collection::Prescriptions);
    assert_eq!(s.active_tab(), Collection::Prescriptions);
    assert!(s.is_current(&ticket));
}

#[test]
fn stale_ticket_leaves_state_untouched() {
    let mut s = state();
    let stale = s.begin_load();
    s.set_active_tab(Collection::Patients);
    let current = s.begin_load();

    let outcome = s.finish_load::<Appointment>(&stale, Ok(vec![appointment("A001", AppointmentStatus::Scheduled)]));
    assert_eq!(
        outcome,
        LoadOutcome::Superseded {
            tab: Collection::Appointments,
            seq: stale.seq
        }
    );
    assert!(s.is_loading());
    assert!(!s.appointments.is_loaded());

    let outcome = s.finish_load::<Patient>(&current, Ok(Vec::new()));
    assert_eq!(
        outcome,
        LoadOutcome::Applied {
            tab: Collection::Patients,
            count: 0
        }
    );
    assert!(!s.is_loading());
    assert!(s.patients.is_loaded());
}

#[test]
fn failed_load_keeps_the_previous_list() {
    let mut s = state();
    let t = s.begin_load();
    s.finish_load(&t, Ok(vec![appointment("A001", AppointmentStatus::Scheduled)]));

    let t = s.begin_load();
    let outcome = s.finish_load::<Appointment>(&t, Err("offline".to_string()));
    assert!(matches!(outcome, LoadOutcome::Failed { .. }));
    assert_eq!(s.appointments.len(), 1);
    assert!(!s.is_loading());
}

#[test]
fn begin_create_rejects_blank_doctor() {
    let mut s = state();
    let mut d = draft();
    d.doctor_name = String::new();
    let err = s.begin_create(&d).unwrap_err();
    assert_eq!(err.to_string(), "Doctor name is required");
    assert!(s.appointments.is_empty());
}

#[test]
fn confirm_replaces_the_pending_entry_in_place() {
    let mut s = state();
    let t = s.begin_load();
    s.finish_load(&t, Ok(vec![appointment("A001", AppointmentStatus::Scheduled)]));

    let token = s.begin_create(&draft()).unwrap();
    let pending = &s.appointments.entries()[0];
    assert!(pending.is_pending());
    assert_eq!(pending.record.id, RecordId::provisional(token));

    let canonical = Appointment::from_draft(RecordId::from("A100"), draft());
    assert_eq!(s.confirm_create(token, canonical.clone()), Confirmation::Replaced);

    let ids: Vec<_> = s.appointments.records().map(|a| a.id.to_string()).collect();
    assert_eq!(ids, ["A100", "A001"]);
    assert!(s.appointments.entries().iter().all(|e| !e.is_pending()));
}

#[test]
fn confirm_after_reload_prepends_or_skips() {
    let mut s = state();
    let token = s.begin_create(&draft()).unwrap();
    let t = s.begin_load();
    s.finish_load(&t, Ok(vec![appointment("A001", AppointmentStatus::Scheduled)]));

    let canonical = Appointment::from_draft(RecordId::from("A100"), draft());
    assert_eq!(s.confirm_create(token, canonical.clone()), Confirmation::Prepended);
    assert_eq!(s.appointments.len(), 2);

    let token = s.begin_create(&draft()).unwrap();
    let t = s.begin_load();
    s.finish_load(&t, Ok(vec![canonical.clone()]));
    assert_eq!(s.confirm_create(token, canonical), Confirmation::AlreadyPresent);
    assert_eq!(s.appointments.len(), 1);
}

#[test]
fn confirm_resets_and_closes_compose() {
    let mut s = state();
    s.set_compose_open(true);
    s.compose_mut().patient_name = "Nora Quinn".to_string();

    let token = s.begin_create(&draft()).unwrap();
    s.confirm_create(token, Appointment::from_draft(RecordId::from("A100"), draft()));

    assert!(!s.is_compose_open());
    assert!(s.compose().patient_name.is_empty());
}

#[test]
fn abandon_drops_only_its_own_entry() {
    let mut s = state();
    let first = s.begin_create(&draft()).unwrap();
    let second = s.begin_create(&draft()).unwrap();

    assert!(s.abandon_create(first));
    assert!(!s.abandon_create(first));
    assert_eq!(s.appointments.len(), 1);
    assert_eq!(s.appointments.entries()[0].correlation, Some(second));
}

#[test]
fn transitions_follow_the_status_machine() {
    let mut s = state();
    let t = s.begin_load();
    s.finish_load(
        &t,
        Ok(vec![
            appointment("A001", AppointmentStatus::Scheduled),
            appointment("A002", AppointmentStatus::Cancelled),
        ]),
    );

    let a001 = RecordId::from("A001");
    assert_eq!(
        s.check_transition(&a001, AppointmentStatus::InProgress).unwrap(),
        Some(AppointmentStatus::Scheduled)
    );
    assert!(matches!(
        s.check_transition(&a001, AppointmentStatus::Completed),
        Err(TransitionCheck::Invalid(_))
    ));
    assert!(matches!(
        s.check_transition(&RecordId::from("A002"), AppointmentStatus::Scheduled),
        Err(TransitionCheck::Invalid(_))
    ));
    assert_eq!(
        s.check_transition(&RecordId::from("A404"), AppointmentStatus::Cancelled).unwrap(),
        None
    );

    assert!(s.apply_status(&a001, AppointmentStatus::InProgress));
    assert!(!s.apply_status(&RecordId::from("A404"), AppointmentStatus::InProgress));
    assert_eq!(
        s.appointments.find(&a001).map(|e| e.record.status),
        Some(AppointmentStatus::InProgress)
    );
}

#[test]
fn pending_entry_refuses_transitions() {
    let mut s = state();
    let token = s.begin_create(&draft()).unwrap();
    let id = RecordId::provisional(token);
    assert!(matches!(
        s.check_transition(&id, AppointmentStatus::Cancelled),
        Err(TransitionCheck::Pending)
    ));
}
