use frontdesk_core::filter::filter_records;
use frontdesk_core::models::appointment::{Appointment, AppointmentStatus, AppointmentType};
use frontdesk_core::models::patient::{Patient, PersonalInfo};
use frontdesk_core::models::prescription::{Prescription, PrescriptionStatus};
use frontdesk_core::{FilterSet, RecordId};
use jiff::civil::date;

fn patient(id: &str, first: &str, last: &str, phone: &str) -> Patient {
    Patient {
        id: RecordId::new(id),
        personal_info: PersonalInfo {
            first_name: first.to_string(),
            last_name: last.to_string(),
            phone: phone.to_string(),
            ..PersonalInfo::default()
        },
        medical_history: Vec::new(),
        appointments: Vec::new(),
        prescriptions: Vec::new(),
        insurance_info: None,
    }
}

fn appointment(id: &str, patient: &str, doctor: &str, day: i8, status: AppointmentStatus) -> Appointment {
    Appointment {
        id: RecordId::new(id),
        patient_name: patient.to_string(),
        doctor_name: doctor.to_string(),
        date_time: date(2024, 3, day).at(9, 30, 0, 0),
        appointment_type: AppointmentType::Consultation,
        status,
        notes: String::new(),
    }
}

fn search(text: &str) -> FilterSet {
    FilterSet {
        search: text.to_string(),
        ..FilterSet::default()
    }
}

#[test]
fn patient_search_matches_name_in_any_case_and_keeps_order() {
    let patients = vec![
        patient("P001", "John", "Smith", "555-0101"),
        patient("P002", "Maria", "Garcia", "555-0102"),
        patient("P003", "smithy", "Jones", "555-0103"),
        patient("P004", "Ann", "SMITHSON", "555-0104"),
    ];

    let ids: Vec<&str> = filter_records(&patients, &search("smith"))
        .into_iter()
        .map(|p| p.id.as_str())
        .collect();

    assert_eq!(ids, ["P001", "P003", "P004"]);
}

#[test]
fn patient_search_matches_id_case_insensitively() {
    let patients = vec![
        patient("P001", "John", "Smith", "555-0101"),
        patient("P002", "Maria", "Garcia", "555-0102"),
    ];

    let found = filter_records(&patients, &search("p002"));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id.as_str(), "P002");
}

#[test]
fn patient_phone_match_is_raw_substring() {
    let patients = vec![
        patient("P001", "John", "Smith", "(555) 010-1234"),
        patient("P002", "Maria", "Garcia", "555-0102"),
    ];

    assert_eq!(filter_records(&patients, &search("010-12")).len(), 1);
    // Digits alone do not match a formatted number: phones are not normalized.
    assert!(filter_records(&patients, &search("5550101234")).is_empty());
}

#[test]
fn full_name_spans_first_and_last() {
    let patients = vec![patient("P001", "John", "Smith", "")];
    assert_eq!(filter_records(&patients, &search("n sm")).len(), 1);
}

#[test]
fn empty_filters_pass_everything() {
    let appointments = vec![
        appointment("A1", "John Smith", "Dr. Lee", 1, AppointmentStatus::Scheduled),
        appointment("A2", "Maria Garcia", "Dr. Patel", 2, AppointmentStatus::Completed),
    ];
    assert_eq!(filter_records(&appointments, &FilterSet::default()).len(), 2);
}

#[test]
fn appointment_search_covers_patient_or_doctor() {
    let appointments = vec![
        appointment("A1", "John Smith", "Dr. Lee", 1, AppointmentStatus::Scheduled),
        appointment("A2", "Maria Garcia", "Dr. Patel", 1, AppointmentStatus::Scheduled),
    ];

    let by_doctor = filter_records(&appointments, &search("PATEL"));
    assert_eq!(by_doctor.len(), 1);
    assert_eq!(by_doctor[0].id.as_str(), "A2");

    let by_patient = filter_records(&appointments, &search("john"));
    assert_eq!(by_patient.len(), 1);
    assert_eq!(by_patient[0].id.as_str(), "A1");
}

#[test]
fn appointment_filters_combine_with_and() {
    let appointments = vec![
        appointment("A1", "John Smith", "Dr. Lee", 1, AppointmentStatus::Scheduled),
        appointment("A2", "Jane Smith", "Dr. Lee", 1, AppointmentStatus::Completed),
        appointment("A3", "Joe Smith", "Dr. Lee", 2, AppointmentStatus::Scheduled),
    ];

    let filters = FilterSet {
        search: "smith".to_string(),
        status: Some(AppointmentStatus::Scheduled),
        date: Some(date(2024, 3, 1)),
    };

    let ids: Vec<&str> = filter_records(&appointments, &filters)
        .into_iter()
        .map(|a| a.id.as_str())
        .collect();
    assert_eq!(ids, ["A1"]);
}

#[test]
fn date_filter_matches_whole_day() {
    let mut late = appointment("A1", "John Smith", "Dr. Lee", 5, AppointmentStatus::Scheduled);
    late.date_time = date(2024, 3, 5).at(23, 59, 0, 0);
    let appointments = vec![late];

    assert_eq!(filter_records(&appointments, &FilterSet::for_day(date(2024, 3, 5))).len(), 1);
    assert!(filter_records(&appointments, &FilterSet::for_day(date(2024, 3, 6))).is_empty());
}

#[test]
fn status_and_date_do_not_constrain_prescriptions() {
    let prescriptions = vec![Prescription {
        id: RecordId::new("RX1"),
        patient_name: "John Smith".to_string(),
        doctor_name: "Dr. Lee".to_string(),
        medications: vec!["Lisinopril 10mg".to_string()],
        dosage: "Once daily".to_string(),
        duration: "30 days".to_string(),
        date_issued: "2024-01-10T10:00:00Z".parse().unwrap(),
        status: PrescriptionStatus::Active,
    }];

    let filters = FilterSet {
        search: "lee".to_string(),
        status: Some(AppointmentStatus::Cancelled),
        date: Some(date(1999, 1, 1)),
    };
    assert_eq!(filter_records(&prescriptions, &filters).len(), 1);
    assert!(filter_records(&prescriptions, &search("garcia")).is_empty());
}
