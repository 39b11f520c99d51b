//! Integration tests against a real bucket.
//!
//! Require AWS credentials in the environment and an existing bucket named by
//! `FRONTDESK_TEST_BUCKET`.
//!
//! Run with: `cargo test -p frontdesk-storage --test s3_store -- --ignored`

use frontdesk_core::models::appointment::{
    Appointment, AppointmentDraft, AppointmentPatch, AppointmentStatus, AppointmentType,
};
use frontdesk_core::RecordId;
use frontdesk_storage::{RecordClient, S3Store, StorageError};
use jiff::civil::date;

fn draft(patient: &str) -> AppointmentDraft {
    AppointmentDraft {
        patient_name: patient.to_string(),
        doctor_name: "Dr. Sarah Johnson".to_string(),
        date_time: date(2024, 4, 2).at(9, 0, 0, 0),
        appointment_type: AppointmentType::Routine,
        notes: String::new(),
    }
}

async fn store() -> S3Store<Appointment> {
    let bucket = std::env::var("FRONTDESK_TEST_BUCKET").expect("set FRONTDESK_TEST_BUCKET");
    let region = std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string());
    let client = frontdesk_storage::client::build_default_client(&region).await;
    S3Store::new(client, bucket)
}

#[tokio::test]
#[ignore]
async fn create_update_delete_roundtrip() {
    let store = store().await;

    let created = store
        .create(draft("Integration Test"))
        .await
        .unwrap();

    let updated = store
        .update(
            created.id.clone(),
            AppointmentPatch::status(AppointmentStatus::Cancelled),
        )
        .await
        .unwrap();
    assert_eq!(updated.status, AppointmentStatus::Cancelled);

    let listed = store.get_all(None).await.unwrap();
    assert!(listed.iter().any(|a| a.id == created.id));

    assert!(store.delete(vec![created.id.clone()]).await.unwrap());
    assert!(store.get_by_id(created.id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore]
async fn list_returns_newest_first() {
    let store = store().await;

    let older = store.create(draft("Ordering Older")).await.unwrap();
    let newer = store.create(draft("Ordering Newer")).await.unwrap();

    let listed = store.get_all(None).await.unwrap();
    let position = |id: &RecordId| listed.iter().position(|a| &a.id == id).unwrap();
    assert!(position(&newer.id) < position(&older.id));

    store
        .delete(vec![older.id.clone(), newer.id.clone()])
        .await
        .unwrap();
}

#[tokio::test]
#[ignore]
async fn update_refuses_reopening_a_cancelled_appointment() {
    let store = store().await;
    let created = store.create(draft("Reopen Attempt")).await.unwrap();
    store
        .update(
            created.id.clone(),
            AppointmentPatch::status(AppointmentStatus::Cancelled),
        )
        .await
        .unwrap();

    let err = store
        .update(
            created.id.clone(),
            AppointmentPatch::status(AppointmentStatus::Scheduled),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::Rejected { .. }));

    store.delete(vec![created.id]).await.unwrap();
}
