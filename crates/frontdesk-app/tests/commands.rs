use frontdesk_app::commands;
use frontdesk_app::config::{Backend, FrontdeskConfig};
use frontdesk_app::state::AppState;
use frontdesk_dashboard::view::TabView;
use frontdesk_dashboard::{LoadOutcome, Notice};
use frontdesk_core::Collection;

async fn connected() -> AppState {
    let state = AppState::default();
    let config = FrontdeskConfig {
        backend: Backend::Memory { latency_scale: 0.0 },
        ..FrontdeskConfig::default()
    };
    commands::connect(&state, config).await.unwrap();
    state
}

#[tokio::test]
async fn commands_require_a_connection() {
    let state = AppState::default();
    let err = commands::get_snapshot(&state).await.unwrap_err();
    assert!(err.contains("not connected"));
}

#[tokio::test]
async fn select_tab_by_name() {
    let state = connected().await;

    let outcome = commands::select_tab(&state, "prescriptions".to_string())
        .await
        .unwrap();
    assert_eq!(
        outcome,
        LoadOutcome::Applied {
            tab: Collection::Prescriptions,
            count: 6
        }
    );

    let err = commands::select_tab(&state, "invoices".to_string())
        .await
        .unwrap_err();
    assert!(err.contains("invoices"));
}

#[tokio::test]
async fn filters_parse_from_strings() {
    let state = connected().await;
    commands::select_tab(&state, "appointments".to_string())
        .await
        .unwrap();

    commands::set_date_filter(&state, Some("2024-03-16".to_string()))
        .await
        .unwrap();
    commands::set_status_filter(&state, Some("cancelled".to_string()))
        .await
        .unwrap();

    let snapshot = commands::get_snapshot(&state).await.unwrap();
    match snapshot.view {
        TabView::Rows { rows } => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].id.as_str(), "A006");
        }
        other => panic!("expected rows, got {other:?}"),
    }

    commands::set_status_filter(&state, Some("all".to_string()))
        .await
        .unwrap();
    assert!(
        commands::set_status_filter(&state, Some("pending".to_string()))
            .await
            .is_err()
    );
    assert!(
        commands::set_date_filter(&state, Some("16/03/2024".to_string()))
            .await
            .is_err()
    );
}

#[tokio::test]
async fn compose_submit_and_status_change() {
    let state = connected().await;
    commands::select_tab(&state, "appointments".to_string())
        .await
        .unwrap();
    commands::open_compose(&state).await.unwrap();

    let mut form = commands::get_snapshot(&state).await.unwrap().compose;
    form.patient_name = "Nora Quinn".to_string();
    commands::update_compose(&state, form).await.unwrap();

    let created = commands::submit_compose(&state).await.unwrap();
    commands::update_appointment_status(&state, created.id.to_string(), "in-progress".to_string())
        .await
        .unwrap();

    let snapshot = commands::get_snapshot(&state).await.unwrap();
    assert!(!snapshot.compose_open);
    assert_eq!(snapshot.stats.in_progress, 2);

    assert_eq!(
        commands::drain_notices(&state),
        [
            Notice::success("Appointment scheduled successfully"),
            Notice::success("Appointment in-progress"),
        ]
    );
    assert!(commands::drain_notices(&state).is_empty());
}

#[tokio::test]
async fn validation_errors_come_back_as_text() {
    let state = connected().await;

    let err = commands::submit_compose(&state).await.unwrap_err();
    assert_eq!(err, "Patient name is required");

    let err = commands::update_appointment_status(&state, "A001".to_string(), "done".to_string())
        .await
        .unwrap_err();
    assert!(err.contains("done"));
}

#[tokio::test]
async fn recent_patients_and_config_info() {
    let state = connected().await;

    let recent = commands::recent_patients(&state).await.unwrap();
    assert_eq!(recent.len(), commands::RECENT_PATIENTS);

    let info = commands::config_info(&state).await.unwrap();
    assert_eq!(info.backend, "memory");
    assert_eq!(info.default_doctor, "Dr. Sarah Johnson");
}
