//! Walks one front-desk session against the in-memory sample backend:
//! load each tab, schedule an appointment, start it, complete it.
//!
//! Usage:
//!   FRONTDESK_LATENCY_SCALE=0.2 \
//!   cargo run -p frontdesk-app --example session_smoke

use frontdesk_app::commands;
use frontdesk_app::config::{Backend, FrontdeskConfig};
use frontdesk_app::state::AppState;
use frontdesk_dashboard::view::TabView;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt().with_env_filter("info").init();

    let latency_scale = std::env::var("FRONTDESK_LATENCY_SCALE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.2);

    let state = AppState::default();
    let config = FrontdeskConfig {
        backend: Backend::Memory { latency_scale },
        ..FrontdeskConfig::default()
    };
    commands::connect(&state, config)
        .await
        .map_err(|e| eyre::eyre!(e))?;

    for tab in ["patients", "prescriptions", "appointments"] {
        let outcome = commands::select_tab(&state, tab.to_string())
            .await
            .map_err(|e| eyre::eyre!(e))?;
        println!("{tab:<14} {outcome:?}");
    }

    commands::set_date_filter(&state, None)
        .await
        .map_err(|e| eyre::eyre!(e))?;

    commands::open_compose(&state).await.map_err(|e| eyre::eyre!(e))?;
    let mut form = commands::get_snapshot(&state)
        .await
        .map_err(|e| eyre::eyre!(e))?
        .compose;
    form.patient_name = "Walk-in Patient".to_string();
    form.notes = "Smoke test".to_string();
    commands::update_compose(&state, form)
        .await
        .map_err(|e| eyre::eyre!(e))?;

    let created = commands::submit_compose(&state)
        .await
        .map_err(|e| eyre::eyre!(e))?;
    println!("scheduled     {} at {}", created.id, created.date_time);

    for next in ["in-progress", "completed"] {
        commands::update_appointment_status(&state, created.id.to_string(), next.to_string())
            .await
            .map_err(|e| eyre::eyre!(e))?;
    }

    let snapshot = commands::get_snapshot(&state)
        .await
        .map_err(|e| eyre::eyre!(e))?;
    if let TabView::Rows { rows } = &snapshot.view {
        println!("first row     {} [{}]", rows[0].title, rows[0].badge);
    }
    println!("stats         {:?}", snapshot.stats);

    for notice in commands::drain_notices(&state) {
        println!("notice        {:?}: {}", notice.level, notice.message);
    }

    Ok(())
}
