use eyre::Result;

use frontdesk_app::config::{self, FrontdeskConfig};
use frontdesk_app::state::AppState;
use frontdesk_app::{commands, init_tracing, with_startup_logging};

/// Opens the dashboard on the tab named by the first argument (default
/// `appointments`) and prints what a renderer would show.
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = with_startup_logging(std::io::stderr, || {
        if config::has_config() {
            config::load_config()
        } else {
            Ok(FrontdeskConfig::default())
        }
    })?;
    init_tracing(config.json_logs);

    let tab = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "appointments".to_string());

    let state = AppState::default();
    commands::connect(&state, config)
        .await
        .map_err(|e| eyre::eyre!(e))?;

    if let Err(e) = commands::select_tab(&state, tab).await {
        tracing::warn!(error = %e, "initial load failed");
    }

    let snapshot = commands::get_snapshot(&state)
        .await
        .map_err(|e| eyre::eyre!(e))?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    for notice in commands::drain_notices(&state) {
        eprintln!("{:?}: {}", notice.level, notice.message);
    }

    Ok(())
}
