use std::sync::Arc;

use frontdesk_dashboard::{Dashboard, MemoryNotifier, Notice, Notifier, TracingNotifier};
use tokio::sync::Mutex;

use crate::config::FrontdeskConfig;

/// Logs every notice and keeps it until the UI drains it.
#[derive(Debug, Default)]
pub struct ShellNotifier {
    log: TracingNotifier,
    inbox: MemoryNotifier,
}

impl ShellNotifier {
    pub fn drain(&self) -> Vec<Notice> {
        self.inbox.drain()
    }
}

impl Notifier for ShellNotifier {
    fn notify(&self, notice: Notice) {
        self.log.notify(notice.clone());
        self.inbox.notify(notice);
    }
}

pub struct AppState {
    pub config: Arc<Mutex<Option<FrontdeskConfig>>>,
    pub dashboard: Arc<Mutex<Option<Dashboard>>>,
    pub notices: Arc<ShellNotifier>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            config: Arc::new(Mutex::new(None)),
            dashboard: Arc::new(Mutex::new(None)),
            notices: Arc::new(ShellNotifier::default()),
        }
    }
}
