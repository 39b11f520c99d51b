//! frontdesk-dashboard
//!
//! The tab-scoped loading and optimistic-update state machine behind the
//! front-office view.
//!
//! - [`state::DashboardState`] is the synchronous core: sequence-tagged
//!   loads, correlation-tagged optimistic creates, status patches.
//! - [`Dashboard`] drives it against the transport clients. The loader lives
//!   in `loader.rs`, the mutator in `mutator.rs`.
//! - [`view`] derives what a renderer shows; nothing there is stored.

pub mod clients;
pub mod compose;
mod dashboard;
pub mod error;
mod loader;
mod mutator;
pub mod notify;
pub mod state;
pub mod tabs;
pub mod view;

pub use crate::clients::Clients;
pub use crate::dashboard::{Dashboard, DashboardConfig, DashboardSnapshot};
pub use crate::error::DashboardError;
pub use crate::notify::{MemoryNotifier, Notice, NoticeLevel, Notifier, TracingNotifier};
pub use crate::state::{DashboardState, LoadOutcome};
