//! frontdesk-core
//!
//! Pure domain types for the front-office dashboard: the three record
//! collections, the `Record` contract every collection implements, filter
//! predicates, and object key conventions. No transport dependency.

pub mod error;
pub mod filter;
pub mod keys;
pub mod models;
pub mod record;

pub use crate::error::CoreError;
pub use crate::filter::FilterSet;
pub use crate::record::{Collection, Record, RecordId};
