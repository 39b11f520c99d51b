//! frontdesk-storage
//!
//! The transport side of the dashboard: the `RecordClient` contract and its
//! two backends, an in-memory store with artificial latency and an S3 store
//! keeping one JSON object per record.

pub mod client;
pub mod documents;
pub mod error;
pub mod memory;
pub mod objects;
pub mod s3_store;
pub mod seed;
pub mod transport;

pub use crate::error::StorageError;
pub use crate::memory::{Latency, MemoryStore};
pub use crate::s3_store::S3Store;
pub use crate::transport::{BoxFuture, RecordClient};
