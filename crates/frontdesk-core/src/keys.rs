//! Object key conventions for record stores.
//!
//! Pure string functions. Every record lives at `<collection>/<id>.json`.

use crate::record::{Collection, RecordId};

pub fn record(collection: Collection, id: &RecordId) -> String {
    format!("{}/{id}.json", collection.as_str())
}

pub fn collection_prefix(collection: Collection) -> String {
    format!("{}/", collection.as_str())
}

/// Recover the record id from a key produced by [`record`].
pub fn id_from_key(collection: Collection, key: &str) -> Option<RecordId> {
    let prefix = collection_prefix(collection);
    let id = key.strip_prefix(&prefix)?.strip_suffix(".json")?;
    if id.is_empty() || id.contains('/') {
        return None;
    }
    Some(RecordId::new(id))
}
