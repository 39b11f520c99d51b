use std::time::Duration;

use frontdesk_core::{Collection, FilterSet, Record, RecordId};
use tokio::sync::Mutex;

use crate::error::StorageError;
use crate::seed;
use crate::transport::{BoxFuture, RecordClient};

/// Artificial per-operation delay for the in-memory store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub list: Duration,
    pub get: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
}

impl Latency {
    pub const NONE: Latency = Latency {
        list: Duration::ZERO,
        get: Duration::ZERO,
        create: Duration::ZERO,
        update: Duration::ZERO,
        delete: Duration::ZERO,
    };

    /// The delays the sample backend has always used for each collection.
    pub fn for_collection(collection: Collection) -> Self {
        let ms = Duration::from_millis;
        match collection {
            Collection::Appointments => Latency {
                list: ms(250),
                get: ms(200),
                create: ms(400),
                update: ms(300),
                delete: ms(250),
            },
            Collection::Patients => Latency {
                list: ms(300),
                get: ms(200),
                create: ms(400),
                update: ms(350),
                delete: ms(250),
            },
            Collection::Prescriptions => Latency {
                list: ms(300),
                get: ms(200),
                create: ms(450),
                update: ms(350),
                delete: ms(250),
            },
        }
    }

    /// Multiply every delay by `factor`. Zero turns the delays off.
    pub fn scaled(self, factor: f64) -> Self {
        let factor = factor.max(0.0);
        let scale = |d: Duration| Duration::from_nanos((d.as_nanos() as f64 * factor) as u64);
        Latency {
            list: scale(self.list),
            get: scale(self.get),
            create: scale(self.create),
            update: scale(self.update),
            delete: scale(self.delete),
        }
    }
}

/// In-memory record store owned by one process.
///
/// New records are prepended, so `get_all` returns newest first. Updating or
/// deleting an unknown id fails with [`StorageError::NotFound`].
pub struct MemoryStore<R: Record> {
    records: Mutex<Vec<R>>,
    latency: Latency,
}

impl<R: Record> MemoryStore<R> {
    pub fn new(records: Vec<R>, latency: Latency) -> Self {
        Self {
            records: Mutex::new(records),
            latency,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), Latency::NONE)
    }

    /// A store holding the bundled sample data with the default delays.
    pub fn seeded() -> Result<Self, StorageError> {
        Ok(Self::new(
            seed::load::<R>()?,
            Latency::for_collection(R::COLLECTION),
        ))
    }

    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    /// Copy of the current contents, without delay.
    pub async fn snapshot(&self) -> Vec<R> {
        self.records.lock().await.clone()
    }

    fn not_found(id: &RecordId) -> StorageError {
        StorageError::NotFound {
            collection: R::COLLECTION,
            id: id.clone(),
        }
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

impl<R: Record> RecordClient<R> for MemoryStore<R> {
    fn get_all(&self, filters: Option<FilterSet>) -> BoxFuture<'_, Result<Vec<R>, StorageError>> {
        Box::pin(async move {
            pause(self.latency.list).await;
            let records = self.records.lock().await;
            let out: Vec<R> = match &filters {
                Some(f) => records.iter().filter(|r| r.matches(f)).cloned().collect(),
                None => records.clone(),
            };
            tracing::debug!(collection = %R::COLLECTION, count = out.len(), "memory store list");
            Ok(out)
        })
    }

    fn get_by_id(&self, id: RecordId) -> BoxFuture<'_, Result<Option<R>, StorageError>> {
        Box::pin(async move {
            pause(self.latency.get).await;
            let records = self.records.lock().await;
            Ok(records.iter().find(|r| r.id() == &id).cloned())
        })
    }

    fn create(&self, draft: R::Draft) -> BoxFuture<'_, Result<R, StorageError>> {
        Box::pin(async move {
            pause(self.latency.create).await;
            let record = R::from_draft(RecordId::generate(), draft);
            self.records.lock().await.insert(0, record.clone());
            tracing::debug!(collection = %R::COLLECTION, id = %record.id(), "memory store create");
            Ok(record)
        })
    }

    fn update(&self, id: RecordId, patch: R::Patch) -> BoxFuture<'_, Result<R, StorageError>> {
        Box::pin(async move {
            pause(self.latency.update).await;
            let mut records = self.records.lock().await;
            let record = records
                .iter_mut()
                .find(|r| r.id() == &id)
                .ok_or_else(|| Self::not_found(&id))?;
            record
                .check_patch(&patch)
                .map_err(|source| StorageError::rejected::<R>(&id, source))?;
            record.apply_patch(&patch);
            tracing::debug!(collection = %R::COLLECTION, id = %id, "memory store update");
            Ok(record.clone())
        })
    }

    fn delete(&self, ids: Vec<RecordId>) -> BoxFuture<'_, Result<bool, StorageError>> {
        Box::pin(async move {
            pause(self.latency.delete).await;
            let mut records = self.records.lock().await;
            // All or nothing: reject the batch if any id is unknown.
            if let Some(missing) = ids.iter().find(|id| !records.iter().any(|r| r.id() == *id)) {
                return Err(Self::not_found(missing));
            }
            records.retain(|r| !ids.contains(r.id()));
            tracing::debug!(collection = %R::COLLECTION, count = ids.len(), "memory store delete");
            Ok(true)
        })
    }
}
