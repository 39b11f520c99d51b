use std::marker::PhantomData;

use aws_sdk_s3::Client;
use frontdesk_core::{FilterSet, Record, RecordId, keys};

use crate::documents;
use crate::error::StorageError;
use crate::objects;
use crate::transport::{BoxFuture, RecordClient};

/// Remote record store: one JSON object per record at
/// `<collection>/<id>.json` in a single bucket.
///
/// Store-generated ids are time-ordered, so listing walks keys in descending
/// order to return newest first.
///
/// Updates read the object with its ETag and write back with `If-Match`, so a
/// concurrent writer surfaces as [`StorageError::Conflict`] instead of a lost
/// update.
pub struct S3Store<R: Record> {
    client: Client,
    bucket: String,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> S3Store<R> {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            _record: PhantomData,
        }
    }

    async fn load(&self, id: &RecordId) -> Result<Option<(R, String)>, StorageError> {
        let key = keys::record(R::COLLECTION, id);
        match documents::load_json::<R>(&self.client, &self.bucket, &key).await {
            Ok(found) => Ok(Some(found)),
            Err(StorageError::ObjectNotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl<R: Record> RecordClient<R> for S3Store<R> {
    fn get_all(&self, filters: Option<FilterSet>) -> BoxFuture<'_, Result<Vec<R>, StorageError>> {
        Box::pin(async move {
            let prefix = keys::collection_prefix(R::COLLECTION);
            let mut object_keys = objects::list_objects(&self.client, &self.bucket, &prefix).await?;
            object_keys.sort_unstable_by(|a, b| b.cmp(a));

            let mut records = Vec::with_capacity(object_keys.len());
            for key in &object_keys {
                if keys::id_from_key(R::COLLECTION, key).is_none() {
                    continue;
                }
                let (record, _etag) = documents::load_json::<R>(&self.client, &self.bucket, key).await?;
                if filters.as_ref().is_none_or(|f| record.matches(f)) {
                    records.push(record);
                }
            }

            tracing::debug!(
                bucket = %self.bucket,
                collection = %R::COLLECTION,
                count = records.len(),
                "loaded collection from S3"
            );
            Ok(records)
        })
    }

    fn get_by_id(&self, id: RecordId) -> BoxFuture<'_, Result<Option<R>, StorageError>> {
        Box::pin(async move { Ok(self.load(&id).await?.map(|(record, _etag)| record)) })
    }

    fn create(&self, draft: R::Draft) -> BoxFuture<'_, Result<R, StorageError>> {
        Box::pin(async move {
            let record = R::from_draft(RecordId::generate(), draft);
            let key = keys::record(R::COLLECTION, record.id());
            documents::save_json(&self.client, &self.bucket, &key, &record).await?;
            tracing::info!(bucket = %self.bucket, key = %key, "record created");
            Ok(record)
        })
    }

    fn update(&self, id: RecordId, patch: R::Patch) -> BoxFuture<'_, Result<R, StorageError>> {
        Box::pin(async move {
            let (mut record, etag) = self.load(&id).await?.ok_or_else(|| StorageError::NotFound {
                collection: R::COLLECTION,
                id: id.clone(),
            })?;
            record
                .check_patch(&patch)
                .map_err(|source| StorageError::rejected::<R>(&id, source))?;
            record.apply_patch(&patch);

            let key = keys::record(R::COLLECTION, &id);
            documents::save_json_if_match(&self.client, &self.bucket, &key, &record, &etag).await?;
            tracing::info!(bucket = %self.bucket, key = %key, "record updated");
            Ok(record)
        })
    }

    fn delete(&self, ids: Vec<RecordId>) -> BoxFuture<'_, Result<bool, StorageError>> {
        Box::pin(async move {
            for id in &ids {
                let key = keys::record(R::COLLECTION, id);
                objects::delete_object(&self.client, &self.bucket, &key).await?;
                tracing::info!(bucket = %self.bucket, key = %key, "record deleted");
            }
            Ok(true)
        })
    }
}
