use aws_sdk_s3::Client;
use aws_sdk_s3::error::{DisplayErrorContext, SdkError};
use aws_smithy_types::byte_stream::ByteStream;

use crate::error::StorageError;

/// The request never got a response: timeout, refused connection, DNS.
fn transport_failure<E, R>(e: &SdkError<E, R>) -> Option<StorageError>
where
    E: std::error::Error + 'static,
    R: std::fmt::Debug,
{
    match e {
        SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) => {
            Some(StorageError::Transport(DisplayErrorContext(e).to_string()))
        }
        _ => None,
    }
}

/// Result of a GET operation, including the body and ETag.
pub struct GetObjectOutput {
    pub body: Vec<u8>,
    pub etag: Option<String>,
}

/// Get an object from S3.
pub async fn get_object(
    client: &Client,
    bucket: &str,
    key: &str,
) -> Result<GetObjectOutput, StorageError> {
    let resp = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|e| {
            if let Some(failure) = transport_failure(&e) {
                return failure;
            }
            let err = e.into_service_error();
            if err.is_no_such_key() {
                StorageError::ObjectNotFound {
                    key: key.to_string(),
                }
            } else {
                StorageError::GetObject(err.to_string())
            }
        })?;

    let etag = resp.e_tag().map(|s| s.to_string());
    let body = resp
        .body
        .collect()
        .await
        .map_err(|e| StorageError::Transport(e.to_string()))?
        .into_bytes()
        .to_vec();

    Ok(GetObjectOutput { body, etag })
}

/// Put a JSON object to S3. Returns the new ETag.
pub async fn put_object(
    client: &Client,
    bucket: &str,
    key: &str,
    body: Vec<u8>,
) -> Result<String, StorageError> {
    let resp = client
        .put_object()
        .bucket(bucket)
        .key(key)
        .content_type("application/json")
        .body(ByteStream::from(body))
        .send()
        .await
        .map_err(|e| {
            transport_failure(&e)
                .unwrap_or_else(|| StorageError::PutObject(e.into_service_error().to_string()))
        })?;

    Ok(resp.e_tag().unwrap_or_default().to_string())
}

/// Put a JSON object with an If-Match precondition (ETag optimistic locking).
/// Returns the new ETag, or `StorageError::Conflict` if the object changed
/// since `expected_etag` was read.
pub async fn put_object_if_match(
    client: &Client,
    bucket: &str,
    key: &str,
    body: Vec<u8>,
    expected_etag: &str,
) -> Result<String, StorageError> {
    let resp = client
        .put_object()
        .bucket(bucket)
        .key(key)
        .content_type("application/json")
        .body(ByteStream::from(body))
        .if_match(expected_etag)
        .send()
        .await
        .map_err(|e| {
            if let Some(failure) = transport_failure(&e) {
                return failure;
            }
            let err = e.into_service_error();
            // S3 answers 412 Precondition Failed when If-Match doesn't match
            if err.to_string().contains("PreconditionFailed") {
                StorageError::Conflict {
                    key: key.to_string(),
                }
            } else {
                StorageError::PutObject(err.to_string())
            }
        })?;

    Ok(resp.e_tag().unwrap_or_default().to_string())
}

/// Delete an object from S3. Deleting a missing key succeeds.
pub async fn delete_object(client: &Client, bucket: &str, key: &str) -> Result<(), StorageError> {
    client
        .delete_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|e| {
            transport_failure(&e)
                .unwrap_or_else(|| StorageError::DeleteObject(e.into_service_error().to_string()))
        })?;

    Ok(())
}

/// List object keys under a prefix, following continuation tokens.
pub async fn list_objects(
    client: &Client,
    bucket: &str,
    prefix: &str,
) -> Result<Vec<String>, StorageError> {
    let mut keys = Vec::new();
    let mut continuation_token: Option<String> = None;

    loop {
        let mut req = client.list_objects_v2().bucket(bucket).prefix(prefix);

        if let Some(token) = &continuation_token {
            req = req.continuation_token(token);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| {
                transport_failure(&e).unwrap_or_else(|| {
                    StorageError::ListObjects(e.into_service_error().to_string())
                })
            })?;

        for obj in resp.contents() {
            if let Some(key) = obj.key() {
                keys.push(key.to_string());
            }
        }

        if resp.is_truncated() == Some(true) {
            continuation_token = resp.next_continuation_token().map(|s| s.to_string());
        } else {
            break;
        }
    }

    Ok(keys)
}
