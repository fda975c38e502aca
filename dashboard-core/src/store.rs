use crate::error::StoreError;
use async_trait::async_trait;
use std::fmt::Debug;

pub mod fs;
pub mod memory;

/// Abstraction over the bucket-organized blob store.
///
/// Objects are immutable once written; there is no update or delete path.
#[async_trait]
pub trait ObjectStore: Send + Sync + Debug {
    /// Whether `bucket` currently exists.
    async fn head_bucket(&self, bucket: &str) -> Result<bool, StoreError>;

    /// Create `bucket`. Fails with [`StoreError::BucketAlreadyExists`] when a
    /// concurrent creator got there first.
    async fn create_bucket(&self, bucket: &str) -> Result<(), StoreError>;

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StoreError>;

    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StoreError>;
}
