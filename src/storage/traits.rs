//! Trait abstraction for the storage client to enable mocking in tests

use super::client::StorageClient;
use anyhow::Result;
use async_trait::async_trait;

/// Trait for object-storage operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorageClientTrait: Send + Sync {
    /// Check if the storage service is reachable
    async fn check_connection(&self) -> bool;

    /// Store `content` under `bucket`/`key`, overwriting any existing object
    async fn upload(&mut self, bucket: &str, key: &str, content: Vec<u8>) -> Result<()>;
}

#[async_trait]
impl StorageClientTrait for StorageClient {
    async fn check_connection(&self) -> bool {
        StorageClient::check_connection(self).await
    }

    async fn upload(&mut self, bucket: &str, key: &str, content: Vec<u8>) -> Result<()> {
        StorageClient::upload(self, bucket, key, content).await
    }
}
