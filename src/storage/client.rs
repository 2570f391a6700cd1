//! gRPC client for the object-storage service
//!
//! Avatar uploads go through a storage service speaking the proto in
//! `proto/storage.proto`.

use anyhow::{anyhow, Result};

// Include the generated proto types
pub mod proto {
    tonic::include_proto!("storage");
}

use proto::object_storage_client::ObjectStorageClient;

/// Default storage service address
const DEFAULT_ADDRESS: &str = "http://127.0.0.1:50051";

/// Client for communicating with the object-storage service
pub struct StorageClient {
    /// The gRPC client
    client: Option<ObjectStorageClient<tonic::transport::Channel>>,
    /// The service address
    address: String,
}

impl StorageClient {
    /// Create a new storage client
    ///
    /// Address precedence: `SIGNUP_STORAGE_ADDRESS` env var, then the
    /// configured address, then the localhost default.
    pub async fn new(configured_address: Option<String>) -> Result<Self> {
        let address = std::env::var("SIGNUP_STORAGE_ADDRESS")
            .ok()
            .or(configured_address)
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string());

        // Try to connect to the service
        let client = match ObjectStorageClient::connect(address.clone()).await {
            Ok(client) => Some(client),
            Err(_) => None,
        };

        Ok(Self { client, address })
    }

    /// Ensure connection is established
    async fn ensure_connected(
        &mut self,
    ) -> Result<&mut ObjectStorageClient<tonic::transport::Channel>> {
        if self.client.is_none() {
            self.client = Some(
                ObjectStorageClient::connect(self.address.clone())
                    .await
                    .map_err(|e| anyhow!("Failed to connect to storage service: {}", e))?,
            );
        }
        self.client
            .as_mut()
            .ok_or_else(|| anyhow!("Client not connected"))
    }

    /// Check if the storage service is reachable
    pub async fn check_connection(&self) -> bool {
        self.client.is_some()
    }

    /// Store `content` under `bucket`/`key`
    pub async fn upload(&mut self, bucket: &str, key: &str, content: Vec<u8>) -> Result<()> {
        let client = self.ensure_connected().await?;

        let request = tonic::Request::new(proto::UploadRequest {
            bucket: bucket.to_string(),
            key: key.to_string(),
            content,
            content_type: content_type_for(key).to_string(),
        });

        let response = client
            .upload(request)
            .await
            .map_err(|e| anyhow!("Failed to upload object: {}", e))?;

        let inner = response.into_inner();
        if !inner.success {
            return Err(anyhow!("Failed to upload object: {}", inner.error));
        }

        Ok(())
    }
}

/// Guess a content type from the object key's extension
fn content_type_for(key: &str) -> &'static str {
    match key.rsplit('.').next().map(str::to_ascii_lowercase).as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_for_known_extensions() {
        assert_eq!(content_type_for("avatar.png"), "image/png");
        assert_eq!(content_type_for("photo.JPG"), "image/jpeg");
        assert_eq!(content_type_for("anim.gif"), "image/gif");
        assert_eq!(content_type_for("pic.webp"), "image/webp");
    }

    #[test]
    fn test_content_type_for_unknown_falls_back() {
        assert_eq!(content_type_for("avatar.bin"), "application/octet-stream");
        assert_eq!(content_type_for("no-extension"), "application/octet-stream");
    }
}
