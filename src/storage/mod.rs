//! Object-storage client module for gRPC communication

mod client;
mod traits;

pub use client::StorageClient;
pub use traits::StorageClientTrait;

#[cfg(test)]
pub use traits::MockStorageClientTrait;
