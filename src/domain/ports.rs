use crate::error::Result;
use async_trait::async_trait;

/// Remote service able to build unsigned transactions.
#[async_trait]
pub trait TransactionService: Send + Sync {
    /// Submits an encoded build request and returns the raw response body.
    async fn build(&self, body: Vec<u8>) -> Result<Vec<u8>>;
    /// Queries the service health endpoint.
    async fn health(&self) -> Result<String>;
}

pub type TransactionServiceBox = Box<dyn TransactionService>;
