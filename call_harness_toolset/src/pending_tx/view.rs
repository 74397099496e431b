use crate::error::NetworkError;
use async_trait::async_trait;
use ethers::types::Bytes;

/// This trait defines the interface for the read-only methods of the contract
#[async_trait]
pub trait View {
    /// Should be used to execute the prepared query, no state is changed and no confirmation is awaited
    async fn view(self) -> Result<Bytes, NetworkError>;
}
