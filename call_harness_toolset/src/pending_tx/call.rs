use crate::{error::NetworkError, network::Confirmation};
use async_trait::async_trait;

/// This trait defines the interface for the state-mutating methods of the contract
#[async_trait]
pub trait Call {
    /// Submits the prepared transaction and suspends until the network confirms it
    async fn call(self) -> Result<Confirmation, NetworkError>;
}
