//! The seam between the harness and a concrete EVM endpoint.
//!
//! The harness only needs four operations from a network: run a query, submit a
//! transaction, wait for its confirmation and read a balance. [`rpc::RpcNetwork`]
//! provides them over JSON-RPC, tests provide them in-process.

pub mod rpc;

use crate::error::NetworkError;
use async_trait::async_trait;
use ethers::{
    abi::RawLog,
    types::{Address, Bytes, TransactionReceipt, TransactionRequest, H256, U256, U64},
};

pub use self::rpc::RpcNetwork;

/// A call or transaction sent on behalf of the binding's signer.
/// `to == None` is a contract creation.
#[derive(Debug, Clone, PartialEq)]
pub struct CallRequest {
    pub from: Address,
    pub to: Option<Address>,
    pub data: Bytes,
    pub value: U256,
}

impl CallRequest {
    pub fn into_transaction(self) -> TransactionRequest {
        let request = TransactionRequest::new()
            .from(self.from)
            .data(self.data)
            .value(self.value);
        match self.to {
            Some(to) => request.to(to),
            None => request,
        }
    }
}

/// Network acknowledgment that a submitted transaction has been included
#[derive(Debug, Clone, PartialEq)]
pub struct Confirmation {
    pub tx_hash: H256,
    pub success: bool,
    pub contract_address: Option<Address>,
    pub gas_used: Option<U256>,
    pub block_number: Option<u64>,
    pub logs: Vec<RawLog>,
    /// Return data of the call when the network exposes it, JSON-RPC receipts never do
    pub output: Option<Bytes>,
}

impl From<TransactionReceipt> for Confirmation {
    fn from(receipt: TransactionReceipt) -> Self {
        Self {
            tx_hash: receipt.transaction_hash,
            // receipts without status predate byzantium and carry no failure information
            success: receipt.status.map_or(true, |status| status == U64::one()),
            contract_address: receipt.contract_address,
            gas_used: receipt.gas_used,
            block_number: receipt.block_number.map(|number| number.as_u64()),
            logs: receipt
                .logs
                .into_iter()
                .map(|log| RawLog {
                    topics: log.topics,
                    data: log.data.to_vec(),
                })
                .collect(),
            output: None,
        }
    }
}

/// Operations a network endpoint must expose to the harness
#[async_trait]
pub trait Network: Send + Sync + std::fmt::Debug {
    /// Read-only call, no state change
    async fn query(&self, request: CallRequest) -> Result<Bytes, NetworkError>;

    /// Submits a state-mutating transaction and returns its hash without waiting for inclusion
    async fn submit(&self, request: CallRequest) -> Result<H256, NetworkError>;

    /// Suspends until the transaction is included
    async fn wait_for_confirmation(&self, tx_hash: H256) -> Result<Confirmation, NetworkError>;

    async fn balance(&self, address: Address) -> Result<U256, NetworkError>;
}
