use crate::network::Confirmation;
use ethers::{
    abi::RawLog,
    types::{H256, U256},
};

#[derive(Debug, Clone, PartialEq)]
pub struct CallResult {
    pub tx_hash: H256,
    pub gas_used: Option<U256>,
    pub block_number: Option<u64>,
    pub logs: Vec<RawLog>,
}

impl From<&Confirmation> for CallResult {
    fn from(confirmation: &Confirmation) -> Self {
        Self {
            tx_hash: confirmation.tx_hash,
            gas_used: confirmation.gas_used,
            block_number: confirmation.block_number,
            logs: confirmation.logs.clone(),
        }
    }
}
