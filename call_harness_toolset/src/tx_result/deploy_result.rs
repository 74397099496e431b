use ethers::types::{Address, H256, U256};

/// Created once per deployment, only after the network confirmed the creation transaction
#[derive(Debug, Clone, PartialEq)]
pub struct DeploymentResult {
    pub contract_address: Address,
    pub tx_hash: H256,
    pub gas_used: Option<U256>,
    pub block_number: Option<u64>,
    pub confirmed: bool,
}
