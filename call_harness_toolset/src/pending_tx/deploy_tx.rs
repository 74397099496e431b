use crate::{
    binding::Binding,
    codec::RevertReason,
    error::{DeploymentError, NetworkError},
    tx_result::DeploymentResult,
};
use ethers::types::{Bytes, H256, U256};

/// Creation transaction that has not been submitted yet
#[derive(Debug)]
pub struct DeployPendingTx<'a> {
    binding: &'a Binding,
    creation_code: Bytes,
}

/// Submitted creation transaction, the contract address is unknown until it is confirmed
#[derive(Debug)]
pub struct PendingDeployment<'a> {
    binding: &'a Binding,
    tx_hash: H256,
}

impl<'a> DeployPendingTx<'a> {
    /// `creation_code` is the contract bytecode followed by the encoded constructor arguments
    pub fn new(binding: &'a Binding, creation_code: Bytes) -> Self {
        Self {
            binding,
            creation_code,
        }
    }

    pub async fn submit(self) -> Result<PendingDeployment<'a>, DeploymentError> {
        let request = self.binding.request(None, self.creation_code, U256::zero());
        let tx_hash = self
            .binding
            .network()
            .submit(request)
            .await
            .map_err(|err| DeploymentError::Rejected(err.to_string()))?;

        Ok(PendingDeployment {
            binding: self.binding,
            tx_hash,
        })
    }
}

impl<'a> PendingDeployment<'a> {
    pub fn tx_hash(&self) -> H256 {
        self.tx_hash
    }

    /// Suspends until the creation transaction is included and extracts the contract address
    pub async fn confirm(self) -> Result<DeploymentResult, DeploymentError> {
        let confirmation = self
            .binding
            .network()
            .wait_for_confirmation(self.tx_hash)
            .await
            .map_err(|err| match err {
                NetworkError::Revert(reason) => DeploymentError::Reverted(reason),
                NetworkError::Transport(message) => DeploymentError::Unconfirmed(message),
            })?;

        if !confirmation.success {
            return Err(DeploymentError::Reverted(RevertReason::Unspecified(None)));
        }

        let contract_address = confirmation
            .contract_address
            .ok_or(DeploymentError::MissingAddress(self.tx_hash))?;

        Ok(DeploymentResult {
            contract_address,
            tx_hash: self.tx_hash,
            gas_used: confirmation.gas_used,
            block_number: confirmation.block_number,
            confirmed: true,
        })
    }
}
