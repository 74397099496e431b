use super::call::Call;
use crate::{binding::Binding, error::NetworkError, network::Confirmation};
use async_trait::async_trait;
use ethers::types::{Address, Bytes, U256};

#[derive(Debug)]
pub struct MutablePendingTx<'a> {
    binding: &'a Binding,
    contract: Address,
    input: Bytes,
}

impl<'a> MutablePendingTx<'a> {
    pub fn new(binding: &'a Binding, contract: Address, input: Bytes) -> Self {
        Self {
            binding,
            contract,
            input,
        }
    }
}

#[async_trait]
impl<'a> Call for MutablePendingTx<'a> {
    async fn call(self) -> Result<Confirmation, NetworkError> {
        let network = self.binding.network();
        let tx_hash = network
            .submit(
                self.binding
                    .request(Some(self.contract), self.input, U256::zero()),
            )
            .await?;
        network.wait_for_confirmation(tx_hash).await
    }
}
