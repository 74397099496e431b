use super::call::Call;
use crate::{binding::Binding, error::NetworkError, network::Confirmation};
use async_trait::async_trait;
use ethers::types::{Address, Bytes, U256};

#[derive(Debug)]
pub struct PayablePendingTx<'a> {
    binding: &'a Binding,
    contract: Address,
    input: Bytes,
    attached_value: U256,
}

impl<'a> PayablePendingTx<'a> {
    pub fn new(binding: &'a Binding, contract: Address, input: Bytes, attached_value: U256) -> Self {
        Self {
            binding,
            contract,
            input,
            attached_value,
        }
    }
}

#[async_trait]
impl<'a> Call for PayablePendingTx<'a> {
    async fn call(self) -> Result<Confirmation, NetworkError> {
        let network = self.binding.network();
        let tx_hash = network
            .submit(
                self.binding
                    .request(Some(self.contract), self.input, self.attached_value),
            )
            .await?;
        network.wait_for_confirmation(tx_hash).await
    }
}
