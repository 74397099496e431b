use super::view::View;
use crate::{binding::Binding, error::NetworkError};
use async_trait::async_trait;
use ethers::types::{Address, Bytes, U256};

#[derive(Debug)]
pub struct ImmutablePendingTx<'a> {
    binding: &'a Binding,
    contract: Address,
    input: Bytes,
}

impl<'a> ImmutablePendingTx<'a> {
    pub fn new(binding: &'a Binding, contract: Address, input: Bytes) -> Self {
        Self {
            binding,
            contract,
            input,
        }
    }
}

#[async_trait]
impl<'a> View for ImmutablePendingTx<'a> {
    async fn view(self) -> Result<Bytes, NetworkError> {
        let request = self
            .binding
            .request(Some(self.contract), self.input, U256::zero());
        self.binding.network().query(request).await
    }
}
