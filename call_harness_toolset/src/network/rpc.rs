use super::{CallRequest, Confirmation, Network};
use crate::{
    codec::revert::RevertReason,
    config::EndpointConfig,
    error::{ConfigError, NetworkError},
};
use async_trait::async_trait;
use ethers::{
    middleware::SignerMiddleware,
    providers::{Http, Middleware, MiddlewareError, PendingTransaction, Provider},
    signers::LocalWallet,
    types::{transaction::eip2718::TypedTransaction, Address, Bytes, H256, U256},
};

type RpcClient = SignerMiddleware<Provider<Http>, LocalWallet>;

/// JSON-RPC transport backed by `ethers`.
/// Signing, nonce sequencing and gas estimation belong to the signer middleware.
#[derive(Debug)]
pub struct RpcNetwork {
    client: RpcClient,
    confirmations: usize,
}

impl RpcNetwork {
    /// Only checks the url syntax, an unreachable endpoint surfaces on the first call
    pub fn connect(config: &EndpointConfig, wallet: LocalWallet) -> Result<Self, ConfigError> {
        let provider = Provider::<Http>::try_from(config.url.as_str())
            .map_err(|err| ConfigError::InvalidUrl {
                url: config.url.clone(),
                reason: err.to_string(),
            })?
            .interval(config.poll_interval);

        Ok(Self {
            client: SignerMiddleware::new(provider, wallet),
            confirmations: config.confirmations,
        })
    }
}

#[async_trait]
impl Network for RpcNetwork {
    async fn query(&self, request: CallRequest) -> Result<Bytes, NetworkError> {
        let tx: TypedTransaction = request.into_transaction().into();
        self.client.call(&tx, None).await.map_err(network_error)
    }

    async fn submit(&self, request: CallRequest) -> Result<H256, NetworkError> {
        let pending = self
            .client
            .send_transaction(request.into_transaction(), None)
            .await
            .map_err(network_error)?;
        Ok(*pending)
    }

    async fn wait_for_confirmation(&self, tx_hash: H256) -> Result<Confirmation, NetworkError> {
        PendingTransaction::new(tx_hash, self.client.provider())
            .confirmations(self.confirmations)
            .await
            .map_err(network_error)?
            .map(Confirmation::from)
            .ok_or_else(|| {
                NetworkError::Transport(format!("transaction {tx_hash:?} was dropped"))
            })
    }

    async fn balance(&self, address: Address) -> Result<U256, NetworkError> {
        self.client
            .get_balance(address, None)
            .await
            .map_err(network_error)
    }
}

/// JSON-RPC errors carrying revert data become reverts, everything else is a transport failure
fn network_error<E: MiddlewareError>(err: E) -> NetworkError {
    if let Some(response) = err.as_error_response() {
        if let Some(data) = response.as_revert_data().filter(|data| !data.is_empty()) {
            return NetworkError::Revert(RevertReason::from_data(&data));
        }
        if response.is_revert() {
            return NetworkError::Revert(RevertReason::Unspecified(Some(
                response.message.clone(),
            )));
        }
    }
    NetworkError::Transport(err.to_string())
}
