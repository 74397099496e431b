use crate::{
    config::EndpointConfig,
    error::{ConfigError, NetworkError},
    network::{CallRequest, Network, RpcNetwork},
};
use ethers::{
    signers::{LocalWallet, Signer},
    types::{Address, Bytes, U256},
};
use std::{fmt, sync::Arc};

/// Authenticated session to a network endpoint.
/// Read-only after construction, transaction sequencing is owned by the network client.
#[derive(Clone)]
pub struct Binding {
    signer: Address,
    network: Arc<dyn Network>,
}

impl Binding {
    /// Validates the signing key and endpoint url, the endpoint itself is not contacted
    pub fn bind(config: &EndpointConfig) -> Result<Self, ConfigError> {
        let wallet = parse_signing_key(config.signing_key())?.with_chain_id(config.chain_id);
        let signer = wallet.address();
        let network = RpcNetwork::connect(config, wallet)?;

        Ok(Self {
            signer,
            network: Arc::new(network),
        })
    }

    /// Binds the signing key to an arbitrary transport
    pub fn with_network(signing_key: &str, network: Arc<dyn Network>) -> Result<Self, ConfigError> {
        let wallet = parse_signing_key(signing_key)?;
        Ok(Self {
            signer: wallet.address(),
            network,
        })
    }

    /// Derived from the signing key, no network round trip involved
    pub fn signer_address(&self) -> Address {
        self.signer
    }

    pub async fn balance(&self, address: Address) -> Result<U256, NetworkError> {
        self.network.balance(address).await
    }

    pub(crate) fn network(&self) -> &dyn Network {
        self.network.as_ref()
    }

    pub(crate) fn request(&self, to: Option<Address>, data: Bytes, value: U256) -> CallRequest {
        CallRequest {
            from: self.signer,
            to,
            data,
            value,
        }
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("signer", &self.signer)
            .field("network", &self.network)
            .finish()
    }
}

fn parse_signing_key(signing_key: &str) -> Result<LocalWallet, ConfigError> {
    signing_key
        .trim()
        .parse::<LocalWallet>()
        .map_err(|err| ConfigError::InvalidSigningKey(err.to_string()))
}
