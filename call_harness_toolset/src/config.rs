use crate::error::ConfigError;
use std::{fmt, str::FromStr, time::Duration};

pub const DEFAULT_RPC_URL: &str = "https://testnet.aurora.dev";
/// Chain id of the Aurora testnet, see <https://doc.aurora.dev/getting-started/network-endpoints>
#[allow(clippy::unreadable_literal)]
pub const AURORA_TESTNET_CHAIN_ID: u64 = 1313161555;
pub const DEFAULT_CONFIRMATIONS: usize = 1;
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

pub const PRIVATE_KEY_VAR: &str = "AURORA_TESTNET_PRIVATE_KEY";
pub const RPC_URL_VAR: &str = "AURORA_TESTNET_RPC_URL";
pub const CHAIN_ID_VAR: &str = "AURORA_CHAIN_ID";
pub const CONFIRMATIONS_VAR: &str = "HARNESS_CONFIRMATIONS";
pub const POLL_INTERVAL_VAR: &str = "HARNESS_POLL_INTERVAL_MS";

/// Signing key kept out of `Debug` output
#[derive(Clone)]
struct SigningSecret(String);

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret(<redacted>)")
    }
}

/// Everything needed to bind to a JSON-RPC endpoint.
/// The signing key is treated as opaque here, it is validated by [`crate::binding::Binding::bind`].
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    pub url: String,
    signing_key: SigningSecret,
    pub chain_id: u64,
    pub confirmations: usize,
    pub poll_interval: Duration,
}

impl EndpointConfig {
    pub fn new(url: impl Into<String>, signing_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            signing_key: SigningSecret(signing_key.into()),
            chain_id: AURORA_TESTNET_CHAIN_ID,
            confirmations: DEFAULT_CONFIRMATIONS,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = chain_id;
        self
    }

    pub fn with_confirmations(mut self, confirmations: usize) -> Self {
        self.confirmations = confirmations;
        self
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn signing_key(&self) -> &str {
        &self.signing_key.0
    }

    /// Reads the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, only the private key is mandatory
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let signing_key = lookup(PRIVATE_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingVar(PRIVATE_KEY_VAR))?;
        let url = lookup(RPC_URL_VAR).unwrap_or_else(|| DEFAULT_RPC_URL.to_owned());

        let mut config = Self::new(url, signing_key);
        if let Some(chain_id) = parse_var::<u64>(&lookup, CHAIN_ID_VAR)? {
            config.chain_id = chain_id;
        }
        if let Some(confirmations) = parse_var::<usize>(&lookup, CONFIRMATIONS_VAR)? {
            config.confirmations = confirmations;
        }
        if let Some(poll_ms) = parse_var::<u64>(&lookup, POLL_INTERVAL_VAR)? {
            config.poll_interval = Duration::from_millis(poll_ms);
        }
        Ok(config)
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    lookup(name)
        .map(|raw| {
            raw.trim().parse::<T>().map_err(|err| ConfigError::InvalidVar {
                name,
                reason: err.to_string(),
            })
        })
        .transpose()
}
