use crate::codec::revert::RevertReason;
use ethers::types::H256;
use std::{path::PathBuf, time::Duration};
use thiserror::Error;

/// Raised while building a binding or reading its configuration. Fatal: no calls are possible.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    MissingVar(&'static str),
    #[error("Invalid value for {name}: {reason}")]
    InvalidVar { name: &'static str, reason: String },
    #[error("Invalid signing key: {0}")]
    InvalidSigningKey(String),
    #[error("Invalid endpoint url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

#[derive(Debug, Error)]
pub enum InterfaceError {
    #[error("Failed to read {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed contract description: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Malformed human-readable ABI: {0}")]
    HumanReadable(String),
    #[error("Unsupported parameter type {kind} in {item}")]
    UnsupportedType { item: String, kind: String },
    #[error("Invalid bytecode: {0}")]
    Bytecode(String),
}

/// Per-invocation failure. Captured in the invocation result, never aborts a batch.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CallError {
    #[error("Unknown method `{0}`")]
    UnknownMethod(String),
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Reverted: {0}")]
    Revert(RevertReason),
    #[error("Timed out after {0:?}")]
    Timeout(Duration),
    #[error("Failed to decode return data: {0}")]
    Decode(String),
}

/// Failure reported by a [`crate::network::Network`] implementation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NetworkError {
    #[error("Reverted: {0}")]
    Revert(RevertReason),
    #[error("Transport failure: {0}")]
    Transport(String),
}

impl From<NetworkError> for CallError {
    fn from(error: NetworkError) -> Self {
        match error {
            NetworkError::Revert(reason) => CallError::Revert(reason),
            NetworkError::Transport(message) => CallError::Network(message),
        }
    }
}

/// Fatal to a single deployment attempt. Deployments are never retried.
#[derive(Debug, Error)]
pub enum DeploymentError {
    #[error("Contract interface carries no creation bytecode")]
    MissingBytecode,
    #[error("Constructor arguments rejected: {0}")]
    TypeMismatch(String),
    #[error("Deployment rejected before inclusion: {0}")]
    Rejected(String),
    #[error("Deployment reverted: {0}")]
    Reverted(RevertReason),
    #[error("Deployment was not confirmed: {0}")]
    Unconfirmed(String),
    #[error("Receipt of {0:?} carries no contract address")]
    MissingAddress(H256),
}

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Interface error: {0}")]
    Interface(#[from] InterfaceError),
    #[error("Deployment error: {0}")]
    Deployment(#[from] DeploymentError),
    #[error("Call error: {0}")]
    Call(#[from] CallError),
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),
    #[error("Harness error: {0}")]
    Custom(String),
}

pub type Result<T> = std::result::Result<T, HarnessError>;
