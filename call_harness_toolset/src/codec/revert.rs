use crate::{codec::render::tokens_to_json, interface::ContractInterface};
use ethers::{
    abi::{self, ParamType, Token},
    types::{Bytes, U256},
    utils::id,
};
use std::fmt;

/// Selector of `Error(string)`
pub const ERROR_SELECTOR: [u8; 4] = [0x08, 0xc3, 0x79, 0xa0];
/// Selector of `Panic(uint256)`
pub const PANIC_SELECTOR: [u8; 4] = [0x4e, 0x48, 0x7b, 0x71];

/// Reason reported by the contract itself when a call is rejected
#[derive(Debug, Clone, PartialEq)]
pub enum RevertReason {
    /// `require(cond, "message")` / `revert("message")`
    Message(String),
    /// Compiler inserted check, e.g. `0x11` for arithmetic overflow
    Panic(U256),
    /// Custom error declared in the contract interface
    Custom { name: String, args: Vec<Token> },
    /// Revert data that matches no known layout
    Raw(Bytes),
    /// The node reported a revert without returning data
    Unspecified(Option<String>),
}

impl RevertReason {
    /// Decodes the standard `Error(string)` and `Panic(uint256)` layouts, anything else stays raw
    pub fn from_data(data: &[u8]) -> Self {
        if data.is_empty() {
            return Self::Unspecified(None);
        }
        if data.len() >= 4 {
            let (selector, payload) = data.split_at(4);
            if selector == ERROR_SELECTOR {
                if let Ok(mut tokens) = abi::decode(&[ParamType::String], payload) {
                    if let Some(Token::String(message)) = tokens.pop() {
                        return Self::Message(message);
                    }
                }
            } else if selector == PANIC_SELECTOR {
                if let Ok(mut tokens) = abi::decode(&[ParamType::Uint(256)], payload) {
                    if let Some(Token::Uint(code)) = tokens.pop() {
                        return Self::Panic(code);
                    }
                }
            }
        }
        Self::Raw(Bytes::from(data.to_vec()))
    }

    /// Matches raw revert data against the custom errors declared in `interface`
    pub fn resolve(self, interface: &ContractInterface) -> Self {
        let data = match &self {
            Self::Raw(data) if data.len() >= 4 => data.clone(),
            _ => return self,
        };

        let (selector, payload) = data.split_at(4);
        interface
            .abi()
            .errors()
            .find_map(|error| {
                let kinds = error
                    .inputs
                    .iter()
                    .map(|param| param.kind.clone())
                    .collect::<Vec<_>>();
                let signature = format!(
                    "{}({})",
                    error.name,
                    kinds
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(",")
                );
                (id(signature) == selector)
                    .then(|| abi::decode(&kinds, payload).ok())
                    .flatten()
                    .map(|args| Self::Custom {
                        name: error.name.clone(),
                        args,
                    })
            })
            .unwrap_or(self)
    }
}

impl fmt::Display for RevertReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(message) => write!(f, "{message}"),
            Self::Panic(code) => write!(f, "panic code {code:#x}"),
            Self::Custom { name, args } => write!(f, "{name}{}", tokens_to_json(args)),
            Self::Raw(data) => write!(f, "0x{}", hex::encode(data)),
            Self::Unspecified(Some(message)) => write!(f, "{message}"),
            Self::Unspecified(None) => f.write_str("execution reverted"),
        }
    }
}

/// Encodes `Error(string)` revert data
pub fn encode_error_message(message: &str) -> Vec<u8> {
    [
        ERROR_SELECTOR.as_slice(),
        &abi::encode(&[Token::String(message.to_owned())]),
    ]
    .concat()
}
