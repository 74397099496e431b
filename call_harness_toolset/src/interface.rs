use crate::{codec::coerce::parse_hex, error::InterfaceError};
use ethers::{
    abi::{Abi, Constructor, Function, ParamType, StateMutability},
    types::Bytes,
};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// Static description of a contract: its ABI plus optional creation bytecode.
/// Immutable once loaded, the harness only ever borrows it.
#[derive(Debug, Clone)]
pub struct ContractInterface {
    name: Option<String>,
    abi: Abi,
    bytecode: Option<Bytes>,
}

/// The subset of a Hardhat compilation artifact the harness needs
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Artifact {
    contract_name: Option<String>,
    abi: Abi,
    #[serde(default)]
    bytecode: Option<String>,
}

impl ContractInterface {
    pub fn new(abi: Abi, bytecode: Option<Bytes>) -> Result<Self, InterfaceError> {
        validate_abi(&abi)?;
        Ok(Self {
            name: None,
            abi,
            bytecode: bytecode.filter(|code| !code.is_empty()),
        })
    }

    /// Accepts either a Hardhat artifact (`{ contractName, abi, bytecode }`) or a bare JSON ABI
    pub fn from_artifact_json(json: &str) -> Result<Self, InterfaceError> {
        let value: Value = serde_json::from_str(json)?;
        if value.is_array() {
            return Self::new(serde_json::from_value(value)?, None);
        }

        let artifact: Artifact = serde_json::from_value(value)?;
        let bytecode = artifact
            .bytecode
            .as_deref()
            .map(parse_hex)
            .transpose()
            .map_err(InterfaceError::Bytecode)?
            .map(Bytes::from);

        let mut interface = Self::new(artifact.abi, bytecode)?;
        interface.name = artifact.contract_name;
        Ok(interface)
    }

    pub fn from_artifact_file(path: impl AsRef<Path>) -> Result<Self, InterfaceError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| InterfaceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_artifact_json(&json)
    }

    /// Builds an interface from human-readable declarations,
    /// e.g. `"function TestInputPars13(uint256) view returns (uint256)"`
    pub fn from_human_readable(signatures: &[&str]) -> Result<Self, InterfaceError> {
        let abi = ethers::abi::parse_abi(signatures)
            .map_err(|err| InterfaceError::HumanReadable(err.to_string()))?;
        Self::new(abi, None)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_bytecode(mut self, bytecode: impl Into<Bytes>) -> Self {
        self.bytecode = Some(bytecode.into()).filter(|code| !code.is_empty());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn abi(&self) -> &Abi {
        &self.abi
    }

    pub fn bytecode(&self) -> Option<&Bytes> {
        self.bytecode.as_ref()
    }

    pub fn constructor(&self) -> Option<&Constructor> {
        self.abi.constructor()
    }

    /// All overloads declared under `name`, empty when the method is unknown
    pub fn functions(&self, name: &str) -> &[Function] {
        self.abi
            .functions
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn has_method(&self, name: &str) -> bool {
        !self.functions(name).is_empty()
    }
}

/// `view` and `pure` methods are dispatched as queries, everything else as transactions
pub fn is_read_only(function: &Function) -> bool {
    matches!(
        function.state_mutability,
        StateMutability::View | StateMutability::Pure
    )
}

pub fn is_payable(function: &Function) -> bool {
    function.state_mutability == StateMutability::Payable
}

fn validate_abi(abi: &Abi) -> Result<(), InterfaceError> {
    let constructor = abi
        .constructor()
        .into_iter()
        .map(|constructor| ("constructor".to_owned(), &constructor.inputs));
    let functions = abi.functions().flat_map(|function| {
        [
            (function.signature(), &function.inputs),
            (function.signature(), &function.outputs),
        ]
    });
    let errors = abi
        .errors()
        .map(|error| (format!("error {}", error.name), &error.inputs));

    for (item, params) in constructor.chain(functions).chain(errors) {
        for param in params {
            validate_kind(&item, &param.kind)?;
        }
    }
    for event in abi.events() {
        for param in &event.inputs {
            validate_kind(&format!("event {}", event.name), &param.kind)?;
        }
    }
    Ok(())
}

fn validate_kind(item: &str, kind: &ParamType) -> Result<(), InterfaceError> {
    let supported = match kind {
        ParamType::Uint(bits) | ParamType::Int(bits) => (8..=256).contains(bits) && bits % 8 == 0,
        ParamType::FixedBytes(size) => (1..=32).contains(size),
        ParamType::Array(inner) | ParamType::FixedArray(inner, _) => {
            return validate_kind(item, inner)
        }
        ParamType::Tuple(kinds) => {
            return kinds.iter().try_for_each(|kind| validate_kind(item, kind))
        }
        ParamType::Address | ParamType::Bytes | ParamType::Bool | ParamType::String => true,
    };

    if supported {
        Ok(())
    } else {
        Err(InterfaceError::UnsupportedType {
            item: item.to_owned(),
            kind: kind.to_string(),
        })
    }
}
