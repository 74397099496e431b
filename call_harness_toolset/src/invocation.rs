use ethers::types::U256;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One requested contract method call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invocation {
    pub method_name: String,
    pub args: Vec<Value>,
    /// Native value attached to the call, only accepted by `payable` methods
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<U256>,
}

impl Invocation {
    pub fn new(method_name: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            method_name: method_name.into(),
            args,
            value: None,
        }
    }

    /// Takes the argument list as a single JSON value: an array is the argument list,
    /// `null` means no arguments and any other value is the only argument
    pub fn with_args(method_name: impl Into<String>, args: Value) -> Self {
        let args = match args {
            Value::Array(args) => args,
            Value::Null => vec![],
            arg => vec![arg],
        };
        Self::new(method_name, args)
    }

    pub fn with_value(mut self, value: U256) -> Self {
        self.value = Some(value);
        self
    }

    pub(crate) fn attached_value(&self) -> U256 {
        self.value.unwrap_or_default()
    }
}
