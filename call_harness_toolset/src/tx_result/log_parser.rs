use crate::{
    error::{HarnessError, Result},
    interface::ContractInterface,
    tx_result::{TxResult, TxResultDetails},
};
use ethers::abi::{RawLog, Token};

/// Event emitted by a confirmed transaction, decoded against the contract interface
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedEvent {
    pub name: String,
    pub params: Vec<(String, Token)>,
}

impl DecodedEvent {
    pub fn param(&self, name: &str) -> Option<&Token> {
        self.params
            .iter()
            .find(|(param, _)| param == name)
            .map(|(_, value)| value)
    }
}

/// Extracts the events emitted by a contract method
pub trait LogParser {
    /// Raw logs in emission order, empty for queries and rejected invocations
    fn logs(&self) -> Vec<RawLog>;

    /// Logs whose first topic matches a non-anonymous event of `interface`, unknown logs are skipped
    fn events(&self, interface: &ContractInterface) -> Vec<DecodedEvent> {
        self.logs()
            .into_iter()
            .filter_map(|log| {
                let topic = *log.topics.first()?;
                let event = interface
                    .abi()
                    .events()
                    .find(|event| !event.anonymous && event.signature() == topic)?;
                let parsed = event.parse_log(log).ok()?;
                Some(DecodedEvent {
                    name: event.name.clone(),
                    params: parsed
                        .params
                        .into_iter()
                        .map(|param| (param.name, param.value))
                        .collect(),
                })
            })
            .collect()
    }

    /// Check that an event named `name` was emitted
    fn check_event(&self, interface: &ContractInterface, name: &str) -> Result<DecodedEvent> {
        self.events(interface)
            .into_iter()
            .find(|event| event.name == name)
            .ok_or_else(|| HarnessError::Custom(format!("Event not found: {name}")))
    }
}

impl LogParser for TxResult {
    fn logs(&self) -> Vec<RawLog> {
        match &self.details {
            Some(TxResultDetails::Call(call)) => call.logs.clone(),
            Some(TxResultDetails::View(_)) | None => vec![],
        }
    }
}
