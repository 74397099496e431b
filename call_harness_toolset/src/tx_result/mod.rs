pub mod call_result;
pub mod deploy_result;
pub mod log_parser;
pub mod view_result;

pub use self::{
    call_result::CallResult, deploy_result::DeploymentResult, view_result::ViewResult,
};
use crate::{
    error::CallError,
    invocation::Invocation,
    statistic::statistic_consumer::{Statistic, StatisticConsumer},
};
use ethers::abi::Token;
use serde_json::Value;

/// Outcome of one invocation. Created once, never mutated afterwards
#[derive(Debug, Clone, PartialEq)]
pub enum InvocationResult {
    Success(Vec<Token>),
    Failure(CallError),
}

impl InvocationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn value(&self) -> Option<&[Token]> {
        match self {
            Self::Success(tokens) => Some(tokens),
            Self::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&CallError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(err) => Some(err),
        }
    }

    pub fn into_result(self) -> Result<Vec<Token>, CallError> {
        match self {
            Self::Success(tokens) => Ok(tokens),
            Self::Failure(err) => Err(err),
        }
    }
}

/// `{ method_name, args, outcome }` record of one invocation,
/// `details` is only present when the invocation reached the network
#[derive(Debug, Clone)]
pub struct TxResult {
    pub method_name: String,
    pub args: Vec<Value>,
    pub outcome: InvocationResult,
    pub details: Option<TxResultDetails>,
}

#[derive(Debug, Clone)]
pub enum TxResultDetails {
    View(ViewResult),
    Call(CallResult),
}

impl TxResult {
    pub fn new(
        invocation: &Invocation,
        outcome: InvocationResult,
        details: Option<TxResultDetails>,
    ) -> Self {
        Self {
            method_name: invocation.method_name.clone(),
            args: invocation.args.clone(),
            outcome,
            details,
        }
    }

    /// Record of an invocation rejected before any network round trip
    pub fn rejected(invocation: &Invocation, err: CallError) -> Self {
        Self::new(invocation, InvocationResult::Failure(err), None)
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }

    pub fn call_details(&self) -> Option<&CallResult> {
        match &self.details {
            Some(TxResultDetails::Call(call)) => Some(call),
            _ => None,
        }
    }

    /// Feeds the record to consumers owned elsewhere, e.g. while a batch is still running
    pub fn populate_statistic(self, consumers: &mut [Box<dyn StatisticConsumer>]) -> Self {
        let statistic = Statistic::from(&self);
        consumers
            .iter_mut()
            .for_each(|consumer| consumer.consume_statistic(&statistic));
        self
    }
}
