use super::statistic_printer::StatisticPrinter;
use crate::{error::CallError, tx_result::TxResult};
use ethers::types::U256;

/// Aggregated data of a single contract method invocation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statistic {
    pub method_name: String,
    /// `false` when the invocation was rejected before reaching the network
    pub dispatched: bool,
    pub failed: bool,
    /// Only known for confirmed transactions
    pub gas_used: Option<U256>,
}

impl From<&TxResult> for Statistic {
    fn from(tx_res: &TxResult) -> Self {
        Statistic {
            method_name: tx_res.method_name.clone(),
            dispatched: !matches!(
                tx_res.outcome.failure(),
                Some(CallError::UnknownMethod(_) | CallError::TypeMismatch(_))
            ),
            failed: !tx_res.is_success(),
            gas_used: tx_res.call_details().and_then(|call| call.gas_used),
        }
    }
}

/// Trait which should be used for the statistic aggregation
/// Implementor consumes statistic related to particular contract methods
/// * Note: statistic could be cleaned at any stage of the scenario
pub trait StatisticConsumer: Sync + Send + std::fmt::Debug + StatisticPrinter {
    fn consume_statistic(&mut self, stat: &Statistic);
    fn clean_statistic(&mut self);
}
