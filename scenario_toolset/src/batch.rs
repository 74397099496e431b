use call_harness_toolset::{
    error::{self, HarnessError},
    harness::CallHarness,
    invocation::Invocation,
    tx_result::TxResult,
    Address,
};
use futures::{Future, FutureExt, TryFutureExt};
use serde_json::Value;
use std::pin::Pin;

type ExecutionFuture<'a> = Pin<Box<dyn Future<Output = Vec<TxResult>> + Send + 'a>>;
type ExecutionFutureUnit<'a> = Pin<Box<dyn Future<Output = error::Result<()>> + Send + 'a>>;

pub enum ExecutionOperation<'a> {
    SubBatch(Batch<'a>),
    ContractOperation(ExecutionFuture<'a>),
    UnitOperation(ExecutionFutureUnit<'a>),
}

impl<'a> ExecutionOperation<'a> {
    pub async fn run(self) -> error::Result<Vec<TxResult>> {
        let res = match self {
            ExecutionOperation::SubBatch(block) => block.run().await?,
            ExecutionOperation::ContractOperation(op) => op.await,
            ExecutionOperation::UnitOperation(op) => {
                op.await?;
                vec![]
            }
        };

        Ok(res)
    }
}

/// Ordered list of operations. Operations never overlap: each one,
/// including the confirmation of its transactions, finishes before the next starts.
#[derive(Default)]
pub struct Batch<'a> {
    pub chain: Vec<ExecutionOperation<'a>>,
}

impl<'a> Batch<'a> {
    pub fn new() -> Self {
        Self { chain: vec![] }
    }

    /// Contract invocations produce one record each, whatever their outcome.
    /// Only a failing unit operation stops the batch.
    pub fn run(self) -> Pin<Box<dyn Future<Output = error::Result<Vec<TxResult>>> + Send + 'a>> {
        async move {
            let mut results = vec![];
            for op in self.chain.into_iter() {
                results.extend(op.run().await?);
            }
            Ok(results)
        }
        .boxed()
    }

    pub fn add_op(mut self, op: ExecutionOperation<'a>) -> Self {
        self.chain.push(op);
        self
    }

    pub fn add_ops(mut self, ops: Vec<ExecutionOperation<'a>>) -> Self {
        self.chain.extend(ops);
        self
    }

    /// Shortcut for a single invocation on `target`
    pub fn add_call(
        self,
        harness: CallHarness<'a>,
        target: Address,
        method_name: &str,
        args: Value,
    ) -> Self {
        self.add_op(make_op(
            harness,
            target,
            vec![Invocation::with_args(method_name, args)],
        ))
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}

impl<'a> From<Batch<'a>> for ExecutionOperation<'a> {
    fn from(value: Batch<'a>) -> Self {
        ExecutionOperation::SubBatch(value)
    }
}

impl<'a> From<ExecutionFuture<'a>> for ExecutionOperation<'a> {
    fn from(value: ExecutionFuture<'a>) -> Self {
        ExecutionOperation::ContractOperation(value)
    }
}

impl<'a> From<ExecutionFutureUnit<'a>> for ExecutionOperation<'a> {
    fn from(value: ExecutionFutureUnit<'a>) -> Self {
        ExecutionOperation::UnitOperation(value)
    }
}

/// Runs `invocations` through `harness` when the operation is reached
pub fn make_op<'a>(
    harness: CallHarness<'a>,
    target: Address,
    invocations: Vec<Invocation>,
) -> ExecutionOperation<'a> {
    async move { harness.execute(target, &invocations).await }
        .boxed()
        .into()
}

/// Wraps an arbitrary fallible step, e.g. a sleep or a balance check
pub fn make_unit_op<'a, T, E: core::fmt::Debug>(
    input: impl Future<Output = Result<T, E>> + Send + 'a,
) -> ExecutionOperation<'a> {
    input
        .map(|res| res.map(|_| ()))
        .map_err(|err| HarnessError::Custom(format!("{:?}", err)))
        .boxed()
        .into()
}
