use crate::{
    binding::Binding,
    codec::{coerce::coerce_params, RevertReason},
    error::{CallError, DeploymentError, NetworkError},
    interface::{is_payable, is_read_only, ContractInterface},
    invocation::Invocation,
    pending_tx::{
        call::Call,
        deploy_tx::{DeployPendingTx, PendingDeployment},
        immutable_tx::ImmutablePendingTx,
        mutable_tx::MutablePendingTx,
        payable_tx::PayablePendingTx,
        view::View,
    },
    tx_result::{
        CallResult, DeploymentResult, InvocationResult, TxResult, TxResultDetails, ViewResult,
    },
};
use ethers::{
    abi::Function,
    types::{Address, Bytes, U256},
};
use serde_json::Value;
use std::time::Duration;
use tokio::time::timeout;

type Dispatched = (InvocationResult, Option<TxResultDetails>);

/// Executes invocations against one contract interface over one binding.
///
/// Invocations run strictly in order: a mutating call is confirmed before the
/// next invocation is prepared. A failing invocation is recorded and the batch
/// carries on.
#[derive(Debug, Clone, Copy)]
pub struct CallHarness<'a> {
    binding: &'a Binding,
    interface: &'a ContractInterface,
    deadline: Option<Duration>,
}

impl<'a> CallHarness<'a> {
    pub fn new(binding: &'a Binding, interface: &'a ContractInterface) -> Self {
        Self {
            binding,
            interface,
            deadline: None,
        }
    }

    /// Upper bound for dispatching a single invocation, including its confirmation
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn binding(&self) -> &'a Binding {
        self.binding
    }

    pub fn interface(&self) -> &'a ContractInterface {
        self.interface
    }

    /// One result per invocation, in input order
    pub async fn execute(&self, target: Address, invocations: &[Invocation]) -> Vec<TxResult> {
        let mut results = Vec::with_capacity(invocations.len());
        for invocation in invocations {
            results.push(self.execute_one(target, invocation).await);
        }
        results
    }

    pub async fn execute_one(&self, target: Address, invocation: &Invocation) -> TxResult {
        let (function, input) = match self.prepare(invocation) {
            Ok(prepared) => prepared,
            Err(err) => return TxResult::rejected(invocation, err),
        };

        let dispatch = self.dispatch(target, function, input, invocation.attached_value());
        let (outcome, details) = match self.deadline {
            Some(deadline) => timeout(deadline, dispatch).await.unwrap_or_else(|_| {
                (InvocationResult::Failure(CallError::Timeout(deadline)), None)
            }),
            None => dispatch.await,
        };
        TxResult::new(invocation, outcome, details)
    }

    /// Deploys the interface bytecode and waits for the contract address.
    /// The new contract is not initialized.
    pub async fn deploy(
        &self,
        constructor_args: &[Value],
    ) -> Result<DeploymentResult, DeploymentError> {
        let pending = self.submit_deployment(constructor_args).await?;
        match self.deadline {
            Some(deadline) => timeout(deadline, pending.confirm())
                .await
                .unwrap_or_else(|_| {
                    Err(DeploymentError::Unconfirmed(format!(
                        "no confirmation within {deadline:?}"
                    )))
                }),
            None => pending.confirm().await,
        }
    }

    /// Submits the creation transaction without waiting for its confirmation
    pub async fn submit_deployment(
        &self,
        constructor_args: &[Value],
    ) -> Result<PendingDeployment<'a>, DeploymentError> {
        let bytecode = self
            .interface
            .bytecode()
            .ok_or(DeploymentError::MissingBytecode)?;

        let creation_code = match self.interface.constructor() {
            Some(constructor) => {
                let tokens = coerce_params(&constructor.inputs, constructor_args)
                    .map_err(DeploymentError::TypeMismatch)?;
                constructor
                    .encode_input(bytecode.to_vec(), &tokens)
                    .map_err(|err| DeploymentError::TypeMismatch(err.to_string()))?
            }
            None if constructor_args.is_empty() => bytecode.to_vec(),
            None => {
                return Err(DeploymentError::TypeMismatch(format!(
                    "expected 0 argument(s), got {}",
                    constructor_args.len()
                )))
            }
        };

        DeployPendingTx::new(self.binding, creation_code.into())
            .submit()
            .await
    }

    /// Resolves the overload and encodes the call data, nothing is sent yet
    fn prepare(&self, invocation: &Invocation) -> Result<(&'a Function, Bytes), CallError> {
        let overloads = self.interface.functions(&invocation.method_name);
        if overloads.is_empty() {
            return Err(CallError::UnknownMethod(invocation.method_name.clone()));
        }

        let value = invocation.attached_value();
        let mut mismatch = None;
        for function in overloads {
            let tokens = match coerce_params(&function.inputs, &invocation.args) {
                Ok(tokens) => tokens,
                Err(reason) => {
                    mismatch.get_or_insert(reason);
                    continue;
                }
            };
            if !value.is_zero() && !is_payable(function) {
                mismatch.get_or_insert(format!(
                    "`{}` is not payable, {value} wei attached",
                    function.signature()
                ));
                continue;
            }

            let input = function
                .encode_input(&tokens)
                .map_err(|err| CallError::TypeMismatch(err.to_string()))?;
            return Ok((function, input.into()));
        }

        Err(CallError::TypeMismatch(mismatch.unwrap_or_default()))
    }

    async fn dispatch(
        &self,
        target: Address,
        function: &Function,
        input: Bytes,
        value: U256,
    ) -> Dispatched {
        if is_read_only(function) {
            return match ImmutablePendingTx::new(self.binding, target, input).view().await {
                Ok(return_data) => (
                    self.decode(function, &return_data),
                    Some(TxResultDetails::View(ViewResult::from(return_data))),
                ),
                Err(err) => (self.failure(err), None),
            };
        }

        let confirmation = if is_payable(function) {
            PayablePendingTx::new(self.binding, target, input, value)
                .call()
                .await
        } else {
            MutablePendingTx::new(self.binding, target, input)
                .call()
                .await
        };

        match confirmation {
            Ok(confirmation) => {
                let outcome = if !confirmation.success {
                    InvocationResult::Failure(CallError::Revert(RevertReason::Unspecified(None)))
                } else {
                    match &confirmation.output {
                        Some(output) => self.decode(function, output),
                        None => InvocationResult::Success(vec![]),
                    }
                };
                (
                    outcome,
                    Some(TxResultDetails::Call(CallResult::from(&confirmation))),
                )
            }
            Err(err) => (self.failure(err), None),
        }
    }

    fn decode(&self, function: &Function, data: &[u8]) -> InvocationResult {
        match function.decode_output(data) {
            Ok(tokens) => InvocationResult::Success(tokens),
            Err(err) => InvocationResult::Failure(CallError::Decode(err.to_string())),
        }
    }

    fn failure(&self, err: NetworkError) -> InvocationResult {
        InvocationResult::Failure(match err {
            NetworkError::Revert(reason) => CallError::Revert(reason.resolve(self.interface)),
            transport => transport.into(),
        })
    }
}
