use crate::contract_initializer::ContractInitializer;
use call_harness_toolset::{
    binding::Binding,
    config::EndpointConfig,
    harness::CallHarness,
    interface::ContractInterface,
    print_log,
    res_logger::{OwoColorize, ResLogger},
    tx_result::{DeploymentResult, TxResult},
    Address,
};

/// A deployed (or attached) contract together with the binding that drives it
#[derive(Debug)]
pub struct ContractContext {
    pub binding: Binding,
    pub interface: ContractInterface,
    pub address: Address,
    /// `None` when attached to a contract deployed elsewhere
    pub deployment: Option<DeploymentResult>,
}

impl ContractContext {
    pub fn harness(&self) -> CallHarness<'_> {
        CallHarness::new(&self.binding, &self.interface)
    }
}

/// Loads `.env` when present and binds with [`EndpointConfig::from_env`]
pub fn bind_from_env() -> anyhow::Result<Binding> {
    dotenv::dotenv().ok();
    let config = EndpointConfig::from_env()?;
    let binding = Binding::bind(&config)?;
    print_log!("Signer {}", format!("{:?}", binding.signer_address()).bright_green());
    Ok(binding)
}

/// Deploys the initializer's contract, then runs its post-deploy invocations in order.
/// Fails when the deployment or any of these invocations fails.
pub async fn initialize_context(
    binding: Binding,
    contract_initializer: &impl ContractInitializer,
) -> anyhow::Result<(ContractContext, Vec<TxResult>)> {
    let interface = contract_initializer.get_interface()?;
    let deployment = CallHarness::new(&binding, &interface)
        .deploy(&contract_initializer.get_constructor_args())
        .await?;
    deployment.log_outcome();

    let context = ContractContext {
        address: deployment.contract_address,
        deployment: Some(deployment),
        binding,
        interface,
    };

    let init_results = context
        .harness()
        .execute(
            context.address,
            &contract_initializer.get_init_invocations(context.binding.signer_address()),
        )
        .await;
    init_results.log_outcome();
    init_results.check_res_log_failures()?;

    Ok((context, init_results))
}

/// Context for a contract that is already deployed at `address`
pub fn attach_context(
    binding: Binding,
    interface: ContractInterface,
    address: Address,
) -> ContractContext {
    print_log!(
        "Attached to {} at {}",
        interface.name().unwrap_or("contract").green(),
        format!("{address:?}").blue()
    );
    ContractContext {
        binding,
        interface,
        address,
        deployment: None,
    }
}
