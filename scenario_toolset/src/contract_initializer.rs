use call_harness_toolset::{
    error::InterfaceError, interface::ContractInterface, invocation::Invocation, Address,
};
use serde_json::Value;

/// Describes how a contract is brought to a usable state:
/// which artifact to deploy, with which constructor arguments,
/// and which invocations have to follow the deployment.
pub trait ContractInitializer {
    fn get_interface(&self) -> Result<ContractInterface, InterfaceError>;

    fn get_constructor_args(&self) -> Vec<Value> {
        vec![]
    }

    /// Run in order right after the deployment is confirmed, `signer` is the deployer
    fn get_init_invocations(&self, signer: Address) -> Vec<Invocation>;
}
