pub mod call;
pub mod deploy_tx;
pub mod immutable_tx;
pub mod mutable_tx;
pub mod payable_tx;
pub mod view;
