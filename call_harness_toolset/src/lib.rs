//! Toolset for driving an EVM contract through an ordered list of calls.
//!
//! A [`binding::Binding`] is created once from an [`config::EndpointConfig`],
//! a [`harness::CallHarness`] then executes [`invocation::Invocation`]s against a
//! deployed contract and collects one [`tx_result::TxResult`] per invocation.

pub mod binding;
pub mod codec;
pub mod config;
pub mod error;
pub mod harness;
pub mod interface;
pub mod invocation;
pub mod network;
pub mod pending_tx;
pub mod res_logger;
pub mod statistic;
pub mod tx_result;

pub use ethers;
pub use ethers::{
    abi::Token,
    types::{Address, Bytes, H256, U256},
};
