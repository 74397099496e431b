//! In-process stand-in for an EVM JSON-RPC endpoint.
//!
//! [`MockChain`] implements the harness `Network` seam. Contracts are plain Rust
//! types implementing [`MockContract`], created by factories matched against the
//! creation bytecode. Every transaction is mined immediately into its own block.


pub use aurora_test::{aurora_test_interface, AuroraTest, AURORA_TEST_BYTECODE};

use async_trait::async_trait;
use call_harness_toolset::{
    codec::RevertReason,
    error::{InterfaceError, NetworkError},
    ethers::{
        abi::RawLog,
        types::{Address, Bytes, H256, U256},
        utils::{get_contract_address, keccak256},
    },
    network::{CallRequest, Confirmation, Network},
};
use std::{
    collections::HashMap,
    fmt,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc, Mutex, MutexGuard,
    },
    time::Duration,
};

/// Base cost of a transaction, calldata adds 16 per byte
pub const BASE_GAS: u64 = 21_000;

#[derive(Debug, Clone)]
pub struct CallContext {
    pub caller: Address,
    pub contract: Address,
    pub value: U256,
    pub block_number: u64,
}

#[derive(Debug, Clone, Default)]
pub struct ExecutionOutput {
    pub output: Vec<u8>,
    pub logs: Vec<RawLog>,
}

/// `Err` carries the revert data
pub type ExecutionResult = Result<ExecutionOutput, Vec<u8>>;

pub trait MockContract: Send + Sync + fmt::Debug {
    fn execute(&mut self, ctx: &CallContext, input: &[u8]) -> ExecutionResult;

    /// Calls run on a copy which replaces the contract only when the call succeeds
    fn box_clone(&self) -> Box<dyn MockContract>;
}

/// Builds a contract from the constructor arguments that follow its bytecode
pub type ContractFactory =
    Box<dyn Fn(&CallContext, &[u8]) -> Result<Box<dyn MockContract>, Vec<u8>> + Send + Sync>;

#[derive(Default)]
struct ChainState {
    factories: Vec<(Vec<u8>, ContractFactory)>,
    contracts: HashMap<Address, Box<dyn MockContract>>,
    nonces: HashMap<Address, u64>,
    balances: HashMap<Address, U256>,
    receipts: HashMap<H256, Confirmation>,
    block_number: u64,
}

#[derive(Default)]
pub struct MockChain {
    state: Mutex<ChainState>,
    skip_preflight: AtomicBool,
    confirmation_delay: Duration,
    queries: AtomicUsize,
    submissions: AtomicUsize,
}

impl MockChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chain that knows how to create [`AuroraTest`]
    pub fn with_aurora_test() -> Result<Self, InterfaceError> {
        let interface = Arc::new(aurora_test_interface()?);
        let chain = Self::new();
        chain.register(AURORA_TEST_BYTECODE, move |ctx, constructor_args| {
            if !constructor_args.is_empty() {
                return Err(vec![]);
            }
            Ok(Box::new(AuroraTest::new(interface.clone(), ctx.caller)) as Box<dyn MockContract>)
        });
        Ok(chain)
    }

    /// Confirmations are delivered only after `delay`
    pub fn with_confirmation_delay(mut self, delay: Duration) -> Self {
        self.confirmation_delay = delay;
        self
    }

    pub fn register(
        &self,
        bytecode: impl Into<Vec<u8>>,
        factory: impl Fn(&CallContext, &[u8]) -> Result<Box<dyn MockContract>, Vec<u8>>
            + Send
            + Sync
            + 'static,
    ) {
        self.state()
            .factories
            .push((bytecode.into(), Box::new(factory)));
    }

    pub fn fund(&self, address: Address, amount: U256) {
        *self.state().balances.entry(address).or_default() += amount;
    }

    /// When set, failing transactions are mined with status 0 instead of
    /// being rejected at submission like a failing gas estimation would
    pub fn skip_preflight(&self, skip: bool) {
        self.skip_preflight.store(skip, Ordering::SeqCst);
    }

    pub fn has_code(&self, address: Address) -> bool {
        self.state().contracts.contains_key(&address)
    }

    pub fn nonce(&self, address: Address) -> u64 {
        self.state().nonces.get(&address).copied().unwrap_or_default()
    }

    pub fn block_number(&self) -> u64 {
        self.state().block_number
    }

    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn submissions(&self) -> usize {
        self.submissions.load(Ordering::SeqCst)
    }

    /// Every request that reached the chain, balance lookups excluded
    pub fn network_calls(&self) -> usize {
        self.queries() + self.submissions()
    }

    fn state(&self) -> MutexGuard<'_, ChainState> {
        // a panicking test must not poison the chain for the assertions that follow
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ChainState {
    fn context(&self, request: &CallRequest, contract: Address) -> CallContext {
        CallContext {
            caller: request.from,
            contract,
            value: request.value,
            block_number: self.block_number + 1,
        }
    }

    fn create(
        &mut self,
        request: &CallRequest,
        nonce: u64,
    ) -> Result<(Address, ExecutionOutput), Vec<u8>> {
        let address = get_contract_address(request.from, nonce);
        let ctx = self.context(request, address);
        let (prefix, factory) = self
            .factories
            .iter()
            .find(|(bytecode, _)| request.data.starts_with(bytecode))
            .ok_or_else(Vec::new)?;

        let contract = factory(&ctx, &request.data[prefix.len()..])?;
        self.contracts.insert(address, contract);
        Ok((address, ExecutionOutput::default()))
    }

    fn call(&mut self, request: &CallRequest, to: Address) -> ExecutionResult {
        let ctx = self.context(request, to);
        let Some(contract) = self.contracts.get_mut(&to) else {
            // plain value transfer or a call to an address without code
            return Ok(ExecutionOutput::default());
        };

        let mut candidate = contract.box_clone();
        let output = candidate.execute(&ctx, &request.data)?;
        *contract = candidate;
        Ok(output)
    }

    fn check_funds(&self, request: &CallRequest) -> Result<(), NetworkError> {
        let balance = self.balances.get(&request.from).copied().unwrap_or_default();
        if balance < request.value {
            return Err(NetworkError::Transport(
                "insufficient funds for gas * price + value".to_owned(),
            ));
        }
        Ok(())
    }

    fn transfer(&mut self, from: Address, to: Address, value: U256) {
        if value.is_zero() {
            return;
        }
        *self.balances.entry(from).or_default() -= value;
        *self.balances.entry(to).or_default() += value;
    }
}

impl fmt::Debug for MockChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state();
        f.debug_struct("MockChain")
            .field("block_number", &state.block_number)
            .field("contracts", &state.contracts.len())
            .field("queries", &self.queries())
            .field("submissions", &self.submissions())
            .finish()
    }
}

#[async_trait]
impl Network for MockChain {
    async fn query(&self, request: CallRequest) -> Result<Bytes, NetworkError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        let to = request
            .to
            .ok_or_else(|| NetworkError::Transport("query without a target".to_owned()))?;

        let state = self.state();
        let Some(contract) = state.contracts.get(&to) else {
            return Ok(Bytes::default());
        };
        contract
            .box_clone()
            .execute(&state.context(&request, to), &request.data)
            .map(|res| Bytes::from(res.output))
            .map_err(|data| NetworkError::Revert(RevertReason::from_data(&data)))
    }

    async fn submit(&self, request: CallRequest) -> Result<H256, NetworkError> {
        self.submissions.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state();
        state.check_funds(&request)?;

        let nonce = state.nonces.get(&request.from).copied().unwrap_or_default();
        let tx_hash = H256::from(keccak256(
            [
                request.from.as_bytes(),
                &nonce.to_be_bytes()[..],
                request.data.as_ref(),
            ]
            .concat(),
        ));

        let executed = match request.to {
            Some(to) => state.call(&request, to).map(|output| (None, output)),
            None => state
                .create(&request, nonce)
                .map(|(address, output)| (Some(address), output)),
        };
        let (contract_address, output, success) = match executed {
            Ok((contract_address, output)) => (contract_address, output, true),
            Err(data) if !self.skip_preflight.load(Ordering::SeqCst) => {
                return Err(NetworkError::Revert(RevertReason::from_data(&data)))
            }
            Err(_) => (None, ExecutionOutput::default(), false),
        };
        if let (true, Some(recipient)) = (success, request.to.or(contract_address)) {
            state.transfer(request.from, recipient, request.value);
        }

        state.nonces.insert(request.from, nonce + 1);
        state.block_number += 1;
        let confirmation = Confirmation {
            tx_hash,
            success,
            contract_address,
            gas_used: Some(U256::from(BASE_GAS + 16 * request.data.len() as u64)),
            block_number: Some(state.block_number),
            logs: output.logs,
            output: None,
        };
        state.receipts.insert(tx_hash, confirmation);

        Ok(tx_hash)
    }

    async fn wait_for_confirmation(&self, tx_hash: H256) -> Result<Confirmation, NetworkError> {
        if !self.confirmation_delay.is_zero() {
            tokio::time::sleep(self.confirmation_delay).await;
        }
        self.state()
            .receipts
            .get(&tx_hash)
            .cloned()
            .ok_or_else(|| NetworkError::Transport(format!("unknown transaction {tx_hash:?}")))
    }

    async fn balance(&self, address: Address) -> Result<U256, NetworkError> {
        Ok(self
            .state()
            .balances
            .get(&address)
            .copied()
            .unwrap_or_default())
    }
}
