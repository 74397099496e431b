use crate::{
    codec::render::{render_values, token_to_json, tokens_to_json},
    error::Result,
    tx_result::{DeploymentResult, InvocationResult, TxResult},
};
use ethers::abi::Token;
pub use owo_colors::OwoColorize;

#[macro_export]
macro_rules! print_log {
    ( $x:expr, $($y:expr),+ ) => {{
        let thread_name = std::thread::current()
            .name()
            .unwrap_or("main")
            .to_string();
        if thread_name == "main" {
            println!($x, $($y),+);
        } else {
            println!(
                concat!("{}\n    ", $x),
                $crate::res_logger::OwoColorize::bold(&thread_name),
                $($y),+
            );
        }
    }};
    ( $x:expr ) => {
        $crate::print_log!("{}", $x)
    };
}

/// Human readable rendering of harness results
pub trait ResLogger {
    /// Plain text line, e.g. `TestInputPars11(true) -> true`
    fn render(&self) -> String;

    /// Prints the coloured line, failures are printed but never returned
    fn log_outcome(&self);

    /// Fails on the first unsuccessful outcome after logging it
    fn check_res_log_failures(&self) -> Result<()>;
}

impl ResLogger for TxResult {
    fn render(&self) -> String {
        let call = format!("{}({})", self.method_name, render_values(&self.args));
        match &self.outcome {
            InvocationResult::Success(tokens) => {
                format!("{call} -> {}", render_outcome(tokens))
            }
            InvocationResult::Failure(err) => format!("{call} failed: {err}"),
        }
    }

    fn log_outcome(&self) {
        let call = format!("{}({})", self.method_name, render_values(&self.args));
        match &self.outcome {
            InvocationResult::Success(tokens) => {
                print_log!("{} -> {}", call.green(), render_outcome(tokens).bright_blue())
            }
            InvocationResult::Failure(err) => {
                print_log!("{} {} {}", call.yellow(), "failed:".red().bold(), err.bright_red())
            }
        }
    }

    fn check_res_log_failures(&self) -> Result<()> {
        if let Some(err) = self.outcome.failure() {
            self.log_outcome();
            return Err(err.clone().into());
        }
        Ok(())
    }
}

impl ResLogger for [TxResult] {
    fn render(&self) -> String {
        self.iter()
            .map(ResLogger::render)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn log_outcome(&self) {
        self.iter().for_each(ResLogger::log_outcome);
    }

    fn check_res_log_failures(&self) -> Result<()> {
        self.iter().try_for_each(ResLogger::check_res_log_failures)
    }
}

impl ResLogger for DeploymentResult {
    fn render(&self) -> String {
        format!(
            "Contract deployed at {:?} (tx {:?})",
            self.contract_address, self.tx_hash
        )
    }

    fn log_outcome(&self) {
        print_log!(
            "{} {} {}",
            "Contract deployed at".green(),
            format!("{:?}", self.contract_address).bright_blue().bold(),
            format!("(tx {:?})", self.tx_hash).dimmed()
        );
    }

    fn check_res_log_failures(&self) -> Result<()> {
        Ok(())
    }
}

/// Single return values are printed bare, several as a JSON array
fn render_outcome(tokens: &[Token]) -> String {
    match tokens {
        [] => "()".to_owned(),
        [token] => render_values(&[token_to_json(token)]),
        _ => tokens_to_json(tokens).to_string(),
    }
}
