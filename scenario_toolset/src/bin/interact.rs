use call_harness_toolset::{
    codec::parse_address,
    interface::ContractInterface,
    print_log,
    res_logger::{OwoColorize, ResLogger},
    statistic::{
        call_counter::CallCounter, gas_usage_aggregator::GasUsage, mode_printer::ModePrinter,
        statistic_consumer::StatisticConsumer, statistic_group_ext::StatisticGroupExt,
        statistic_group_printer::StatisticGroupPrinter,
    },
    Address,
};
use clap::Parser;
use scenario_toolset::{
    aurora_test::{embedded_interface, interaction_invocations},
    context_initialize::{attach_context, bind_from_env},
};
use std::{path::PathBuf, time::Duration};

/// Runs the AuroraTest interaction list against a deployed contract
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Address of the deployed AuroraTest contract
    #[arg(long, env = "AURORA_TEST_CONTRACT", value_parser = parse_address)]
    contract: Address,

    /// Hardhat artifact to take the interface from instead of the embedded one
    #[arg(long, env = "AURORA_TEST_ARTIFACT")]
    artifact: Option<PathBuf>,

    /// Append the statistics to this file as well
    #[arg(long)]
    report: Option<PathBuf>,

    /// Deadline of a single invocation, in seconds
    #[arg(long)]
    deadline: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    let binding = bind_from_env()?;
    let balance = binding.balance(binding.signer_address()).await?;
    print_log!("{} {}", "Signer's balance".bright_yellow(), balance.bright_magenta());

    let interface = match &args.artifact {
        Some(path) => ContractInterface::from_artifact_file(path)?,
        None => embedded_interface()?,
    };
    let context = attach_context(binding, interface, args.contract);

    let harness = match args.deadline {
        Some(secs) => context.harness().with_deadline(Duration::from_secs(secs)),
        None => context.harness(),
    };
    let results = harness
        .execute(
            context.address,
            &interaction_invocations(context.binding.signer_address()),
        )
        .await;
    results.log_outcome();

    let mode_printer = args.report.map(ModePrinter::from).unwrap_or_default();
    let consumers: [Box<dyn StatisticConsumer>; 2] = [
        Box::new(CallCounter::new(mode_printer.clone())),
        Box::new(GasUsage::new(mode_printer)),
    ];
    results.populate_statistic(consumers).print_statistic()?;

    Ok(())
}
