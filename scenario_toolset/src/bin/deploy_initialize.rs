use call_harness_toolset::{
    print_log,
    res_logger::{OwoColorize, ResLogger},
};
use clap::Parser;
use scenario_toolset::{
    aurora_test::{owner_query, AuroraTestInitializer, DEFAULT_NEAR_ACCOUNT},
    context_initialize::{bind_from_env, initialize_context},
};
use std::path::PathBuf;

/// Deploys AuroraTest, binds it to a NEAR account and prints the recorded owner
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Compiled Hardhat artifact of AuroraTest
    #[arg(long, env = "AURORA_TEST_ARTIFACT")]
    artifact: PathBuf,

    /// NEAR account passed to `initialize`
    #[arg(long, default_value = DEFAULT_NEAR_ACCOUNT)]
    near_account: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    let binding = bind_from_env()?;
    let initializer =
        AuroraTestInitializer::from_artifact(&args.artifact).with_near_account(&args.near_account);
    let (context, _) = initialize_context(binding, &initializer).await?;

    let owner = context
        .harness()
        .execute(context.address, &[owner_query(&args.near_account)])
        .await;
    owner.log_outcome();
    owner.check_res_log_failures()?;

    print_log!(
        "{} {}",
        "AuroraTest deployed to".bright_yellow(),
        format!("{:?}", context.address).bold()
    );
    Ok(())
}
