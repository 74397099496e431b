
use crate::contract_initializer::{bind, deployed_context, mock_chain, random_key, OWNER_KEY};
use call_harness_toolset::{
    codec::{revert::encode_error_message, RevertReason},
    error::DeploymentError,
    ethers::utils::get_contract_address,
    harness::CallHarness,
    invocation::Invocation,
    Address, Token,
};
use scenario_toolset::aurora_test::{embedded_interface, owner_query, DEFAULT_NEAR_ACCOUNT};
use serde_json::json;
use test_contract::aurora_test_interface;

#[tokio::test]
async fn test_deployment_does_not_initialize() -> anyhow::Result<()> {
    let chain = mock_chain()?;
    let binding = bind(&chain, OWNER_KEY)?;
    let interface = aurora_test_interface()?;
    let harness = CallHarness::new(&binding, &interface);

    let deployment = harness.deploy(&[]).await?;
    assert!(deployment.confirmed);
    assert_eq!(
        deployment.contract_address,
        get_contract_address(binding.signer_address(), 0u64)
    );
    assert!(chain.has_code(deployment.contract_address));

    let results = harness
        .execute(
            deployment.contract_address,
            &[
                owner_query(DEFAULT_NEAR_ACCOUNT),
                Invocation::with_args("initialize", json!(DEFAULT_NEAR_ACCOUNT)),
                owner_query(DEFAULT_NEAR_ACCOUNT),
            ],
        )
        .await;

    assert_eq!(
        results[0].outcome.value(),
        Some(&[Token::Address(Address::zero())][..])
    );
    assert!(results[1].is_success());
    assert_eq!(
        results[2].outcome.value(),
        Some(&[Token::Address(binding.signer_address())][..])
    );

    Ok(())
}

#[tokio::test]
async fn test_initialize_context() -> anyhow::Result<()> {
    let (chain, context) = deployed_context().await?;

    let deployment = context
        .deployment
        .clone()
        .ok_or_else(|| anyhow::anyhow!("deployed context without deployment"))?;
    assert_eq!(deployment.contract_address, context.address);
    // creation and initialize
    assert_eq!(chain.nonce(context.binding.signer_address()), 2);

    let owner = context
        .harness()
        .execute_one(context.address, &owner_query(DEFAULT_NEAR_ACCOUNT))
        .await;
    assert_eq!(
        owner.outcome.value(),
        Some(&[Token::Address(context.binding.signer_address())][..])
    );

    Ok(())
}

#[tokio::test]
async fn test_distinct_deployments() -> anyhow::Result<()> {
    let chain = mock_chain()?;
    let interface = aurora_test_interface()?;
    let first = bind(&chain, OWNER_KEY)?;
    let second = bind(&chain, &random_key())?;

    let a = CallHarness::new(&first, &interface).deploy(&[]).await?;
    let b = CallHarness::new(&first, &interface).deploy(&[]).await?;
    let c = CallHarness::new(&second, &interface).deploy(&[]).await?;

    assert_ne!(a.contract_address, b.contract_address);
    assert_ne!(a.contract_address, c.contract_address);
    assert_ne!(a.tx_hash, b.tx_hash);

    Ok(())
}

#[tokio::test]
async fn test_missing_bytecode() -> anyhow::Result<()> {
    let chain = mock_chain()?;
    let binding = bind(&chain, OWNER_KEY)?;
    let interface = embedded_interface()?;

    let err = CallHarness::new(&binding, &interface)
        .deploy(&[])
        .await
        .unwrap_err();

    assert!(matches!(err, DeploymentError::MissingBytecode), "{err:?}");
    assert_eq!(chain.network_calls(), 0);

    Ok(())
}

#[tokio::test]
async fn test_constructor_args_mismatch() -> anyhow::Result<()> {
    let chain = mock_chain()?;
    let binding = bind(&chain, OWNER_KEY)?;
    let interface = aurora_test_interface()?;

    let err = CallHarness::new(&binding, &interface)
        .deploy(&[json!(1)])
        .await
        .unwrap_err();

    assert!(matches!(err, DeploymentError::TypeMismatch(_)), "{err:?}");
    assert_eq!(chain.network_calls(), 0);

    Ok(())
}

#[tokio::test]
async fn test_unknown_bytecode_is_rejected() -> anyhow::Result<()> {
    let chain = mock_chain()?;
    let binding = bind(&chain, OWNER_KEY)?;
    let interface = aurora_test_interface()?.with_bytecode(vec![0xfe]);

    let err = CallHarness::new(&binding, &interface)
        .deploy(&[])
        .await
        .unwrap_err();

    assert!(matches!(err, DeploymentError::Rejected(_)), "{err:?}");
    assert_eq!(chain.nonce(binding.signer_address()), 0);

    Ok(())
}

#[tokio::test]
async fn test_reverting_constructor() -> anyhow::Result<()> {
    const FAILING_BYTECODE: [u8; 2] = [0xde, 0xad];

    let chain = mock_chain()?;
    chain.register(FAILING_BYTECODE, |_, _| Err(encode_error_message("constructor failed")));
    let binding = bind(&chain, OWNER_KEY)?;
    let interface = aurora_test_interface()?.with_bytecode(FAILING_BYTECODE.to_vec());
    let harness = CallHarness::new(&binding, &interface);

    let err = harness.deploy(&[]).await.unwrap_err();
    assert!(matches!(err, DeploymentError::Rejected(_)), "{err:?}");

    // mined with status 0 when the node does not simulate it first
    chain.skip_preflight(true);
    let err = harness.deploy(&[]).await.unwrap_err();
    assert!(
        matches!(err, DeploymentError::Reverted(RevertReason::Unspecified(None))),
        "{err:?}"
    );

    Ok(())
}
