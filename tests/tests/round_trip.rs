
use crate::contract_initializer::{deployed_context, OWNER_ACCOUNT};
use call_harness_toolset::{codec::tokens_to_json, invocation::Invocation};
use serde_json::{json, Value};

const MAX_UINT256: &str =
    "115792089237316195423570985008687907853269984665640564039457584007913129639935";

/// Every `TestInputPars*` method returns its arguments, arguments are given in rendered form
fn echo_cases() -> Vec<(&'static str, Value)> {
    let tuple = json!([7, ["0xabcd", "0xabef"], [1, 2]]);
    vec![
        ("TestInputPars11", json!([true])),
        ("TestInputPars11", json!([false])),
        ("TestInputPars12", json!([OWNER_ACCOUNT])),
        ("TestInputPars13", json!([0])),
        ("TestInputPars13", json!([MAX_UINT256])),
        ("TestInputPars221", json!([OWNER_ACCOUNT, true, 1])),
        ("TestInputPars310", json!([[1, 2, 3, 4, 5]])),
        ("TestInputPars310", json!([[]])),
        ("TestInputPars313", json!([1, OWNER_ACCOUNT, true, [1, 2, 3, 4, 5]])),
        ("TestInputParsStr1", json!(["Hello!"])),
        ("TestInputParsStr1", json!([""])),
        ("TestInputParsStr2", json!([1, "Hello!", [1, 2]])),
        ("TestInputParsBytes1", json!(["0xabcdef"])),
        ("TestInputParsBytes1", json!(["0x"])),
        ("TestInputParsBytes2", json!([1, "0xabcdef", [1, 2, 3]])),
        ("TestInputParsFixedBytes1", json!([["0xabcd", "0xabef"]])),
        ("TestInputParsFixedBytes2", json!([1, ["0xabcd", "0xabef"], [1, 2, 3]])),
        ("TestInputParsTuples1", json!([tuple])),
        ("TestInputParsTuples2", json!([1, tuple, [1, 2]])),
        ("TestInputParsTuples3", json!([[tuple, tuple]])),
        ("TestInputParsTuples4", json!([1, [tuple, tuple], [1, 2, 3]])),
        ("TestInputParsArrays1", json!([[[1, 2, 3], [4, 5, 6]]])),
        ("TestInputParsArrays1", json!([[[], [1]]])),
        ("TestInputParsArrays2", json!([1, [[1, 2, 3], [4, 5, 6]], [1, 2, 3, 4, 5]])),
    ]
}

#[tokio::test]
async fn test_echo_methods_return_their_arguments() -> anyhow::Result<()> {
    let (_, context) = deployed_context().await?;
    let cases = echo_cases();
    let invocations = cases
        .iter()
        .map(|(method_name, args)| Invocation::with_args(*method_name, args.clone()))
        .collect::<Vec<_>>();

    let results = context.harness().execute(context.address, &invocations).await;

    for ((method_name, args), res) in cases.iter().zip(&results) {
        let tokens = res
            .outcome
            .value()
            .ok_or_else(|| anyhow::anyhow!("{method_name}({args}) failed: {:?}", res.outcome))?;
        assert_eq!(&tokens_to_json(tokens), args, "{method_name}");
    }

    Ok(())
}

#[tokio::test]
async fn test_equivalent_spellings_decode_to_the_same_value() -> anyhow::Result<()> {
    let (_, context) = deployed_context().await?;

    let results = context
        .harness()
        .execute(
            context.address,
            &[
                Invocation::with_args("TestInputPars13", json!(255)),
                Invocation::with_args("TestInputPars13", json!("255")),
                Invocation::with_args("TestInputPars13", json!("0xff")),
                Invocation::with_args("TestInputPars12", json!(OWNER_ACCOUNT.to_lowercase())),
                Invocation::with_args(
                    "TestInputPars12",
                    json!(OWNER_ACCOUNT.trim_start_matches("0x")),
                ),
            ],
        )
        .await;

    let rendered = results
        .iter()
        .map(|res| res.outcome.value().map(tokens_to_json))
        .collect::<Vec<_>>();
    assert_eq!(rendered[..3], [Some(json!([255])), Some(json!([255])), Some(json!([255]))]);
    assert_eq!(rendered[3..], [Some(json!([OWNER_ACCOUNT])), Some(json!([OWNER_ACCOUNT]))]);

    Ok(())
}
