use ethers::{
    abi::Token,
    types::{I256, U256},
    utils::to_checksum,
};
use serde_json::{json, Value};

/// Renders decoded tokens back to the JSON shape accepted by [`super::coerce::coerce`]:
/// checksummed addresses, integers as numbers when they fit 64 bits and decimal strings otherwise,
/// byte strings as `0x` hex, arrays and tuples as JSON arrays.
pub fn token_to_json(token: &Token) -> Value {
    match token {
        Token::Address(address) => Value::String(to_checksum(address, None)),
        Token::Bytes(bytes) | Token::FixedBytes(bytes) => {
            Value::String(format!("0x{}", hex::encode(bytes)))
        }
        Token::Uint(number) => {
            if *number <= U256::from(u64::MAX) {
                json!(number.as_u64())
            } else {
                Value::String(number.to_string())
            }
        }
        Token::Int(raw) => {
            let number = I256::from_raw(*raw).to_string();
            match number.parse::<i64>() {
                Ok(small) => json!(small),
                Err(_) => Value::String(number),
            }
        }
        Token::Bool(flag) => Value::Bool(*flag),
        Token::String(text) => Value::String(text.clone()),
        Token::Array(items) | Token::FixedArray(items) | Token::Tuple(items) => tokens_to_json(items),
    }
}

pub fn tokens_to_json(tokens: &[Token]) -> Value {
    Value::Array(tokens.iter().map(token_to_json).collect())
}

/// Compact one-line rendering of a value list, used by the console logger
pub fn render_values(values: &[Value]) -> String {
    values
        .iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
