//! Type-checks loosely typed JSON arguments against declared ABI parameter types.
//!
//! Arguments are written the way the interaction scripts write them: booleans as JSON
//! booleans, integers as JSON numbers or decimal strings (`0x` hex is accepted for unsigned
//! integers), addresses and byte strings as hex, arrays and tuples as JSON arrays.
//! Every rule is exact, a value that would need truncation or padding is a mismatch.

use ethers::{
    abi::{Param, ParamType, Token},
    types::{Address, I256, U256},
};
use serde_json::Value;

/// Coerces an ordered argument list against the parameters of a function or constructor
pub fn coerce_params(params: &[Param], args: &[Value]) -> Result<Vec<Token>, String> {
    if params.len() != args.len() {
        return Err(format!(
            "expected {} argument(s), got {}",
            params.len(),
            args.len()
        ));
    }

    params
        .iter()
        .zip(args)
        .enumerate()
        .map(|(index, (param, value))| {
            coerce(&param.kind, value).map_err(|reason| match param.name.as_str() {
                "" => format!("argument #{index}: {reason}"),
                name => format!("argument #{index} `{name}`: {reason}"),
            })
        })
        .collect()
}

/// Coerces a single value into a token of `kind`, recursively for arrays and tuples
pub fn coerce(kind: &ParamType, value: &Value) -> Result<Token, String> {
    match kind {
        ParamType::Bool => value
            .as_bool()
            .map(Token::Bool)
            .ok_or_else(|| mismatch(kind, value)),
        ParamType::Address => expect_str(kind, value)
            .and_then(parse_address)
            .map(Token::Address),
        ParamType::String => expect_str(kind, value).map(|s| Token::String(s.to_owned())),
        ParamType::Bytes => expect_str(kind, value)
            .and_then(parse_hex)
            .map(Token::Bytes),
        ParamType::FixedBytes(size) => {
            let bytes = expect_str(kind, value).and_then(parse_hex)?;
            if bytes.len() != *size {
                return Err(format!(
                    "expected {kind} ({size} bytes), got {} bytes",
                    bytes.len()
                ));
            }
            Ok(Token::FixedBytes(bytes))
        }
        ParamType::Uint(bits) => {
            let number = parse_uint(value).ok_or_else(|| mismatch(kind, value))?;
            if *bits < 256 && number.bits() > *bits {
                return Err(format!("{number} does not fit into {kind}"));
            }
            Ok(Token::Uint(number))
        }
        ParamType::Int(bits) => {
            let number = parse_int(value).ok_or_else(|| mismatch(kind, value))?;
            if *bits < 256 {
                let bound = I256::from_raw(U256::one() << (*bits - 1));
                if number >= bound || number < -bound {
                    return Err(format!("{number} does not fit into {kind}"));
                }
            }
            Ok(Token::Int(number.into_raw()))
        }
        ParamType::Array(inner) => {
            let items = expect_array(kind, value)?;
            coerce_items(inner, items).map(Token::Array)
        }
        ParamType::FixedArray(inner, len) => {
            let items = expect_array(kind, value)?;
            if items.len() != *len {
                return Err(format!(
                    "expected {kind} ({len} elements), got {} elements",
                    items.len()
                ));
            }
            coerce_items(inner, items).map(Token::FixedArray)
        }
        ParamType::Tuple(kinds) => {
            let items = expect_array(kind, value)?;
            if items.len() != kinds.len() {
                return Err(format!(
                    "expected {kind} ({} fields), got {} fields",
                    kinds.len(),
                    items.len()
                ));
            }
            kinds
                .iter()
                .zip(items)
                .enumerate()
                .map(|(index, (kind, item))| {
                    coerce(kind, item).map_err(|reason| format!("field #{index}: {reason}"))
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Token::Tuple)
        }
    }
}

/// Parses a 20-byte address written as 40 hex digits with an optional `0x` prefix
pub fn parse_address(input: &str) -> Result<Address, String> {
    let digits = strip_hex_prefix(input);
    if digits.len() != 40 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("{input:?} is not a 20-byte hex address"));
    }
    parse_hex(digits).map(|bytes| Address::from_slice(&bytes))
}

/// Parses an even-length hex string with an optional `0x` prefix
pub fn parse_hex(input: &str) -> Result<Vec<u8>, String> {
    hex::decode(strip_hex_prefix(input)).map_err(|err| format!("{input:?} is not hex: {err}"))
}

fn strip_hex_prefix(input: &str) -> &str {
    input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input)
}

fn coerce_items(inner: &ParamType, items: &[Value]) -> Result<Vec<Token>, String> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| coerce(inner, item).map_err(|reason| format!("[{index}]: {reason}")))
        .collect()
}

fn parse_uint(value: &Value) -> Option<U256> {
    match value {
        Value::Number(number) => number.as_u64().map(U256::from),
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => match text.strip_prefix("0x") {
            Some(digits) if !digits.is_empty() => U256::from_str_radix(digits, 16).ok(),
            Some(_) => None,
            None => text
                .chars()
                .all(|c| c.is_ascii_digit())
                .then(|| U256::from_dec_str(text).ok())
                .flatten(),
        },
        _ => None,
    }
}

fn parse_int(value: &Value) -> Option<I256> {
    match value {
        // covers numbers above i64::MAX, floats are rejected
        Value::Number(number) if number.is_i64() || number.is_u64() => {
            I256::from_dec_str(&number.to_string()).ok()
        }
        Value::String(text) => {
            let digits = text.strip_prefix('-').unwrap_or(text);
            if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            I256::from_dec_str(text).ok()
        }
        _ => None,
    }
}

fn expect_str<'a>(kind: &ParamType, value: &'a Value) -> Result<&'a str, String> {
    value.as_str().ok_or_else(|| mismatch(kind, value))
}

fn expect_array<'a>(kind: &ParamType, value: &'a Value) -> Result<&'a [Value], String> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| mismatch(kind, value))
}

fn mismatch(kind: &ParamType, value: &Value) -> String {
    format!("expected {kind}, got {value}")
}
