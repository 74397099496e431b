//! Conversion between loosely typed call arguments, ABI tokens and their console rendering
pub mod coerce;
pub mod render;
pub mod revert;

pub use self::{
    coerce::{coerce, coerce_params, parse_address},
    render::{token_to_json, tokens_to_json},
    revert::RevertReason,
};
