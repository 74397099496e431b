pub mod batch;
pub mod context_initialize;
pub mod contract_initializer;
