pub mod call_counter;
pub mod gas_usage_aggregator;
pub mod mode_printer;
pub mod statistic_consumer;
pub mod statistic_group_ext;
pub mod statistic_group_printer;
pub mod statistic_printer;
