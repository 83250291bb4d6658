pub mod error;
pub mod liquidation_request;
pub mod liquidator_config;
pub mod swap_plan;
