pub mod settlement_config;
