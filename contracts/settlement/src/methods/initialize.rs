use liquidator_interface::types::error::Error;
use settlement_interface::types::settlement_config::SettlementConfig;
use soroban_sdk::Env;

use crate::event;
use crate::storage::write_config;

use super::utils::validation::require_not_initialized;

pub fn initialize(env: &Env, config: &SettlementConfig) -> Result<(), Error> {
    require_not_initialized(env);

    write_config(env, config);

    event::initialized(env, config);

    Ok(())
}
