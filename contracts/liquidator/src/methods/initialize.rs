use liquidator_interface::types::error::Error;
use liquidator_interface::types::liquidator_config::LiquidatorConfig;
use soroban_sdk::Env;

use crate::event;
use crate::storage::write_config;

use super::utils::validation::require_not_initialized;

pub fn initialize(env: &Env, config: &LiquidatorConfig) -> Result<(), Error> {
    require_not_initialized(env);

    write_config(env, config);

    event::initialized(env, config);

    Ok(())
}
