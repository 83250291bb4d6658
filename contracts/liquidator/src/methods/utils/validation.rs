use liquidator_interface::types::error::Error;
use liquidator_interface::types::liquidation_request::LiquidationRequest;
use liquidator_interface::types::liquidator_config::LiquidatorConfig;
use soroban_sdk::{assert_with_error, panic_with_error, Address, Env};

use crate::storage::has_config;

pub fn require_not_initialized(env: &Env) {
    if has_config(env) {
        panic_with_error!(env, Error::AlreadyInitialized);
    }
}

pub fn require_owner(env: &Env, config: &LiquidatorConfig, who: &Address) {
    assert_with_error!(env, *who == config.owner, Error::Unauthorized);
}

pub fn require_valid_request(env: &Env, request: &LiquidationRequest) {
    assert_with_error!(env, request.debt_amount > 0, Error::InvalidAmount);
    assert_with_error!(
        env,
        request.debt_asset != request.collateral_asset,
        Error::MalformedRequest
    );
}
