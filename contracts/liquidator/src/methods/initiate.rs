use lending_pool_interface::LendingPoolClient;
use liquidator_interface::types::error::Error;
use liquidator_interface::types::liquidation_request::LiquidationRequest;
use settlement_interface::SettlementClient;
use soroban_sdk::{assert_with_error, Address, Env};

use crate::event;
use crate::storage::read_config;

use super::utils::validation::{require_owner, require_valid_request};

pub fn initiate(env: &Env, who: &Address, request: &LiquidationRequest) -> Result<(), Error> {
    who.require_auth();

    let config = read_config(env)?;
    require_owner(env, &config, who);
    require_valid_request(env, request);

    let settlement = SettlementClient::new(env, &config.settlement);
    settlement.arm(request);

    event::flash_loan_requested(env, request);

    LendingPoolClient::new(env, &config.lending_pool).flash_loan(
        &env.current_contract_address(),
        &config.settlement,
        &request.debt_asset,
        &request.debt_amount,
        &request.encode(env),
        &0,
    );

    // settlement consumes the marker only from inside the pool's callback
    assert_with_error!(env, !settlement.pending(), Error::FlashLoanNotExecuted);

    event::liquidation_settled(env, request);

    Ok(())
}
