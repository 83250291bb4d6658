use amm_interface::AmmPairClient;
use liquidator_interface::types::error::Error;
use position_manager_interface::PositionManagerClient;
use soroban_sdk::{assert_with_error, token, Address, Bytes, Env};

use crate::event;
use crate::storage::{read_config, read_pending_loan, remove_pending_loan};

use super::sweep::{transfer_balance, transfer_excess};
use super::utils::swap_plan::{find_pair, plan_swap};
use super::utils::validation::require_matching_loan;

/// Allowances granted inside the callback expire right after the repayment ledger
const ALLOWANCE_LEDGERS: u32 = 1;

pub fn execute(
    env: &Env,
    asset: &Address,
    amount: i128,
    premium: i128,
    initiator: &Address,
    params: &Bytes,
) -> Result<(), Error> {
    let config = read_config(env)?;
    config.lending_pool.require_auth();

    let loan = read_pending_loan(env).ok_or(Error::Unauthorized)?;
    assert_with_error!(env, *initiator == config.liquidator, Error::Unauthorized);

    require_matching_loan(env, &loan, asset, amount, params);

    remove_pending_loan(env);

    let request = loan.request;

    let settlement = env.current_contract_address();
    let expiration_ledger = env.ledger().sequence() + ALLOWANCE_LEDGERS;
    let debt_token = token::Client::new(env, asset);
    let collateral_token = token::Client::new(env, &request.collateral_asset);

    debt_token.approve(
        &settlement,
        &config.position_manager,
        &amount,
        &expiration_ledger,
    );

    let (repaid, seized) = PositionManagerClient::new(env, &config.position_manager).liquidate(
        &settlement,
        &request.debt_handle,
        &request.collateral_handle,
        &request.borrower,
        &amount,
    );
    assert_with_error!(env, seized > 0, Error::NothingSeized);

    event::liquidation(
        env,
        &request.borrower,
        asset,
        repaid,
        &request.collateral_asset,
        seized,
    );

    let amount_out = amount
        .checked_add(premium)
        .ok_or(Error::MathOverflowError)?;

    let pair = find_pair(env, &config.amm_factory, asset, &request.collateral_asset)?;
    let plan = plan_swap(env, &pair, &request.collateral_asset, amount_out)?;

    assert_with_error!(
        env,
        collateral_token.balance(&settlement) >= plan.amount_in,
        Error::InsufficientCollateral
    );

    collateral_token.transfer(&settlement, &pair, &plan.amount_in);
    AmmPairClient::new(env, &pair).swap(
        &plan.amount_0_out,
        &plan.amount_1_out,
        &settlement,
        &Bytes::new(env),
    );

    event::swap(env, &pair, &plan);

    debt_token.approve(
        &settlement,
        &config.lending_pool,
        &amount_out,
        &expiration_ledger,
    );

    event::repayment_approved(env, &config.lending_pool, asset, amount_out);

    transfer_balance(env, &request.collateral_asset, &config.owner);
    // debt asset left over when the position manager repaid less than borrowed
    transfer_excess(env, asset, &config.owner, amount_out);

    Ok(())
}
