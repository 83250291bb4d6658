use liquidator_interface::types::error::Error;
use liquidator_interface::types::liquidation_request::LiquidationRequest;
use settlement_interface::types::settlement_config::SettlementConfig;
use soroban_sdk::{assert_with_error, panic_with_error, Address, Bytes, Env};

use crate::storage::{has_config, has_pending_loan};
use crate::types::pending_loan::PendingLoan;

pub fn require_not_initialized(env: &Env) {
    if has_config(env) {
        panic_with_error!(env, Error::AlreadyInitialized);
    }
}

pub fn require_owner(env: &Env, config: &SettlementConfig, who: &Address) {
    who.require_auth();
    assert_with_error!(env, *who == config.owner, Error::Unauthorized);
}

pub fn require_no_pending_loan(env: &Env) {
    assert_with_error!(env, !has_pending_loan(env), Error::LoanInProgress);
}

pub fn require_positive_amount(env: &Env, amount: i128) {
    assert_with_error!(env, amount > 0, Error::InvalidAmount);
}

pub fn require_distinct_assets(env: &Env, request: &LiquidationRequest) {
    assert_with_error!(
        env,
        request.debt_asset != request.collateral_asset,
        Error::MalformedRequest
    );
}

/// Payload must be the armed request byte for byte, and describe the loan the pool delivered
pub fn require_matching_loan(
    env: &Env,
    loan: &PendingLoan,
    asset: &Address,
    amount: i128,
    params: &Bytes,
) {
    assert_with_error!(
        env,
        *params == loan.request.encode(env),
        Error::MalformedRequest
    );
    assert_with_error!(
        env,
        loan.request.debt_asset == *asset && loan.request.debt_amount == amount,
        Error::MalformedRequest
    );
}
