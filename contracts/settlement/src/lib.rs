#![deny(warnings)]
#![cfg_attr(test, allow(deprecated))]
#![no_std]

use flash_loan_receiver_interface::FlashLoanReceiverTrait;
use liquidator_interface::types::error::Error;
use liquidator_interface::types::liquidation_request::LiquidationRequest;
use liquidator_interface::types::swap_plan::SwapPlan;
use methods::{arm::arm, execute::execute, initialize::initialize, quote::quote, sweep::sweep};
use settlement_interface::types::settlement_config::SettlementConfig;
use settlement_interface::SettlementTrait;
use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Bytes, Env};

use crate::storage::*;

mod event;
mod methods;
mod storage;
#[cfg(test)]
mod tests;
mod types;

#[contract]
pub struct Settlement;

#[contractimpl]
impl SettlementTrait for Settlement {
    fn initialize(env: Env, config: SettlementConfig) -> Result<(), Error> {
        initialize(&env, &config)
    }

    fn version() -> u32 {
        1
    }

    fn config(env: Env) -> Result<SettlementConfig, Error> {
        read_config(&env)
    }

    fn arm(env: Env, request: LiquidationRequest) -> Result<(), Error> {
        arm(&env, &request)
    }

    fn pending(env: Env) -> bool {
        has_pending_loan(&env)
    }

    fn quote(
        env: Env,
        debt_asset: Address,
        debt_amount: i128,
        premium: i128,
        collateral_asset: Address,
    ) -> Result<SwapPlan, Error> {
        quote(&env, &debt_asset, debt_amount, premium, &collateral_asset)
    }

    fn sweep(env: Env, who: Address, token: Address) -> Result<i128, Error> {
        sweep(&env, &who, &token)
    }
}

#[contractimpl]
impl FlashLoanReceiverTrait for Settlement {
    fn execute(
        env: Env,
        asset: Address,
        amount: i128,
        premium: i128,
        initiator: Address,
        params: Bytes,
    ) -> bool {
        if let Err(err) = execute(&env, &asset, amount, premium, &initiator, &params) {
            panic_with_error!(&env, err);
        }

        true
    }
}
