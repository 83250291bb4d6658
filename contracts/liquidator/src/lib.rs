#![deny(warnings)]
#![cfg_attr(test, allow(deprecated))]
#![no_std]

use liquidator_interface::types::error::Error;
use liquidator_interface::types::liquidation_request::LiquidationRequest;
use liquidator_interface::types::liquidator_config::LiquidatorConfig;
use liquidator_interface::LiquidatorTrait;
use methods::{initialize::initialize, initiate::initiate};
use soroban_sdk::{contract, contractimpl, Address, Env};

use crate::storage::*;

mod event;
mod methods;
mod storage;

#[contract]
pub struct Liquidator;

#[contractimpl]
impl LiquidatorTrait for Liquidator {
    fn initialize(
        env: Env,
        owner: Address,
        settlement: Address,
        lending_pool: Address,
    ) -> Result<(), Error> {
        initialize(
            &env,
            &LiquidatorConfig {
                owner,
                settlement,
                lending_pool,
            },
        )
    }

    fn version() -> u32 {
        1
    }

    fn config(env: Env) -> Result<LiquidatorConfig, Error> {
        read_config(&env)
    }

    #[allow(clippy::too_many_arguments)]
    fn initiate(
        env: Env,
        who: Address,
        debt_asset: Address,
        debt_amount: i128,
        debt_handle: Address,
        collateral_asset: Address,
        collateral_handle: Address,
        borrower: Address,
    ) -> Result<(), Error> {
        initiate(
            &env,
            &who,
            &LiquidationRequest {
                borrower,
                debt_asset,
                debt_amount,
                debt_handle,
                collateral_asset,
                collateral_handle,
            },
        )
    }
}
