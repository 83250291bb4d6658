#![deny(warnings)]
#![no_std]

use liquidator_interface::types::error::Error;
use liquidator_interface::types::liquidation_request::LiquidationRequest;
use liquidator_interface::types::swap_plan::SwapPlan;
use soroban_sdk::{contractclient, contractspecfn, Address, Env};
use types::settlement_config::SettlementConfig;

pub mod types;

pub struct Spec;

/// Interface for Settlement, the flash loan receiver side of the liquidator
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "SettlementClient")]
pub trait SettlementTrait {
    fn initialize(env: Env, config: SettlementConfig) -> Result<(), Error>;

    fn version() -> u32;

    fn config(env: Env) -> Result<SettlementConfig, Error>;

    /// Marks the loan described by `request` as awaited by the flash loan callback.
    fn arm(env: Env, request: LiquidationRequest) -> Result<(), Error>;

    fn pending(env: Env) -> bool;

    fn quote(
        env: Env,
        debt_asset: Address,
        debt_amount: i128,
        premium: i128,
        collateral_asset: Address,
    ) -> Result<SwapPlan, Error>;

    fn sweep(env: Env, who: Address, token: Address) -> Result<i128, Error>;
}
