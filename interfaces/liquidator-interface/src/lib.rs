#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Env};
use types::error::Error;
use types::liquidator_config::LiquidatorConfig;

pub mod types;

pub struct Spec;

/// Interface for Liquidator
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "LiquidatorClient")]
pub trait LiquidatorTrait {
    fn initialize(
        env: Env,
        owner: Address,
        settlement: Address,
        lending_pool: Address,
    ) -> Result<(), Error>;

    fn version() -> u32;

    fn config(env: Env) -> Result<LiquidatorConfig, Error>;

    /// Flash borrows `debt_amount` of `debt_asset` and liquidates `borrower` with it.
    /// The whole call reverts unless the loan is repaid from the seized collateral.
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
    ) -> Result<(), Error>;
}
