#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Env};
use types::error::Error;

pub mod types;

pub struct Spec;

/// Interface for lending markets that accept third party liquidations
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "PositionManagerClient")]
pub trait PositionManagerTrait {
    /// Repays `amount` of the `borrower` debt in `debt_handle` market on behalf of `liquidator`
    /// and seizes collateral of `collateral_handle` market in return.
    /// Returns repaid debt and seized collateral amounts.
    fn liquidate(
        env: Env,
        liquidator: Address,
        debt_handle: Address,
        collateral_handle: Address,
        borrower: Address,
        amount: i128,
    ) -> Result<(i128, i128), Error>;

    fn close_factor(env: Env) -> Result<u32, Error>;

    fn liquidation_incentive(env: Env) -> Result<u32, Error>;
}
