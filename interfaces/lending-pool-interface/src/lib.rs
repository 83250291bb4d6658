#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Bytes, Env};
use types::error::Error;

pub mod types;

pub struct Spec;

/// Interface for a pool lending single asset flash loans
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "LendingPoolClient")]
pub trait LendingPoolTrait {
    /// Sends `amount` of `asset` to `receiver`, calls its `execute` and pulls back
    /// `amount + premium` from the allowance the receiver left for the pool.
    fn flash_loan(
        env: Env,
        initiator: Address,
        receiver: Address,
        asset: Address,
        amount: i128,
        params: Bytes,
        referral_code: u32,
    ) -> Result<(), Error>;

    /// Flash loan fee, 1% - 100, 100% - 10_000
    fn flash_loan_fee(env: Env) -> u32;
}
