#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Bytes, Env};

pub struct Spec;

/// Callback invoked by the lending pool once `amount` of `asset` has been sent to the receiver.
/// The receiver must leave an allowance of `amount + premium` for the pool before returning.
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "FlashLoanReceiverClient")]
pub trait FlashLoanReceiverTrait {
    fn execute(
        env: Env,
        asset: Address,
        amount: i128,
        premium: i128,
        initiator: Address,
        params: Bytes,
    ) -> bool;
}
