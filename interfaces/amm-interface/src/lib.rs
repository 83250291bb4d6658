#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Bytes, Env};
use types::error::Error;

pub mod types;

pub struct FactorySpec;

/// Registry of constant product pairs
#[contractspecfn(name = "FactorySpec", export = false)]
#[contractclient(name = "AmmFactoryClient")]
pub trait AmmFactoryTrait {
    /// Returns pair of two tokens, order of tokens doesn't matter
    fn get_pair(env: Env, token_a: Address, token_b: Address) -> Option<Address>;

    fn all_pairs_length(env: Env) -> u32;
}

pub struct PairSpec;

/// Constant product pair with 0.3% swap fee
#[contractspecfn(name = "PairSpec", export = false)]
#[contractclient(name = "AmmPairClient")]
pub trait AmmPairTrait {
    fn token_0(env: Env) -> Result<Address, Error>;

    fn token_1(env: Env) -> Result<Address, Error>;

    fn get_reserves(env: Env) -> (i128, i128);

    /// Sends requested amounts to `to`. Input must be transferred to the pair beforehand.
    fn swap(
        env: Env,
        amount_0_out: i128,
        amount_1_out: i128,
        to: Address,
        data: Bytes,
    ) -> Result<(), Error>;
}
