#![deny(warnings)]
#![no_std]

use amm_interface::types::error::Error;
use amm_interface::AmmFactoryTrait;
use soroban_sdk::{
    assert_with_error, contract, contractclient, contractimpl, symbol_short, Address, Env,
};
use storage::*;

mod storage;

#[contractclient(name = "AmmFactoryAdminClient")]
pub trait AmmFactoryAdminTrait {
    fn register_pair(
        env: Env,
        token_a: Address,
        token_b: Address,
        pair: Address,
    ) -> Result<(), Error>;
}

#[contract]
pub struct AmmFactoryMock;

#[contractimpl]
impl AmmFactoryTrait for AmmFactoryMock {
    fn get_pair(env: Env, token_a: Address, token_b: Address) -> Option<Address> {
        read_pair(&env, &token_a, &token_b)
    }

    fn all_pairs_length(env: Env) -> u32 {
        read_pairs_length(&env)
    }
}

#[contractimpl]
impl AmmFactoryAdminTrait for AmmFactoryMock {
    fn register_pair(
        env: Env,
        token_a: Address,
        token_b: Address,
        pair: Address,
    ) -> Result<(), Error> {
        assert_with_error!(&env, token_a != token_b, Error::IdenticalAddresses);
        assert_with_error!(
            &env,
            read_pair(&env, &token_a, &token_b).is_none(),
            Error::PairExists
        );

        write_pair(&env, &token_a, &token_b, &pair);

        let topics = (symbol_short!("pair"), token_a, token_b);
        env.events().publish(topics, (pair, read_pairs_length(&env)));

        Ok(())
    }
}
