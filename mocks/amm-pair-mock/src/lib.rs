#![deny(warnings)]
#![cfg_attr(test, allow(deprecated))]
#![no_std]

use amm_interface::types::error::Error;
use amm_interface::AmmPairTrait;
use common::{SWAP_FEE_DENOMINATOR, SWAP_FEE_NUMERATOR};
use soroban_sdk::{
    assert_with_error, contract, contractclient, contractimpl, panic_with_error, symbol_short,
    token, Address, Bytes, Env,
};
use storage::*;

mod storage;
#[cfg(test)]
mod test;

#[contractclient(name = "AmmPairAdminClient")]
pub trait AmmPairAdminTrait {
    fn initialize(env: Env, token_0: Address, token_1: Address) -> Result<(), Error>;

    /// Sets reserves to current balances, used to add liquidity by plain transfers
    fn sync(env: Env) -> Result<(), Error>;

    /// Overrides reserves without moving tokens, leaving them out of line with balances
    fn set_reserves(env: Env, reserve_0: i128, reserve_1: i128) -> Result<(), Error>;
}

#[contract]
pub struct AmmPairMock;

#[contractimpl]
impl AmmPairTrait for AmmPairMock {
    fn token_0(env: Env) -> Result<Address, Error> {
        read_token_0(&env)
    }

    fn token_1(env: Env) -> Result<Address, Error> {
        read_token_1(&env)
    }

    fn get_reserves(env: Env) -> (i128, i128) {
        read_reserves(&env)
    }

    fn swap(
        env: Env,
        amount_0_out: i128,
        amount_1_out: i128,
        to: Address,
        data: Bytes,
    ) -> Result<(), Error> {
        assert_with_error!(
            &env,
            amount_0_out >= 0 && amount_1_out >= 0 && (amount_0_out > 0 || amount_1_out > 0),
            Error::InsufficientOutputAmount
        );
        assert_with_error!(&env, data.is_empty(), Error::FlashSwapUnsupported);

        let (reserve_0, reserve_1) = read_reserves(&env);
        assert_with_error!(
            &env,
            amount_0_out < reserve_0 && amount_1_out < reserve_1,
            Error::InsufficientLiquidity
        );

        let token_0 = token::Client::new(&env, &read_token_0(&env)?);
        let token_1 = token::Client::new(&env, &read_token_1(&env)?);
        assert_with_error!(
            &env,
            to != token_0.address && to != token_1.address,
            Error::InvalidTo
        );

        let pair = env.current_contract_address();

        if amount_0_out > 0 {
            token_0.transfer(&pair, &to, &amount_0_out);
        }
        if amount_1_out > 0 {
            token_1.transfer(&pair, &to, &amount_1_out);
        }

        let balance_0 = token_0.balance(&pair);
        let balance_1 = token_1.balance(&pair);

        let amount_0_in = amount_in(balance_0, reserve_0, amount_0_out);
        let amount_1_in = amount_in(balance_1, reserve_1, amount_1_out);
        assert_with_error!(
            &env,
            amount_0_in > 0 || amount_1_in > 0,
            Error::InsufficientInputAmount
        );

        let balance_0_adjusted = adjusted_balance(balance_0, amount_0_in)?;
        let balance_1_adjusted = adjusted_balance(balance_1, amount_1_in)?;

        let k_after = balance_0_adjusted
            .checked_mul(balance_1_adjusted)
            .ok_or(Error::MathOverflowError)?;
        let k_before = reserve_0
            .checked_mul(reserve_1)
            .and_then(|k| k.checked_mul(SWAP_FEE_DENOMINATOR * SWAP_FEE_DENOMINATOR))
            .ok_or(Error::MathOverflowError)?;
        assert_with_error!(&env, k_after >= k_before, Error::KConstant);

        write_reserves(&env, balance_0, balance_1);

        let topics = (symbol_short!("swap"), to);
        env.events().publish(
            topics,
            (amount_0_in, amount_1_in, amount_0_out, amount_1_out),
        );

        Ok(())
    }
}

#[contractimpl]
impl AmmPairAdminTrait for AmmPairMock {
    fn initialize(env: Env, token_0: Address, token_1: Address) -> Result<(), Error> {
        if has_tokens(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }

        assert_with_error!(&env, token_0 != token_1, Error::IdenticalAddresses);
        assert_with_error!(&env, token_0 < token_1, Error::UnsortedTokens);

        write_tokens(&env, &token_0, &token_1);
        write_reserves(&env, 0, 0);

        Ok(())
    }

    fn sync(env: Env) -> Result<(), Error> {
        let pair = env.current_contract_address();
        let balance_0 = token::Client::new(&env, &read_token_0(&env)?).balance(&pair);
        let balance_1 = token::Client::new(&env, &read_token_1(&env)?).balance(&pair);

        write_reserves(&env, balance_0, balance_1);

        let topics = (symbol_short!("sync"),);
        env.events().publish(topics, (balance_0, balance_1));

        Ok(())
    }

    fn set_reserves(env: Env, reserve_0: i128, reserve_1: i128) -> Result<(), Error> {
        read_token_0(&env)?;

        write_reserves(&env, reserve_0, reserve_1);

        Ok(())
    }
}

fn amount_in(balance: i128, reserve: i128, amount_out: i128) -> i128 {
    let expected = reserve - amount_out;

    if balance > expected {
        balance - expected
    } else {
        0
    }
}

/// balance * 1000 - amount_in * 3
fn adjusted_balance(balance: i128, amount_in: i128) -> Result<i128, Error> {
    let fee = amount_in
        .checked_mul(SWAP_FEE_DENOMINATOR - SWAP_FEE_NUMERATOR)
        .ok_or(Error::MathOverflowError)?;

    balance
        .checked_mul(SWAP_FEE_DENOMINATOR)
        .and_then(|b| b.checked_sub(fee))
        .ok_or(Error::MathOverflowError)
}
