#![deny(warnings)]
#![cfg_attr(test, allow(deprecated))]
#![no_std]

use common::{FixedI128, PERCENTAGE_FACTOR};
use flash_loan_receiver_interface::FlashLoanReceiverClient;
use lending_pool_interface::types::error::Error;
use lending_pool_interface::LendingPoolTrait;
use soroban_sdk::{
    assert_with_error, contract, contractclient, contractimpl, panic_with_error, token, Address,
    Bytes, Env, Symbol,
};
use storage::*;

mod storage;

#[contractclient(name = "LendingPoolAdminClient")]
pub trait LendingPoolAdminTrait {
    fn initialize(env: Env, admin: Address, flash_loan_fee: u32) -> Result<(), Error>;

    fn set_flash_loan_fee(env: Env, fee: u32) -> Result<(), Error>;
}

#[contract]
pub struct LendingPoolMock;

#[contractimpl]
impl LendingPoolTrait for LendingPoolMock {
    fn flash_loan(
        env: Env,
        initiator: Address,
        receiver: Address,
        asset: Address,
        amount: i128,
        params: Bytes,
        referral_code: u32,
    ) -> Result<(), Error> {
        initiator.require_auth();

        assert_with_error!(&env, amount > 0, Error::InvalidAmount);

        let fee = FixedI128::from_percentage(read_flash_loan_fee(&env)?)
            .ok_or(Error::MathOverflowError)?;
        let premium = fee.mul_int(amount).ok_or(Error::MathOverflowError)?;
        let total = amount
            .checked_add(premium)
            .ok_or(Error::MathOverflowError)?;

        let pool = env.current_contract_address();
        let underlying_asset = token::Client::new(&env, &asset);

        assert_with_error!(
            &env,
            underlying_asset.balance(&pool) >= amount,
            Error::NotEnoughLiquidity
        );

        underlying_asset.transfer(&pool, &receiver, &amount);

        let loan_received = FlashLoanReceiverClient::new(&env, &receiver).execute(
            &asset,
            &amount,
            &premium,
            &initiator,
            &params,
        );
        assert_with_error!(&env, loan_received, Error::FlashLoanReceiverError);

        assert_with_error!(
            &env,
            underlying_asset.allowance(&receiver, &pool) >= total
                && underlying_asset.balance(&receiver) >= total,
            Error::RepaymentShortfall
        );

        underlying_asset.transfer_from(&pool, &receiver, &pool, &total);

        let topics = (Symbol::new(&env, "flash_loan"), initiator, receiver, asset);
        env.events()
            .publish(topics, (amount, premium, referral_code));

        Ok(())
    }

    fn flash_loan_fee(env: Env) -> u32 {
        read_flash_loan_fee(&env).unwrap_or_default()
    }
}

#[contractimpl]
impl LendingPoolAdminTrait for LendingPoolMock {
    fn initialize(env: Env, admin: Address, flash_loan_fee: u32) -> Result<(), Error> {
        if has_admin(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }

        assert_with_error!(
            &env,
            flash_loan_fee <= PERCENTAGE_FACTOR,
            Error::MustBeLtePercentageFactor
        );

        write_admin(&env, &admin);
        write_flash_loan_fee(&env, flash_loan_fee);

        Ok(())
    }

    fn set_flash_loan_fee(env: Env, fee: u32) -> Result<(), Error> {
        read_admin(&env)?.require_auth();

        assert_with_error!(
            &env,
            fee <= PERCENTAGE_FACTOR,
            Error::MustBeLtePercentageFactor
        );

        write_flash_loan_fee(&env, fee);

        Ok(())
    }
}
