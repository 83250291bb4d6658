#![deny(warnings)]
#![cfg_attr(test, allow(deprecated))]
#![no_std]

use common::{FixedI128, PERCENTAGE_FACTOR};
use position_manager_interface::types::error::Error;
use position_manager_interface::PositionManagerTrait;
use soroban_sdk::{
    assert_with_error, contract, contractclient, contractimpl, panic_with_error, symbol_short,
    token, Address, Env,
};
use storage::*;
use types::market::Market;
use types::position::Position;

mod storage;
pub mod types;

#[contractclient(name = "PositionManagerAdminClient")]
pub trait PositionManagerAdminTrait {
    fn initialize(
        env: Env,
        admin: Address,
        close_factor: u32,
        liquidation_incentive: u32,
    ) -> Result<(), Error>;

    fn list_market(env: Env, handle: Address, market: Market) -> Result<(), Error>;

    fn set_price(env: Env, handle: Address, price: i128) -> Result<(), Error>;

    /// Overwrites borrower position, underlying of the collateral must already be held by the manager
    fn set_position(
        env: Env,
        borrower: Address,
        handle: Address,
        position: Position,
    ) -> Result<(), Error>;

    fn position(env: Env, borrower: Address, handle: Address) -> Position;

    fn is_liquidatable(env: Env, borrower: Address) -> Result<bool, Error>;
}

#[contract]
pub struct PositionManagerMock;

#[contractimpl]
impl PositionManagerTrait for PositionManagerMock {
    fn liquidate(
        env: Env,
        liquidator: Address,
        debt_handle: Address,
        collateral_handle: Address,
        borrower: Address,
        amount: i128,
    ) -> Result<(i128, i128), Error> {
        liquidator.require_auth();

        assert_with_error!(&env, amount > 0, Error::InvalidAmount);

        let debt_market = read_market(&env, &debt_handle)?;
        let collat_market = read_market(&env, &collateral_handle)?;

        assert_with_error!(
            &env,
            has_shortfall(&env, &borrower)?,
            Error::NotLiquidatable
        );

        let mut debt_position = read_position(&env, &borrower, &debt_handle);
        let max_close = FixedI128::from_percentage(read_close_factor(&env)?)
            .ok_or(Error::MathOverflowError)?
            .mul_int(debt_position.debt)
            .ok_or(Error::MathOverflowError)?;

        assert_with_error!(&env, amount <= max_close, Error::TooMuchRepay);

        let seized = seize_amount(&env, &debt_market, &collat_market, amount)?;
        assert_with_error!(&env, seized > 0, Error::ZeroSeizure);

        let mut collat_position = read_position(&env, &borrower, &collateral_handle);
        assert_with_error!(
            &env,
            seized <= collat_position.collateral,
            Error::InsufficientCollateral
        );

        let manager = env.current_contract_address();

        token::Client::new(&env, &debt_market.underlying).transfer_from(
            &manager,
            &liquidator,
            &manager,
            &amount,
        );

        debt_position.debt -= amount;
        write_position(&env, &borrower, &debt_handle, &debt_position);

        // positions are re-read in case both handles point to the same market
        collat_position = read_position(&env, &borrower, &collateral_handle);
        collat_position.collateral -= seized;
        write_position(&env, &borrower, &collateral_handle, &collat_position);

        token::Client::new(&env, &collat_market.underlying).transfer(
            &manager,
            &liquidator,
            &seized,
        );

        let topics = (symbol_short!("liquidate"), liquidator, borrower);
        env.events()
            .publish(topics, (debt_handle, amount, collateral_handle, seized));

        Ok((amount, seized))
    }

    fn close_factor(env: Env) -> Result<u32, Error> {
        read_close_factor(&env)
    }

    fn liquidation_incentive(env: Env) -> Result<u32, Error> {
        read_liquidation_incentive(&env)
    }
}

#[contractimpl]
impl PositionManagerAdminTrait for PositionManagerMock {
    fn initialize(
        env: Env,
        admin: Address,
        close_factor: u32,
        liquidation_incentive: u32,
    ) -> Result<(), Error> {
        if has_admin(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }

        assert_with_error!(
            &env,
            close_factor <= PERCENTAGE_FACTOR,
            Error::MustBeLtePercentageFactor
        );
        assert_with_error!(
            &env,
            liquidation_incentive > PERCENTAGE_FACTOR,
            Error::MustBeGtPercentageFactor
        );

        write_admin(&env, &admin);
        write_close_factor(&env, close_factor);
        write_liquidation_incentive(&env, liquidation_incentive);

        Ok(())
    }

    fn list_market(env: Env, handle: Address, market: Market) -> Result<(), Error> {
        read_admin(&env)?.require_auth();

        assert_with_error!(
            &env,
            !has_market(&env, &handle),
            Error::MarketAlreadyListed
        );
        assert_with_error!(
            &env,
            market.collateral_factor <= PERCENTAGE_FACTOR,
            Error::MustBeLtePercentageFactor
        );

        write_market(&env, &handle, &market);

        Ok(())
    }

    fn set_price(env: Env, handle: Address, price: i128) -> Result<(), Error> {
        read_admin(&env)?.require_auth();

        let mut market = read_market(&env, &handle)?;
        market.price = price;
        write_market(&env, &handle, &market);

        Ok(())
    }

    fn set_position(
        env: Env,
        borrower: Address,
        handle: Address,
        position: Position,
    ) -> Result<(), Error> {
        read_admin(&env)?.require_auth();
        read_market(&env, &handle)?;

        write_position(&env, &borrower, &handle, &position);

        Ok(())
    }

    fn position(env: Env, borrower: Address, handle: Address) -> Position {
        read_position(&env, &borrower, &handle)
    }

    fn is_liquidatable(env: Env, borrower: Address) -> Result<bool, Error> {
        has_shortfall(&env, &borrower)
    }
}

/// Debt value exceeds collateral value weighted by collateral factors
fn has_shortfall(env: &Env, borrower: &Address) -> Result<bool, Error> {
    let mut collat_in_base = 0i128;
    let mut debt_in_base = 0i128;

    for handle in read_markets(env) {
        let market = read_market(env, &handle)?;
        let position = read_position(env, borrower, &handle);
        let price = FixedI128::from_inner(market.price);

        let collat = price
            .mul_int(position.collateral)
            .and_then(|value| {
                FixedI128::from_percentage(market.collateral_factor)?.mul_int(value)
            })
            .ok_or(Error::MathOverflowError)?;
        let debt = price
            .mul_int(position.debt)
            .ok_or(Error::MathOverflowError)?;

        collat_in_base = collat_in_base
            .checked_add(collat)
            .ok_or(Error::MathOverflowError)?;
        debt_in_base = debt_in_base
            .checked_add(debt)
            .ok_or(Error::MathOverflowError)?;
    }

    Ok(debt_in_base > collat_in_base)
}

/// Collateral worth `amount` of debt increased by the liquidation incentive
fn seize_amount(
    env: &Env,
    debt_market: &Market,
    collat_market: &Market,
    amount: i128,
) -> Result<i128, Error> {
    let repaid_in_base = FixedI128::from_inner(debt_market.price)
        .mul_int(amount)
        .ok_or(Error::MathOverflowError)?;

    let seized_in_base = FixedI128::from_percentage(read_liquidation_incentive(env)?)
        .ok_or(Error::MathOverflowError)?
        .mul_int(repaid_in_base)
        .ok_or(Error::MathOverflowError)?;

    FixedI128::from_inner(collat_market.price)
        .recip_mul_int(seized_in_base)
        .ok_or(Error::MathOverflowError)
}
