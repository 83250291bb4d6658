#![cfg(test)]
extern crate std;

use crate::*;
use amm_factory_mock::{AmmFactoryAdminClient, AmmFactoryMock};
use amm_interface::AmmPairClient;
use amm_pair_mock::{AmmPairAdminClient, AmmPairMock};
use common::FixedI128;
use flash_loan_receiver_interface::FlashLoanReceiverClient;
use lending_pool_interface::LendingPoolClient;
use lending_pool_mock::{LendingPoolAdminClient, LendingPoolMock};
use position_manager_mock::types::market::Market;
use position_manager_mock::types::position::Position;
use position_manager_mock::{PositionManagerAdminClient, PositionManagerMock};
use settlement_interface::SettlementClient;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::Client as TokenClient;
use soroban_sdk::token::StellarAssetClient as TokenAdminClient;

pub const FLASH_LOAN_FEE: u32 = 50;
pub const POOL_LIQUIDITY: i128 = 100_000;
pub const COLLATERAL_RESERVE: i128 = 50_000;
pub const DEBT_RESERVE: i128 = 20_000;

pub const BORROWER_DEBT: i128 = 2_500;
pub const BORROWER_COLLATERAL: i128 = 5_000;
pub const COLLATERAL_PRICE: i128 = 400_000_000;

pub(crate) fn create_token_contract<'a>(
    e: &Env,
    admin: &Address,
) -> (TokenClient<'a>, TokenAdminClient<'a>) {
    let stellar_asset_contract = e.register_stellar_asset_contract(admin.clone());

    (
        TokenClient::new(e, &stellar_asset_contract),
        TokenAdminClient::new(e, &stellar_asset_contract),
    )
}

pub(crate) fn create_lending_pool_contract<'a>(
    e: &Env,
    admin: &Address,
    asset: &TokenAdminClient,
) -> LendingPoolClient<'a> {
    let address = e.register_contract(None, LendingPoolMock);
    LendingPoolAdminClient::new(e, &address).initialize(admin, &FLASH_LOAN_FEE);

    asset.mint(&address, &POOL_LIQUIDITY);

    LendingPoolClient::new(e, &address)
}

pub(crate) fn create_position_manager_contract<'a>(
    e: &Env,
    admin: &Address,
) -> PositionManagerAdminClient<'a> {
    let client = PositionManagerAdminClient::new(e, &e.register_contract(None, PositionManagerMock));
    client.initialize(admin, &5_000, &11_000);

    client
}

pub(crate) fn create_pair_contract<'a>(
    e: &Env,
    factory: &Address,
    collateral: &TokenAdminClient,
    debt: &TokenAdminClient,
    collateral_reserve: i128,
    debt_reserve: i128,
) -> AmmPairClient<'a> {
    let address = e.register_contract(None, AmmPairMock);
    let admin = AmmPairAdminClient::new(e, &address);

    if collateral.address < debt.address {
        admin.initialize(&collateral.address, &debt.address);
    } else {
        admin.initialize(&debt.address, &collateral.address);
    }

    collateral.mint(&address, &collateral_reserve);
    debt.mint(&address, &debt_reserve);
    admin.sync();

    AmmFactoryAdminClient::new(e, factory).register_pair(
        &collateral.address,
        &debt.address,
        &address,
    );

    AmmPairClient::new(e, &address)
}

pub(crate) fn init_settlement<'a>(env: &Env) -> Sut<'a> {
    init_settlement_with_reserves(env, COLLATERAL_RESERVE, DEBT_RESERVE)
}

pub(crate) fn init_settlement_with_reserves<'a>(
    env: &Env,
    collateral_reserve: i128,
    debt_reserve: i128,
) -> Sut<'a> {
    env.mock_all_auths();

    let admin = Address::generate(env);
    let owner = Address::generate(env);
    let liquidator = Address::generate(env);
    let borrower = Address::generate(env);
    let debt_handle = Address::generate(env);
    let collateral_handle = Address::generate(env);

    let (debt_token, debt_token_admin) = create_token_contract(env, &admin);
    let (collateral_token, collateral_token_admin) = create_token_contract(env, &admin);

    let pool = create_lending_pool_contract(env, &admin, &debt_token_admin);
    let position_manager = create_position_manager_contract(env, &admin);

    position_manager.list_market(
        &debt_handle,
        &Market {
            underlying: debt_token.address.clone(),
            collateral_factor: 0,
            price: FixedI128::ONE.into_inner(),
        },
    );
    position_manager.list_market(
        &collateral_handle,
        &Market {
            underlying: collateral_token.address.clone(),
            collateral_factor: 7_500,
            price: COLLATERAL_PRICE,
        },
    );
    position_manager.set_position(
        &borrower,
        &debt_handle,
        &Position {
            collateral: 0,
            debt: BORROWER_DEBT,
        },
    );
    position_manager.set_position(
        &borrower,
        &collateral_handle,
        &Position {
            collateral: BORROWER_COLLATERAL,
            debt: 0,
        },
    );
    collateral_token_admin.mint(&position_manager.address, &BORROWER_COLLATERAL);

    let amm_factory = env.register_contract(None, AmmFactoryMock);
    let pair = create_pair_contract(
        env,
        &amm_factory,
        &collateral_token_admin,
        &debt_token_admin,
        collateral_reserve,
        debt_reserve,
    );

    let settlement_address = env.register_contract(None, Settlement);
    let settlement = SettlementClient::new(env, &settlement_address);

    settlement.initialize(&SettlementConfig {
        owner: owner.clone(),
        liquidator: liquidator.clone(),
        lending_pool: pool.address.clone(),
        position_manager: position_manager.address.clone(),
        amm_factory: amm_factory.clone(),
    });

    Sut {
        settlement,
        receiver: FlashLoanReceiverClient::new(env, &settlement_address),
        pool,
        position_manager,
        pair,
        amm_factory,
        debt_token,
        debt_token_admin,
        collateral_token,
        collateral_token_admin,
        owner,
        liquidator,
        borrower,
        debt_handle,
        collateral_handle,
    }
}

pub struct Sut<'a> {
    pub settlement: SettlementClient<'a>,
    pub receiver: FlashLoanReceiverClient<'a>,
    pub pool: LendingPoolClient<'a>,
    pub position_manager: PositionManagerAdminClient<'a>,
    pub pair: AmmPairClient<'a>,
    pub amm_factory: Address,
    pub debt_token: TokenClient<'a>,
    pub debt_token_admin: TokenAdminClient<'a>,
    pub collateral_token: TokenClient<'a>,
    pub collateral_token_admin: TokenAdminClient<'a>,
    pub owner: Address,
    pub liquidator: Address,
    pub borrower: Address,
    pub debt_handle: Address,
    pub collateral_handle: Address,
}

impl<'a> Sut<'a> {
    pub fn request(&self, debt_amount: i128) -> LiquidationRequest {
        LiquidationRequest {
            borrower: self.borrower.clone(),
            debt_asset: self.debt_token.address.clone(),
            debt_amount,
            debt_handle: self.debt_handle.clone(),
            collateral_asset: self.collateral_token.address.clone(),
            collateral_handle: self.collateral_handle.clone(),
        }
    }

    /// Arms the settlement and asks the pool for the loan the way the liquidator does
    pub fn flash_loan(&self, env: &Env, debt_amount: i128) {
        let request = self.request(debt_amount);

        self.settlement.arm(&request);
        self.pool.flash_loan(
            &self.liquidator,
            &self.settlement.address,
            &self.debt_token.address,
            &debt_amount,
            &request.encode(env),
            &0,
        );
    }

    pub fn pair_reserves(&self) -> (i128, i128) {
        let (reserve_0, reserve_1) = self.pair.get_reserves();

        if self.pair.token_0() == self.collateral_token.address {
            (reserve_0, reserve_1)
        } else {
            (reserve_1, reserve_0)
        }
    }
}
