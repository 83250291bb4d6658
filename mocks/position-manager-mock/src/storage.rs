use position_manager_interface::types::error::Error;
use soroban_sdk::{contracttype, vec, Address, Env, Vec};

use crate::types::market::Market;
use crate::types::position::Position;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    CloseFactor,
    LiquidationIncentive,
    Markets,
    Market(Address),
    Position(Address, Address),
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn write_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn read_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::Uninitialized)
}

pub fn write_close_factor(env: &Env, close_factor: u32) {
    env.storage()
        .instance()
        .set(&DataKey::CloseFactor, &close_factor);
}

pub fn read_close_factor(env: &Env) -> Result<u32, Error> {
    env.storage()
        .instance()
        .get(&DataKey::CloseFactor)
        .ok_or(Error::Uninitialized)
}

pub fn write_liquidation_incentive(env: &Env, incentive: u32) {
    env.storage()
        .instance()
        .set(&DataKey::LiquidationIncentive, &incentive);
}

pub fn read_liquidation_incentive(env: &Env) -> Result<u32, Error> {
    env.storage()
        .instance()
        .get(&DataKey::LiquidationIncentive)
        .ok_or(Error::Uninitialized)
}

pub fn read_markets(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Markets)
        .unwrap_or(vec![env])
}

pub fn has_market(env: &Env, handle: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Market(handle.clone()))
}

pub fn write_market(env: &Env, handle: &Address, market: &Market) {
    let key = DataKey::Market(handle.clone());

    if !has_market(env, handle) {
        let mut markets = read_markets(env);
        markets.push_back(handle.clone());
        env.storage().instance().set(&DataKey::Markets, &markets);
    }

    env.storage().persistent().set(&key, market);
}

pub fn read_market(env: &Env, handle: &Address) -> Result<Market, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Market(handle.clone()))
        .ok_or(Error::MarketNotListed)
}

pub fn write_position(env: &Env, borrower: &Address, handle: &Address, position: &Position) {
    env.storage().persistent().set(
        &DataKey::Position(borrower.clone(), handle.clone()),
        position,
    );
}

pub fn read_position(env: &Env, borrower: &Address, handle: &Address) -> Position {
    env.storage()
        .persistent()
        .get(&DataKey::Position(borrower.clone(), handle.clone()))
        .unwrap_or_default()
}
