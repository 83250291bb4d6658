use amm_interface::types::error::Error;
use soroban_sdk::{contracttype, Address, Env};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Token0,
    Token1,
    Reserve0,
    Reserve1,
}

pub fn has_tokens(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Token0)
}

pub fn write_tokens(env: &Env, token_0: &Address, token_1: &Address) {
    env.storage().instance().set(&DataKey::Token0, token_0);
    env.storage().instance().set(&DataKey::Token1, token_1);
}

pub fn read_token_0(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Token0)
        .ok_or(Error::Uninitialized)
}

pub fn read_token_1(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Token1)
        .ok_or(Error::Uninitialized)
}

pub fn write_reserves(env: &Env, reserve_0: i128, reserve_1: i128) {
    env.storage().instance().set(&DataKey::Reserve0, &reserve_0);
    env.storage().instance().set(&DataKey::Reserve1, &reserve_1);
}

pub fn read_reserves(env: &Env) -> (i128, i128) {
    let reserve_0 = env
        .storage()
        .instance()
        .get(&DataKey::Reserve0)
        .unwrap_or(0);
    let reserve_1 = env
        .storage()
        .instance()
        .get(&DataKey::Reserve1)
        .unwrap_or(0);

    (reserve_0, reserve_1)
}
