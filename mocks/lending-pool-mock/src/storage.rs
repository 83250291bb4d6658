use lending_pool_interface::types::error::Error;
use soroban_sdk::{contracttype, Address, Env};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    FlashLoanFee,
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

pub fn write_flash_loan_fee(env: &Env, fee: u32) {
    env.storage().instance().set(&DataKey::FlashLoanFee, &fee);
}

pub fn read_flash_loan_fee(env: &Env) -> Result<u32, Error> {
    env.storage()
        .instance()
        .get(&DataKey::FlashLoanFee)
        .ok_or(Error::Uninitialized)
}
