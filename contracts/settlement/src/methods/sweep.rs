use liquidator_interface::types::error::Error;
use soroban_sdk::{token, Address, Env};

use crate::event;
use crate::storage::read_config;

use super::utils::validation::{require_no_pending_loan, require_owner};

pub fn sweep(env: &Env, who: &Address, token: &Address) -> Result<i128, Error> {
    let config = read_config(env)?;
    require_owner(env, &config, who);
    require_no_pending_loan(env);

    Ok(transfer_balance(env, token, &config.owner))
}

/// Moves the whole balance of `token` to `to`, nothing happens on zero balance
pub fn transfer_balance(env: &Env, token: &Address, to: &Address) -> i128 {
    transfer_excess(env, token, to, 0)
}

/// Moves the part of `token` balance above `reserved` to `to`
pub fn transfer_excess(env: &Env, token: &Address, to: &Address, reserved: i128) -> i128 {
    let token_client = token::Client::new(env, token);
    let settlement = env.current_contract_address();

    let excess = token_client.balance(&settlement) - reserved;

    if excess <= 0 {
        return 0;
    }

    token_client.transfer(&settlement, to, &excess);
    event::residual_swept(env, to, token, excess);

    excess
}
