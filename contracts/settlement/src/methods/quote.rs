use liquidator_interface::types::error::Error;
use liquidator_interface::types::swap_plan::SwapPlan;
use soroban_sdk::{Address, Env};

use crate::storage::read_config;

use super::utils::swap_plan::{find_pair, plan_swap};

pub fn quote(
    env: &Env,
    debt_asset: &Address,
    debt_amount: i128,
    premium: i128,
    collateral_asset: &Address,
) -> Result<SwapPlan, Error> {
    let config = read_config(env)?;

    let amount_out = debt_amount
        .checked_add(premium)
        .ok_or(Error::MathOverflowError)?;

    let pair = find_pair(env, &config.amm_factory, debt_asset, collateral_asset)?;

    plan_swap(env, &pair, collateral_asset, amount_out)
}
