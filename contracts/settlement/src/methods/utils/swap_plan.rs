use amm_interface::{AmmFactoryClient, AmmPairClient};
use common::get_amount_in;
use liquidator_interface::types::error::Error;
use liquidator_interface::types::swap_plan::SwapPlan;
use soroban_sdk::{Address, Env};

pub fn find_pair(
    env: &Env,
    amm_factory: &Address,
    debt_asset: &Address,
    collateral_asset: &Address,
) -> Result<Address, Error> {
    AmmFactoryClient::new(env, amm_factory)
        .get_pair(debt_asset, collateral_asset)
        .ok_or(Error::PairNotFound)
}

/// Exact-output swap of collateral into `amount_out` of the debt asset at current reserves
pub fn plan_swap(
    env: &Env,
    pair: &Address,
    collateral_asset: &Address,
    amount_out: i128,
) -> Result<SwapPlan, Error> {
    let pair = AmmPairClient::new(env, pair);

    let (reserve_0, reserve_1) = pair.get_reserves();
    let collateral_is_token_0 = pair.token_0() == *collateral_asset;

    let (reserve_in, reserve_out) = if collateral_is_token_0 {
        (reserve_0, reserve_1)
    } else {
        (reserve_1, reserve_0)
    };

    let amount_in = get_amount_in(amount_out, reserve_in, reserve_out)?;

    let (amount_0_out, amount_1_out) = if collateral_is_token_0 {
        (0, amount_out)
    } else {
        (amount_out, 0)
    };

    Ok(SwapPlan {
        reserve_in,
        reserve_out,
        amount_in,
        amount_out,
        amount_0_out,
        amount_1_out,
    })
}
