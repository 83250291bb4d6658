use liquidator_interface::types::swap_plan::SwapPlan;
use settlement_interface::types::settlement_config::SettlementConfig;
use soroban_sdk::{symbol_short, Address, Env, Symbol};

pub(crate) fn initialized(e: &Env, config: &SettlementConfig) {
    let topics = (Symbol::new(e, "initialize"), config.owner.clone());
    e.events().publish(
        topics,
        (
            config.liquidator.clone(),
            config.lending_pool.clone(),
            config.position_manager.clone(),
            config.amm_factory.clone(),
        ),
    );
}

pub(crate) fn armed(e: &Env, asset: &Address, amount: i128) {
    let topics = (symbol_short!("armed"), asset.clone());
    e.events().publish(topics, amount);
}

pub(crate) fn liquidation(
    e: &Env,
    borrower: &Address,
    debt_asset: &Address,
    repaid: i128,
    collateral_asset: &Address,
    seized: i128,
) {
    let topics = (Symbol::new(e, "liquidation"), borrower.clone());
    e.events().publish(
        topics,
        (debt_asset.clone(), repaid, collateral_asset.clone(), seized),
    );
}

pub(crate) fn swap(e: &Env, pair: &Address, plan: &SwapPlan) {
    let topics = (symbol_short!("swap"), pair.clone());
    e.events().publish(
        topics,
        (
            plan.reserve_in,
            plan.reserve_out,
            plan.amount_in,
            plan.amount_out,
        ),
    );
}

pub(crate) fn repayment_approved(e: &Env, lending_pool: &Address, asset: &Address, amount: i128) {
    let topics = (Symbol::new(e, "repayment_approved"), lending_pool.clone());
    e.events().publish(topics, (asset.clone(), amount));
}

pub(crate) fn residual_swept(e: &Env, to: &Address, token: &Address, amount: i128) {
    let topics = (Symbol::new(e, "residual_swept"), to.clone());
    e.events().publish(topics, (token.clone(), amount));
}
