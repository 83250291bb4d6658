use liquidator_interface::types::liquidation_request::LiquidationRequest;
use liquidator_interface::types::liquidator_config::LiquidatorConfig;
use soroban_sdk::{Env, Symbol};

pub(crate) fn initialized(e: &Env, config: &LiquidatorConfig) {
    let topics = (Symbol::new(e, "initialize"), config.owner.clone());
    e.events().publish(
        topics,
        (config.settlement.clone(), config.lending_pool.clone()),
    );
}

pub(crate) fn flash_loan_requested(e: &Env, request: &LiquidationRequest) {
    let topics = (
        Symbol::new(e, "flash_loan_requested"),
        request.borrower.clone(),
    );
    e.events().publish(
        topics,
        (
            request.debt_asset.clone(),
            request.debt_amount,
            request.collateral_asset.clone(),
        ),
    );
}

pub(crate) fn liquidation_settled(e: &Env, request: &LiquidationRequest) {
    let topics = (
        Symbol::new(e, "liquidation_settled"),
        request.borrower.clone(),
    );
    e.events().publish(
        topics,
        (request.debt_asset.clone(), request.debt_amount),
    );
}
