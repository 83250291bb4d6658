use liquidator_interface::types::liquidation_request::LiquidationRequest;
use soroban_sdk::contracttype;

/// Loan announced by the liquidator and not yet delivered by the lending pool
#[derive(Debug, Clone, Eq, PartialEq)]
#[contracttype]
pub struct PendingLoan {
    pub request: LiquidationRequest,
}
