use soroban_sdk::{contracttype, Address};

#[derive(Debug, Clone, Eq, PartialEq)]
#[contracttype]
pub struct SettlementConfig {
    pub owner: Address,
    pub liquidator: Address,
    pub lending_pool: Address,
    pub position_manager: Address,
    pub amm_factory: Address,
}
