use soroban_sdk::{contracttype, Address};

#[derive(Debug, Clone, Eq, PartialEq)]
#[contracttype]
pub struct LiquidatorConfig {
    pub owner: Address,
    pub settlement: Address,
    pub lending_pool: Address,
}
