use soroban_sdk::{contracttype, Address};

#[derive(Debug, Clone)]
#[contracttype]
pub struct Market {
    pub underlying: Address,
    /// 1% - 100, 100% - 10_000
    pub collateral_factor: u32,
    /// Price of one unit of underlying in base units, FixedI128 inner value
    pub price: i128,
}
