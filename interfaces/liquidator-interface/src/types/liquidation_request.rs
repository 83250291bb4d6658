use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{contracttype, Address, Bytes, Env};

/// Everything the flash loan callback needs to liquidate a single position.
/// Travels through the lending pool as opaque XDR bytes.
#[derive(Debug, Clone, Eq, PartialEq)]
#[contracttype]
pub struct LiquidationRequest {
    pub borrower: Address,
    pub debt_asset: Address,
    pub debt_amount: i128,
    pub debt_handle: Address,
    pub collateral_asset: Address,
    pub collateral_handle: Address,
}

impl LiquidationRequest {
    pub fn encode(&self, env: &Env) -> Bytes {
        self.clone().to_xdr(env)
    }
}
