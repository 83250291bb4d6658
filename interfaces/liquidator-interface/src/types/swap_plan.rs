use soroban_sdk::contracttype;

/// Swap of seized collateral back into the debt asset.
/// `reserve_in` is the collateral side of the pair, `reserve_out` is the debt side.
#[derive(Debug, Clone, Eq, PartialEq)]
#[contracttype]
pub struct SwapPlan {
    pub reserve_in: i128,
    pub reserve_out: i128,
    pub amount_in: i128,
    pub amount_out: i128,
    pub amount_0_out: i128,
    pub amount_1_out: i128,
}
