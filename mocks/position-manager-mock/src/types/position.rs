use soroban_sdk::contracttype;

#[derive(Debug, Clone, Default, Eq, PartialEq)]
#[contracttype]
pub struct Position {
    pub collateral: i128,
    pub debt: i128,
}
