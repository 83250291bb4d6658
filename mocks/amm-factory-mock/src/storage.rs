use soroban_sdk::{contracttype, Address, Env};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Pair(Address, Address),
    PairsLength,
}

/// Pair key doesn't depend on the order of tokens
fn pair_key(token_a: &Address, token_b: &Address) -> DataKey {
    if token_a < token_b {
        DataKey::Pair(token_a.clone(), token_b.clone())
    } else {
        DataKey::Pair(token_b.clone(), token_a.clone())
    }
}

pub fn read_pair(env: &Env, token_a: &Address, token_b: &Address) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&pair_key(token_a, token_b))
}

pub fn write_pair(env: &Env, token_a: &Address, token_b: &Address, pair: &Address) {
    env.storage()
        .persistent()
        .set(&pair_key(token_a, token_b), pair);

    let length = read_pairs_length(env);
    env.storage()
        .instance()
        .set(&DataKey::PairsLength, &(length + 1));
}

pub fn read_pairs_length(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::PairsLength)
        .unwrap_or(0)
}
