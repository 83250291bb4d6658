extern crate std;

use crate::*;
use amm_interface::AmmPairClient;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::Client as TokenClient;
use soroban_sdk::token::StellarAssetClient as TokenAdminClient;

struct Sut<'a> {
    pair: AmmPairClient<'a>,
    collat_token: TokenClient<'a>,
    debt_token: TokenClient<'a>,
    trader: Address,
}

impl<'a> Sut<'a> {
    fn collat_is_token_0(&self) -> bool {
        self.collat_token.address == self.pair.token_0()
    }

    fn debt_out(&self, amount: i128) -> (i128, i128) {
        if self.collat_is_token_0() {
            (0, amount)
        } else {
            (amount, 0)
        }
    }
}

fn init<'a>(env: &Env) -> Sut<'a> {
    env.mock_all_auths();

    let admin = Address::generate(env);
    let trader = Address::generate(env);

    let collat_token = TokenClient::new(env, &env.register_stellar_asset_contract(admin.clone()));
    let debt_token = TokenClient::new(env, &env.register_stellar_asset_contract(admin));

    let (token_0, token_1) = if collat_token.address < debt_token.address {
        (collat_token.address.clone(), debt_token.address.clone())
    } else {
        (debt_token.address.clone(), collat_token.address.clone())
    };

    let pair_address = env.register_contract(None, AmmPairMock);
    let pair_admin = AmmPairAdminClient::new(env, &pair_address);
    pair_admin.initialize(&token_0, &token_1);

    TokenAdminClient::new(env, &collat_token.address).mint(&pair_address, &50_000);
    TokenAdminClient::new(env, &debt_token.address).mint(&pair_address, &20_000);
    pair_admin.sync();

    TokenAdminClient::new(env, &collat_token.address).mint(&trader, &10_000);

    Sut {
        pair: AmmPairClient::new(env, &pair_address),
        collat_token,
        debt_token,
        trader,
    }
}

#[test]
fn should_swap_with_exact_input() {
    let env = Env::default();
    let sut = init(&env);

    sut.collat_token
        .transfer(&sut.trader, &sut.pair.address, &2_654);

    let (amount_0_out, amount_1_out) = sut.debt_out(1_005);
    sut.pair
        .swap(&amount_0_out, &amount_1_out, &sut.trader, &Bytes::new(&env));

    assert_eq!(sut.debt_token.balance(&sut.trader), 1_005);
    assert_eq!(sut.collat_token.balance(&sut.trader), 7_346);

    let (reserve_0, reserve_1) = sut.pair.get_reserves();
    let (collat_reserve, debt_reserve) = if sut.collat_is_token_0() {
        (reserve_0, reserve_1)
    } else {
        (reserve_1, reserve_0)
    };
    assert_eq!(collat_reserve, 52_654);
    assert_eq!(debt_reserve, 18_995);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #204)")]
fn should_fail_when_input_is_one_short() {
    let env = Env::default();
    let sut = init(&env);

    sut.collat_token
        .transfer(&sut.trader, &sut.pair.address, &2_653);

    let (amount_0_out, amount_1_out) = sut.debt_out(1_005);
    sut.pair
        .swap(&amount_0_out, &amount_1_out, &sut.trader, &Bytes::new(&env));
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #204)")]
fn should_fail_when_reserves_exceed_balances() {
    let env = Env::default();
    let sut = init(&env);

    let (reserve_0, reserve_1) = if sut.collat_is_token_0() {
        (50_000, 40_000)
    } else {
        (40_000, 50_000)
    };
    AmmPairAdminClient::new(&env, &sut.pair.address).set_reserves(&reserve_0, &reserve_1);

    // 1_293 in for 1_005 out is priced off the inflated debt reserve
    sut.collat_token
        .transfer(&sut.trader, &sut.pair.address, &1_293);

    let (amount_0_out, amount_1_out) = sut.debt_out(1_005);
    sut.pair
        .swap(&amount_0_out, &amount_1_out, &sut.trader, &Bytes::new(&env));
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #201)")]
fn should_fail_when_output_drains_reserve() {
    let env = Env::default();
    let sut = init(&env);

    let (amount_0_out, amount_1_out) = sut.debt_out(20_000);
    sut.pair
        .swap(&amount_0_out, &amount_1_out, &sut.trader, &Bytes::new(&env));
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #203)")]
fn should_fail_without_input() {
    let env = Env::default();
    let sut = init(&env);

    let (amount_0_out, amount_1_out) = sut.debt_out(10);
    sut.pair
        .swap(&amount_0_out, &amount_1_out, &sut.trader, &Bytes::new(&env));
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #205)")]
fn should_reject_flash_swap() {
    let env = Env::default();
    let sut = init(&env);

    let (amount_0_out, amount_1_out) = sut.debt_out(10);
    sut.pair.swap(
        &amount_0_out,
        &amount_1_out,
        &sut.trader,
        &Bytes::from_array(&env, &[1]),
    );
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #102)")]
fn should_require_sorted_tokens() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let token_a = env.register_stellar_asset_contract(admin.clone());
    let token_b = env.register_stellar_asset_contract(admin);

    let (low, high) = if token_a < token_b {
        (token_a, token_b)
    } else {
        (token_b, token_a)
    };

    let pair_address = env.register_contract(None, AmmPairMock);
    AmmPairAdminClient::new(&env, &pair_address).initialize(&high, &low);
}
