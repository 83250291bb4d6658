use crate::tests::sut::init_settlement;
use settlement_interface::types::settlement_config::SettlementConfig;
use settlement_interface::SettlementClient;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

use crate::Settlement;

#[test]
fn should_store_config() {
    let env = Env::default();
    let sut = init_settlement(&env);

    let config = sut.settlement.config();

    assert_eq!(config.owner, sut.owner);
    assert_eq!(config.liquidator, sut.liquidator);
    assert_eq!(config.lending_pool, sut.pool.address);
    assert_eq!(config.position_manager, sut.position_manager.address);
    assert_eq!(config.amm_factory, sut.amm_factory);
    assert_eq!(sut.settlement.version(), 1);
    assert!(!sut.settlement.pending());
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #0)")]
fn should_fail_when_initialized_twice() {
    let env = Env::default();
    let sut = init_settlement(&env);

    let config = sut.settlement.config();

    sut.settlement.initialize(&config);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #1)")]
fn should_fail_to_read_config_when_uninitialized() {
    let env = Env::default();

    let settlement = SettlementClient::new(&env, &env.register_contract(None, Settlement));

    settlement.config();
}

#[test]
fn should_initialize_without_auth() {
    let env = Env::default();

    let settlement = SettlementClient::new(&env, &env.register_contract(None, Settlement));
    let config = SettlementConfig {
        owner: Address::generate(&env),
        liquidator: Address::generate(&env),
        lending_pool: Address::generate(&env),
        position_manager: Address::generate(&env),
        amm_factory: Address::generate(&env),
    };

    settlement.initialize(&config);

    assert_eq!(settlement.config(), config);
}
