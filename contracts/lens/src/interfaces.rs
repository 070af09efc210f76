//! Read surface of the external vault and strategy contracts.

use soroban_sdk::{contractclient, Address, Env};

#[contractclient(name = "VaultClient")]
pub trait VaultInterface {
    /// Assets under management, idle plus deployed
    fn total_assets(env: Env) -> i128;

    fn strategy_count(env: Env) -> u32;

    fn strategy(env: Env, index: u32) -> Address;

    /// Vault share balance of `id`
    fn balance(env: Env, id: Address) -> i128;
}

#[contractclient(name = "StrategyClient")]
pub trait StrategyInterface {
    /// Assets currently supplied to the lending protocol
    fn deployed_assets(env: Env) -> i128;

    /// Address of the lending protocol the strategy supplies to
    fn protocol(env: Env) -> Address;

    fn apy_bps(env: Env) -> u32;
}
