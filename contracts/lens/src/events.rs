use aggregator::types::{Protocol, RiskTier};
use soroban_sdk::{Address, Env, Symbol};

pub struct LensEvents {}

impl LensEvents {
    /// Emitted when the lens is initialized
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - `asset_decimals: u32`
    pub fn initialize(env: &Env, admin: Address, asset_decimals: u32) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, asset_decimals);
    }

    /// - topics - `["update_config", admin: Address]`
    /// - data - `asset_decimals: u32`
    pub fn update_config(env: &Env, admin: Address, asset_decimals: u32) {
        let topics = (Symbol::new(env, "update_config"), admin);
        env.events().publish(topics, asset_decimals);
    }

    /// - topics - `["register_vault", tier: RiskTier]`
    /// - data - `[vault: Address, batch_interval_hours: u32]`
    pub fn register_vault(env: &Env, tier: RiskTier, vault: Address, batch_interval_hours: u32) {
        let topics = (Symbol::new(env, "register_vault"), tier);
        env.events().publish(topics, (vault, batch_interval_hours));
    }

    /// - topics - `["remove_vault", tier: RiskTier]`
    /// - data - ()
    pub fn remove_vault(env: &Env, tier: RiskTier) {
        let topics = (Symbol::new(env, "remove_vault"), tier);
        env.events().publish(topics, ());
    }

    /// - topics - `["register_protocol", protocol_address: Address]`
    /// - data - `protocol: Protocol`
    pub fn register_protocol(env: &Env, protocol_address: Address, protocol: Protocol) {
        let topics = (Symbol::new(env, "register_protocol"), protocol_address);
        env.events().publish(topics, protocol);
    }
}
