use aggregator::types::{Protocol, RiskTier};
use soroban_sdk::{contracttype, log, panic_with_error, Address, Env};

use crate::errors::ContractError;

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Upper bound on strategies enumerated per vault.
pub const MAX_STRATEGIES: u32 = 8;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    Initialized,
    Vault(RiskTier),
    Protocol(Address),
}

// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    /// Decimals of the vault asset, used when rendering amounts
    pub asset_decimals: u32,
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn get_config(env: &Env) -> Config {
    let config = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| {
            log!(env, "Lens: Config not set");
            panic_with_error!(env, ContractError::NotInitialized)
        });

    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

    config
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Initialized)
        .unwrap_or(false)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
}

// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultEntry {
    pub vault: Address,
    pub batch_interval_hours: u32,
}

pub fn save_vault(env: &Env, tier: RiskTier, entry: &VaultEntry) {
    let key = DataKey::Vault(tier);
    env.storage().persistent().set(&key, entry);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_vault(env: &Env, tier: RiskTier) -> Option<VaultEntry> {
    let key = DataKey::Vault(tier);
    let entry = env.storage().persistent().get::<_, VaultEntry>(&key);

    if entry.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }

    entry
}

pub fn get_registered_vault(env: &Env, tier: RiskTier) -> VaultEntry {
    get_vault(env, tier).unwrap_or_else(|| {
        log!(env, "Lens: No vault registered for tier {}", tier as u32);
        panic_with_error!(env, ContractError::VaultNotRegistered)
    })
}

pub fn remove_vault(env: &Env, tier: RiskTier) {
    env.storage().persistent().remove(&DataKey::Vault(tier));
}

// ################################################################

pub fn save_protocol(env: &Env, address: &Address, protocol: Protocol) {
    let key = DataKey::Protocol(address.clone());
    env.storage().persistent().set(&key, &protocol);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Protocols nobody registered show up as `Unknown`.
pub fn get_protocol(env: &Env, address: &Address) -> Protocol {
    env.storage()
        .persistent()
        .get(&DataKey::Protocol(address.clone()))
        .unwrap_or(Protocol::Unknown)
}
