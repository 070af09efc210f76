use aggregator::types::{Protocol, RiskTier};
use soroban_sdk::{Address, Env};

use crate::{
    msg::{AllocationResponse, BatchResponse, PortfolioResponse, VaultOverview},
    storage::{Config, VaultEntry},
};

pub trait LensTrait {
    // ################################################################
    //                             ADMIN
    // ################################################################

    fn initialize(env: Env, admin: Address, asset_decimals: u32);

    fn update_config(env: Env, new_admin: Option<Address>, asset_decimals: Option<u32>);

    fn register_vault(env: Env, tier: RiskTier, vault: Address, batch_interval_hours: u32);

    fn remove_vault(env: Env, tier: RiskTier);

    fn register_protocol(env: Env, protocol_address: Address, protocol: Protocol);

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn query_config(env: Env) -> Config;

    fn query_vault(env: Env, tier: RiskTier) -> VaultEntry;

    fn query_next_batch(env: Env, tier: RiskTier) -> BatchResponse;

    fn query_allocation(env: Env, tier: RiskTier) -> AllocationResponse;

    fn query_weighted_apy(env: Env, tier: RiskTier) -> u32;

    fn query_vault_overview(env: Env, tier: RiskTier) -> VaultOverview;

    fn query_portfolio(env: Env, user: Address) -> PortfolioResponse;
}
