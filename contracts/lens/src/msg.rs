use aggregator::{
    portfolio::VaultPosition,
    schedule::BatchWindow,
    types::RiskTier,
    yields::AllocationEntry,
};
use soroban_sdk::{contracttype, Address, String, Vec};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BatchResponse {
    pub window: BatchWindow,
    pub countdown: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllocationResponse {
    pub total_assets: u128,
    pub entries: Vec<AllocationEntry>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultOverview {
    pub tier: RiskTier,
    pub vault: Address,
    pub total_assets: u128,
    pub allocation: Vec<AllocationEntry>,
    pub weighted_apy_bps: u32,
    /// Weighted APY, or the tier's target midpoint while nothing earns
    pub display_apy_bps: u32,
    pub batch: BatchResponse,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PortfolioResponse {
    /// One entry per registered vault, in tier order
    pub positions: Vec<VaultPosition>,
    pub total_value: u128,
    pub active_vaults: u32,
    pub total_value_locked: u128,
}
