use soroban_sdk::{contracttype, log, Env, Vec};

use crate::{
    format::{write_bps_percent, TextBuf},
    math::{bn::U192, helpers::proportion_bps},
    types::{Protocol, StrategyName},
};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StrategyBalance {
    pub name: Protocol,
    /// Deployed amount in the asset's smallest unit
    pub balance: u128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StrategyYield {
    pub balance: u128,
    pub apy_bps: u32,
}

/// One row of a vault's fund distribution.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllocationEntry {
    pub name: StrategyName,
    pub balance: u128,
    /// Share of total assets, floored to whole basis points
    pub percentage_bps: u32,
}

impl AllocationEntry {
    pub fn write_percentage(&self, buf: &mut TextBuf) {
        write_bps_percent(buf, self.percentage_bps);
    }
}

/// Splits `total_assets` into the supplied strategies plus whatever is idle in
/// the vault.
///
/// Strategies holding nothing are left out. Rows keep the supplied order and
/// the idle row, if any, comes last. Percentages are floored independently so
/// they may add up to slightly less than 100%.
///
/// If the strategies report more than `total_assets` between them the reads
/// were taken at different blocks; idle is clamped to zero and the mismatch is
/// logged.
pub fn build_allocation_breakdown(
    env: &Env,
    total_assets: u128,
    strategies: &Vec<StrategyBalance>,
) -> Vec<AllocationEntry> {
    let mut entries = Vec::new(env);
    let mut deployed = U192::zero();

    for strategy in strategies.iter() {
        if strategy.balance == 0 {
            continue;
        }

        deployed = deployed + U192::from(strategy.balance);
        entries.push_back(AllocationEntry {
            name: StrategyName::from(strategy.name),
            balance: strategy.balance,
            percentage_bps: proportion_bps(strategy.balance, total_assets),
        });
    }

    let total = U192::from(total_assets);
    if deployed > total {
        log!(
            env,
            "Strategy balances {} exceed vault total assets {}",
            deployed.saturating_to_u128(),
            total_assets
        );
        return entries;
    }

    let idle = (total - deployed).as_u128();
    if idle > 0 {
        entries.push_back(AllocationEntry {
            name: StrategyName::Idle,
            balance: idle,
            percentage_bps: proportion_bps(idle, total_assets),
        });
    }

    entries
}

/// `floor(sum(balance * apy_bps) / total_assets)`, 0 for an empty vault.
///
/// Idle assets earn nothing and are simply not listed. The weighted sum is
/// accumulated in 192 bits.
pub fn compute_weighted_apy(env: &Env, total_assets: u128, strategies: &Vec<StrategyYield>) -> u32 {
    if total_assets == 0 {
        return 0;
    }

    let weighted = strategies
        .iter()
        .fold(U192::zero(), |sum, strategy| {
            sum + U192::from(strategy.balance) * U192::from(strategy.apy_bps)
        });

    let apy = weighted / U192::from(total_assets);
    if apy > U192::from(u32::MAX) {
        log!(env, "Weighted APY exceeds u32 range, strategy balances exceed total assets");
        return u32::MAX;
    }

    apy.low_u32()
}
