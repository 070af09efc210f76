use soroban_sdk::contracttype;

use crate::constants::IDLE_LABEL;

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RiskTier {
    Conservative = 0,
    Balanced = 1,
    Aggressive = 2,
}

pub const ALL_TIERS: [RiskTier; 3] = [
    RiskTier::Conservative,
    RiskTier::Balanced,
    RiskTier::Aggressive,
];

impl RiskTier {
    pub fn from_u32(value: u32) -> Option<RiskTier> {
        match value {
            0 => Some(RiskTier::Conservative),
            1 => Some(RiskTier::Balanced),
            2 => Some(RiskTier::Aggressive),
            _ => None,
        }
    }

    pub fn config(&self) -> VaultConfig {
        vault_config(*self)
    }
}

/// Lending protocol a strategy deploys into.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Protocol {
    Aave,
    Compound,
    Unknown,
}

impl Protocol {
    pub fn label(&self) -> &'static str {
        match self {
            Protocol::Aave => "Aave",
            Protocol::Compound => "Compound",
            Protocol::Unknown => "Unknown Protocol",
        }
    }
}

/// Row label of an allocation breakdown.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StrategyName {
    Strategy(Protocol),
    /// Assets held by the vault that no strategy has deployed yet
    Idle,
}

impl StrategyName {
    pub fn label(&self) -> &'static str {
        match self {
            StrategyName::Strategy(protocol) => protocol.label(),
            StrategyName::Idle => IDLE_LABEL,
        }
    }
}

impl From<Protocol> for StrategyName {
    fn from(protocol: Protocol) -> Self {
        StrategyName::Strategy(protocol)
    }
}

/// Static presentation settings of a vault tier.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VaultConfig {
    pub tier: RiskTier,
    pub name: &'static str,
    pub risk_level: &'static str,
    pub target_apy_min_bps: u32,
    pub target_apy_max_bps: u32,
    /// Target split in whole percent, in strategy order
    pub target_allocation: [(Protocol, u32); 2],
    pub rebalance_threshold: u32,
    pub batch_interval_hours: u32,
}

impl VaultConfig {
    pub fn target_apy_midpoint_bps(&self) -> u32 {
        (self.target_apy_min_bps + self.target_apy_max_bps) / 2
    }
}

pub const fn vault_config(tier: RiskTier) -> VaultConfig {
    match tier {
        RiskTier::Conservative => VaultConfig {
            tier,
            name: "Conservative Vault",
            risk_level: "Low",
            target_apy_min_bps: 350,
            target_apy_max_bps: 500,
            target_allocation: [(Protocol::Aave, 80), (Protocol::Compound, 20)],
            rebalance_threshold: 6,
            batch_interval_hours: 1,
        },
        RiskTier::Balanced => VaultConfig {
            tier,
            name: "Balanced Vault",
            risk_level: "Medium",
            target_apy_min_bps: 450,
            target_apy_max_bps: 650,
            target_allocation: [(Protocol::Aave, 50), (Protocol::Compound, 50)],
            rebalance_threshold: 4,
            batch_interval_hours: 1,
        },
        RiskTier::Aggressive => VaultConfig {
            tier,
            name: "Aggressive Vault",
            risk_level: "High",
            target_apy_min_bps: 550,
            target_apy_max_bps: 800,
            target_allocation: [(Protocol::Aave, 30), (Protocol::Compound, 70)],
            rebalance_threshold: 2,
            batch_interval_hours: 1,
        },
    }
}
