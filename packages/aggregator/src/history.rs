//! Transaction history rows built from router events.
//!
//! The router emits `DepositQueued`, `WithdrawQueued`, `DepositClaimed` and
//! `WithdrawClaimed`, each carrying the user, the vault tier and an amount.
//! Indexers collect those events and hand them over as [`HistoryEntry`]s.

use soroban_sdk::{contracttype, Env, Symbol, Vec};

use crate::{
    constants::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, SECONDS_PER_WEEK, SECOND_MS},
    error::AggregatorResult,
    format::{write_units, TextBuf},
    types::RiskTier,
};

/// Decimals shown for history amounts.
pub const HISTORY_DISPLAY_DECIMALS: u32 = 4;

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TransactionKind {
    Deposit,
    Withdraw,
    ClaimShares,
    ClaimUsdc,
}

const KINDS: [TransactionKind; 4] = [
    TransactionKind::Deposit,
    TransactionKind::Withdraw,
    TransactionKind::ClaimShares,
    TransactionKind::ClaimUsdc,
];

impl TransactionKind {
    pub fn event_name(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "DepositQueued",
            TransactionKind::Withdraw => "WithdrawQueued",
            TransactionKind::ClaimShares => "DepositClaimed",
            TransactionKind::ClaimUsdc => "WithdrawClaimed",
        }
    }

    pub fn from_event_name(name: &str) -> Option<TransactionKind> {
        KINDS.into_iter().find(|kind| kind.event_name() == name)
    }

    pub fn from_event_topic(env: &Env, topic: &Symbol) -> Option<TransactionKind> {
        KINDS
            .into_iter()
            .find(|kind| Symbol::new(env, kind.event_name()) == *topic)
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdraw => "Withdraw",
            TransactionKind::ClaimShares => "Claim Shares",
            TransactionKind::ClaimUsdc => "Claim USDC",
        }
    }

    /// Withdraw requests and deposit claims are denominated in vault shares.
    pub fn unit(&self) -> &'static str {
        match self {
            TransactionKind::Withdraw | TransactionKind::ClaimShares => "Shares",
            TransactionKind::Deposit | TransactionKind::ClaimUsdc => "USDC",
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HistoryEntry {
    pub kind: TransactionKind,
    pub tier: RiskTier,
    pub amount: u128,
    pub timestamp_ms: u64,
}

impl HistoryEntry {
    /// `"12.5000 USDC"`
    pub fn write_amount(&self, env: &Env, buf: &mut TextBuf, decimals: u32) -> AggregatorResult {
        write_units(env, buf, self.amount, decimals, HISTORY_DISPLAY_DECIMALS)?;
        buf.push_str(" ").push_str(self.kind.unit());
        Ok(())
    }
}

/// Newest first; entries with equal timestamps keep their relative order.
pub fn newest_first(env: &Env, entries: &Vec<HistoryEntry>) -> Vec<HistoryEntry> {
    let mut sorted: Vec<HistoryEntry> = Vec::new(env);
    for entry in entries.iter() {
        let at = sorted
            .iter()
            .position(|existing| existing.timestamp_ms < entry.timestamp_ms)
            .map_or(sorted.len(), |index| index as u32);
        sorted.insert(at, entry);
    }
    sorted
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TimeAgo {
    Seconds(u64),
    Minutes(u64),
    Hours(u64),
    Days(u64),
    Weeks(u64),
}

/// Coarse age of an event; timestamps from the future read as `0s ago`.
pub fn time_ago(timestamp_ms: u64, now_ms: u64) -> TimeAgo {
    let seconds = now_ms.saturating_sub(timestamp_ms) / SECOND_MS;
    if seconds < SECONDS_PER_MINUTE {
        TimeAgo::Seconds(seconds)
    } else if seconds < SECONDS_PER_HOUR {
        TimeAgo::Minutes(seconds / SECONDS_PER_MINUTE)
    } else if seconds < SECONDS_PER_DAY {
        TimeAgo::Hours(seconds / SECONDS_PER_HOUR)
    } else if seconds < SECONDS_PER_WEEK {
        TimeAgo::Days(seconds / SECONDS_PER_DAY)
    } else {
        TimeAgo::Weeks(seconds / SECONDS_PER_WEEK)
    }
}

impl TimeAgo {
    pub fn write_to(&self, buf: &mut TextBuf) {
        let (value, suffix) = match *self {
            TimeAgo::Seconds(n) => (n, "s ago"),
            TimeAgo::Minutes(n) => (n, "m ago"),
            TimeAgo::Hours(n) => (n, "h ago"),
            TimeAgo::Days(n) => (n, "d ago"),
            TimeAgo::Weeks(n) => (n, "w ago"),
        };
        buf.push_uint(value).push_str(suffix);
    }
}
