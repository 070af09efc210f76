use soroban_sdk::{log, Env};

use crate::math::casting::Cast;

/// Outcome of reading one numeric value from a vault or strategy contract.
///
/// Every computation in this crate takes plain integers; readers collapse a
/// `ChainRead` with [`ChainRead::or_zero`] before calling in:
///
/// * `Pending` - the read has not resolved yet. Counts as 0; views should
///   check [`ChainRead::is_settled`] to show a loading state instead.
/// * `Value(n)` - the contract answered `n`.
/// * `Unavailable` - the call failed or returned something unusable (for
///   instance a negative balance). Counts as 0.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ChainRead {
    Pending,
    Value(u128),
    Unavailable,
}

impl ChainRead {
    /// Token contracts report balances as `i128`; negatives are unusable.
    pub fn from_signed(env: &Env, value: i128) -> ChainRead {
        match value.cast::<u128>(env) {
            Ok(amount) => ChainRead::Value(amount),
            Err(_) => {
                log!(env, "Discarding negative on-chain amount {}", value);
                ChainRead::Unavailable
            }
        }
    }

    pub fn or_zero(self) -> u128 {
        match self {
            ChainRead::Value(amount) => amount,
            ChainRead::Pending | ChainRead::Unavailable => 0,
        }
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, ChainRead::Pending)
    }

    pub fn value(self) -> Option<u128> {
        match self {
            ChainRead::Value(amount) => Some(amount),
            _ => None,
        }
    }
}

impl From<Option<u128>> for ChainRead {
    fn from(value: Option<u128>) -> Self {
        match value {
            Some(amount) => ChainRead::Value(amount),
            None => ChainRead::Unavailable,
        }
    }
}
