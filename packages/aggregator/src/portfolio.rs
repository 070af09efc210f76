use soroban_sdk::{contracttype, Env, Vec};

use crate::{
    error::{AggregatorResult, ErrorCode},
    math::safe_math::SafeMath,
    read::ChainRead,
    types::RiskTier,
    validate,
};

/// A user's share balance in one vault.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultPosition {
    pub tier: RiskTier,
    pub balance: u128,
}

/// Sum of total assets across vaults; reads that failed or are still
/// pending count as zero.
pub fn total_value_locked<I>(env: &Env, vault_totals: I) -> AggregatorResult<u128>
where
    I: IntoIterator<Item = ChainRead>,
{
    vault_totals
        .into_iter()
        .try_fold(0u128, |sum, read| sum.safe_add(read.or_zero(), env))
}

pub fn portfolio_value(env: &Env, positions: &Vec<VaultPosition>) -> AggregatorResult<u128> {
    positions
        .iter()
        .try_fold(0u128, |sum, position| sum.safe_add(position.balance, env))
}

pub fn active_vault_count(positions: &Vec<VaultPosition>) -> u32 {
    positions.iter().filter(|position| position.balance > 0).count() as u32
}

/// APY to show for a vault: the on-chain weighted figure, or the midpoint of
/// the tier's target range while nothing is earning yet.
pub fn display_apy_bps(weighted_apy_bps: u32, tier: RiskTier) -> u32 {
    if weighted_apy_bps > 0 {
        weighted_apy_bps
    } else {
        tier.config().target_apy_midpoint_bps()
    }
}

/// Checks a deposit or withdraw amount against the spendable balance, when
/// that balance is known.
pub fn validate_amount(env: &Env, amount: u128, balance: Option<u128>) -> AggregatorResult {
    validate!(env, amount > 0, ErrorCode::InvalidAmount, "Amount must be greater than 0")?;

    if let Some(balance) = balance {
        validate!(
            env,
            amount <= balance,
            ErrorCode::InsufficientBalance,
            "Amount {} exceeds balance {}",
            amount,
            balance
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use soroban_sdk::{vec, Env};

    use super::*;

    #[test]
    fn tvl_ignores_missing_reads() {
        let env = Env::default();
        let reads = [
            ChainRead::Value(1_000_000),
            ChainRead::Unavailable,
            ChainRead::Pending,
            ChainRead::Value(250_000),
        ];
        assert_eq!(total_value_locked(&env, reads).unwrap(), 1_250_000);
    }

    #[test]
    fn tvl_overflow_is_a_math_error() {
        let env = Env::default();
        let reads = [ChainRead::Value(u128::MAX), ChainRead::Value(1)];
        assert_eq!(total_value_locked(&env, reads), Err(ErrorCode::MathError));
    }

    #[test]
    fn portfolio_sums_positions_and_counts_active_vaults() {
        let env = Env::default();
        let positions = vec![
            &env,
            VaultPosition { tier: RiskTier::Conservative, balance: 5_000_000 },
            VaultPosition { tier: RiskTier::Balanced, balance: 0 },
            VaultPosition { tier: RiskTier::Aggressive, balance: 1_500_000 },
        ];

        assert_eq!(portfolio_value(&env, &positions).unwrap(), 6_500_000);
        assert_eq!(active_vault_count(&positions), 2);
    }

    #[test]
    fn empty_portfolio() {
        let env = Env::default();
        let positions = Vec::new(&env);
        assert_eq!(portfolio_value(&env, &positions).unwrap(), 0);
        assert_eq!(active_vault_count(&positions), 0);
    }

    #[test]
    fn display_apy_falls_back_to_target_midpoint() {
        assert_eq!(display_apy_bps(452, RiskTier::Balanced), 452);
        assert_eq!(display_apy_bps(0, RiskTier::Balanced), 550);
        assert_eq!(display_apy_bps(0, RiskTier::Aggressive), 675);
    }

    #[test]
    fn amount_validation() {
        let env = Env::default();
        assert_eq!(validate_amount(&env, 0, None), Err(ErrorCode::InvalidAmount));
        assert_eq!(validate_amount(&env, 0, Some(10)), Err(ErrorCode::InvalidAmount));
        assert_eq!(validate_amount(&env, 11, Some(10)), Err(ErrorCode::InsufficientBalance));
        assert_eq!(validate_amount(&env, 10, Some(10)), Ok(()));
        assert_eq!(validate_amount(&env, 1_000, None), Ok(()));
    }
}
