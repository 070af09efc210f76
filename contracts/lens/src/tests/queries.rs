use pretty_assertions::assert_eq;
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    vec, Address, Env, String,
};

use aggregator::{
    portfolio::VaultPosition,
    schedule::Remaining,
    types::{Protocol, RiskTier, StrategyName},
    yields::AllocationEntry,
};

use super::setup::{
    deploy_lens_contract, deploy_strategy_contract, deploy_vault_contract, MIDNIGHT, ONE_HOUR,
    USDC,
};
use crate::storage::MAX_STRATEGIES;

fn set_time(env: &Env, timestamp: u64) {
    env.ledger().with_mut(|li| li.timestamp = timestamp);
}

// 10:15:30 UTC
const MID_MORNING: u64 = MIDNIGHT + 10 * ONE_HOUR + 15 * 60 + 30;

#[test]
fn next_batch_on_hourly_vault() {
    let env = Env::default();
    env.mock_all_auths();
    set_time(&env, MID_MORNING);

    let lens = deploy_lens_contract(&env, Address::generate(&env));
    lens.register_vault(&RiskTier::Conservative, &Address::generate(&env), &1u32);

    let response = lens.query_next_batch(&RiskTier::Conservative);

    assert_eq!(response.window.interval_hours, 1);
    assert_eq!(
        response.window.next_execution_ms,
        (MIDNIGHT + 11 * ONE_HOUR) * 1_000
    );
    assert_eq!(response.window.remaining, Remaining::Left(2_670_000));
    assert_eq!(response.countdown, String::from_str(&env, "44m 30s"));
}

#[test]
fn next_batch_on_six_hour_vault() {
    let env = Env::default();
    env.mock_all_auths();
    set_time(&env, MID_MORNING);

    let lens = deploy_lens_contract(&env, Address::generate(&env));
    lens.register_vault(&RiskTier::Balanced, &Address::generate(&env), &6u32);

    let response = lens.query_next_batch(&RiskTier::Balanced);

    assert_eq!(
        response.window.next_execution_ms,
        (MIDNIGHT + 12 * ONE_HOUR) * 1_000
    );
    assert_eq!(response.countdown, String::from_str(&env, "1h 44m 30s"));
}

#[test]
fn next_batch_on_daily_vault_rolls_to_midnight() {
    let env = Env::default();
    env.mock_all_auths();
    set_time(&env, MID_MORNING);

    let lens = deploy_lens_contract(&env, Address::generate(&env));
    lens.register_vault(&RiskTier::Aggressive, &Address::generate(&env), &24u32);

    let response = lens.query_next_batch(&RiskTier::Aggressive);

    assert_eq!(
        response.window.next_execution_ms,
        (MIDNIGHT + 24 * ONE_HOUR) * 1_000
    );
    assert_eq!(response.countdown, String::from_str(&env, "13h 44m 30s"));
}

#[test]
fn next_batch_exactly_on_boundary_moves_to_the_following_one() {
    let env = Env::default();
    env.mock_all_auths();
    set_time(&env, MIDNIGHT + 12 * ONE_HOUR);

    let lens = deploy_lens_contract(&env, Address::generate(&env));
    lens.register_vault(&RiskTier::Balanced, &Address::generate(&env), &6u32);

    let response = lens.query_next_batch(&RiskTier::Balanced);

    assert_eq!(
        response.window.next_execution_ms,
        (MIDNIGHT + 18 * ONE_HOUR) * 1_000
    );
    assert_eq!(response.countdown, String::from_str(&env, "6h 0m 0s"));
}

#[test]
#[should_panic(expected = "Error(Contract, #4)")]
fn next_batch_for_unregistered_tier_should_fail() {
    let env = Env::default();
    env.mock_all_auths();

    let lens = deploy_lens_contract(&env, Address::generate(&env));

    lens.query_next_batch(&RiskTier::Aggressive);
}

#[test]
fn allocation_lists_strategies_then_idle() {
    let env = Env::default();
    env.mock_all_auths();

    let lens = deploy_lens_contract(&env, Address::generate(&env));
    let aave = Address::generate(&env);
    let compound = Address::generate(&env);
    lens.register_protocol(&aave, &Protocol::Aave);
    lens.register_protocol(&compound, &Protocol::Compound);

    let vault = deploy_vault_contract(&env, 1_000 * USDC);
    deploy_strategy_contract(&env, &vault, &aave, 600 * USDC, 400);
    deploy_strategy_contract(&env, &vault, &compound, 300 * USDC, 500);
    lens.register_vault(&RiskTier::Balanced, &vault.address, &1u32);

    let response = lens.query_allocation(&RiskTier::Balanced);

    assert_eq!(response.total_assets, 1_000_000_000);
    assert_eq!(
        response.entries,
        vec![
            &env,
            AllocationEntry {
                name: StrategyName::Strategy(Protocol::Aave),
                balance: 600_000_000,
                percentage_bps: 6_000,
            },
            AllocationEntry {
                name: StrategyName::Strategy(Protocol::Compound),
                balance: 300_000_000,
                percentage_bps: 3_000,
            },
            AllocationEntry {
                name: StrategyName::Idle,
                balance: 100_000_000,
                percentage_bps: 1_000,
            },
        ]
    );
}

#[test]
fn allocation_labels_unregistered_protocol_as_unknown() {
    let env = Env::default();
    env.mock_all_auths();

    let lens = deploy_lens_contract(&env, Address::generate(&env));

    let vault = deploy_vault_contract(&env, 500 * USDC);
    deploy_strategy_contract(&env, &vault, &Address::generate(&env), 500 * USDC, 300);
    lens.register_vault(&RiskTier::Conservative, &vault.address, &1u32);

    let response = lens.query_allocation(&RiskTier::Conservative);

    assert_eq!(response.entries.len(), 1);
    let entry = response.entries.get_unchecked(0);
    assert_eq!(entry.name, StrategyName::Strategy(Protocol::Unknown));
    assert_eq!(entry.percentage_bps, 10_000);
}

#[test]
fn broken_strategy_counts_as_zero() {
    let env = Env::default();
    env.mock_all_auths();

    let lens = deploy_lens_contract(&env, Address::generate(&env));
    let aave = Address::generate(&env);
    let compound = Address::generate(&env);
    lens.register_protocol(&aave, &Protocol::Aave);
    lens.register_protocol(&compound, &Protocol::Compound);

    let vault = deploy_vault_contract(&env, 1_000 * USDC);
    deploy_strategy_contract(&env, &vault, &aave, 400 * USDC, 400);
    let broken = deploy_strategy_contract(&env, &vault, &compound, 600 * USDC, 900);
    broken.set_broken(&true);
    lens.register_vault(&RiskTier::Balanced, &vault.address, &1u32);

    let allocation = lens.query_allocation(&RiskTier::Balanced);
    assert_eq!(
        allocation.entries,
        vec![
            &env,
            AllocationEntry {
                name: StrategyName::Strategy(Protocol::Aave),
                balance: 400_000_000,
                percentage_bps: 4_000,
            },
            AllocationEntry {
                name: StrategyName::Idle,
                balance: 600_000_000,
                percentage_bps: 6_000,
            },
        ]
    );

    // 400 * 400 / 1_000
    assert_eq!(lens.query_weighted_apy(&RiskTier::Balanced), 160);
}

#[test]
fn allocation_without_idle_row_when_reads_disagree() {
    let env = Env::default();
    env.mock_all_auths();

    let lens = deploy_lens_contract(&env, Address::generate(&env));
    let aave = Address::generate(&env);
    lens.register_protocol(&aave, &Protocol::Aave);

    // negative totals are discarded and read as zero
    let vault = deploy_vault_contract(&env, -5);
    deploy_strategy_contract(&env, &vault, &aave, 10 * USDC, 400);
    lens.register_vault(&RiskTier::Aggressive, &vault.address, &1u32);

    let response = lens.query_allocation(&RiskTier::Aggressive);

    assert_eq!(response.total_assets, 0);
    assert_eq!(
        response.entries,
        vec![
            &env,
            AllocationEntry {
                name: StrategyName::Strategy(Protocol::Aave),
                balance: 10_000_000,
                percentage_bps: 0,
            },
        ]
    );
    assert_eq!(lens.query_weighted_apy(&RiskTier::Aggressive), 0);
}

#[test]
fn strategies_beyond_the_cap_are_ignored() {
    let env = Env::default();
    env.mock_all_auths();

    let lens = deploy_lens_contract(&env, Address::generate(&env));
    let aave = Address::generate(&env);
    lens.register_protocol(&aave, &Protocol::Aave);

    let vault = deploy_vault_contract(&env, 100 * USDC);
    for _ in 0..=MAX_STRATEGIES {
        deploy_strategy_contract(&env, &vault, &aave, 10 * USDC, 100);
    }
    lens.register_vault(&RiskTier::Aggressive, &vault.address, &1u32);

    let response = lens.query_allocation(&RiskTier::Aggressive);

    assert_eq!(response.entries.len(), MAX_STRATEGIES + 1);
    let idle = response.entries.last().unwrap();
    assert_eq!(idle.name, StrategyName::Idle);
    assert_eq!(idle.balance, 20_000_000);
}

#[test]
fn weighted_apy_over_total_assets() {
    let env = Env::default();
    env.mock_all_auths();

    let lens = deploy_lens_contract(&env, Address::generate(&env));
    let aave = Address::generate(&env);
    let compound = Address::generate(&env);
    lens.register_protocol(&aave, &Protocol::Aave);
    lens.register_protocol(&compound, &Protocol::Compound);

    let vault = deploy_vault_contract(&env, 1_000 * USDC);
    deploy_strategy_contract(&env, &vault, &aave, 600 * USDC, 400);
    deploy_strategy_contract(&env, &vault, &compound, 300 * USDC, 500);
    lens.register_vault(&RiskTier::Balanced, &vault.address, &1u32);

    // (600 * 400 + 300 * 500) / 1_000, idle earns nothing
    assert_eq!(lens.query_weighted_apy(&RiskTier::Balanced), 390);
}

#[test]
fn overview_of_empty_vault_shows_target_midpoint() {
    let env = Env::default();
    env.mock_all_auths();
    set_time(&env, MIDNIGHT);

    let lens = deploy_lens_contract(&env, Address::generate(&env));
    let vault = deploy_vault_contract(&env, 0);
    lens.register_vault(&RiskTier::Balanced, &vault.address, &1u32);

    let overview = lens.query_vault_overview(&RiskTier::Balanced);

    assert_eq!(overview.tier, RiskTier::Balanced);
    assert_eq!(overview.vault, vault.address);
    assert_eq!(overview.total_assets, 0);
    assert!(overview.allocation.is_empty());
    assert_eq!(overview.weighted_apy_bps, 0);
    assert_eq!(overview.display_apy_bps, 550);
    assert_eq!(overview.batch.countdown, String::from_str(&env, "1h 0m 0s"));
}

#[test]
fn overview_of_earning_vault_shows_weighted_apy() {
    let env = Env::default();
    env.mock_all_auths();
    set_time(&env, MID_MORNING);

    let lens = deploy_lens_contract(&env, Address::generate(&env));
    let aave = Address::generate(&env);
    lens.register_protocol(&aave, &Protocol::Aave);

    let vault = deploy_vault_contract(&env, 2_000 * USDC);
    deploy_strategy_contract(&env, &vault, &aave, 2_000 * USDC, 610);
    lens.register_vault(&RiskTier::Conservative, &vault.address, &2u32);

    let overview = lens.query_vault_overview(&RiskTier::Conservative);

    assert_eq!(overview.weighted_apy_bps, 610);
    assert_eq!(overview.display_apy_bps, 610);
    assert_eq!(overview.allocation.len(), 1);
    assert_eq!(
        overview.batch.window.next_execution_ms,
        (MIDNIGHT + 12 * ONE_HOUR) * 1_000
    );
}

#[test]
fn portfolio_sums_positions_across_registered_vaults() {
    let env = Env::default();
    env.mock_all_auths();

    let lens = deploy_lens_contract(&env, Address::generate(&env));
    let user = Address::generate(&env);

    let conservative = deploy_vault_contract(&env, 1_000 * USDC);
    conservative.set_balance(&user, &(100 * USDC));
    let aggressive = deploy_vault_contract(&env, 500 * USDC);

    lens.register_vault(&RiskTier::Conservative, &conservative.address, &1u32);
    lens.register_vault(&RiskTier::Aggressive, &aggressive.address, &1u32);

    let portfolio = lens.query_portfolio(&user);

    assert_eq!(
        portfolio.positions,
        vec![
            &env,
            VaultPosition {
                tier: RiskTier::Conservative,
                balance: 100_000_000,
            },
            VaultPosition {
                tier: RiskTier::Aggressive,
                balance: 0,
            },
        ]
    );
    assert_eq!(portfolio.total_value, 100_000_000);
    assert_eq!(portfolio.active_vaults, 1);
    assert_eq!(portfolio.total_value_locked, 1_500_000_000);
}

#[test]
fn portfolio_without_vaults_is_empty() {
    let env = Env::default();
    env.mock_all_auths();

    let lens = deploy_lens_contract(&env, Address::generate(&env));

    let portfolio = lens.query_portfolio(&Address::generate(&env));

    assert!(portfolio.positions.is_empty());
    assert_eq!(portfolio.total_value, 0);
    assert_eq!(portfolio.active_vaults, 0);
    assert_eq!(portfolio.total_value_locked, 0);
}
