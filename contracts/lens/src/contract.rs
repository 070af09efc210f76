use aggregator::{
    portfolio::{active_vault_count, display_apy_bps, portfolio_value, total_value_locked, VaultPosition},
    read::ChainRead,
    schedule::{BatchInterval, BatchWindow},
    types::{Protocol, RiskTier, ALL_TIERS},
    yields::{build_allocation_breakdown, compute_weighted_apy},
};
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, Address, Env, Vec,
};

use crate::{
    errors::ContractError,
    events::LensEvents,
    lens::LensTrait,
    msg::{AllocationResponse, BatchResponse, PortfolioResponse, VaultOverview},
    reader::{read_share_balance, read_total_assets, read_vault},
    storage::{
        get_config, get_registered_vault, get_vault, is_initialized, remove_vault, save_config,
        save_protocol, save_vault, set_initialized, Config, VaultEntry,
    },
};

contractmeta!(
    key = "Description",
    val = "Read-only lens over yield aggregator vaults: batch schedule, allocation and APY"
);

#[contract]
pub struct AggregatorLens;

#[contractimpl]
impl LensTrait for AggregatorLens {
    fn initialize(env: Env, admin: Address, asset_decimals: u32) {
        if is_initialized(&env) {
            log!(&env, "Lens: Initialize: initializing contract twice is not allowed");
            panic_with_error!(&env, ContractError::AlreadyInitialized);
        }

        set_initialized(&env);

        save_config(
            &env,
            &Config {
                admin: admin.clone(),
                asset_decimals,
            },
        );

        LensEvents::initialize(&env, admin, asset_decimals);
    }

    fn update_config(env: Env, new_admin: Option<Address>, asset_decimals: Option<u32>) {
        let mut config = get_config(&env);
        config.admin.require_auth();

        if let Some(new_admin) = new_admin {
            config.admin = new_admin;
        }
        if let Some(asset_decimals) = asset_decimals {
            config.asset_decimals = asset_decimals;
        }

        save_config(&env, &config);

        LensEvents::update_config(&env, config.admin, config.asset_decimals);
    }

    fn register_vault(env: Env, tier: RiskTier, vault: Address, batch_interval_hours: u32) {
        let config = get_config(&env);
        config.admin.require_auth();

        if BatchInterval::validated(&env, batch_interval_hours).is_err() {
            log!(
                &env,
                "Lens: Register vault: batch interval of {} hours does not divide a day",
                batch_interval_hours
            );
            panic_with_error!(&env, ContractError::InvalidBatchInterval);
        }

        save_vault(
            &env,
            tier,
            &VaultEntry {
                vault: vault.clone(),
                batch_interval_hours,
            },
        );

        LensEvents::register_vault(&env, tier, vault, batch_interval_hours);
    }

    fn remove_vault(env: Env, tier: RiskTier) {
        let config = get_config(&env);
        config.admin.require_auth();

        if get_vault(&env, tier).is_none() {
            log!(&env, "Lens: Remove vault: no vault registered for tier {}", tier as u32);
            panic_with_error!(&env, ContractError::VaultNotRegistered);
        }

        remove_vault(&env, tier);

        LensEvents::remove_vault(&env, tier);
    }

    fn register_protocol(env: Env, protocol_address: Address, protocol: Protocol) {
        let config = get_config(&env);
        config.admin.require_auth();

        save_protocol(&env, &protocol_address, protocol);

        LensEvents::register_protocol(&env, protocol_address, protocol);
    }

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn query_config(env: Env) -> Config {
        get_config(&env)
    }

    fn query_vault(env: Env, tier: RiskTier) -> VaultEntry {
        get_registered_vault(&env, tier)
    }

    fn query_next_batch(env: Env, tier: RiskTier) -> BatchResponse {
        let entry = get_registered_vault(&env, tier);
        batch_response(&env, &entry)
    }

    fn query_allocation(env: Env, tier: RiskTier) -> AllocationResponse {
        let entry = get_registered_vault(&env, tier);
        let snapshot = read_vault(&env, &entry.vault);
        let total_assets = snapshot.total_assets.or_zero();

        AllocationResponse {
            total_assets,
            entries: build_allocation_breakdown(&env, total_assets, &snapshot.balances),
        }
    }

    fn query_weighted_apy(env: Env, tier: RiskTier) -> u32 {
        let entry = get_registered_vault(&env, tier);
        let snapshot = read_vault(&env, &entry.vault);

        compute_weighted_apy(&env, snapshot.total_assets.or_zero(), &snapshot.yields)
    }

    fn query_vault_overview(env: Env, tier: RiskTier) -> VaultOverview {
        let entry = get_registered_vault(&env, tier);
        let snapshot = read_vault(&env, &entry.vault);
        let total_assets = snapshot.total_assets.or_zero();
        let weighted_apy_bps = compute_weighted_apy(&env, total_assets, &snapshot.yields);

        VaultOverview {
            tier,
            vault: entry.vault.clone(),
            total_assets,
            allocation: build_allocation_breakdown(&env, total_assets, &snapshot.balances),
            weighted_apy_bps,
            display_apy_bps: display_apy_bps(weighted_apy_bps, tier),
            batch: batch_response(&env, &entry),
        }
    }

    fn query_portfolio(env: Env, user: Address) -> PortfolioResponse {
        let mut positions = Vec::new(&env);
        let mut vault_totals = [ChainRead::Pending; ALL_TIERS.len()];

        for (slot, tier) in ALL_TIERS.into_iter().enumerate() {
            let Some(entry) = get_vault(&env, tier) else {
                continue;
            };

            positions.push_back(VaultPosition {
                tier,
                balance: read_share_balance(&env, &entry.vault, &user).or_zero(),
            });
            vault_totals[slot] = read_total_assets(&env, &entry.vault);
        }

        let total_value = portfolio_value(&env, &positions).unwrap_or_else(|_| {
            log!(&env, "Lens: Query portfolio: position total overflows");
            panic_with_error!(&env, ContractError::MathError)
        });

        let total_value_locked = total_value_locked(&env, vault_totals).unwrap_or_else(|_| {
            log!(&env, "Lens: Query portfolio: value locked overflows");
            panic_with_error!(&env, ContractError::MathError)
        });

        PortfolioResponse {
            active_vaults: active_vault_count(&positions),
            positions,
            total_value,
            total_value_locked,
        }
    }
}

fn now_ms(env: &Env) -> u64 {
    env.ledger().timestamp().saturating_mul(1_000)
}

fn batch_response(env: &Env, entry: &VaultEntry) -> BatchResponse {
    let Some(interval) = BatchInterval::new(entry.batch_interval_hours) else {
        log!(
            env,
            "Lens: Next batch: stored interval of {} hours is invalid",
            entry.batch_interval_hours
        );
        panic_with_error!(env, ContractError::InvalidBatchInterval)
    };

    let window = BatchWindow::at(interval, now_ms(env));
    let countdown = window.remaining.countdown().to_string(env).unwrap_or_else(|_| {
        log!(env, "Lens: Next batch: countdown does not fit the text buffer");
        panic_with_error!(env, ContractError::FormattingFailed)
    });

    BatchResponse { window, countdown }
}
