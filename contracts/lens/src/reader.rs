use aggregator::{
    read::ChainRead,
    types::Protocol,
    yields::{StrategyBalance, StrategyYield},
};
use soroban_sdk::{log, Address, Env, Vec};

use crate::{
    interfaces::{StrategyClient, VaultClient},
    storage::{get_protocol, MAX_STRATEGIES},
};

/// Everything the lens reads from one vault and its strategies.
pub struct VaultSnapshot {
    pub total_assets: ChainRead,
    pub balances: Vec<StrategyBalance>,
    pub yields: Vec<StrategyYield>,
}

pub fn read_total_assets(env: &Env, vault: &Address) -> ChainRead {
    match VaultClient::new(env, vault).try_total_assets() {
        Ok(Ok(total)) => ChainRead::from_signed(env, total),
        _ => {
            log!(env, "Lens: Read: total_assets failed for vault {}", vault.clone());
            ChainRead::Unavailable
        }
    }
}

pub fn read_share_balance(env: &Env, vault: &Address, user: &Address) -> ChainRead {
    match VaultClient::new(env, vault).try_balance(user) {
        Ok(Ok(balance)) => ChainRead::from_signed(env, balance),
        _ => ChainRead::Unavailable,
    }
}

/// Strategy addresses in vault order. Indexes that fail to resolve are
/// skipped; at most `MAX_STRATEGIES` are visited.
pub fn read_strategies(env: &Env, vault: &Address) -> Vec<Address> {
    let client = VaultClient::new(env, vault);
    let mut strategies = Vec::new(env);

    let count = match client.try_strategy_count() {
        Ok(Ok(count)) => count.min(MAX_STRATEGIES),
        _ => {
            log!(env, "Lens: Read: strategy_count failed for vault {}", vault.clone());
            return strategies;
        }
    };

    for index in 0..count {
        if let Ok(Ok(strategy)) = client.try_strategy(&index) {
            strategies.push_back(strategy);
        }
    }

    strategies
}

fn read_protocol(env: &Env, client: &StrategyClient) -> Protocol {
    match client.try_protocol() {
        Ok(Ok(address)) => get_protocol(env, &address),
        _ => Protocol::Unknown,
    }
}

pub fn read_vault(env: &Env, vault: &Address) -> VaultSnapshot {
    let mut balances = Vec::new(env);
    let mut yields = Vec::new(env);

    for strategy in read_strategies(env, vault).iter() {
        let client = StrategyClient::new(env, &strategy);

        let balance = match client.try_deployed_assets() {
            Ok(Ok(deployed)) => ChainRead::from_signed(env, deployed),
            _ => {
                log!(env, "Lens: Read: deployed_assets failed for strategy {}", strategy.clone());
                ChainRead::Unavailable
            }
        }
        .or_zero();

        let apy_bps = match client.try_apy_bps() {
            Ok(Ok(apy_bps)) => apy_bps,
            _ => 0,
        };

        balances.push_back(StrategyBalance {
            name: read_protocol(env, &client),
            balance,
        });
        yields.push_back(StrategyYield { balance, apy_bps });
    }

    VaultSnapshot {
        total_assets: read_total_assets(env, vault),
        balances,
        yields,
    }
}
