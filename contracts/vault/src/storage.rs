use soroban_sdk::{contracttype, Address, Env};

use crate::error::VaultError;

/// One day of 5-second ledgers. Also the length of the accounting window.
pub const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Storage keys for vault data
#[contracttype]
#[derive(Clone)]
pub enum VaultDataKey {
    /// Singleton vault configuration and rate-limit state
    Config,
}

/// Vault configuration plus the rolling rate-limit state.
///
/// All ledger positions (`day_window_start`, `cooldown_until`) are ledger
/// sequence numbers.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultConfig {
    /// Only identity allowed to withdraw
    pub owner: Address,
    /// Token contract the vault holds, bound at init
    pub asset: Address,
    /// Contract allowed to replace `owner`; `None` disables recovery
    pub recovery: Option<Address>,
    /// Max amount per accounting window, `0` = disabled
    pub daily_limit: i128,
    /// Withdrawals at or above this amount start a cooldown, `0` = disabled
    pub large_withdraw_threshold: i128,
    /// Length of the cooldown in ledgers
    pub cooldown_blocks: u32,
    /// First ledger of the current accounting window
    pub day_window_start: u32,
    /// Amount withdrawn in the current window
    pub day_total: i128,
    /// Withdrawals are refused before this ledger, `0` = no cooldown
    pub cooldown_until: u32,
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&VaultDataKey::Config)
}

pub fn load_config(env: &Env) -> Result<VaultConfig, VaultError> {
    env.storage()
        .instance()
        .get(&VaultDataKey::Config)
        .ok_or(VaultError::NotInitialized)
}

pub fn save_config(env: &Env, config: &VaultConfig) {
    env.storage().instance().set(&VaultDataKey::Config, config);
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
