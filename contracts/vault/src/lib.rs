//! # Guardian Vault Contract
//!
//! Custodial vault for a single fungible asset. The owner is the only
//! identity allowed to withdraw, and every withdrawal goes through two rate
//! limits:
//!
//! - a daily cap over an accounting window of [`DAY_IN_LEDGERS`] ledgers
//! - a cooldown of `cooldown_blocks` ledgers after any withdrawal at or above
//!   the large-withdrawal threshold
//!
//! The owner can only be replaced by the recovery contract configured at
//! init, through [`VaultContract::admin_set_owner`].

#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env};

mod admin;
mod error;
mod events;
mod limits;
mod storage;
mod withdraw;

pub use error::VaultError;
pub use events::{CooldownStartedEvent, OwnerChangedEvent, VaultInitializedEvent, WithdrawalEvent};
pub use limits::window_start;
pub use storage::{VaultConfig, DAY_IN_LEDGERS};

use storage::{extend_instance, load_config};

#[cfg(test)]
mod auth_test;

#[contract]
pub struct VaultContract;

#[contractimpl]
impl VaultContract {
    /// Initialize the vault (once)
    ///
    /// # Arguments
    /// * `owner` - Identity allowed to withdraw (must authorize)
    /// * `asset` - Token contract the vault holds
    /// * `recovery` - Contract allowed to replace the owner, `None` disables recovery
    /// * `daily_limit` - Max amount per accounting window, `0` disables the cap
    /// * `large_withdraw_threshold` - Amount that starts a cooldown, `0` disables it
    /// * `cooldown_blocks` - Cooldown length in ledgers
    ///
    /// # Errors
    /// - `AlreadyInitialized` - init was already called
    /// - `InvalidConfig` - a negative limit or threshold
    pub fn init(
        env: Env,
        owner: Address,
        asset: Address,
        recovery: Option<Address>,
        daily_limit: i128,
        large_withdraw_threshold: i128,
        cooldown_blocks: u32,
    ) -> Result<(), VaultError> {
        admin::init(
            &env,
            owner,
            asset,
            recovery,
            daily_limit,
            large_withdraw_threshold,
            cooldown_blocks,
        )?;
        extend_instance(&env);
        Ok(())
    }

    /// Withdraw `amount` of the bound asset to `recipient` (owner only)
    ///
    /// Returns the withdrawn amount.
    ///
    /// # Errors
    /// - `NotAuthorized` - caller is not the owner
    /// - `InvalidAsset` - `asset` differs from the bound ledger
    /// - `InvalidAmount` - amount is zero or negative
    /// - `CooldownActive` - a large-withdrawal cooldown is running
    /// - `DailyLimitExceeded` - the window total would go above the daily limit
    pub fn withdraw(
        env: Env,
        caller: Address,
        amount: i128,
        recipient: Address,
        asset: Address,
    ) -> Result<i128, VaultError> {
        let withdrawn = withdraw::withdraw(&env, caller, amount, recipient, asset)?;
        extend_instance(&env);
        Ok(withdrawn)
    }

    /// Replace the vault owner (recovery contract only)
    pub fn admin_set_owner(env: Env, caller: Address, new_owner: Address) -> Result<(), VaultError> {
        admin::admin_set_owner(&env, caller, new_owner)?;
        extend_instance(&env);
        Ok(())
    }

    /// Current configuration and rate-limit state
    pub fn get_config(env: Env) -> Result<VaultConfig, VaultError> {
        load_config(&env)
    }

    /// Current owner, the only identity allowed to withdraw
    pub fn get_owner(env: Env) -> Result<Address, VaultError> {
        Ok(load_config(&env)?.owner)
    }

    /// Balance of the vault on the bound asset ledger
    pub fn get_balance(env: Env) -> Result<i128, VaultError> {
        withdraw::get_balance(&env)
    }
}
