use soroban_sdk::{log, token, Address, Env};

use crate::error::VaultError;
use crate::events::{emit_cooldown_started, emit_withdrawal, CooldownStartedEvent, WithdrawalEvent};
use crate::storage::{load_config, save_config};

/// Move `amount` of the bound asset from the vault to `recipient`.
///
/// # Arguments
/// * `env` - The contract environment
/// * `caller` - Must be the vault owner (must authorize)
/// * `amount` - Amount to withdraw, strictly positive
/// * `recipient` - Receiver of the funds
/// * `asset` - Must equal the asset bound at init
///
/// # Returns
/// The withdrawn amount
///
/// # Errors
/// - `NotAuthorized` - caller is not the owner, whatever the amount
/// - `InvalidAsset` - `asset` is not the bound ledger
/// - `CooldownActive` - a large withdrawal cooldown is still running
/// - `DailyLimitExceeded` - the window total would exceed the daily limit
///
/// A failing ledger transfer aborts the call with nothing written.
pub fn withdraw(
    env: &Env,
    caller: Address,
    amount: i128,
    recipient: Address,
    asset: Address,
) -> Result<i128, VaultError> {
    caller.require_auth();

    let config = load_config(env)?;
    if caller != config.owner {
        return Err(VaultError::NotAuthorized);
    }
    if asset != config.asset {
        return Err(VaultError::InvalidAsset);
    }
    if amount <= 0 {
        return Err(VaultError::InvalidAmount);
    }

    let now = env.ledger().sequence();
    let mut staged = config;
    let cooldown_until = staged.apply_withdrawal(amount, now)?;

    let token_client = token::Client::new(env, &staged.asset);
    token_client.transfer(&env.current_contract_address(), &recipient, &amount);

    save_config(env, &staged);

    if let Some(cooldown_until) = cooldown_until {
        log!(env, "cooldown until ledger {}", cooldown_until);
        emit_cooldown_started(
            env,
            CooldownStartedEvent {
                amount,
                cooldown_until,
            },
        );
    }

    emit_withdrawal(
        env,
        WithdrawalEvent {
            owner: caller,
            recipient,
            amount,
            day_total: staged.day_total,
            ledger: now,
        },
    );
    Ok(amount)
}

/// Vault balance on the bound ledger.
pub fn get_balance(env: &Env) -> Result<i128, VaultError> {
    let config = load_config(env)?;
    Ok(token::Client::new(env, &config.asset).balance(&env.current_contract_address()))
}
