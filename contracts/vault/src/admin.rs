use soroban_sdk::{log, Address, Env};

use crate::error::VaultError;
use crate::events::{
    emit_owner_changed, emit_vault_initialized, OwnerChangedEvent, VaultInitializedEvent,
};
use crate::limits::window_start;
use crate::storage::{has_config, load_config, save_config, VaultConfig};

/// Bind the vault to its owner, asset and limits. Callable once.
pub fn init(
    env: &Env,
    owner: Address,
    asset: Address,
    recovery: Option<Address>,
    daily_limit: i128,
    large_withdraw_threshold: i128,
    cooldown_blocks: u32,
) -> Result<(), VaultError> {
    if has_config(env) {
        return Err(VaultError::AlreadyInitialized);
    }
    owner.require_auth();

    if daily_limit < 0 || large_withdraw_threshold < 0 {
        return Err(VaultError::InvalidConfig);
    }

    let config = VaultConfig {
        owner: owner.clone(),
        asset: asset.clone(),
        recovery: recovery.clone(),
        daily_limit,
        large_withdraw_threshold,
        cooldown_blocks,
        day_window_start: window_start(env.ledger().sequence()),
        day_total: 0,
        cooldown_until: 0,
    };
    save_config(env, &config);

    emit_vault_initialized(
        env,
        VaultInitializedEvent {
            owner,
            asset,
            recovery,
            daily_limit,
            large_withdraw_threshold,
            cooldown_blocks,
        },
    );
    Ok(())
}

/// Replace the owner. Only the configured recovery contract may call this.
pub fn admin_set_owner(env: &Env, caller: Address, new_owner: Address) -> Result<(), VaultError> {
    caller.require_auth();

    let mut config = load_config(env)?;
    if config.recovery.as_ref() != Some(&caller) {
        return Err(VaultError::NotAuthorized);
    }

    let old_owner = config.owner.clone();
    config.owner = new_owner.clone();
    save_config(env, &config);

    log!(env, "admin_set_owner {} -> {}", old_owner, new_owner);
    emit_owner_changed(
        env,
        OwnerChangedEvent {
            old_owner,
            new_owner,
            changed_by: caller,
        },
    );
    Ok(())
}
