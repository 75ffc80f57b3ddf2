//! Guardian registry.
//!
//! Holds the guardian set and the approval threshold. It knows nothing about
//! the vault or about proposals; recovery reads it, never the other way round.

use soroban_sdk::{log, Address, Env, Vec};

use crate::error::RecoveryError;
use crate::events::{
    emit_guardian_added_event, emit_guardian_removed_event, emit_guardians_initialized_event,
    emit_threshold_changed_event,
};
use crate::storage::{has_guardian_config, load_guardian_config, save_guardian_config};
use crate::types::GuardianConfig;

fn require_guardian_admin(env: &Env, caller: &Address) -> Result<GuardianConfig, RecoveryError> {
    caller.require_auth();
    let config = load_guardian_config(env)?;
    if *caller != config.admin {
        return Err(RecoveryError::NotAuthorized);
    }
    Ok(config)
}

/// Create the registry with an empty guardian set.
///
/// The upper bound on `threshold` is not checked here since guardians are
/// only added afterwards; it is enforced by [`set_threshold`] and
/// [`remove_guardian`].
pub fn init_guardians(
    env: &Env,
    admin: Address,
    threshold: u32,
    admin_is_participant: bool,
) -> Result<(), RecoveryError> {
    if has_guardian_config(env) {
        return Err(RecoveryError::AlreadyInitialized);
    }
    admin.require_auth();

    if threshold == 0 {
        return Err(RecoveryError::InvalidThreshold);
    }

    let config = GuardianConfig {
        admin: admin.clone(),
        guardians: Vec::new(env),
        threshold,
        admin_is_participant,
    };
    save_guardian_config(env, &config);

    log!(env, "init_guardians admin={} threshold={}", admin, threshold);
    emit_guardians_initialized_event(env, &admin, threshold, admin_is_participant);
    Ok(())
}

pub fn add_guardian(env: &Env, caller: Address, guardian: Address) -> Result<(), RecoveryError> {
    let mut config = require_guardian_admin(env, &caller)?;

    if config.is_guardian(&guardian) {
        return Err(RecoveryError::GuardianAlreadyExists);
    }

    config.guardians.push_back(guardian.clone());
    save_guardian_config(env, &config);

    log!(env, "add_guardian {}", guardian);
    emit_guardian_added_event(env, &guardian);
    Ok(())
}

/// Remove a guardian, refusing to leave fewer participants than the live
/// threshold. Open proposals keep the approvals they already collected.
pub fn remove_guardian(env: &Env, caller: Address, guardian: Address) -> Result<(), RecoveryError> {
    let mut config = require_guardian_admin(env, &caller)?;

    let index = config
        .guardians
        .first_index_of(&guardian)
        .ok_or(RecoveryError::GuardianNotFound)?;
    config.guardians.remove(index);

    if config.participant_count() < config.threshold {
        return Err(RecoveryError::InvalidThreshold);
    }
    save_guardian_config(env, &config);

    log!(env, "remove_guardian {}", guardian);
    emit_guardian_removed_event(env, &guardian);
    Ok(())
}

/// Change the threshold used by proposals created from now on.
pub fn set_threshold(env: &Env, caller: Address, threshold: u32) -> Result<(), RecoveryError> {
    let mut config = require_guardian_admin(env, &caller)?;

    if threshold == 0 || threshold > config.participant_count() {
        return Err(RecoveryError::InvalidThreshold);
    }

    let old_threshold = config.threshold;
    config.threshold = threshold;
    save_guardian_config(env, &config);

    emit_threshold_changed_event(env, old_threshold, threshold);
    Ok(())
}

pub fn get_guardians(env: &Env) -> Result<Vec<Address>, RecoveryError> {
    Ok(load_guardian_config(env)?.guardians)
}

pub fn get_threshold(env: &Env) -> Result<u32, RecoveryError> {
    Ok(load_guardian_config(env)?.threshold)
}

pub fn get_guardian_admin(env: &Env) -> Result<Address, RecoveryError> {
    Ok(load_guardian_config(env)?.admin)
}

pub fn is_guardian(env: &Env, identity: &Address) -> bool {
    load_guardian_config(env)
        .map(|config| config.is_guardian(identity))
        .unwrap_or(false)
}
