use soroban_sdk::{contractevent, Address, Env};

/// Emitted once when the registry is created.
#[contractevent]
#[derive(Clone, Debug)]
pub struct GuardiansInitializedEvent {
    pub admin: Address,
    pub threshold: u32,
    pub admin_is_participant: bool,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct GuardianAddedEvent {
    pub guardian: Address,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct GuardianRemovedEvent {
    pub guardian: Address,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct ThresholdChangedEvent {
    pub old_threshold: u32,
    pub new_threshold: u32,
}

/// Emitted when a recovery proposal is created.
///
/// # Fields
/// * `id` – New proposal id.
/// * `proposer` – Vault owner or participant that proposed.
/// * `proposed_owner` – Candidate owner.
/// * `timelock_end` – First ledger at which execution is allowed.
/// * `expires_at` – Ledger at which the proposal dies, `0` = never.
/// * `required_approvals` – Quorum snapshot.
#[contractevent]
#[derive(Clone, Debug)]
pub struct RecoveryProposedEvent {
    pub id: u64,
    pub proposer: Address,
    pub proposed_owner: Address,
    pub timelock_end: u32,
    pub expires_at: u32,
    pub required_approvals: u32,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct RecoveryApprovedEvent {
    pub id: u64,
    pub guardian: Address,
    pub approvals: u32,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct RecoveryExecutedEvent {
    pub id: u64,
    pub vault: Address,
    pub new_owner: Address,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct RecoveryExpiredEvent {
    pub id: u64,
}

pub fn emit_guardians_initialized_event(
    env: &Env,
    admin: &Address,
    threshold: u32,
    admin_is_participant: bool,
) {
    GuardiansInitializedEvent {
        admin: admin.clone(),
        threshold,
        admin_is_participant,
    }
    .publish(env);
}

pub fn emit_guardian_added_event(env: &Env, guardian: &Address) {
    GuardianAddedEvent {
        guardian: guardian.clone(),
    }
    .publish(env);
}

pub fn emit_guardian_removed_event(env: &Env, guardian: &Address) {
    GuardianRemovedEvent {
        guardian: guardian.clone(),
    }
    .publish(env);
}

pub fn emit_threshold_changed_event(env: &Env, old_threshold: u32, new_threshold: u32) {
    ThresholdChangedEvent {
        old_threshold,
        new_threshold,
    }
    .publish(env);
}

pub fn emit_recovery_proposed_event(env: &Env, event: RecoveryProposedEvent) {
    event.publish(env);
}

pub fn emit_recovery_approved_event(env: &Env, id: u64, guardian: &Address, approvals: u32) {
    RecoveryApprovedEvent {
        id,
        guardian: guardian.clone(),
        approvals,
    }
    .publish(env);
}

pub fn emit_recovery_executed_event(env: &Env, id: u64, vault: &Address, new_owner: &Address) {
    RecoveryExecutedEvent {
        id,
        vault: vault.clone(),
        new_owner: new_owner.clone(),
    }
    .publish(env);
}

pub fn emit_recovery_expired_event(env: &Env, id: u64) {
    RecoveryExpiredEvent { id }.publish(env);
}
