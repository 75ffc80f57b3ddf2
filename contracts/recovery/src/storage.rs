use soroban_sdk::{contracttype, Address, Env};

use crate::error::RecoveryError;
use crate::types::{GuardianConfig, RecoveryProposal};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const PROPOSAL_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const PROPOSAL_LIFETIME_THRESHOLD: u32 = PROPOSAL_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Storage keys for guardian and recovery data
#[contracttype]
#[derive(Clone)]
pub enum RecoveryDataKey {
    /// Guardian set and threshold (instance)
    GuardianConfig,
    /// Vault whose owner this contract may replace (instance)
    Vault,
    /// Last assigned proposal id (instance)
    ProposalCounter,
    /// Proposal by id (persistent)
    Proposal(u64),
}

pub fn has_guardian_config(env: &Env) -> bool {
    env.storage().instance().has(&RecoveryDataKey::GuardianConfig)
}

pub fn load_guardian_config(env: &Env) -> Result<GuardianConfig, RecoveryError> {
    env.storage()
        .instance()
        .get(&RecoveryDataKey::GuardianConfig)
        .ok_or(RecoveryError::NotInitialized)
}

pub fn save_guardian_config(env: &Env, config: &GuardianConfig) {
    env.storage()
        .instance()
        .set(&RecoveryDataKey::GuardianConfig, config);
}

pub fn has_vault(env: &Env) -> bool {
    env.storage().instance().has(&RecoveryDataKey::Vault)
}

pub fn load_vault(env: &Env) -> Result<Address, RecoveryError> {
    env.storage()
        .instance()
        .get(&RecoveryDataKey::Vault)
        .ok_or(RecoveryError::NotInitialized)
}

pub fn save_vault(env: &Env, vault: &Address) {
    env.storage().instance().set(&RecoveryDataKey::Vault, vault);
}

pub fn proposal_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&RecoveryDataKey::ProposalCounter)
        .unwrap_or(0u64)
}

/// Reserve the next proposal id. Ids start at 1 and are never reused.
pub fn next_proposal_id(env: &Env) -> Result<u64, RecoveryError> {
    let id = proposal_count(env)
        .checked_add(1)
        .ok_or(RecoveryError::Overflow)?;
    env.storage()
        .instance()
        .set(&RecoveryDataKey::ProposalCounter, &id);
    Ok(id)
}

pub fn load_proposal(env: &Env, id: u64) -> Result<RecoveryProposal, RecoveryError> {
    env.storage()
        .persistent()
        .get(&RecoveryDataKey::Proposal(id))
        .ok_or(RecoveryError::ProposalNotFound)
}

pub fn save_proposal(env: &Env, proposal: &RecoveryProposal) {
    let key = RecoveryDataKey::Proposal(proposal.id);
    env.storage().persistent().set(&key, proposal);
    env.storage()
        .persistent()
        .extend_ttl(&key, PROPOSAL_LIFETIME_THRESHOLD, PROPOSAL_BUMP_AMOUNT);
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
