//! # Owner recovery
//!
//! Proposal → approve → execute flow that replaces the vault owner:
//!
//! 1. The vault owner or a participant creates a proposal with
//!    [`propose_owner`]. The current threshold is copied into the proposal.
//! 2. Participants approve with [`approve`]. Approving twice is a no-op.
//! 3. Once the timelock has elapsed and the snapshotted quorum is met,
//!    anyone may call [`execute`], which calls `admin_set_owner` on the vault.
//!
//! Quorum and timelock are independent gates; both must hold. A proposal with
//! a lifetime stops accepting approvals and execution at `expires_at` and can
//! be moved to `Expired` with [`expire`].

use soroban_sdk::{log, Address, Env, Vec};

use crate::error::RecoveryError;
use crate::events::{
    emit_recovery_approved_event, emit_recovery_executed_event, emit_recovery_expired_event,
    emit_recovery_proposed_event, RecoveryProposedEvent,
};
use crate::storage::{
    has_vault, load_guardian_config, load_proposal, load_vault, next_proposal_id, save_proposal,
    save_vault,
};
use crate::types::{ProposalStatus, RecoveryProposal};
use crate::vault_client::VaultClient;

/// Bind the vault whose owner this contract may replace. Callable once.
pub fn init(env: &Env, vault: Address) -> Result<(), RecoveryError> {
    if has_vault(env) {
        return Err(RecoveryError::AlreadyInitialized);
    }
    save_vault(env, &vault);
    Ok(())
}

fn ensure_open(proposal: &RecoveryProposal, now: u32) -> Result<(), RecoveryError> {
    if proposal.status != ProposalStatus::Proposed {
        return Err(RecoveryError::ProposalNotActive);
    }
    if proposal.is_expired(now) {
        return Err(RecoveryError::ProposalExpired);
    }
    Ok(())
}

/// Propose `candidate` as the new vault owner.
///
/// # Arguments
/// * `proposer` - Current vault owner or a participant (must authorize)
/// * `candidate` - Identity to install as owner
/// * `timelock_blocks` - Ledgers to wait before execution is allowed
/// * `max_lifetime_blocks` - Ledgers after which the proposal expires, `0` = never
///
/// # Returns
/// The new proposal id
///
/// # Errors
/// - [`RecoveryError::NotAuthorized`] if the proposer is neither owner nor participant
/// - [`RecoveryError::InvalidProposal`] if the lifetime ends before the timelock
pub fn propose_owner(
    env: &Env,
    proposer: Address,
    candidate: Address,
    timelock_blocks: u32,
    max_lifetime_blocks: u32,
) -> Result<u64, RecoveryError> {
    proposer.require_auth();

    let vault = load_vault(env)?;
    let guardians = load_guardian_config(env)?;

    if !guardians.is_participant(&proposer) {
        let owner = VaultClient::new(env, &vault).get_owner();
        if owner != proposer {
            return Err(RecoveryError::NotAuthorized);
        }
    }

    if max_lifetime_blocks != 0 && max_lifetime_blocks <= timelock_blocks {
        return Err(RecoveryError::InvalidProposal);
    }

    let now = env.ledger().sequence();
    let timelock_end = now
        .checked_add(timelock_blocks)
        .ok_or(RecoveryError::Overflow)?;
    let expires_at = if max_lifetime_blocks == 0 {
        0
    } else {
        now.checked_add(max_lifetime_blocks)
            .ok_or(RecoveryError::Overflow)?
    };

    let id = next_proposal_id(env)?;
    let proposal = RecoveryProposal {
        id,
        proposer: proposer.clone(),
        proposed_owner: candidate.clone(),
        created_at: now,
        timelock_end,
        expires_at,
        required_approvals: guardians.threshold,
        approvals: Vec::new(env),
        status: ProposalStatus::Proposed,
    };
    save_proposal(env, &proposal);

    log!(env, "propose_owner id={} candidate={}", id, candidate);
    emit_recovery_proposed_event(
        env,
        RecoveryProposedEvent {
            id,
            proposer,
            proposed_owner: candidate,
            timelock_end,
            expires_at,
            required_approvals: guardians.threshold,
        },
    );
    Ok(id)
}

/// Approve a proposal. Returns the number of distinct approvals.
///
/// # Errors
/// - [`RecoveryError::NotAuthorized`] if the caller is not a participant
/// - [`RecoveryError::ProposalNotFound`] if the proposal does not exist
/// - [`RecoveryError::ProposalNotActive`] if it was executed or expired
/// - [`RecoveryError::ProposalExpired`] if its lifetime has elapsed
pub fn approve(env: &Env, guardian: Address, proposal_id: u64) -> Result<u32, RecoveryError> {
    guardian.require_auth();

    let guardians = load_guardian_config(env)?;
    if !guardians.is_participant(&guardian) {
        return Err(RecoveryError::NotAuthorized);
    }

    let mut proposal = load_proposal(env, proposal_id)?;
    ensure_open(&proposal, env.ledger().sequence())?;

    if proposal.approvals.contains(&guardian) {
        return Ok(proposal.approvals.len());
    }

    proposal.approvals.push_back(guardian.clone());
    save_proposal(env, &proposal);

    let approvals = proposal.approvals.len();
    emit_recovery_approved_event(env, proposal_id, &guardian, approvals);
    Ok(approvals)
}

/// Install the proposed owner in the vault. Anyone may call this.
///
/// # Errors
/// - [`RecoveryError::ProposalNotActive`] if already executed or expired
/// - [`RecoveryError::ProposalExpired`] if its lifetime has elapsed
/// - [`RecoveryError::RecoveryTooEarly`] if the timelock has not elapsed
/// - [`RecoveryError::InsufficientApprovals`] if the quorum snapshot is not met
pub fn execute(env: &Env, proposal_id: u64) -> Result<(), RecoveryError> {
    let vault = load_vault(env)?;
    let mut proposal = load_proposal(env, proposal_id)?;

    let now = env.ledger().sequence();
    ensure_open(&proposal, now)?;

    if now < proposal.timelock_end {
        return Err(RecoveryError::RecoveryTooEarly);
    }
    if proposal.approvals.len() < proposal.required_approvals {
        return Err(RecoveryError::InsufficientApprovals);
    }

    proposal.status = ProposalStatus::Executed;
    save_proposal(env, &proposal);

    VaultClient::new(env, &vault)
        .admin_set_owner(&env.current_contract_address(), &proposal.proposed_owner);

    log!(env, "execute id={} new_owner={}", proposal_id, proposal.proposed_owner);
    emit_recovery_executed_event(env, proposal_id, &vault, &proposal.proposed_owner);
    Ok(())
}

/// Move a proposal whose lifetime has elapsed to `Expired`. Anyone may call this.
pub fn expire(env: &Env, proposal_id: u64) -> Result<(), RecoveryError> {
    let mut proposal = load_proposal(env, proposal_id)?;

    if proposal.status != ProposalStatus::Proposed {
        return Err(RecoveryError::ProposalNotActive);
    }
    if !proposal.is_expired(env.ledger().sequence()) {
        return Err(RecoveryError::ProposalNotExpired);
    }

    proposal.status = ProposalStatus::Expired;
    save_proposal(env, &proposal);

    emit_recovery_expired_event(env, proposal_id);
    Ok(())
}
