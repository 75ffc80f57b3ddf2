//! # Vault Recovery Contract
//!
//! Guardian registry plus a quorum-and-timelock protocol that can replace the
//! owner of a guardian vault without the owner's cooperation.
//!
//! - [`guardians`]: guardian set, admin and threshold
//! - [`recovery`]: proposals, approvals and execution against the vault
//!
//! The vault must be initialized with this contract's address as its
//! recovery address, otherwise execution is rejected by the vault.

#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

mod error;
mod events;
pub mod guardians;
pub mod recovery;
mod storage;
mod types;
mod vault_client;

pub use error::RecoveryError;
pub use events::{
    GuardianAddedEvent, GuardianRemovedEvent, GuardiansInitializedEvent, RecoveryApprovedEvent,
    RecoveryExecutedEvent, RecoveryExpiredEvent, RecoveryProposedEvent, ThresholdChangedEvent,
};
pub use types::{GuardianConfig, ProposalStatus, RecoveryProposal};
pub use vault_client::{VaultClient, VaultInterface};

use storage::{extend_instance, load_guardian_config, load_proposal, load_vault, proposal_count};

#[cfg(test)]
mod guardians_test;

#[contract]
pub struct RecoveryContract;

#[contractimpl]
impl RecoveryContract {
    /// Bind the vault this contract recovers (once)
    ///
    /// # Errors
    /// - `AlreadyInitialized` - a vault is already bound
    pub fn init(env: Env, vault: Address) -> Result<(), RecoveryError> {
        recovery::init(&env, vault)?;
        extend_instance(&env);
        Ok(())
    }

    // ── Guardian registry ────────────────────────────────────────────────────

    /// Create the guardian registry (once)
    ///
    /// # Arguments
    /// * `admin` - Identity allowed to manage guardians (must authorize)
    /// * `threshold` - Approvals required for recovery, at least 1
    /// * `admin_is_participant` - Whether the admin may propose and approve
    pub fn init_guardians(
        env: Env,
        admin: Address,
        threshold: u32,
        admin_is_participant: bool,
    ) -> Result<(), RecoveryError> {
        guardians::init_guardians(&env, admin, threshold, admin_is_participant)?;
        extend_instance(&env);
        Ok(())
    }

    /// Register a guardian (admin only)
    pub fn add_guardian(env: Env, caller: Address, guardian: Address) -> Result<(), RecoveryError> {
        guardians::add_guardian(&env, caller, guardian)?;
        extend_instance(&env);
        Ok(())
    }

    /// Unregister a guardian (admin only)
    pub fn remove_guardian(
        env: Env,
        caller: Address,
        guardian: Address,
    ) -> Result<(), RecoveryError> {
        guardians::remove_guardian(&env, caller, guardian)?;
        extend_instance(&env);
        Ok(())
    }

    /// Change the threshold for future proposals (admin only)
    pub fn set_threshold(env: Env, caller: Address, threshold: u32) -> Result<(), RecoveryError> {
        guardians::set_threshold(&env, caller, threshold)?;
        extend_instance(&env);
        Ok(())
    }

    pub fn get_guardians(env: Env) -> Result<Vec<Address>, RecoveryError> {
        guardians::get_guardians(&env)
    }

    pub fn get_threshold(env: Env) -> Result<u32, RecoveryError> {
        guardians::get_threshold(&env)
    }

    pub fn get_guardian_admin(env: Env) -> Result<Address, RecoveryError> {
        guardians::get_guardian_admin(&env)
    }

    pub fn get_guardian_config(env: Env) -> Result<GuardianConfig, RecoveryError> {
        load_guardian_config(&env)
    }

    /// Whether `identity` is in the guardian set. Returns `false` rather than
    /// `NotInitialized` before `init_guardians`, and `false` for the admin.
    pub fn is_guardian(env: Env, identity: Address) -> bool {
        guardians::is_guardian(&env, &identity)
    }

    // ── Recovery ─────────────────────────────────────────────────────────────

    /// Propose a new vault owner. Returns the proposal id.
    pub fn propose_owner(
        env: Env,
        proposer: Address,
        candidate: Address,
        timelock_blocks: u32,
        max_lifetime_blocks: u32,
    ) -> Result<u64, RecoveryError> {
        let id = recovery::propose_owner(
            &env,
            proposer,
            candidate,
            timelock_blocks,
            max_lifetime_blocks,
        )?;
        extend_instance(&env);
        Ok(id)
    }

    /// Approve a proposal. Returns the number of distinct approvals.
    pub fn approve(env: Env, guardian: Address, proposal_id: u64) -> Result<u32, RecoveryError> {
        let approvals = recovery::approve(&env, guardian, proposal_id)?;
        extend_instance(&env);
        Ok(approvals)
    }

    /// Execute a proposal once its timelock and quorum are met
    pub fn execute(env: Env, proposal_id: u64) -> Result<(), RecoveryError> {
        recovery::execute(&env, proposal_id)?;
        extend_instance(&env);
        Ok(())
    }

    /// Mark a proposal past its lifetime as expired
    pub fn expire(env: Env, proposal_id: u64) -> Result<(), RecoveryError> {
        recovery::expire(&env, proposal_id)?;
        extend_instance(&env);
        Ok(())
    }

    pub fn get_proposal(env: Env, proposal_id: u64) -> Result<RecoveryProposal, RecoveryError> {
        load_proposal(&env, proposal_id)
    }

    /// Number of proposals created so far (also the last assigned id)
    pub fn get_proposal_count(env: Env) -> u64 {
        proposal_count(&env)
    }

    pub fn get_vault(env: Env) -> Result<Address, RecoveryError> {
        load_vault(&env)
    }
}
