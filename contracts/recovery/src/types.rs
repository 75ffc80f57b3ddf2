use soroban_sdk::{contracttype, Address, Vec};

/// Guardian set and quorum policy
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GuardianConfig {
    /// Only identity allowed to change the guardian set
    pub admin: Address,
    /// Registered guardians, no duplicates
    pub guardians: Vec<Address>,
    /// Approvals required for new proposals
    pub threshold: u32,
    /// Whether `admin` may propose and approve like a guardian
    pub admin_is_participant: bool,
}

impl GuardianConfig {
    pub fn is_guardian(&self, identity: &Address) -> bool {
        self.guardians.contains(identity)
    }

    /// Guardians, plus the admin when it takes part in the quorum.
    pub fn is_participant(&self, identity: &Address) -> bool {
        self.is_guardian(identity) || (self.admin_is_participant && *identity == self.admin)
    }

    /// Number of distinct identities able to approve.
    pub fn participant_count(&self) -> u32 {
        let admin_extra = self.admin_is_participant && !self.is_guardian(&self.admin);
        self.guardians.len() + admin_extra as u32
    }
}

/// Proposal lifecycle. `Executed` and `Expired` are terminal.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProposalStatus {
    Proposed,
    Executed,
    Expired,
}

/// A request to install `proposed_owner` as the vault owner.
///
/// All positions are ledger sequence numbers.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecoveryProposal {
    pub id: u64,
    pub proposer: Address,
    pub proposed_owner: Address,
    pub created_at: u32,
    /// Execution is refused before this ledger
    pub timelock_end: u32,
    /// Proposal can no longer move forward from this ledger, `0` = never
    pub expires_at: u32,
    /// Threshold copied at creation time
    pub required_approvals: u32,
    /// Distinct participants that approved
    pub approvals: Vec<Address>,
    pub status: ProposalStatus,
}

impl RecoveryProposal {
    pub fn is_expired(&self, now: u32) -> bool {
        self.expires_at != 0 && now >= self.expires_at
    }
}
