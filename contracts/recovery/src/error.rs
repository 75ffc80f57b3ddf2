use soroban_sdk::contracterror;

/// Errors that can occur during guardian management and owner recovery
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RecoveryError {
    /// Caller is not allowed to perform the call
    NotAuthorized = 100,
    /// Contract or guardian registry already initialized
    AlreadyInitialized = 101,
    /// Contract or guardian registry not initialized
    NotInitialized = 102,
    /// Arithmetic overflow
    Overflow = 106,

    /// Threshold is zero or above the number of participants
    InvalidThreshold = 120,
    /// Guardian already registered
    GuardianAlreadyExists = 121,
    /// Guardian not registered
    GuardianNotFound = 122,

    /// Proposal not found
    ProposalNotFound = 140,
    /// Proposal already executed or expired
    ProposalNotActive = 141,
    /// Timelock has not elapsed yet
    RecoveryTooEarly = 142,
    /// Fewer approvals than the snapshotted quorum
    InsufficientApprovals = 143,
    /// Proposal lifetime has elapsed
    ProposalExpired = 144,
    /// Invalid proposal parameters
    InvalidProposal = 145,
    /// Proposal lifetime has not elapsed yet
    ProposalNotExpired = 146,
}
