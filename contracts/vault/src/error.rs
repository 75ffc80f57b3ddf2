use soroban_sdk::contracterror;

/// Errors returned by the vault entry points.
///
/// The numbering is shared with the recovery contract where the meaning is
/// shared (`NotAuthorized`, `AlreadyInitialized`, `NotInitialized`, `Overflow`).
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VaultError {
    /// Caller is not the identity allowed to perform the call
    NotAuthorized = 100,
    /// `init` was already called
    AlreadyInitialized = 101,
    /// `init` has not been called yet
    NotInitialized = 102,
    /// Asset reference does not match the ledger bound at init
    InvalidAsset = 103,
    /// Withdrawal amount is zero or negative
    InvalidAmount = 104,
    /// Negative limit or threshold passed to init
    InvalidConfig = 105,
    /// Arithmetic overflow
    Overflow = 106,

    /// A large withdrawal put the vault into cooldown
    CooldownActive = 130,
    /// Withdrawal would push the window total above the daily limit
    DailyLimitExceeded = 131,
}
