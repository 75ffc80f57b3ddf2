//! Vault events.
//!
//! Each event is a `#[contractevent]` struct; the snake_case struct name is
//! the leading topic and all fields go into the data payload. Positions are
//! ledger sequence numbers.
use soroban_sdk::{contractevent, Address, Env};

/// Emitted once when the vault is initialized.
#[contractevent]
#[derive(Clone, Debug)]
pub struct VaultInitializedEvent {
    pub owner: Address,
    pub asset: Address,
    pub recovery: Option<Address>,
    pub daily_limit: i128,
    pub large_withdraw_threshold: i128,
    pub cooldown_blocks: u32,
}

/// Emitted on every successful withdrawal.
///
/// # Fields
/// * `owner` – The vault owner who withdrew.
/// * `recipient` – Receiver of the funds.
/// * `amount` – Amount moved on the ledger.
/// * `day_total` – Window total after this withdrawal.
/// * `ledger` – Sequence number at withdrawal time.
#[contractevent]
#[derive(Clone, Debug)]
pub struct WithdrawalEvent {
    pub owner: Address,
    pub recipient: Address,
    pub amount: i128,
    pub day_total: i128,
    pub ledger: u32,
}

/// Emitted when a large withdrawal locks the vault.
#[contractevent]
#[derive(Clone, Debug)]
pub struct CooldownStartedEvent {
    pub amount: i128,
    pub cooldown_until: u32,
}

/// Emitted when the recovery contract replaces the owner.
#[contractevent]
#[derive(Clone, Debug)]
pub struct OwnerChangedEvent {
    pub old_owner: Address,
    pub new_owner: Address,
    pub changed_by: Address,
}

pub fn emit_vault_initialized(e: &Env, event: VaultInitializedEvent) {
    event.publish(e);
}

pub fn emit_withdrawal(e: &Env, event: WithdrawalEvent) {
    event.publish(e);
}

pub fn emit_cooldown_started(e: &Env, event: CooldownStartedEvent) {
    event.publish(e);
}

pub fn emit_owner_changed(e: &Env, event: OwnerChangedEvent) {
    event.publish(e);
}
