//! Rate-limit state transitions for a single withdrawal.
//!
//! Everything here mutates a [`VaultConfig`] value only; persisting it is the
//! caller's job, and only once the ledger transfer has gone through.

use crate::error::VaultError;
use crate::storage::{VaultConfig, DAY_IN_LEDGERS};

/// First ledger of the accounting window containing `ledger`.
pub fn window_start(ledger: u32) -> u32 {
    ledger - ledger % DAY_IN_LEDGERS
}

impl VaultConfig {
    /// Fails while a cooldown started by a large withdrawal is running.
    pub fn check_cooldown(&self, now: u32) -> Result<(), VaultError> {
        if self.cooldown_until != 0 && now < self.cooldown_until {
            return Err(VaultError::CooldownActive);
        }
        Ok(())
    }

    /// Resets the window total once `now` has left the current window.
    pub fn roll_window(&mut self, now: u32) {
        if now >= self.day_window_start.saturating_add(DAY_IN_LEDGERS) {
            self.day_total = 0;
            self.day_window_start = window_start(now);
        }
    }

    /// Adds `amount` to the window total, refusing anything above the limit.
    ///
    /// On error `self` is left untouched.
    pub fn record_spend(&mut self, amount: i128) -> Result<(), VaultError> {
        let new_total = self
            .day_total
            .checked_add(amount)
            .ok_or(VaultError::Overflow)?;
        if self.daily_limit != 0 && new_total > self.daily_limit {
            return Err(VaultError::DailyLimitExceeded);
        }
        self.day_total = new_total;
        Ok(())
    }

    /// Starts (or extends) the cooldown when `amount` counts as large.
    ///
    /// Returns the new `cooldown_until` when a cooldown was started.
    pub fn start_cooldown(&mut self, amount: i128, now: u32) -> Result<Option<u32>, VaultError> {
        if self.large_withdraw_threshold == 0 || amount < self.large_withdraw_threshold {
            return Ok(None);
        }
        let until = now
            .checked_add(self.cooldown_blocks)
            .ok_or(VaultError::Overflow)?;
        // never move the deadline backwards
        self.cooldown_until = self.cooldown_until.max(until);
        Ok(Some(self.cooldown_until))
    }

    /// Runs every rate-limit step of a withdrawal in order.
    ///
    /// Returns the cooldown deadline if this withdrawal started one.
    pub fn apply_withdrawal(&mut self, amount: i128, now: u32) -> Result<Option<u32>, VaultError> {
        self.check_cooldown(now)?;
        self.roll_window(now);
        self.record_spend(amount)?;
        self.start_cooldown(amount, now)
    }
}
