use anchor_lang::prelude::*;

use crate::error::PhaseDistributorError;

/**
 * Phase state account
 *
 * One phase is one time-boxed distribution round. Each phase carries its own
 * eligibility commitment, fixed per-claim entitlement, and expiry, so the
 * same vault can serve several rounds with different recipient sets.
 *
 * Derivation: ["phase", distributor_key, phase_index]
 *
 * Lifecycle:
 * 1. Appended by create_phase (or as the implicit phase 0 at initialize)
 * 2. Parameters mutable by the admin via update_phase
 * 3. Toggled by set_active_phase / deactivate_phase
 * 4. claimed_count increments with each successful claim
 * 5. Never closed; the registry is append-only
 */
#[account]
#[derive(Default, Debug)]
pub struct Phase {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Registry position, stable for the life of the phase (0-based)
    pub index: u8,

    /// Merkle root committing to the eligibility set
    /// - Each leaf is the hash of an eligible account's public key
    pub merkle_root: [u8; 32],

    /// Fixed amount paid to every successful claimant in this phase
    /// - Always greater than zero
    pub per_claim_amount: u64,

    /// Unix timestamp after which claims against this phase are refused
    pub expiry: i64,

    /// Whether the phase currently accepts claims
    pub active: bool,

    /// Number of successful redemptions recorded in this phase
    pub claimed_count: u64,
}

impl Phase {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<Phase>();

    /// Validate phase parameters against the creation rules.
    ///
    /// Applied at creation and re-applied to any field touched by an
    /// update, so the invariants hold for the life of the phase.
    pub fn validate_terms(per_claim_amount: u64, expiry: i64, now: i64) -> Result<()> {
        require!(per_claim_amount > 0, PhaseDistributorError::ZeroAmount);
        require!(expiry > now, PhaseDistributorError::ExpiryNotInFuture);
        Ok(())
    }

    /// Reject the all-zero commitment at creation and update.
    ///
    /// No proof can verify against a zero root, so storing one would only
    /// create a phase that silently rejects every claim.
    pub fn validate_root(merkle_root: &[u8; 32]) -> Result<()> {
        require!(
            *merkle_root != [0; 32],
            PhaseDistributorError::InvalidMerkleRoot
        );
        Ok(())
    }

    /// True once the claiming window has closed.
    pub fn is_expired(&self, now: i64) -> bool {
        now > self.expiry
    }

    /// Seconds until expiry, clamped to zero for expired phases.
    pub fn remaining_time(&self, now: i64) -> i64 {
        (self.expiry - now).max(0)
    }

    /// Phase-level gate shared by single and batch claims.
    ///
    /// Fails with PhaseNotActive before ClaimingEnded so a deactivated
    /// phase reports the same error whether or not it has also expired.
    pub fn check_claimable(&self, now: i64) -> Result<()> {
        require!(self.active, PhaseDistributorError::PhaseNotActive);
        require!(!self.is_expired(now), PhaseDistributorError::ClaimingEnded);
        Ok(())
    }

    /// Commit one successful redemption to this phase's counter.
    pub fn record_claim(&mut self) -> Result<()> {
        self.claimed_count = self
            .claimed_count
            .checked_add(1)
            .ok_or(PhaseDistributorError::ArithmeticOverflow)?;
        Ok(())
    }
}
