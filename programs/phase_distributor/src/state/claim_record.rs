use anchor_lang::prelude::*;

/**
 * Individual claim record account
 *
 * Permanent marker that a given account has redeemed its entitlement in a
 * given phase. The sparse (phase, claimant) -> bool map is realized as one
 * PDA per pair: a missing account reads as "not claimed" and a live record
 * with claimed = true can never revert.
 *
 * Derivation: ["claim", distributor_key, phase_index, claimant]
 *
 * Lifecycle:
 * 1. Created lazily on first successful claim (single or batch path)
 * 2. Immutable thereafter; no instruction clears or closes it
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimRecord {
    /// Set to true when the entitlement is paid out, never unset
    pub claimed: bool,
}

impl ClaimRecord {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimRecord>();
}
