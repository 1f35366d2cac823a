use anchor_lang::prelude::*;

use crate::constants::MAX_PHASES;
use crate::error::PhaseDistributorError;

/**
 * Main distributor state account
 *
 * One distributor exists per (token_mint, admin) pair and owns the global
 * state shared by every phase: the vault, the pause flag, the current-phase
 * pointer, and the lifetime claim counters.
 *
 * Derivation: ["distributor", token_mint, admin]
 *
 * Lifecycle:
 * 1. Created during initialize (together with phase 0 and the vault)
 * 2. phase_count grows as phases are appended, never shrinks
 * 3. current_phase moves when a phase is activated
 * 4. Counters increment with each successful claim, never reset
 */
#[account]
#[derive(Default, Debug)]
pub struct Distributor {
    /// Bump seed for PDA derivation
    /// - Saved to avoid recomputation when signing vault transfers
    pub bump: u8,

    /// Admin of the distributor
    /// - Sole authority for phase management, pause, batch distribution,
    ///   and emergency withdrawal
    pub admin: Pubkey,

    /// Token mint being distributed
    pub token_mint: Pubkey,

    /// Token vault account address
    /// - PDA holding the tokens to be distributed
    /// - Authority is the distributor PDA
    /// - Derived from: ["vault", distributor_key]
    pub token_vault: Pubkey,

    /// Global suspend flag
    /// - While set, single and batch claims are refused
    /// - Admin operations remain available so the flag can be cleared
    pub paused: bool,

    /// Phase used by the no-index claim entry point
    /// - Starts at 0 and moves only when a phase is activated
    /// - An inactive phase may remain current
    pub current_phase: u8,

    /// Number of phases appended so far
    /// - Phase indices 0..phase_count are valid
    /// - Bounded by MAX_PHASES
    pub phase_count: u8,

    /// Total amount of tokens paid out across all phases
    /// - Moves in lock-step with successful vault transfers
    pub total_claimed: u64,

    /// Total number of successful redemptions across all phases
    pub total_recipients: u64,
}

impl Distributor {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<Distributor>();

    /// Registry slot for the next phase, enforcing the append-only bound.
    ///
    /// The registry never shrinks, so once phase_count reaches MAX_PHASES
    /// every further creation fails with RegistryFull.
    pub fn next_phase_index(&self) -> Result<u8> {
        require!(
            self.phase_count < MAX_PHASES,
            PhaseDistributorError::RegistryFull
        );
        Ok(self.phase_count)
    }

    /// Commit one successful redemption to the global counters.
    ///
    /// Called exactly once per paid-out claim, before the vault transfer,
    /// so the counters never run ahead of or behind the ledger.
    pub fn record_claim(&mut self, amount: u64) -> Result<()> {
        self.total_claimed = self
            .total_claimed
            .checked_add(amount)
            .ok_or(PhaseDistributorError::ArithmeticOverflow)?;
        self.total_recipients = self
            .total_recipients
            .checked_add(1)
            .ok_or(PhaseDistributorError::ArithmeticOverflow)?;
        Ok(())
    }
}
