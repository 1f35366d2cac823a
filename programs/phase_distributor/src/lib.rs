use anchor_lang::prelude::*;

declare_id!("GngzE7J5qALRCkCbwrNF5NBdxXSUt8erFjgXVToPNeZw");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Phase Distributor Program
 *
 * A Solana program for distributing a fixed per-account entitlement across
 * multiple time-boxed rounds ("phases"), with eligibility proven by merkle
 * membership proofs instead of an enumerable allowlist.
 *
 * Key Features:
 * - Append-only registry of up to 255 phases, each with its own merkle
 *   root, per-claim amount, expiry, and activity flag
 * - Exactly-once redemption per (phase, claimant), enforced by per-pair
 *   claim record PDAs
 * - Self-service claims against the current phase or an explicit phase
 * - Admin-driven batch distribution with per-entry skip-on-failure
 * - Global pause flag and an emergency vault sweep
 * - Cross-program call event emission for composability
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Distributor PDA: global state, counters, pause flag, phase pointer
 * - Phase PDAs: one per round, indexed 0..phase_count
 * - Token Vault PDA: holds the tokens to be distributed
 * - Claim Record PDAs: permanent (phase, claimant) redemption markers
 *
 * Workflow:
 * 1. Admin initializes the distributor, funding the vault and creating
 *    phase 0
 * 2. Users claim with merkle proofs while a phase is active and unexpired
 * 3. Admin appends further phases, activates them, and optionally pushes
 *    entitlements out in batches
 * 4. Admin can pause redemption or sweep the vault at any time
 */
#[program]
pub mod phase_distributor {
    use super::*;

    /**
     * Initializes a distributor together with its implicit phase 0
     *
     * Creates the distributor and vault PDAs, deposits the initial funding,
     * and creates phase 0 active with the supplied parameters. The current
     * phase pointer starts at 0.
     *
     * @param ctx - Account context containing distributor, phase 0, vault, and admin
     * @param initial_funding - Tokens moved from the admin into the vault (may be 0)
     * @param merkle_root - Eligibility commitment for phase 0
     * @param per_claim_amount - Fixed entitlement paid per claim in phase 0
     * @param expiry - Unix timestamp closing phase 0's claiming window
     *
     * Access Control: Admin (becomes the sole authority)
     */
    pub fn initialize(
        ctx: Context<Initialize>,
        initial_funding: u64,
        merkle_root: [u8; 32],
        per_claim_amount: u64,
        expiry: i64,
    ) -> Result<()> {
        handle_initialize(ctx, initial_funding, merkle_root, per_claim_amount, expiry)
    }

    /**
     * Appends a new phase to the registry
     *
     * @param ctx - Account context containing distributor, phase, and admin
     * @param merkle_root - Eligibility commitment for the new phase
     * @param per_claim_amount - Fixed entitlement paid per claim
     * @param expiry - Unix timestamp closing the claiming window
     * @param activate - Whether to activate the phase and make it current
     *
     * Access Control: Admin only
     */
    pub fn create_phase(
        ctx: Context<CreatePhase>,
        merkle_root: [u8; 32],
        per_claim_amount: u64,
        expiry: i64,
        activate: bool,
    ) -> Result<()> {
        handle_create_phase(ctx, merkle_root, per_claim_amount, expiry, activate)
    }

    /**
     * Updates the parameters of an existing phase
     *
     * Each field is optional: present values are re-validated by the
     * creation rules and stored, absent values leave the field untouched.
     *
     * @param ctx - Account context containing distributor, phase, and admin
     * @param phase_index - Registry position of the phase to update
     * @param new_merkle_root - Replacement eligibility commitment, if any
     * @param new_amount - Replacement per-claim amount, if any
     * @param new_expiry - Replacement expiry, if any
     *
     * Access Control: Admin only
     */
    pub fn update_phase(
        ctx: Context<UpdatePhase>,
        phase_index: u8,
        new_merkle_root: Option<[u8; 32]>,
        new_amount: Option<u64>,
        new_expiry: Option<i64>,
    ) -> Result<()> {
        handle_update_phase(ctx, phase_index, new_merkle_root, new_amount, new_expiry)
    }

    /**
     * Activates a phase and moves the current-phase pointer to it
     *
     * @param ctx - Account context containing distributor, phase, and admin
     * @param phase_index - Registry position of the phase to activate
     *
     * Access Control: Admin only
     * Note: Expired phases cannot be activated
     */
    pub fn set_active_phase(ctx: Context<SetActivePhase>, phase_index: u8) -> Result<()> {
        handle_set_active_phase(ctx, phase_index)
    }

    /**
     * Deactivates a phase without moving the current-phase pointer
     *
     * @param ctx - Account context containing distributor, phase, and admin
     * @param phase_index - Registry position of the phase to deactivate
     *
     * Access Control: Admin only
     */
    pub fn deactivate_phase(ctx: Context<DeactivatePhase>, phase_index: u8) -> Result<()> {
        handle_deactivate_phase(ctx, phase_index)
    }

    /**
     * Claims the caller's entitlement against the current phase
     *
     * @param ctx - Account context containing distributor, phase, claim
     *   record, and token accounts
     * @param proof - Array of 32-byte sibling hashes forming the merkle proof
     *
     * Access Control: Any account with a valid merkle proof
     */
    pub fn claim(ctx: Context<Claim>, proof: Vec<[u8; 32]>) -> Result<()> {
        handle_claim(ctx, proof)
    }

    /**
     * Claims the caller's entitlement against an explicitly named phase
     *
     * @param ctx - Account context containing distributor, phase, claim
     *   record, and token accounts
     * @param phase_index - Registry position of the targeted phase
     * @param proof - Array of 32-byte sibling hashes forming the merkle proof
     *
     * Access Control: Any account with a valid merkle proof
     */
    pub fn claim_for_phase(
        ctx: Context<ClaimForPhase>,
        phase_index: u8,
        proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        handle_claim_for_phase(ctx, phase_index, proof)
    }

    /**
     * Distributes a phase's entitlement to a list of claimants
     *
     * Phase-level failures abort the whole batch; per-entry failures (null
     * identity, already claimed, bad proof, bad destination) are skipped
     * and counted. One aggregate event reports both counts.
     *
     * @param ctx - Account context plus two remaining accounts per entry
     * @param phase_index - Registry position of the targeted phase
     * @param claimants - Claimant public keys, one per entry
     * @param proofs - Merkle proofs, parallel to claimants
     *
     * Access Control: Admin only
     */
    pub fn batch_distribute<'info>(
        ctx: Context<'_, '_, 'info, 'info, BatchDistribute<'info>>,
        phase_index: u8,
        claimants: Vec<Pubkey>,
        proofs: Vec<Vec<[u8; 32]>>,
    ) -> Result<()> {
        handle_batch_distribute(ctx, phase_index, claimants, proofs)
    }

    /**
     * Suspends all redemption paths
     *
     * Access Control: Admin only
     */
    pub fn pause(ctx: Context<SetPause>) -> Result<()> {
        handle_pause(ctx)
    }

    /**
     * Resumes redemption after a pause
     *
     * Access Control: Admin only
     */
    pub fn unpause(ctx: Context<SetPause>) -> Result<()> {
        handle_unpause(ctx)
    }

    /**
     * Sweeps tokens from the vault to an arbitrary recipient
     *
     * @param ctx - Account context containing distributor, vault, recipient,
     *   and admin
     * @param amount - Amount of tokens to withdraw (no ceiling)
     *
     * Access Control: Admin only
     */
    pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>, amount: u64) -> Result<()> {
        handle_emergency_withdraw(ctx, amount)
    }

    /**
     * Reports whether a phase currently accepts claims
     *
     * Safe query: unknown indices and missing phase accounts return the
     * all-false/zero default instead of failing.
     *
     * @param ctx - Account context containing distributor and phase
     * @param phase_index - Registry position to query
     */
    pub fn phase_status(ctx: Context<QueryPhaseStatus>, phase_index: u8) -> Result<PhaseStatus> {
        handle_phase_status(ctx, phase_index)
    }
}
