use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for updating a phase's parameters
 *
 * Each field travels as an Option: a present value replaces the stored one
 * after re-validation by the creation rules, an absent value leaves the
 * field untouched. Explicit presence flags make "update to any value"
 * expressible, unlike a zero-sentinel convention.
 *
 * Access Control: Only the admin can update phases
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(phase_index: u8)]
pub struct UpdatePhase<'info> {
    /// The distributor owning the phase
    pub distributor: Account<'info, Distributor>,

    /// The phase to update
    /// - Derived from: ["phase", distributor_key, phase_index]
    #[account(
        mut,
        seeds = [PHASE_SEED.as_bytes(), distributor.key().as_ref(), &[phase_index]],
        bump = phase.bump,
        constraint = phase_index < distributor.phase_count @ PhaseDistributorError::InvalidPhase
    )]
    pub phase: Account<'info, Phase>,

    /// The admin of the distributor
    #[account(
        constraint = admin.key() == distributor.admin @ PhaseDistributorError::Unauthorized
    )]
    pub admin: Signer<'info>,
}

/**
 * Updates the parameters of an existing phase
 *
 * @param ctx - The account context containing distributor, phase, and admin
 * @param phase_index - Registry position of the phase to update
 * @param new_merkle_root - Replacement eligibility commitment, if any
 * @param new_amount - Replacement per-claim amount, if any
 * @param new_expiry - Replacement expiry, if any
 *
 * Validation Rules:
 * - A present merkle root must not be all zeros
 * - A present amount must be greater than zero
 * - A present expiry must be strictly in the future
 */
pub fn handle_update_phase(
    ctx: Context<UpdatePhase>,
    phase_index: u8,
    new_merkle_root: Option<[u8; 32]>,
    new_amount: Option<u64>,
    new_expiry: Option<i64>,
) -> Result<()> {
    let phase = &mut ctx.accounts.phase;
    let now = Clock::get()?.unix_timestamp;

    if let Some(merkle_root) = new_merkle_root {
        Phase::validate_root(&merkle_root)?;
        phase.merkle_root = merkle_root;
    }

    if let Some(amount) = new_amount {
        require!(amount > 0, PhaseDistributorError::ZeroAmount);
        phase.per_claim_amount = amount;
    }

    if let Some(expiry) = new_expiry {
        require!(expiry > now, PhaseDistributorError::ExpiryNotInFuture);
        phase.expiry = expiry;
    }

    let merkle_root = phase.merkle_root;
    let per_claim_amount = phase.per_claim_amount;
    let expiry = phase.expiry;

    emit_cpi!(PhaseUpdated {
        distributor: ctx.accounts.distributor.key(),
        phase_index,
        merkle_root,
        per_claim_amount,
        expiry,
    });

    Ok(())
}
