use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for activating a phase
 *
 * Activation flips the phase's active flag on and moves the current-phase
 * pointer, so the no-index claim entry point targets it from then on.
 * An expired phase cannot be activated.
 *
 * Access Control: Only the admin can activate phases
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(phase_index: u8)]
pub struct SetActivePhase<'info> {
    /// The distributor whose pointer moves
    #[account(mut)]
    pub distributor: Account<'info, Distributor>,

    /// The phase to activate
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
 * Activates a phase and makes it current
 *
 * @param ctx - The account context containing distributor, phase, and admin
 * @param phase_index - Registry position of the phase to activate
 *
 * Validation Rules:
 * - Phase index must be in range
 * - Phase must not be expired
 */
pub fn handle_set_active_phase(ctx: Context<SetActivePhase>, phase_index: u8) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let phase = &mut ctx.accounts.phase;

    require!(!phase.is_expired(now), PhaseDistributorError::ClaimingEnded);

    phase.active = true;
    ctx.accounts.distributor.current_phase = phase_index;

    emit_cpi!(PhaseActivated {
        distributor: ctx.accounts.distributor.key(),
        phase_index,
    });

    Ok(())
}
