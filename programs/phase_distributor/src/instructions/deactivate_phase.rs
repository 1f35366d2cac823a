use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for deactivating a phase
 *
 * Deactivation only drops the active flag. The current-phase pointer is left
 * alone, so an inactive phase may remain current; claims against it fail
 * with PhaseNotActive until it is reactivated.
 *
 * Access Control: Only the admin can deactivate phases
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(phase_index: u8)]
pub struct DeactivatePhase<'info> {
    /// The distributor owning the phase
    pub distributor: Account<'info, Distributor>,

    /// The phase to deactivate
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
 * Deactivates a phase
 *
 * @param ctx - The account context containing distributor, phase, and admin
 * @param phase_index - Registry position of the phase to deactivate
 */
pub fn handle_deactivate_phase(ctx: Context<DeactivatePhase>, phase_index: u8) -> Result<()> {
    ctx.accounts.phase.active = false;

    emit_cpi!(PhaseDeactivated {
        distributor: ctx.accounts.distributor.key(),
        phase_index,
    });

    Ok(())
}
