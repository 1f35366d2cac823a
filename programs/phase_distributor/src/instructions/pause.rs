use anchor_lang::prelude::*;

use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for pausing and unpausing the distributor
 *
 * While paused, single and batch claims are refused with ProgramPaused.
 * Administrative instructions stay available so the flag can always be
 * cleared again.
 *
 * Access Control: Only the admin can pause or unpause
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetPause<'info> {
    /// The distributor to suspend or resume
    #[account(mut)]
    pub distributor: Account<'info, Distributor>,

    /// The admin of the distributor
    #[account(
        constraint = admin.key() == distributor.admin @ PhaseDistributorError::Unauthorized
    )]
    pub admin: Signer<'info>,
}

/// Suspends all redemption paths.
pub fn handle_pause(ctx: Context<SetPause>) -> Result<()> {
    ctx.accounts.distributor.paused = true;

    emit_cpi!(DistributorPaused {
        distributor: ctx.accounts.distributor.key(),
        admin: ctx.accounts.admin.key(),
    });

    Ok(())
}

/// Resumes redemption after a pause.
pub fn handle_unpause(ctx: Context<SetPause>) -> Result<()> {
    ctx.accounts.distributor.paused = false;

    emit_cpi!(DistributorUnpaused {
        distributor: ctx.accounts.distributor.key(),
        admin: ctx.accounts.admin.key(),
    });

    Ok(())
}
