use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for appending a phase to the registry
 *
 * The new phase lands at index phase_count; the registry is append-only and
 * bounded by MAX_PHASES. The phase can optionally be activated on creation,
 * which also moves the current-phase pointer.
 *
 * Access Control: Only the admin can create phases
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CreatePhase<'info> {
    /// The distributor whose registry gains a phase
    #[account(mut)]
    pub distributor: Account<'info, Distributor>,

    /// The new phase account (PDA)
    /// - Derived from: ["phase", distributor_key, phase_count]
    #[account(
        init,
        payer = admin,
        space = Phase::LEN,
        seeds = [
            PHASE_SEED.as_bytes(),
            distributor.key().as_ref(),
            &[distributor.phase_count]
        ],
        bump
    )]
    pub phase: Account<'info, Phase>,

    /// The admin of the distributor
    #[account(
        mut,
        constraint = admin.key() == distributor.admin @ PhaseDistributorError::Unauthorized
    )]
    pub admin: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Appends a new phase to the registry
 *
 * @param ctx - The account context containing distributor, phase, and admin
 * @param merkle_root - Eligibility commitment for the new phase
 * @param per_claim_amount - Fixed entitlement paid per claim
 * @param expiry - Unix timestamp closing the claiming window
 * @param activate - Whether to activate the phase and make it current
 *
 * Validation Rules:
 * - Registry must not be full (MAX_PHASES)
 * - per_claim_amount must be greater than zero
 * - expiry must be strictly in the future
 * - merkle_root must not be all zeros
 */
pub fn handle_create_phase(
    ctx: Context<CreatePhase>,
    merkle_root: [u8; 32],
    per_claim_amount: u64,
    expiry: i64,
    activate: bool,
) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;

    let phase_index = distributor.next_phase_index()?;

    let now = Clock::get()?.unix_timestamp;
    Phase::validate_terms(per_claim_amount, expiry, now)?;
    Phase::validate_root(&merkle_root)?;

    let phase = &mut ctx.accounts.phase;
    phase.bump = ctx.bumps.phase;
    phase.index = phase_index;
    phase.merkle_root = merkle_root;
    phase.per_claim_amount = per_claim_amount;
    phase.expiry = expiry;
    phase.active = activate;
    phase.claimed_count = 0;

    distributor.phase_count = phase_index + 1;
    if activate {
        distributor.current_phase = phase_index;
    }
    let distributor_key = distributor.key();

    emit_cpi!(PhaseCreated {
        distributor: distributor_key,
        phase_index,
        merkle_root,
        per_claim_amount,
        expiry,
        active: activate,
    });

    if activate {
        emit_cpi!(PhaseActivated {
            distributor: distributor_key,
            phase_index,
        });
    }

    Ok(())
}
