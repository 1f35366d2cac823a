use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::*;

/// Snapshot of a phase's claimability, returned to off-chain callers.
///
/// The default value (inactive, zero time, zero amount) doubles as the
/// answer for unknown phases, so the query never fails.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PhaseStatus {
    /// True iff the phase is active, unexpired, and the distributor is not
    /// paused
    pub is_active: bool,
    /// Seconds until expiry, zero once expired
    pub remaining_time: i64,
    /// Fixed entitlement paid per claim
    pub per_claim_amount: u64,
}

/**
 * Account context for the read-only phase status query
 *
 * The phase account is deliberately unchecked: an out-of-range index or an
 * address that is not the expected phase PDA yields the default status
 * instead of an error.
 */
#[derive(Accounts)]
pub struct QueryPhaseStatus<'info> {
    /// The distributor owning the registry
    pub distributor: Account<'info, Distributor>,

    /// CHECK: validated against the expected phase PDA in the handler;
    /// anything else falls back to the default status
    pub phase: UncheckedAccount<'info>,
}

/**
 * Reports whether a phase currently accepts claims
 *
 * @param ctx - The account context containing distributor and phase
 * @param phase_index - Registry position to query
 *
 * Safe query contract: any index or account that does not resolve to a
 * live phase returns the all-false/zero default rather than failing.
 */
pub fn handle_phase_status(ctx: Context<QueryPhaseStatus>, phase_index: u8) -> Result<PhaseStatus> {
    let distributor = &ctx.accounts.distributor;

    if phase_index >= distributor.phase_count {
        return Ok(PhaseStatus::default());
    }

    let (expected_phase, _) = Pubkey::find_program_address(
        &[
            PHASE_SEED.as_bytes(),
            distributor.key().as_ref(),
            &[phase_index],
        ],
        &crate::ID,
    );
    let phase_info = &ctx.accounts.phase;
    if phase_info.key() != expected_phase || phase_info.data_is_empty() {
        return Ok(PhaseStatus::default());
    }

    let data = phase_info.try_borrow_data()?;
    let phase = match Phase::try_deserialize(&mut data.as_ref()) {
        Ok(phase) => phase,
        Err(_) => return Ok(PhaseStatus::default()),
    };

    let now = Clock::get()?.unix_timestamp;
    Ok(PhaseStatus {
        is_active: phase.active && !phase.is_expired(now) && !distributor.paused,
        remaining_time: phase.remaining_time(now),
        per_claim_amount: phase.per_claim_amount,
    })
}
