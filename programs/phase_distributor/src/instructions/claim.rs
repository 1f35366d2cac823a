use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{claimant_leaf, transfer_tokens, verify};

/**
 * Account context for claiming against the current phase
 *
 * The phase and claim record are derived from the distributor's stored
 * current-phase pointer, so the caller only supplies a proof. The claim
 * record is created lazily on the first claim; a prior claim is detected
 * by its claimed flag.
 *
 * Access Control: Any account with a valid merkle proof
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The distributor holding global counters
    #[account(mut)]
    pub distributor: Account<'info, Distributor>,

    /// The current phase, resolved through the stored pointer
    /// - Derived from: ["phase", distributor_key, current_phase]
    #[account(
        mut,
        seeds = [
            PHASE_SEED.as_bytes(),
            distributor.key().as_ref(),
            &[distributor.current_phase]
        ],
        bump = phase.bump
    )]
    pub phase: Account<'info, Phase>,

    /// Claim record for this (phase, claimant) pair
    /// - Derived from: ["claim", distributor_key, current_phase, claimant]
    #[account(
        init_if_needed,
        payer = claimant,
        space = ClaimRecord::LEN,
        seeds = [
            CLAIM_SEED.as_bytes(),
            distributor.key().as_ref(),
            &[distributor.current_phase],
            claimant.key().as_ref()
        ],
        bump
    )]
    pub claim_record: Account<'info, ClaimRecord>,

    /// Token vault holding the tokens to be distributed
    /// - Derived from: ["vault", distributor_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Claimant's token account to receive the tokens
    #[account(
        mut,
        token::mint = distributor.token_mint,
        token::authority = claimant,
        token::token_program = token_program,
    )]
    pub claimant_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for verification
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == distributor.token_mint @ PhaseDistributorError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The claimant attempting to redeem their entitlement
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Account context for claiming against an explicitly named phase
 *
 * Identical to Claim except the phase index is an instruction argument
 * instead of the stored pointer; out-of-range indices are rejected with
 * InvalidPhase before the handler runs.
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(phase_index: u8)]
pub struct ClaimForPhase<'info> {
    /// The distributor holding global counters
    #[account(mut)]
    pub distributor: Account<'info, Distributor>,

    /// The targeted phase
    /// - Derived from: ["phase", distributor_key, phase_index]
    #[account(
        mut,
        seeds = [PHASE_SEED.as_bytes(), distributor.key().as_ref(), &[phase_index]],
        bump = phase.bump,
        constraint = phase_index < distributor.phase_count @ PhaseDistributorError::InvalidPhase
    )]
    pub phase: Account<'info, Phase>,

    /// Claim record for this (phase, claimant) pair
    /// - Derived from: ["claim", distributor_key, phase_index, claimant]
    #[account(
        init_if_needed,
        payer = claimant,
        space = ClaimRecord::LEN,
        seeds = [
            CLAIM_SEED.as_bytes(),
            distributor.key().as_ref(),
            &[phase_index],
            claimant.key().as_ref()
        ],
        bump
    )]
    pub claim_record: Account<'info, ClaimRecord>,

    /// Token vault holding the tokens to be distributed
    /// - Derived from: ["vault", distributor_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Claimant's token account to receive the tokens
    #[account(
        mut,
        token::mint = distributor.token_mint,
        token::authority = claimant,
        token::token_program = token_program,
    )]
    pub claimant_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for verification
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == distributor.token_mint @ PhaseDistributorError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The claimant attempting to redeem their entitlement
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Claims against the distributor's current phase
 *
 * @param ctx - The account context containing all required accounts
 * @param proof - Array of 32-byte sibling hashes forming the merkle proof
 */
pub fn handle_claim(ctx: Context<Claim>, proof: Vec<[u8; 32]>) -> Result<()> {
    let event = process_claim(
        &mut ctx.accounts.distributor,
        &mut ctx.accounts.phase,
        &mut ctx.accounts.claim_record,
        &ctx.accounts.token_vault,
        &ctx.accounts.claimant_token_account,
        &ctx.accounts.token_mint,
        &ctx.accounts.token_program,
        &ctx.accounts.claimant,
        proof,
    )?;

    emit_cpi!(event);
    Ok(())
}

/**
 * Claims against an explicitly named phase
 *
 * @param ctx - The account context containing all required accounts
 * @param phase_index - Registry position of the targeted phase
 * @param proof - Array of 32-byte sibling hashes forming the merkle proof
 */
pub fn handle_claim_for_phase(
    ctx: Context<ClaimForPhase>,
    _phase_index: u8,
    proof: Vec<[u8; 32]>,
) -> Result<()> {
    let event = process_claim(
        &mut ctx.accounts.distributor,
        &mut ctx.accounts.phase,
        &mut ctx.accounts.claim_record,
        &ctx.accounts.token_vault,
        &ctx.accounts.claimant_token_account,
        &ctx.accounts.token_mint,
        &ctx.accounts.token_program,
        &ctx.accounts.claimant,
        proof,
    )?;

    emit_cpi!(event);
    Ok(())
}

/**
 * Shared redemption engine for both single-claim entry points
 *
 * Validation Process (each check short-circuits with its own error):
 * 1. Distributor must not be paused
 * 2. Phase must be active and not expired
 * 3. Claimant must not have claimed in this phase
 * 4. Merkle proof must verify against the phase root
 * 5. Vault must cover the per-claim amount
 *
 * On success the claim record, phase counter, and global counters are all
 * committed before the vault transfer (effects before interactions), and
 * the event payload is returned for the caller to emit.
 */
#[allow(clippy::too_many_arguments)]
fn process_claim<'info>(
    distributor: &mut Account<'info, Distributor>,
    phase: &mut Account<'info, Phase>,
    claim_record: &mut Account<'info, ClaimRecord>,
    token_vault: &InterfaceAccount<'info, TokenAccount>,
    claimant_token_account: &InterfaceAccount<'info, TokenAccount>,
    token_mint: &InterfaceAccount<'info, Mint>,
    token_program: &Interface<'info, TokenInterface>,
    claimant: &Signer<'info>,
    proof: Vec<[u8; 32]>,
) -> Result<TokensClaimed> {
    // ===== VALIDATION PHASE =====

    require!(!distributor.paused, PhaseDistributorError::ProgramPaused);

    let now = Clock::get()?.unix_timestamp;
    phase.check_claimable(now)?;

    require!(!claim_record.claimed, PhaseDistributorError::AlreadyClaimed);

    // The leaf commits to the claimant identity alone; the entitlement is a
    // phase parameter
    let leaf = claimant_leaf(&claimant.key());
    require!(
        verify(proof, phase.merkle_root, leaf),
        PhaseDistributorError::InvalidProof
    );

    let amount = phase.per_claim_amount;
    require!(
        token_vault.amount >= amount,
        PhaseDistributorError::InsufficientVaultBalance
    );

    // ===== EFFECTS PHASE (State Updates) =====

    claim_record.claimed = true;
    phase.record_claim()?;
    distributor.record_claim(amount)?;

    // Copy out everything the transfer and event need before releasing the
    // mutable borrows
    let token_mint_key = distributor.token_mint;
    let admin_key = distributor.admin;
    let distributor_bump = distributor.bump;
    let distributor_key = distributor.key();
    let total_claimed = distributor.total_claimed;
    let phase_index = phase.index;

    // ===== INTERACTIONS PHASE (Token Transfer) =====

    let seeds = &[
        DISTRIBUTOR_SEED.as_bytes(),
        token_mint_key.as_ref(),
        admin_key.as_ref(),
        &[distributor_bump],
    ];
    let signer = &[&seeds[..]];

    transfer_tokens(
        distributor.to_account_info(),
        token_vault.to_account_info(),
        claimant_token_account.to_account_info(),
        token_mint.to_account_info(),
        token_program.to_account_info(),
        amount,
        token_mint.decimals,
        Some(signer), // PDA signing for the vault transfer
    )?;

    Ok(TokensClaimed {
        distributor: distributor_key,
        claimant: claimant.key(),
        phase_index,
        amount,
        total_claimed,
    })
}
