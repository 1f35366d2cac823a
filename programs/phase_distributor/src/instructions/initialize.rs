use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_tokens;

/**
 * Account context for initializing a distributor
 *
 * This instruction creates the three accounts a deployment starts with:
 * - The distributor PDA holding global state
 * - The token vault PDA controlled by the distributor
 * - The implicit phase 0, created active with the supplied parameters
 *
 * It also deposits the initial funding from the admin's token account into
 * the vault so phase 0 can be claimed against immediately.
 *
 * Access Control: The admin signs and becomes the sole authority
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The main distributor account (PDA)
    /// - Stores global counters, the pause flag, and the phase pointer
    /// - Derived from: ["distributor", token_mint, admin]
    #[account(
        init,
        payer = admin,
        space = Distributor::LEN,
        seeds = [
            DISTRIBUTOR_SEED.as_bytes(),
            token_mint.key().as_ref(),
            admin.key().as_ref()
        ],
        bump
    )]
    pub distributor: Account<'info, Distributor>,

    /// Phase 0, created together with the distributor
    /// - Derived from: ["phase", distributor_key, 0]
    #[account(
        init,
        payer = admin,
        space = Phase::LEN,
        seeds = [PHASE_SEED.as_bytes(), distributor.key().as_ref(), &[0u8]],
        bump
    )]
    pub phase: Account<'info, Phase>,

    /// Token vault account (PDA) that holds the tokens to be distributed
    /// - Authority is the distributor PDA
    /// - Derived from: ["vault", distributor_key]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = distributor,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump,
        payer = admin,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for the tokens being distributed
    /// - Supports both SPL Token and Token 2022 programs
    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Admin's token account funding the vault
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = admin,
        token::token_program = token_program,
    )]
    pub admin_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The admin of the distributor
    /// - Sole authority for every administrative instruction
    #[account(mut)]
    pub admin: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    /// Rent sysvar for rent exemption calculations
    pub rent: Sysvar<'info, Rent>,
}

/**
 * Initializes the distributor and its implicit phase 0
 *
 * @param ctx - The account context containing all required accounts
 * @param initial_funding - Tokens moved from the admin into the vault (may be 0)
 * @param merkle_root - Eligibility commitment for phase 0
 * @param per_claim_amount - Fixed entitlement paid per claim in phase 0
 * @param expiry - Unix timestamp closing phase 0's claiming window
 */
pub fn handle_initialize(
    ctx: Context<Initialize>,
    initial_funding: u64,
    merkle_root: [u8; 32],
    per_claim_amount: u64,
    expiry: i64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    // Phase 0 obeys the same creation rules as every later phase
    Phase::validate_terms(per_claim_amount, expiry, now)?;
    Phase::validate_root(&merkle_root)?;

    let distributor = &mut ctx.accounts.distributor;
    distributor.bump = ctx.bumps.distributor;
    distributor.admin = ctx.accounts.admin.key();
    distributor.token_mint = ctx.accounts.token_mint.key();
    distributor.token_vault = ctx.accounts.token_vault.key();
    distributor.paused = false;
    distributor.current_phase = 0;
    distributor.phase_count = 1;
    // Note: total_claimed and total_recipients start at the default 0

    let phase = &mut ctx.accounts.phase;
    phase.bump = ctx.bumps.phase;
    phase.index = 0;
    phase.merkle_root = merkle_root;
    phase.per_claim_amount = per_claim_amount;
    phase.expiry = expiry;
    phase.active = true;
    phase.claimed_count = 0;

    // Seed the vault; further funding can be sent to the vault directly
    if initial_funding > 0 {
        transfer_tokens(
            ctx.accounts.admin.to_account_info(),
            ctx.accounts.admin_token_account.to_account_info(),
            ctx.accounts.token_vault.to_account_info(),
            ctx.accounts.token_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            initial_funding,
            ctx.accounts.token_mint.decimals,
            None, // No signer seeds needed for an admin-signed transfer
        )?;
    }

    emit_cpi!(DistributorInitialized {
        distributor: ctx.accounts.distributor.key(),
        admin: ctx.accounts.admin.key(),
        token_mint: ctx.accounts.token_mint.key(),
        token_vault: ctx.accounts.token_vault.key(),
        initial_funding,
    });

    emit_cpi!(PhaseCreated {
        distributor: ctx.accounts.distributor.key(),
        phase_index: 0,
        merkle_root,
        per_claim_amount,
        expiry,
        active: true,
    });

    Ok(())
}
