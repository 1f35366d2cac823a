use anchor_lang::prelude::*;
use anchor_lang::system_program::{allocate, assign, transfer, Allocate, Assign, Transfer};
use anchor_spl::token_2022::spl_token_2022::state::{
    Account as SplTokenAccount, AccountState,
};
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{claimant_leaf, transfer_tokens, verify};

/**
 * Account context for admin-driven batch distribution
 *
 * Claimants and proofs travel as instruction data; the per-entry accounts
 * travel as remaining accounts, two per claimant in order:
 *
 *   [claim_record_0, claimant_token_account_0, claim_record_1, ...]
 *
 * Phase-level failures (paused, inactive, expired, underfunded vault) abort
 * the whole batch before any entry is touched. Per-entry failures degrade
 * to a silent skip so one stale or malformed entry cannot abort its
 * siblings.
 *
 * Access Control: Only the admin can batch-distribute
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(phase_index: u8)]
pub struct BatchDistribute<'info> {
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

    /// Token vault holding the tokens to be distributed
    /// - Derived from: ["vault", distributor_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for verification
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == distributor.token_mint @ PhaseDistributorError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The admin submitting the batch
    /// - Pays rent for the claim records created along the way
    #[account(
        mut,
        constraint = admin.key() == distributor.admin @ PhaseDistributorError::Unauthorized
    )]
    pub admin: Signer<'info>,

    /// System program for claim record creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Distributes a phase's entitlement to a list of claimants
 *
 * @param ctx - The account context plus per-entry remaining accounts
 * @param phase_index - Registry position of the targeted phase
 * @param claimants - Claimant public keys, one per entry
 * @param proofs - Merkle proofs, parallel to claimants
 *
 * Whole-batch checks (fail fast, nothing processed):
 * - Distributor not paused; phase active and not expired
 * - claimants, proofs, and remaining accounts line up
 * - Vault covers per_claim_amount for every entry (conservative upper
 *   bound checked once)
 *
 * Per-entry skip conditions (counted, never aborting):
 * - Claimant is the default pubkey
 * - Claim record already exists (already claimed)
 * - Merkle proof does not verify for the claimant's leaf
 * - Destination token account is not the claimant's account for this mint
 */
pub fn handle_batch_distribute<'info>(
    ctx: Context<'_, '_, 'info, 'info, BatchDistribute<'info>>,
    phase_index: u8,
    claimants: Vec<Pubkey>,
    proofs: Vec<Vec<[u8; 32]>>,
) -> Result<()> {
    let remaining = ctx.remaining_accounts;
    let accounts = &mut *ctx.accounts;
    let distributor = &mut accounts.distributor;
    let phase = &mut accounts.phase;

    // ===== WHOLE-BATCH VALIDATION =====

    require!(!distributor.paused, PhaseDistributorError::ProgramPaused);

    let now = Clock::get()?.unix_timestamp;
    phase.check_claimable(now)?;

    require!(
        claimants.len() == proofs.len(),
        PhaseDistributorError::ArrayLengthMismatch
    );
    require!(
        remaining.len() == claimants.len() * 2,
        PhaseDistributorError::ArrayLengthMismatch
    );

    // Conservative upper bound: enough to pay every entry even though some
    // may be skipped
    let amount = phase.per_claim_amount;
    let required = amount
        .checked_mul(claimants.len() as u64)
        .ok_or(PhaseDistributorError::ArithmeticOverflow)?;
    require!(
        accounts.token_vault.amount >= required,
        PhaseDistributorError::InsufficientVaultBalance
    );

    let distributor_key = distributor.key();
    let token_mint_key = distributor.token_mint;
    let admin_key = distributor.admin;
    let distributor_bump = distributor.bump;
    let merkle_root = phase.merkle_root;
    let decimals = accounts.token_mint.decimals;
    let rent = Rent::get()?;

    let distributor_seeds = &[
        DISTRIBUTOR_SEED.as_bytes(),
        token_mint_key.as_ref(),
        admin_key.as_ref(),
        &[distributor_bump],
    ];
    let distributor_signer = &[&distributor_seeds[..]];

    let mut success_count: u32 = 0;
    let mut skip_count: u32 = 0;

    // ===== PER-ENTRY PROCESSING =====

    for (i, (claimant, proof)) in claimants.iter().zip(proofs.into_iter()).enumerate() {
        let record_info = &remaining[2 * i];
        let dest_info = &remaining[2 * i + 1];

        // Null identities are tolerated as padding in stale batch data
        if *claimant == Pubkey::default() {
            skip_count += 1;
            continue;
        }

        // The record account must be the PDA for this (phase, claimant);
        // anything else is a malformed batch, not a skippable entry
        let (expected_record, record_bump) = Pubkey::find_program_address(
            &[
                CLAIM_SEED.as_bytes(),
                distributor_key.as_ref(),
                &[phase_index],
                claimant.as_ref(),
            ],
            &crate::ID,
        );
        require!(
            record_info.key() == expected_record,
            PhaseDistributorError::InvalidClaimAccount
        );

        // A live record means this claimant already redeemed
        if !record_info.data_is_empty() {
            skip_count += 1;
            continue;
        }

        if !verify(proof, merkle_root, claimant_leaf(claimant)) {
            skip_count += 1;
            continue;
        }

        // The destination must be the claimant's own live account for this
        // mint, so a bad destination degrades to a skip instead of a
        // failed CPI
        match InterfaceAccount::<TokenAccount>::try_from(dest_info) {
            Ok(dest) if destination_accepts(&dest, claimant, &token_mint_key) => {}
            _ => {
                skip_count += 1;
                continue;
            }
        }

        // ===== EFFECTS (committed before the transfer) =====

        // The record address is predictable, so anyone can park lamports
        // there ahead of time; fund the shortfall and allocate in place
        // rather than create_account, which rejects funded accounts
        let top_up = record_top_up(record_info.lamports(), rent.minimum_balance(ClaimRecord::LEN));
        if top_up > 0 {
            transfer(
                CpiContext::new(
                    accounts.system_program.to_account_info(),
                    Transfer {
                        from: accounts.admin.to_account_info(),
                        to: record_info.clone(),
                    },
                ),
                top_up,
            )?;
        }

        let record_seeds = &[
            CLAIM_SEED.as_bytes(),
            distributor_key.as_ref(),
            &[phase_index],
            claimant.as_ref(),
            &[record_bump],
        ];
        let record_signer = &[&record_seeds[..]];
        allocate(
            CpiContext::new_with_signer(
                accounts.system_program.to_account_info(),
                Allocate {
                    account_to_allocate: record_info.clone(),
                },
                record_signer,
            ),
            ClaimRecord::LEN as u64,
        )?;
        assign(
            CpiContext::new_with_signer(
                accounts.system_program.to_account_info(),
                Assign {
                    account_to_assign: record_info.clone(),
                },
                record_signer,
            ),
            &crate::ID,
        )?;

        let record = ClaimRecord { claimed: true };
        record.try_serialize(&mut &mut record_info.try_borrow_mut_data()?[..])?;

        phase.record_claim()?;
        distributor.record_claim(amount)?;

        // ===== INTERACTIONS =====

        transfer_tokens(
            distributor.to_account_info(),
            accounts.token_vault.to_account_info(),
            dest_info.clone(),
            accounts.token_mint.to_account_info(),
            accounts.token_program.to_account_info(),
            amount,
            decimals,
            Some(distributor_signer), // PDA signing for the vault transfer
        )?;

        success_count += 1;
    }

    emit_cpi!(BatchDistributed {
        distributor: distributor_key,
        phase_index,
        success_count,
        skip_count,
    });

    Ok(())
}

/// Lamports the admin must add before a claim record can be allocated.
///
/// Only the shortfall against the rent-exempt minimum is funded: lamports
/// already parked at the predictable record address never block the entry.
pub fn record_top_up(existing_lamports: u64, rent_minimum: u64) -> u64 {
    rent_minimum.saturating_sub(existing_lamports)
}

/// Whether a destination token account can actually receive the payout.
///
/// Wrong owner, wrong mint, or a frozen or uninitialized account would fail
/// the transfer CPI, so such entries are filtered up front and degrade to a
/// skip instead of aborting their siblings.
pub fn destination_accepts(dest: &SplTokenAccount, claimant: &Pubkey, mint: &Pubkey) -> bool {
    dest.owner == *claimant && dest.mint == *mint && dest.state == AccountState::Initialized
}
