use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_tokens;

/**
 * Account context for the emergency asset sweep
 *
 * Moves vault funds to an arbitrary recipient token account with no phase,
 * expiry, or amount ceiling. This is an administrator escape hatch, not a
 * user-facing path; the only guards are the admin signature and a non-null
 * recipient.
 *
 * Access Control: Only the admin can withdraw
 */
#[event_cpi]
#[derive(Accounts)]
pub struct EmergencyWithdraw<'info> {
    /// The distributor whose vault is swept
    pub distributor: Account<'info, Distributor>,

    /// Token vault to withdraw from
    /// - Derived from: ["vault", distributor_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Token account receiving the swept funds
    #[account(
        mut,
        token::mint = distributor.token_mint,
        token::token_program = token_program,
    )]
    pub recipient_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for verification
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == distributor.token_mint @ PhaseDistributorError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The admin of the distributor
    #[account(
        constraint = admin.key() == distributor.admin @ PhaseDistributorError::Unauthorized
    )]
    pub admin: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Sweeps tokens from the vault to the recipient
 *
 * @param ctx - The account context containing all required accounts
 * @param amount - Amount of tokens to withdraw
 *
 * Validation Rules:
 * - Amount must be greater than zero
 * - Recipient must not be the zero address
 */
pub fn handle_emergency_withdraw(ctx: Context<EmergencyWithdraw>, amount: u64) -> Result<()> {
    require!(amount > 0, PhaseDistributorError::ZeroAmount);

    let recipient = ctx.accounts.recipient_token_account.owner;
    require!(
        recipient != Pubkey::default(),
        PhaseDistributorError::ZeroRecipient
    );

    let distributor = &ctx.accounts.distributor;
    let token_mint_key = distributor.token_mint;
    let admin_key = distributor.admin;
    let distributor_bump = distributor.bump;

    let seeds = &[
        DISTRIBUTOR_SEED.as_bytes(),
        token_mint_key.as_ref(),
        admin_key.as_ref(),
        &[distributor_bump],
    ];
    let signer = &[&seeds[..]];

    transfer_tokens(
        ctx.accounts.distributor.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.recipient_token_account.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
        Some(signer), // PDA signing for the vault transfer
    )?;

    emit_cpi!(EmergencyWithdrawal {
        distributor: ctx.accounts.distributor.key(),
        admin: ctx.accounts.admin.key(),
        recipient,
        amount,
    });

    Ok(())
}
