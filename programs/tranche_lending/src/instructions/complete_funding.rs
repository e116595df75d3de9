use crate::constants::*;
use crate::error::*;
use crate::events::FundingCompleted;
use crate::instructions::utils::validate_junior_ratio;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

/// Locks the raise once the funding window has closed: validates the
/// minimum and the junior ratio, seeds the tranche ledgers, and moves the
/// junior capital into its first-loss backing vault.
pub fn complete_funding(ctx: Context<CompleteFunding>) -> Result<()> {
    let asset_pool = &mut ctx.accounts.asset_pool;
    let now = Clock::get()?.unix_timestamp;

    require!(
        now > asset_pool.funding_end_time,
        TrancheLendingError::FundingNotCompleted
    );

    let total = asset_pool
        .senior_amount
        .checked_add(asset_pool.junior_amount)
        .ok_or(TrancheLendingError::ArithmeticOverflow)?;
    require!(
        total >= asset_pool.min_amount,
        TrancheLendingError::FundingMinimumNotMet
    );

    validate_junior_ratio(asset_pool.junior_amount, total, asset_pool.min_junior_ratio)?;

    if asset_pool.junior_amount > 0 {
        let pool_key = asset_pool.key();
        let signer_seeds: &[&[&[u8]]] = &[&[
            SEEDS_POOL_VAULT,
            pool_key.as_ref(),
            &[ctx.bumps.pool_vault],
        ]];

        let transfer_cpi_accounts = TransferChecked {
            from: ctx.accounts.pool_vault.to_account_info(),
            to: ctx.accounts.first_loss_vault.to_account_info(),
            mint: ctx.accounts.asset_mint.to_account_info(),
            authority: ctx.accounts.pool_vault.to_account_info(),
        };
        let cpi_ctx = CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            transfer_cpi_accounts,
            signer_seeds,
        );
        transfer_checked(
            cpi_ctx,
            asset_pool.junior_amount,
            ctx.accounts.asset_mint.decimals,
        )?;
    }

    let senior_pool = &mut ctx.accounts.senior_pool;
    senior_pool.total_deposits = asset_pool.senior_amount;

    let first_loss_pool = &mut ctx.accounts.first_loss_pool;
    first_loss_pool.total_deposits = asset_pool.junior_amount;

    asset_pool.status = PoolStatus::Funded;

    emit!(FundingCompleted {
        asset_pool: asset_pool.key(),
        senior_amount: asset_pool.senior_amount,
        junior_amount: asset_pool.junior_amount,
        timestamp: now,
    });

    msg!(
        "Funding completed: senior {}, junior {}",
        asset_pool.senior_amount,
        asset_pool.junior_amount
    );
    Ok(())
}

#[derive(Accounts)]
pub struct CompleteFunding<'info> {
    #[account(
        seeds = [SEEDS_SYSTEM_CONFIG],
        bump,
        constraint = !system_config.paused @ TrancheLendingError::SystemPaused
    )]
    pub system_config: Box<Account<'info, SystemConfig>>,

    #[account(
        mut,
        constraint = asset_pool.status == PoolStatus::Approved @ TrancheLendingError::InvalidAssetPoolStatus,
        constraint = asset_pool.related_accounts_initialized @ TrancheLendingError::RelatedAccountsNotInitialized,
        constraint = asset_pool.asset_mint == asset_mint.key() @ TrancheLendingError::AssetNotSupported
    )]
    pub asset_pool: Box<Account<'info, AssetPool>>,

    #[account(
        mut,
        seeds = [SEEDS_SENIOR_POOL, asset_pool.key().as_ref()],
        bump
    )]
    pub senior_pool: Box<Account<'info, SeniorPool>>,

    #[account(
        mut,
        seeds = [SEEDS_FIRST_LOSS_POOL, asset_pool.key().as_ref()],
        bump
    )]
    pub first_loss_pool: Box<Account<'info, FirstLossPool>>,

    pub asset_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        seeds = [SEEDS_POOL_VAULT, asset_pool.key().as_ref()],
        bump,
        constraint = pool_vault.key() == asset_pool.vault
    )]
    pub pool_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [SEEDS_FIRST_LOSS_VAULT, asset_pool.key().as_ref()],
        bump,
        constraint = first_loss_vault.key() == asset_pool.first_loss_vault
    )]
    pub first_loss_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}
