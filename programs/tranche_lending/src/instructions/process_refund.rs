use crate::constants::*;
use crate::error::*;
use crate::events::RefundProcessed;
use crate::instructions::utils::validate_junior_ratio;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

/// True when the raise can no longer complete: minimum not met, no junior
/// capital at all, or junior share below the pool floor.
pub fn funding_failed(asset_pool: &AssetPool) -> Result<bool> {
    let total = asset_pool
        .senior_amount
        .checked_add(asset_pool.junior_amount)
        .ok_or(TrancheLendingError::ArithmeticOverflow)?;

    if total < asset_pool.min_amount {
        return Ok(true);
    }
    if asset_pool.junior_amount == 0 {
        return Ok(true);
    }
    Ok(validate_junior_ratio(asset_pool.junior_amount, total, asset_pool.min_junior_ratio).is_err())
}

pub fn process_refund(ctx: Context<ProcessRefund>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    require!(
        now > ctx.accounts.asset_pool.funding_end_time,
        TrancheLendingError::FundingNotCompleted
    );
    require!(
        funding_failed(&ctx.accounts.asset_pool)?,
        TrancheLendingError::FundingTargetNotMet
    );

    let refund_amount = ctx.accounts.subscription.amount;
    require!(refund_amount > 0, TrancheLendingError::InvalidRefundAmount);
    require!(
        ctx.accounts.pool_vault.amount >= refund_amount,
        TrancheLendingError::InsufficientVaultBalance
    );

    let pool_key = ctx.accounts.asset_pool.key();
    let signer_seeds: &[&[&[u8]]] = &[&[
        SEEDS_POOL_VAULT,
        pool_key.as_ref(),
        &[ctx.bumps.pool_vault],
    ]];

    let transfer_cpi_accounts = TransferChecked {
        from: ctx.accounts.pool_vault.to_account_info(),
        to: ctx.accounts.user_token_account.to_account_info(),
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
        refund_amount,
        ctx.accounts.asset_mint.decimals,
    )?;

    let tranche = ctx.accounts.subscription.tranche;
    ctx.accounts.subscription.status = SubscriptionStatus::Refunded;
    ctx.accounts.subscription.amount = 0;

    let asset_pool = &mut ctx.accounts.asset_pool;
    match tranche {
        Tranche::Senior => {
            asset_pool.senior_amount = asset_pool
                .senior_amount
                .checked_sub(refund_amount)
                .ok_or(TrancheLendingError::ArithmeticOverflow)?;
        }
        Tranche::Junior => {
            asset_pool.junior_amount = asset_pool
                .junior_amount
                .checked_sub(refund_amount)
                .ok_or(TrancheLendingError::ArithmeticOverflow)?;
        }
    }

    emit!(RefundProcessed {
        asset_pool: pool_key,
        user: ctx.accounts.user.key(),
        amount: refund_amount,
        tranche: tranche as u8,
        timestamp: now,
    });

    msg!(
        "Refund processed: {} tokens to {}",
        refund_amount,
        ctx.accounts.user.key()
    );
    Ok(())
}

#[derive(Accounts)]
pub struct ProcessRefund<'info> {
    #[account(
        seeds = [SEEDS_SYSTEM_CONFIG],
        bump,
        constraint = !system_config.paused @ TrancheLendingError::SystemPaused
    )]
    pub system_config: Box<Account<'info, SystemConfig>>,

    #[account(
        mut,
        constraint = asset_pool.status == PoolStatus::Approved @ TrancheLendingError::InvalidAssetPoolStatus,
        constraint = asset_pool.asset_mint == asset_mint.key() @ TrancheLendingError::AssetNotSupported
    )]
    pub asset_pool: Box<Account<'info, AssetPool>>,

    #[account(
        mut,
        constraint = subscription.asset_pool == asset_pool.key() @ TrancheLendingError::InvalidSubscriptionStatus,
        constraint = subscription.user == user.key() @ TrancheLendingError::Unauthorized,
        constraint = subscription.status == SubscriptionStatus::Active @ TrancheLendingError::RefundAlreadyProcessed
    )]
    pub subscription: Box<Account<'info, Subscription>>,

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
        token::mint = asset_mint,
        token::authority = user
    )]
    pub user_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}
