use crate::constants::*;
use crate::error::*;
use crate::instructions::process_refund::funding_failed;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::TokenAccount;

/// Retires a pool that never funded. Once subscriptions have flowed in,
/// cancellation requires the funding window to have failed and every
/// subscriber to have been refunded (the vault is empty).
pub fn cancel_asset_pool(ctx: Context<CancelAssetPool>) -> Result<()> {
    let asset_pool = &mut ctx.accounts.asset_pool;

    require!(
        asset_pool.status == PoolStatus::Created || asset_pool.status == PoolStatus::Approved,
        TrancheLendingError::InvalidAssetPoolStatus
    );

    if asset_pool.related_accounts_initialized {
        let now = Clock::get()?.unix_timestamp;
        require!(
            now > asset_pool.funding_end_time,
            TrancheLendingError::FundingNotCompleted
        );
        require!(
            funding_failed(asset_pool)?,
            TrancheLendingError::FundingTargetNotMet
        );

        let pool_vault = ctx
            .accounts
            .pool_vault
            .as_ref()
            .ok_or(TrancheLendingError::InsufficientVaultBalance)?;
        require!(
            pool_vault.amount == 0,
            TrancheLendingError::InsufficientVaultBalance
        );
    }

    asset_pool.status = PoolStatus::Cancelled;

    msg!("Asset pool cancelled: {}", asset_pool.name);
    Ok(())
}

#[derive(Accounts)]
pub struct CancelAssetPool<'info> {
    #[account(
        seeds = [SEEDS_SYSTEM_CONFIG],
        bump,
        constraint = !system_config.paused @ TrancheLendingError::SystemPaused,
        constraint = asset_pool.creator == authority.key()
            || system_config.operation_admin == authority.key()
            || system_config.super_admin == authority.key() @ TrancheLendingError::Unauthorized
    )]
    pub system_config: Box<Account<'info, SystemConfig>>,

    #[account(mut)]
    pub asset_pool: Box<Account<'info, AssetPool>>,

    #[account(
        seeds = [SEEDS_POOL_VAULT, asset_pool.key().as_ref()],
        bump,
        constraint = pool_vault.key() == asset_pool.vault
    )]
    pub pool_vault: Option<Box<InterfaceAccount<'info, TokenAccount>>>,

    #[account(mut)]
    pub authority: Signer<'info>,
}
