use crate::constants::*;
use crate::error::*;
use crate::instructions::utils::calculate_fee;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

/// Junior has no after-exit tier: once the funding window closes the
/// first-loss capital is committed and can only leave via principal
/// withdrawal after the pool ends.
pub fn withdraw_junior_subscription(
    ctx: Context<WithdrawJuniorSubscription>,
    amount: u64,
) -> Result<()> {
    require!(amount > 0, TrancheLendingError::InvalidSubscriptionAmount);
    require!(
        amount <= ctx.accounts.subscription.amount,
        TrancheLendingError::InsufficientBalance
    );

    let asset_pool = &mut ctx.accounts.asset_pool;
    let now = Clock::get()?.unix_timestamp;
    require!(
        now < asset_pool.funding_end_time,
        TrancheLendingError::FundingEnded
    );

    let fee = calculate_fee(amount, asset_pool.junior_early_before_exit_fee)?;
    let net_amount = amount
        .checked_sub(fee)
        .ok_or(TrancheLendingError::ArithmeticOverflow)?;

    let subscription = &mut ctx.accounts.subscription;
    subscription.amount = subscription
        .amount
        .checked_sub(amount)
        .ok_or(TrancheLendingError::ArithmeticOverflow)?;
    if subscription.amount == 0 {
        subscription.status = SubscriptionStatus::Withdrawn;
    }

    asset_pool.junior_amount = asset_pool
        .junior_amount
        .checked_sub(amount)
        .ok_or(TrancheLendingError::ArithmeticOverflow)?;

    let pool_key = asset_pool.key();
    let signer_seeds: &[&[&[u8]]] = &[&[
        SEEDS_POOL_VAULT,
        pool_key.as_ref(),
        &[ctx.bumps.pool_vault],
    ]];
    let decimals = ctx.accounts.asset_mint.decimals;

    if fee > 0 {
        let fee_cpi_accounts = TransferChecked {
            from: ctx.accounts.pool_vault.to_account_info(),
            to: ctx.accounts.treasury_ata.to_account_info(),
            mint: ctx.accounts.asset_mint.to_account_info(),
            authority: ctx.accounts.pool_vault.to_account_info(),
        };
        let cpi_ctx = CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            fee_cpi_accounts,
            signer_seeds,
        );
        transfer_checked(cpi_ctx, fee, decimals)?;
    }

    if net_amount > 0 {
        let refund_cpi_accounts = TransferChecked {
            from: ctx.accounts.pool_vault.to_account_info(),
            to: ctx.accounts.user_token_account.to_account_info(),
            mint: ctx.accounts.asset_mint.to_account_info(),
            authority: ctx.accounts.pool_vault.to_account_info(),
        };
        let cpi_ctx = CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            refund_cpi_accounts,
            signer_seeds,
        );
        transfer_checked(cpi_ctx, net_amount, decimals)?;
    }

    msg!(
        "Junior subscription withdrawn: {} tokens, fee: {}",
        amount,
        fee
    );
    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawJuniorSubscription<'info> {
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
        seeds = [
            SEEDS_SUBSCRIPTION,
            asset_pool.key().as_ref(),
            user.key().as_ref(),
            b"junior"
        ],
        bump,
        constraint = subscription.user == user.key() @ TrancheLendingError::Unauthorized,
        constraint = subscription.tranche == Tranche::Junior @ TrancheLendingError::InvalidSubscriptionStatus,
        constraint = subscription.status == SubscriptionStatus::Active @ TrancheLendingError::InvalidSubscriptionStatus
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

    #[account(
        mut,
        constraint = treasury_ata.key() == asset_pool.treasury_ata
    )]
    pub treasury_ata: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}
