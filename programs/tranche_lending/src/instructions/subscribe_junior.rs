use crate::constants::*;
use crate::error::*;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

pub fn subscribe_junior(ctx: Context<SubscribeJunior>, amount: u64) -> Result<()> {
    require!(amount > 0, TrancheLendingError::InvalidSubscriptionAmount);

    let asset_pool = &mut ctx.accounts.asset_pool;
    let now = Clock::get()?.unix_timestamp;

    require!(
        now >= asset_pool.funding_start_time,
        TrancheLendingError::FundingNotStarted
    );
    require!(
        now < asset_pool.funding_end_time,
        TrancheLendingError::FundingEnded
    );

    let transfer_cpi_accounts = TransferChecked {
        from: ctx.accounts.user_token_account.to_account_info(),
        to: ctx.accounts.pool_vault.to_account_info(),
        mint: ctx.accounts.asset_mint.to_account_info(),
        authority: ctx.accounts.user.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        transfer_cpi_accounts,
    );
    transfer_checked(cpi_ctx, amount, ctx.accounts.asset_mint.decimals)?;

    let subscription = &mut ctx.accounts.subscription;
    if subscription.amount == 0 {
        // first subscription for this (pool, user, tranche)
        subscription.asset_pool = asset_pool.key();
        subscription.user = ctx.accounts.user.key();
        subscription.tranche = Tranche::Junior;
        subscription.amount = amount;
        subscription.status = SubscriptionStatus::Active;
        subscription.subscribed_at = now;
    } else {
        require!(
            subscription.status == SubscriptionStatus::Active,
            TrancheLendingError::InvalidSubscriptionStatus
        );
        subscription.amount = subscription
            .amount
            .checked_add(amount)
            .ok_or(TrancheLendingError::ArithmeticOverflow)?;
    }

    asset_pool.junior_amount = asset_pool
        .junior_amount
        .checked_add(amount)
        .ok_or(TrancheLendingError::ArithmeticOverflow)?;

    msg!(
        "Junior subscription: {} tokens by {}",
        amount,
        ctx.accounts.user.key()
    );
    Ok(())
}

#[derive(Accounts)]
pub struct SubscribeJunior<'info> {
    #[account(
        seeds = [SEEDS_SYSTEM_CONFIG],
        bump,
        constraint = !system_config.paused @ TrancheLendingError::SystemPaused
    )]
    pub system_config: Box<Account<'info, SystemConfig>>,

    #[account(
        seeds = [SEEDS_ASSET_WHITELIST],
        bump,
        constraint = asset_whitelist.contains(&asset_mint.key()) @ TrancheLendingError::AssetNotSupported
    )]
    pub asset_whitelist: Box<Account<'info, AssetWhitelist>>,

    #[account(
        mut,
        constraint = asset_pool.status == PoolStatus::Approved @ TrancheLendingError::InvalidAssetPoolStatus,
        constraint = asset_pool.related_accounts_initialized @ TrancheLendingError::RelatedAccountsNotInitialized,
        constraint = asset_pool.asset_mint == asset_mint.key() @ TrancheLendingError::AssetNotSupported
    )]
    pub asset_pool: Box<Account<'info, AssetPool>>,

    pub asset_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        token::mint = asset_mint,
        token::authority = user
    )]
    pub user_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [SEEDS_POOL_VAULT, asset_pool.key().as_ref()],
        bump,
        constraint = pool_vault.key() == asset_pool.vault
    )]
    pub pool_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = user,
        space = 8 + Subscription::INIT_SPACE,
        seeds = [
            SEEDS_SUBSCRIPTION,
            asset_pool.key().as_ref(),
            user.key().as_ref(),
            b"junior"
        ],
        bump
    )]
    pub subscription: Box<Account<'info, Subscription>>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}
