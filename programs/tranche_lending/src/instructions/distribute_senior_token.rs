use crate::constants::*;
use crate::error::*;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{mint_to, Mint, MintTo, TokenAccount, TokenInterface};

/// Mints receipt tokens 1:1 against the final subscribed amount. Marking
/// the subscription as issued is what makes this a once-only operation.
pub fn distribute_senior_token(ctx: Context<DistributeSeniorToken>) -> Result<()> {
    let subscription = &mut ctx.accounts.subscription;
    let asset_pool = &ctx.accounts.asset_pool;

    require!(
        subscription.amount > 0,
        TrancheLendingError::InvalidSubscriptionAmount
    );

    let signer_seeds: &[&[&[u8]]] = &[&[
        SEEDS_ASSET_POOL,
        asset_pool.creator.as_ref(),
        asset_pool.name.as_bytes(),
        &[ctx.bumps.asset_pool],
    ]];

    let mint_cpi_accounts = MintTo {
        mint: ctx.accounts.senior_receipt_mint.to_account_info(),
        to: ctx.accounts.user_receipt_account.to_account_info(),
        authority: asset_pool.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        mint_cpi_accounts,
        signer_seeds,
    );
    mint_to(cpi_ctx, subscription.amount)?;

    subscription.status = SubscriptionStatus::Issued;

    msg!(
        "Distributed {} receipt tokens to {}",
        subscription.amount,
        subscription.user
    );
    Ok(())
}

#[derive(Accounts)]
pub struct DistributeSeniorToken<'info> {
    #[account(
        seeds = [SEEDS_SYSTEM_CONFIG],
        bump,
        constraint = !system_config.paused @ TrancheLendingError::SystemPaused
    )]
    pub system_config: Box<Account<'info, SystemConfig>>,

    #[account(
        seeds = [SEEDS_ASSET_POOL, asset_pool.creator.as_ref(), asset_pool.name.as_bytes()],
        bump,
        constraint = asset_pool.status == PoolStatus::Funded @ TrancheLendingError::InvalidAssetPoolStatus
    )]
    pub asset_pool: Box<Account<'info, AssetPool>>,

    #[account(
        mut,
        constraint = subscription.asset_pool == asset_pool.key() @ TrancheLendingError::InvalidSubscriptionStatus,
        constraint = subscription.tranche == Tranche::Senior @ TrancheLendingError::InvalidSubscriptionStatus,
        constraint = subscription.status == SubscriptionStatus::Active @ TrancheLendingError::InvalidSubscriptionStatus
    )]
    pub subscription: Box<Account<'info, Subscription>>,

    #[account(
        mut,
        seeds = [SEEDS_SENIOR_RECEIPT_MINT, asset_pool.key().as_ref()],
        bump,
        constraint = senior_receipt_mint.key() == asset_pool.senior_receipt_mint
    )]
    pub senior_receipt_mint: Box<InterfaceAccount<'info, Mint>>,

    /// CHECK: receipt recipient, validated against the subscription record
    #[account(constraint = user.key() == subscription.user @ TrancheLendingError::Unauthorized)]
    pub user: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = senior_receipt_mint,
        associated_token::authority = user,
        associated_token::token_program = token_program,
    )]
    pub user_receipt_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}
