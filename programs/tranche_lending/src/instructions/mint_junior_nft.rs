use crate::constants::*;
use crate::error::*;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{mint_to, Mint, MintTo, TokenAccount, TokenInterface};

/// Issues one position certificate per junior subscriber: a supply-1 mint
/// as the transferable ownership marker plus a metadata account carrying
/// the fixed principal and the cumulative-claim counters. The position id
/// is unique per pool because the mint and metadata PDAs are derived from
/// it and can only be initialized once.
pub fn mint_junior_nft(ctx: Context<MintJuniorNft>, position_id: u64) -> Result<()> {
    let subscription = &mut ctx.accounts.subscription;
    let asset_pool = &ctx.accounts.asset_pool;
    let now = Clock::get()?.unix_timestamp;

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
        mint: ctx.accounts.junior_position_mint.to_account_info(),
        to: ctx.accounts.user_position_account.to_account_info(),
        authority: asset_pool.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        mint_cpi_accounts,
        signer_seeds,
    );
    mint_to(cpi_ctx, 1)?;

    let position = &mut ctx.accounts.junior_position;
    position.position_id = position_id;
    position.asset_pool = asset_pool.key();
    position.owner = subscription.user;
    position.principal = subscription.amount;
    position.claimed_interest = 0;
    position.principal_withdrawn = false;
    position.created_at = now;

    subscription.status = SubscriptionStatus::Issued;

    msg!(
        "Junior position {} issued to {} with principal {}",
        position_id,
        subscription.user,
        position.principal
    );
    Ok(())
}

#[derive(Accounts)]
#[instruction(position_id: u64)]
pub struct MintJuniorNft<'info> {
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
        constraint = subscription.tranche == Tranche::Junior @ TrancheLendingError::InvalidSubscriptionStatus,
        constraint = subscription.status == SubscriptionStatus::Active @ TrancheLendingError::InvalidSubscriptionStatus
    )]
    pub subscription: Box<Account<'info, Subscription>>,

    /// Each position gets its own supply-1 mint.
    #[account(
        init,
        payer = payer,
        mint::decimals = 0,
        mint::authority = asset_pool,
        seeds = [
            SEEDS_JUNIOR_POSITION_MINT,
            asset_pool.key().as_ref(),
            position_id.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub junior_position_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        init,
        payer = payer,
        space = 8 + JuniorPosition::INIT_SPACE,
        seeds = [
            SEEDS_JUNIOR_POSITION,
            asset_pool.key().as_ref(),
            position_id.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub junior_position: Box<Account<'info, JuniorPosition>>,

    /// CHECK: certificate recipient, validated against the subscription record
    #[account(constraint = user.key() == subscription.user @ TrancheLendingError::Unauthorized)]
    pub user: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = junior_position_mint,
        associated_token::authority = user,
        associated_token::token_program = token_program,
    )]
    pub user_position_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}
