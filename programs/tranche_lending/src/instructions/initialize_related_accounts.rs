use crate::constants::*;
use crate::error::*;
use crate::events::RelatedAccountsInitialized;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

pub fn initialize_related_accounts(ctx: Context<InitializeRelatedAccounts>) -> Result<()> {
    let asset_pool = &mut ctx.accounts.asset_pool;

    let senior_pool = &mut ctx.accounts.senior_pool;
    senior_pool.asset_pool = asset_pool.key();
    senior_pool.senior_receipt_mint = ctx.accounts.senior_receipt_mint.key();
    senior_pool.total_deposits = 0;
    senior_pool.repaid_amount = 0;

    let first_loss_pool = &mut ctx.accounts.first_loss_pool;
    first_loss_pool.asset_pool = asset_pool.key();
    first_loss_pool.total_deposits = 0;
    first_loss_pool.repaid_amount = 0;

    let junior_interest_pool = &mut ctx.accounts.junior_interest_pool;
    junior_interest_pool.asset_pool = asset_pool.key();
    junior_interest_pool.total_interest = 0;
    junior_interest_pool.distributed_interest = 0;

    asset_pool.senior_pool = senior_pool.key();
    asset_pool.first_loss_pool = first_loss_pool.key();
    asset_pool.junior_interest_pool = junior_interest_pool.key();
    asset_pool.senior_receipt_mint = ctx.accounts.senior_receipt_mint.key();
    asset_pool.junior_position_base_mint = ctx.accounts.junior_position_base_mint.key();
    asset_pool.vault = ctx.accounts.pool_vault.key();
    asset_pool.first_loss_vault = ctx.accounts.first_loss_vault.key();
    asset_pool.treasury_ata = ctx.accounts.treasury_ata.key();
    asset_pool.related_accounts_initialized = true;

    emit!(RelatedAccountsInitialized {
        asset_pool: asset_pool.key(),
        senior_pool: senior_pool.key(),
        first_loss_pool: first_loss_pool.key(),
        junior_interest_pool: junior_interest_pool.key(),
        senior_receipt_mint: ctx.accounts.senior_receipt_mint.key(),
        vault: ctx.accounts.pool_vault.key(),
        first_loss_vault: ctx.accounts.first_loss_vault.key(),
        treasury_ata: ctx.accounts.treasury_ata.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Related accounts initialized for pool: {}", asset_pool.name);
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeRelatedAccounts<'info> {
    #[account(
        seeds = [SEEDS_SYSTEM_CONFIG],
        bump,
        constraint = !system_config.paused @ TrancheLendingError::SystemPaused
    )]
    pub system_config: Box<Account<'info, SystemConfig>>,

    #[account(
        mut,
        constraint = asset_pool.status == PoolStatus::Approved @ TrancheLendingError::AssetPoolNotApproved,
        constraint = !asset_pool.related_accounts_initialized @ TrancheLendingError::RelatedAccountsAlreadyInitialized,
        constraint = asset_pool.asset_mint == asset_mint.key() @ TrancheLendingError::AssetNotSupported
    )]
    pub asset_pool: Box<Account<'info, AssetPool>>,

    pub asset_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        init,
        payer = payer,
        space = 8 + SeniorPool::INIT_SPACE,
        seeds = [SEEDS_SENIOR_POOL, asset_pool.key().as_ref()],
        bump
    )]
    pub senior_pool: Box<Account<'info, SeniorPool>>,

    #[account(
        init,
        payer = payer,
        space = 8 + FirstLossPool::INIT_SPACE,
        seeds = [SEEDS_FIRST_LOSS_POOL, asset_pool.key().as_ref()],
        bump
    )]
    pub first_loss_pool: Box<Account<'info, FirstLossPool>>,

    #[account(
        init,
        payer = payer,
        space = 8 + JuniorInterestPool::INIT_SPACE,
        seeds = [SEEDS_JUNIOR_INTEREST_POOL, asset_pool.key().as_ref()],
        bump
    )]
    pub junior_interest_pool: Box<Account<'info, JuniorInterestPool>>,

    /// Divisible claim on senior principal, minted 1:1 at issuance.
    #[account(
        init,
        payer = payer,
        mint::decimals = asset_mint.decimals,
        mint::authority = asset_pool,
        seeds = [SEEDS_SENIOR_RECEIPT_MINT, asset_pool.key().as_ref()],
        bump
    )]
    pub senior_receipt_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Base mint for junior positions; each position gets its own
    /// supply-1 mint derived per position id.
    #[account(
        init,
        payer = payer,
        mint::decimals = 0,
        mint::authority = asset_pool,
        seeds = [SEEDS_JUNIOR_POSITION_MINT, asset_pool.key().as_ref()],
        bump
    )]
    pub junior_position_base_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        init,
        payer = payer,
        token::mint = asset_mint,
        token::authority = pool_vault,
        seeds = [SEEDS_POOL_VAULT, asset_pool.key().as_ref()],
        bump
    )]
    pub pool_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Backing vault for junior principal; funded when the raise locks.
    #[account(
        init,
        payer = payer,
        token::mint = asset_mint,
        token::authority = first_loss_vault,
        seeds = [SEEDS_FIRST_LOSS_VAULT, asset_pool.key().as_ref()],
        bump
    )]
    pub first_loss_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// CHECK: treasury wallet recorded in the system config
    #[account(
        constraint = treasury.key() == system_config.treasury @ TrancheLendingError::Unauthorized
    )]
    pub treasury: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = asset_mint,
        associated_token::authority = treasury,
        associated_token::token_program = token_program,
    )]
    pub treasury_ata: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}
