use crate::constants::*;
use crate::error::*;
use crate::events::InterestClaimed;
use crate::instructions::utils::calculate_claimable_interest;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

pub fn claim_junior_interest(ctx: Context<ClaimJuniorInterest>, position_id: u64) -> Result<()> {
    let junior_interest_pool = &mut ctx.accounts.junior_interest_pool;
    let position = &mut ctx.accounts.junior_position;
    let now = Clock::get()?.unix_timestamp;

    let junior_total_principal = ctx.accounts.first_loss_pool.total_deposits;
    require!(
        junior_total_principal > 0,
        TrancheLendingError::NoInterestToClaim
    );

    let claimable = calculate_claimable_interest(
        junior_interest_pool.total_interest,
        position.principal,
        junior_total_principal,
        position.claimed_interest,
    )?;
    require!(claimable > 0, TrancheLendingError::NoInterestToClaim);

    let undistributed = junior_interest_pool
        .total_interest
        .checked_sub(junior_interest_pool.distributed_interest)
        .ok_or(TrancheLendingError::ArithmeticOverflow)?;
    require!(
        undistributed >= claimable,
        TrancheLendingError::InsufficientPoolFunds
    );
    require!(
        ctx.accounts.pool_vault.amount >= claimable,
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
    transfer_checked(cpi_ctx, claimable, ctx.accounts.asset_mint.decimals)?;

    junior_interest_pool.distributed_interest = junior_interest_pool
        .distributed_interest
        .checked_add(claimable)
        .ok_or(TrancheLendingError::ArithmeticOverflow)?;
    position.claimed_interest = position
        .claimed_interest
        .checked_add(claimable)
        .ok_or(TrancheLendingError::ArithmeticOverflow)?;

    emit!(InterestClaimed {
        asset_pool: pool_key,
        user: ctx.accounts.user.key(),
        position_id,
        amount: claimable,
        timestamp: now,
    });

    msg!(
        "Junior interest claimed: position {}, {} tokens",
        position_id,
        claimable
    );
    Ok(())
}

#[derive(Accounts)]
#[instruction(position_id: u64)]
pub struct ClaimJuniorInterest<'info> {
    #[account(
        seeds = [SEEDS_SYSTEM_CONFIG],
        bump,
        constraint = !system_config.paused @ TrancheLendingError::SystemPaused
    )]
    pub system_config: Box<Account<'info, SystemConfig>>,

    #[account(
        constraint = asset_pool.related_accounts_initialized @ TrancheLendingError::RelatedAccountsNotInitialized,
        constraint = asset_pool.asset_mint == asset_mint.key() @ TrancheLendingError::AssetNotSupported
    )]
    pub asset_pool: Box<Account<'info, AssetPool>>,

    #[account(
        seeds = [SEEDS_FIRST_LOSS_POOL, asset_pool.key().as_ref()],
        bump
    )]
    pub first_loss_pool: Box<Account<'info, FirstLossPool>>,

    #[account(
        mut,
        seeds = [SEEDS_JUNIOR_INTEREST_POOL, asset_pool.key().as_ref()],
        bump
    )]
    pub junior_interest_pool: Box<Account<'info, JuniorInterestPool>>,

    #[account(
        mut,
        seeds = [
            SEEDS_JUNIOR_POSITION,
            asset_pool.key().as_ref(),
            position_id.to_le_bytes().as_ref()
        ],
        bump,
        constraint = junior_position.owner == user.key() @ TrancheLendingError::NftNotOwnedByUser
    )]
    pub junior_position: Box<Account<'info, JuniorPosition>>,

    #[account(
        seeds = [
            SEEDS_JUNIOR_POSITION_MINT,
            asset_pool.key().as_ref(),
            position_id.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub junior_position_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        token::mint = junior_position_mint,
        token::authority = user,
        constraint = user_position_account.amount == 1 @ TrancheLendingError::NftNotOwnedByUser
    )]
    pub user_position_account: Box<InterfaceAccount<'info, TokenAccount>>,

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
