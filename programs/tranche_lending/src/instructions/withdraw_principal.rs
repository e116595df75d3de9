use crate::constants::*;
use crate::error::*;
use crate::events::PrincipalWithdrawn;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

/// One-time junior principal return after the pool has ended, paid from
/// the first-loss backing vault. The certificate's flag is the
/// double-withdrawal guard.
pub fn withdraw_principal(ctx: Context<WithdrawPrincipal>, position_id: u64) -> Result<()> {
    let position = &mut ctx.accounts.junior_position;
    let now = Clock::get()?.unix_timestamp;

    require!(
        !position.principal_withdrawn,
        TrancheLendingError::PrincipalAlreadyWithdrawn
    );
    require!(
        position.principal > 0,
        TrancheLendingError::NoPrincipalToWithdraw
    );
    // Whatever first-loss capital was absorbed during repayment is gone;
    // the remaining backing must cover this certificate in full.
    require!(
        ctx.accounts.first_loss_vault.amount >= position.principal,
        TrancheLendingError::InsufficientVaultBalance
    );

    let pool_key = ctx.accounts.asset_pool.key();
    let signer_seeds: &[&[&[u8]]] = &[&[
        SEEDS_FIRST_LOSS_VAULT,
        pool_key.as_ref(),
        &[ctx.bumps.first_loss_vault],
    ]];

    let transfer_cpi_accounts = TransferChecked {
        from: ctx.accounts.first_loss_vault.to_account_info(),
        to: ctx.accounts.user_token_account.to_account_info(),
        mint: ctx.accounts.asset_mint.to_account_info(),
        authority: ctx.accounts.first_loss_vault.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        transfer_cpi_accounts,
        signer_seeds,
    );
    transfer_checked(
        cpi_ctx,
        position.principal,
        ctx.accounts.asset_mint.decimals,
    )?;

    let first_loss_pool = &mut ctx.accounts.first_loss_pool;
    first_loss_pool.repaid_amount = first_loss_pool
        .repaid_amount
        .checked_add(position.principal)
        .ok_or(TrancheLendingError::ArithmeticOverflow)?;

    position.principal_withdrawn = true;

    emit!(PrincipalWithdrawn {
        asset_pool: pool_key,
        user: ctx.accounts.user.key(),
        position_id,
        amount: position.principal,
        timestamp: now,
    });

    msg!(
        "Junior principal withdrawn: position {}, {} tokens",
        position_id,
        position.principal
    );
    Ok(())
}

#[derive(Accounts)]
#[instruction(position_id: u64)]
pub struct WithdrawPrincipal<'info> {
    #[account(
        seeds = [SEEDS_SYSTEM_CONFIG],
        bump,
        constraint = !system_config.paused @ TrancheLendingError::SystemPaused
    )]
    pub system_config: Box<Account<'info, SystemConfig>>,

    #[account(
        constraint = asset_pool.status == PoolStatus::Ended @ TrancheLendingError::InvalidAssetPoolStatus,
        constraint = asset_pool.asset_mint == asset_mint.key() @ TrancheLendingError::AssetNotSupported
    )]
    pub asset_pool: Box<Account<'info, AssetPool>>,

    #[account(
        mut,
        seeds = [SEEDS_FIRST_LOSS_POOL, asset_pool.key().as_ref()],
        bump
    )]
    pub first_loss_pool: Box<Account<'info, FirstLossPool>>,

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
        seeds = [SEEDS_FIRST_LOSS_VAULT, asset_pool.key().as_ref()],
        bump,
        constraint = first_loss_vault.key() == asset_pool.first_loss_vault
    )]
    pub first_loss_vault: Box<InterfaceAccount<'info, TokenAccount>>,

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
