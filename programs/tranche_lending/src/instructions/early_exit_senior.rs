use crate::constants::*;
use crate::error::*;
use crate::events::EarlyExitProcessed;
use crate::instructions::utils::calculate_fee;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    burn, transfer_checked, Burn, Mint, TokenAccount, TokenInterface, TransferChecked,
};

/// Redeems senior receipts for principal, early or at term. The fee tier
/// follows the clock: the before-exit rate while the funding window is
/// open, the after-exit rate from then on, which also prices end-of-term
/// redemption. First-loss capital absorbs any vault shortfall.
pub fn early_exit_senior(ctx: Context<EarlyExitSenior>, amount: u64) -> Result<()> {
    require!(amount > 0, TrancheLendingError::InvalidEarlyExitAmount);
    require!(
        ctx.accounts.user_receipt_account.amount >= amount,
        TrancheLendingError::InsufficientBalance
    );

    let asset_pool = &ctx.accounts.asset_pool;
    let now = Clock::get()?.unix_timestamp;

    let fee_rate = if now < asset_pool.funding_end_time {
        asset_pool.senior_early_before_exit_fee
    } else {
        asset_pool.senior_early_after_exit_fee
    };
    let exit_fee = calculate_fee(amount, fee_rate)?;
    let net_refund = amount
        .checked_sub(exit_fee)
        .ok_or(TrancheLendingError::ArithmeticOverflow)?;

    let burn_cpi_accounts = Burn {
        mint: ctx.accounts.senior_receipt_mint.to_account_info(),
        from: ctx.accounts.user_receipt_account.to_account_info(),
        authority: ctx.accounts.user.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        burn_cpi_accounts,
    );
    burn(cpi_ctx, amount)?;

    let pool_key = asset_pool.key();
    let vault_signer_seeds: &[&[&[u8]]] = &[&[
        SEEDS_POOL_VAULT,
        pool_key.as_ref(),
        &[ctx.bumps.pool_vault],
    ]];
    let decimals = ctx.accounts.asset_mint.decimals;

    if exit_fee > 0 {
        let fee_cpi_accounts = TransferChecked {
            from: ctx.accounts.pool_vault.to_account_info(),
            to: ctx.accounts.treasury_ata.to_account_info(),
            mint: ctx.accounts.asset_mint.to_account_info(),
            authority: ctx.accounts.pool_vault.to_account_info(),
        };
        let cpi_ctx = CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            fee_cpi_accounts,
            vault_signer_seeds,
        );
        transfer_checked(cpi_ctx, exit_fee, decimals)?;
    }

    let vault_available = ctx
        .accounts
        .pool_vault
        .amount
        .checked_sub(exit_fee)
        .ok_or(TrancheLendingError::ArithmeticOverflow)?;

    let mut vault_payout = net_refund;
    let mut first_loss_used = 0u64;
    if vault_available < net_refund {
        let shortfall = net_refund
            .checked_sub(vault_available)
            .ok_or(TrancheLendingError::ArithmeticOverflow)?;

        let first_loss_pool = &ctx.accounts.first_loss_pool;
        let first_loss_available = first_loss_pool
            .total_deposits
            .checked_sub(first_loss_pool.repaid_amount)
            .ok_or(TrancheLendingError::ArithmeticOverflow)?
            .min(ctx.accounts.first_loss_vault.amount);

        first_loss_used = shortfall.min(first_loss_available);
        vault_payout = vault_available;
        if first_loss_used < shortfall {
            msg!(
                "Funds short, refunding {} of {}",
                vault_payout + first_loss_used,
                net_refund
            );
        } else {
            msg!("First-loss covers exit shortfall: {} tokens", first_loss_used);
        }
    }

    if vault_payout > 0 {
        let refund_cpi_accounts = TransferChecked {
            from: ctx.accounts.pool_vault.to_account_info(),
            to: ctx.accounts.user_token_account.to_account_info(),
            mint: ctx.accounts.asset_mint.to_account_info(),
            authority: ctx.accounts.pool_vault.to_account_info(),
        };
        let cpi_ctx = CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            refund_cpi_accounts,
            vault_signer_seeds,
        );
        transfer_checked(cpi_ctx, vault_payout, decimals)?;
    }

    if first_loss_used > 0 {
        let fl_signer_seeds: &[&[&[u8]]] = &[&[
            SEEDS_FIRST_LOSS_VAULT,
            pool_key.as_ref(),
            &[ctx.bumps.first_loss_vault],
        ]];
        let absorb_cpi_accounts = TransferChecked {
            from: ctx.accounts.first_loss_vault.to_account_info(),
            to: ctx.accounts.user_token_account.to_account_info(),
            mint: ctx.accounts.asset_mint.to_account_info(),
            authority: ctx.accounts.first_loss_vault.to_account_info(),
        };
        let cpi_ctx = CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            absorb_cpi_accounts,
            fl_signer_seeds,
        );
        transfer_checked(cpi_ctx, first_loss_used, decimals)?;

        let first_loss_pool = &mut ctx.accounts.first_loss_pool;
        first_loss_pool.repaid_amount = first_loss_pool
            .repaid_amount
            .checked_add(first_loss_used)
            .ok_or(TrancheLendingError::ArithmeticOverflow)?;
    }

    let actual_refund = vault_payout
        .checked_add(first_loss_used)
        .ok_or(TrancheLendingError::ArithmeticOverflow)?;

    let senior_pool = &mut ctx.accounts.senior_pool;
    senior_pool.total_deposits = senior_pool
        .total_deposits
        .checked_sub(amount)
        .ok_or(TrancheLendingError::ArithmeticOverflow)?;

    emit!(EarlyExitProcessed {
        asset_pool: pool_key,
        user: ctx.accounts.user.key(),
        amount,
        fee: exit_fee,
        net_amount: actual_refund,
        timestamp: now,
    });

    msg!(
        "Senior exit: {} receipts burned, fee {}, refunded {}",
        amount,
        exit_fee,
        actual_refund
    );
    Ok(())
}

#[derive(Accounts)]
pub struct EarlyExitSenior<'info> {
    #[account(
        seeds = [SEEDS_SYSTEM_CONFIG],
        bump,
        constraint = !system_config.paused @ TrancheLendingError::SystemPaused
    )]
    pub system_config: Box<Account<'info, SystemConfig>>,

    #[account(
        constraint = asset_pool.status == PoolStatus::Funded
            || asset_pool.status == PoolStatus::Repaying
            || asset_pool.status == PoolStatus::Ended @ TrancheLendingError::InvalidAssetPoolStatus,
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

    #[account(
        mut,
        seeds = [SEEDS_SENIOR_RECEIPT_MINT, asset_pool.key().as_ref()],
        bump,
        constraint = senior_receipt_mint.key() == asset_pool.senior_receipt_mint
    )]
    pub senior_receipt_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        token::mint = senior_receipt_mint,
        token::authority = user
    )]
    pub user_receipt_account: Box<InterfaceAccount<'info, TokenAccount>>,

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
