use crate::constants::*;
use crate::error::*;
use crate::events::RepaymentDistributed;
use crate::instructions::utils::{
    calculate_current_period, calculate_per_period_amount, calculate_repayment_split,
    calculate_senior_entitlement,
};
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

/// Per-period waterfall: platform fee off the top, then the senior fixed
/// entitlement (first-loss capital absorbs any shortfall), and whatever
/// remains of the net accrues as junior interest. Funds stay in the pool
/// vault; the tranche ledgers record who they belong to.
pub fn repay(ctx: Context<Repay>, amount: u64, period: u64) -> Result<()> {
    require!(amount > 0, TrancheLendingError::InvalidRepaymentAmount);

    let now = Clock::get()?.unix_timestamp;
    let asset_pool = &mut ctx.accounts.asset_pool;

    require!(
        period > 0 && period <= asset_pool.repayment_count,
        TrancheLendingError::InvalidRepaymentPeriod
    );
    let due_period = calculate_current_period(
        asset_pool.funding_end_time,
        asset_pool.repayment_period,
        now,
    )?;
    require!(period <= due_period, TrancheLendingError::RepaymentNotDue);

    // One record per period; a completed record blocks the retry.
    let repayment_record = &mut ctx.accounts.repayment_record;
    require!(
        repayment_record.status != RepaymentStatus::Completed,
        TrancheLendingError::RepaymentAlreadyCompleted
    );

    let per_period_total = calculate_per_period_amount(
        asset_pool.total_amount,
        asset_pool.repayment_count,
        asset_pool.repayment_rate,
    )?;
    require!(
        amount >= per_period_total,
        TrancheLendingError::InvalidRepaymentAmount
    );

    let decimals = ctx.accounts.asset_mint.decimals;

    let deposit_cpi_accounts = TransferChecked {
        from: ctx.accounts.payer_token_account.to_account_info(),
        to: ctx.accounts.pool_vault.to_account_info(),
        mint: ctx.accounts.asset_mint.to_account_info(),
        authority: ctx.accounts.payer.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        deposit_cpi_accounts,
    );
    transfer_checked(cpi_ctx, amount, decimals)?;
    ctx.accounts.pool_vault.reload()?;

    let senior_entitlement = calculate_senior_entitlement(
        asset_pool.senior_amount,
        asset_pool.repayment_count,
        asset_pool.senior_fixed_rate,
    )?;

    let first_loss_available = ctx
        .accounts
        .first_loss_pool
        .total_deposits
        .checked_sub(ctx.accounts.first_loss_pool.repaid_amount)
        .ok_or(TrancheLendingError::ArithmeticOverflow)?
        .min(ctx.accounts.first_loss_vault.amount);

    let split = calculate_repayment_split(
        amount,
        asset_pool.platform_fee,
        senior_entitlement,
        ctx.accounts.pool_vault.amount,
        first_loss_available,
    )?;
    let platform_fee = split.platform_fee;
    let actual_senior_amount = split.senior_amount;
    let first_loss_used = split.first_loss_used;
    let junior_interest = split.junior_interest;

    let pool_key = asset_pool.key();
    let signer_seeds: &[&[&[u8]]] = &[&[
        SEEDS_POOL_VAULT,
        pool_key.as_ref(),
        &[ctx.bumps.pool_vault],
    ]];

    if platform_fee > 0 {
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
        transfer_checked(cpi_ctx, platform_fee, decimals)?;
    }

    if first_loss_used > 0 {
        msg!("First-loss covers senior shortfall: {} tokens", first_loss_used);
        // pull the absorbed capital out of the first-loss backing vault
        let fl_signer_seeds: &[&[&[u8]]] = &[&[
            SEEDS_FIRST_LOSS_VAULT,
            pool_key.as_ref(),
            &[ctx.bumps.first_loss_vault],
        ]];
        let absorb_cpi_accounts = TransferChecked {
            from: ctx.accounts.first_loss_vault.to_account_info(),
            to: ctx.accounts.pool_vault.to_account_info(),
            mint: ctx.accounts.asset_mint.to_account_info(),
            authority: ctx.accounts.first_loss_vault.to_account_info(),
        };
        let cpi_ctx = CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            absorb_cpi_accounts,
            fl_signer_seeds,
        );
        transfer_checked(cpi_ctx, first_loss_used, decimals)?;
    }

    let senior_pool = &mut ctx.accounts.senior_pool;
    senior_pool.repaid_amount = senior_pool
        .repaid_amount
        .checked_add(actual_senior_amount)
        .ok_or(TrancheLendingError::ArithmeticOverflow)?;

    if first_loss_used > 0 {
        let first_loss_pool = &mut ctx.accounts.first_loss_pool;
        first_loss_pool.repaid_amount = first_loss_pool
            .repaid_amount
            .checked_add(first_loss_used)
            .ok_or(TrancheLendingError::ArithmeticOverflow)?;
    }

    if junior_interest > 0 {
        let junior_interest_pool = &mut ctx.accounts.junior_interest_pool;
        junior_interest_pool.total_interest = junior_interest_pool
            .total_interest
            .checked_add(junior_interest)
            .ok_or(TrancheLendingError::ArithmeticOverflow)?;
    }

    repayment_record.asset_pool = pool_key;
    repayment_record.period = period;
    repayment_record.amount = amount;
    repayment_record.repaid_at = now;
    repayment_record.status = RepaymentStatus::Completed;

    asset_pool.repaid_amount = asset_pool
        .repaid_amount
        .checked_add(amount)
        .ok_or(TrancheLendingError::ArithmeticOverflow)?;

    if asset_pool.status == PoolStatus::Funded {
        asset_pool.status = PoolStatus::Repaying;
    }
    if period == asset_pool.repayment_count {
        asset_pool.status = PoolStatus::Ended;
        msg!("Final period repaid, pool ended");
    }

    emit!(RepaymentDistributed {
        asset_pool: pool_key,
        period,
        total_amount: amount,
        platform_fee,
        senior_amount: actual_senior_amount,
        junior_interest,
        timestamp: now,
    });

    msg!(
        "Repayment distributed: period {}, total {}, fee {}, senior {}, junior interest {}",
        period,
        amount,
        platform_fee,
        actual_senior_amount,
        junior_interest
    );
    Ok(())
}

#[derive(Accounts)]
#[instruction(amount: u64, period: u64)]
pub struct Repay<'info> {
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
        constraint = asset_pool.status == PoolStatus::Funded
            || asset_pool.status == PoolStatus::Repaying @ TrancheLendingError::InvalidAssetPoolStatus,
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
        seeds = [SEEDS_JUNIOR_INTEREST_POOL, asset_pool.key().as_ref()],
        bump
    )]
    pub junior_interest_pool: Box<Account<'info, JuniorInterestPool>>,

    #[account(
        mut,
        token::mint = asset_mint,
        token::authority = payer
    )]
    pub payer_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

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
        constraint = treasury_ata.key() == asset_pool.treasury_ata
    )]
    pub treasury_ata: Box<InterfaceAccount<'info, TokenAccount>>,

    pub asset_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + RepaymentRecord::INIT_SPACE,
        seeds = [
            SEEDS_REPAYMENT_RECORD,
            asset_pool.key().as_ref(),
            period.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub repayment_record: Box<Account<'info, RepaymentRecord>>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}
