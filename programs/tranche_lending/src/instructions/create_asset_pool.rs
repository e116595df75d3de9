use crate::constants::*;
use crate::error::*;
use crate::instructions::utils::validate_fee_rates;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::Mint;

#[allow(clippy::too_many_arguments)]
pub fn create_asset_pool(
    ctx: Context<CreateAssetPool>,
    name: String,
    platform_fee: u16,
    senior_early_before_exit_fee: u16,
    senior_early_after_exit_fee: u16,
    junior_early_before_exit_fee: u16,
    min_junior_ratio: u16,
    repayment_rate: u16,
    senior_fixed_rate: u16,
    repayment_period: u64,
    repayment_count: u64,
    total_amount: u64,
    min_amount: u64,
    funding_start_time: i64,
    funding_end_time: i64,
) -> Result<()> {
    require!(
        ctx.accounts
            .asset_whitelist
            .contains(&ctx.accounts.asset_mint.key()),
        TrancheLendingError::AssetNotSupported
    );

    require!(
        !name.is_empty() && name.len() <= MAX_POOL_NAME_LEN,
        TrancheLendingError::InvalidStringLength
    );
    validate_fee_rates(
        platform_fee,
        senior_early_before_exit_fee,
        senior_early_after_exit_fee,
        junior_early_before_exit_fee,
        min_junior_ratio,
    )?;
    require!(
        repayment_rate > 0 && repayment_rate <= MAX_PERIOD_RATE,
        TrancheLendingError::InvalidRepaymentRate
    );
    require!(
        senior_fixed_rate > 0 && senior_fixed_rate <= MAX_PERIOD_RATE,
        TrancheLendingError::InvalidSeniorFixedRate
    );
    require!(
        repayment_period >= MIN_REPAYMENT_PERIOD && repayment_period <= MAX_REPAYMENT_PERIOD,
        TrancheLendingError::InvalidRepaymentPeriod
    );
    require!(
        repayment_count > 0 && repayment_count <= MAX_REPAYMENT_COUNT,
        TrancheLendingError::InvalidRepaymentCount
    );
    require!(total_amount > 0, TrancheLendingError::InvalidFundingParams);
    require!(
        min_amount > 0 && min_amount <= total_amount,
        TrancheLendingError::InvalidFundingParams
    );
    require!(
        funding_start_time > 0 && funding_end_time > funding_start_time,
        TrancheLendingError::InvalidTimeParameters
    );
    let funding_window = funding_end_time - funding_start_time;
    require!(
        (MIN_FUNDING_PERIOD..=MAX_FUNDING_PERIOD).contains(&funding_window),
        TrancheLendingError::InvalidTimeParameters
    );

    let asset_pool = &mut ctx.accounts.asset_pool;
    asset_pool.name = name;
    asset_pool.status = PoolStatus::Created;
    asset_pool.asset_mint = ctx.accounts.asset_mint.key();
    asset_pool.creator = ctx.accounts.creator.key();
    asset_pool.platform_fee = platform_fee;
    asset_pool.senior_early_before_exit_fee = senior_early_before_exit_fee;
    asset_pool.senior_early_after_exit_fee = senior_early_after_exit_fee;
    asset_pool.junior_early_before_exit_fee = junior_early_before_exit_fee;
    asset_pool.min_junior_ratio = min_junior_ratio;
    asset_pool.repayment_rate = repayment_rate;
    asset_pool.senior_fixed_rate = senior_fixed_rate;
    asset_pool.repayment_period = repayment_period;
    asset_pool.repayment_count = repayment_count;
    asset_pool.total_amount = total_amount;
    asset_pool.min_amount = min_amount;
    asset_pool.funding_start_time = funding_start_time;
    asset_pool.funding_end_time = funding_end_time;
    asset_pool.senior_amount = 0;
    asset_pool.junior_amount = 0;
    asset_pool.repaid_amount = 0;
    asset_pool.related_accounts_initialized = false;
    asset_pool.created_at = Clock::get()?.unix_timestamp;

    msg!(
        "Asset pool created: {} (target {}, minimum {})",
        asset_pool.name,
        total_amount,
        min_amount
    );
    Ok(())
}

#[derive(Accounts)]
#[instruction(name: String)]
pub struct CreateAssetPool<'info> {
    #[account(
        seeds = [SEEDS_SYSTEM_CONFIG],
        bump,
        constraint = !system_config.paused @ TrancheLendingError::SystemPaused
    )]
    pub system_config: Account<'info, SystemConfig>,

    #[account(
        seeds = [SEEDS_ASSET_WHITELIST],
        bump
    )]
    pub asset_whitelist: Account<'info, AssetWhitelist>,

    #[account(
        init,
        payer = creator,
        space = 8 + AssetPool::INIT_SPACE,
        seeds = [SEEDS_ASSET_POOL, creator.key().as_ref(), name.as_bytes()],
        bump
    )]
    pub asset_pool: Account<'info, AssetPool>,

    pub asset_mint: InterfaceAccount<'info, Mint>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
}
