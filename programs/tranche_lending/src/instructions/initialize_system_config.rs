use crate::constants::*;
use crate::instructions::utils::validate_fee_rates;
use crate::state::*;
use anchor_lang::prelude::*;

pub fn initialize_system_config(
    ctx: Context<InitializeSystemConfig>,
    platform_fee_rate: u16,
    senior_early_before_exit_fee_rate: u16,
    senior_early_after_exit_fee_rate: u16,
    junior_early_before_exit_fee_rate: u16,
    default_min_junior_ratio: u16,
) -> Result<()> {
    validate_fee_rates(
        platform_fee_rate,
        senior_early_before_exit_fee_rate,
        senior_early_after_exit_fee_rate,
        junior_early_before_exit_fee_rate,
        default_min_junior_ratio,
    )?;

    let system_config = &mut ctx.accounts.system_config;

    // All roles start with the payer; update_admin rotates them afterwards.
    system_config.super_admin = ctx.accounts.payer.key();
    system_config.system_admin = ctx.accounts.payer.key();
    system_config.treasury_admin = ctx.accounts.payer.key();
    system_config.operation_admin = ctx.accounts.payer.key();
    system_config.treasury = ctx.accounts.treasury.key();
    system_config.platform_fee_rate = platform_fee_rate;
    system_config.senior_early_before_exit_fee_rate = senior_early_before_exit_fee_rate;
    system_config.senior_early_after_exit_fee_rate = senior_early_after_exit_fee_rate;
    system_config.junior_early_before_exit_fee_rate = junior_early_before_exit_fee_rate;
    system_config.default_min_junior_ratio = default_min_junior_ratio;
    system_config.initialized = true;
    system_config.paused = false;

    ctx.accounts.asset_whitelist.assets = Vec::new();

    msg!(
        "System config initialized, treasury: {}",
        system_config.treasury
    );
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeSystemConfig<'info> {
    #[account(
        init,
        payer = payer,
        space = 8 + SystemConfig::INIT_SPACE,
        seeds = [SEEDS_SYSTEM_CONFIG],
        bump
    )]
    pub system_config: Account<'info, SystemConfig>,

    #[account(
        init,
        payer = payer,
        space = 8 + AssetWhitelist::INIT_SPACE,
        seeds = [SEEDS_ASSET_WHITELIST],
        bump
    )]
    pub asset_whitelist: Account<'info, AssetWhitelist>,

    /// CHECK: destination wallet for platform fees, recorded as-is
    pub treasury: UncheckedAccount<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}
