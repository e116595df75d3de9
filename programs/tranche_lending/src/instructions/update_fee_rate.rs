use crate::constants::*;
use crate::error::*;
use crate::events::FeeRateUpdated;
use crate::state::*;
use anchor_lang::prelude::*;

pub fn update_fee_rate(ctx: Context<UpdateFeeRate>, fee_type: FeeType, new_rate: u16) -> Result<()> {
    let system_config = &mut ctx.accounts.system_config;

    let old_rate = match fee_type {
        FeeType::Platform => {
            require!(
                new_rate <= MAX_PLATFORM_FEE,
                TrancheLendingError::InvalidPlatformFee
            );
            let old = system_config.platform_fee_rate;
            system_config.platform_fee_rate = new_rate;
            old
        }
        FeeType::SeniorEarlyBeforeExit => {
            require!(
                new_rate <= MAX_EARLY_EXIT_FEE,
                TrancheLendingError::InvalidEarlyExitFee
            );
            let old = system_config.senior_early_before_exit_fee_rate;
            system_config.senior_early_before_exit_fee_rate = new_rate;
            old
        }
        FeeType::SeniorEarlyAfterExit => {
            require!(
                new_rate <= MAX_EARLY_EXIT_FEE,
                TrancheLendingError::InvalidEarlyExitFee
            );
            let old = system_config.senior_early_after_exit_fee_rate;
            system_config.senior_early_after_exit_fee_rate = new_rate;
            old
        }
        FeeType::JuniorEarlyBeforeExit => {
            require!(
                new_rate <= MAX_EARLY_EXIT_FEE,
                TrancheLendingError::InvalidEarlyExitFee
            );
            let old = system_config.junior_early_before_exit_fee_rate;
            system_config.junior_early_before_exit_fee_rate = new_rate;
            old
        }
        FeeType::DefaultMinJuniorRatio => {
            require!(
                new_rate >= MIN_JUNIOR_RATIO && new_rate <= MAX_JUNIOR_RATIO,
                TrancheLendingError::InvalidMinJuniorRatio
            );
            let old = system_config.default_min_junior_ratio;
            system_config.default_min_junior_ratio = new_rate;
            old
        }
    };

    emit!(FeeRateUpdated {
        fee_type: fee_type as u8,
        old_rate,
        new_rate,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Fee rate updated: {} -> {}", old_rate, new_rate);
    Ok(())
}

#[derive(Accounts)]
pub struct UpdateFeeRate<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [SEEDS_SYSTEM_CONFIG],
        bump,
        constraint = !system_config.paused @ TrancheLendingError::SystemPaused,
        constraint = system_config.system_admin == admin.key() @ TrancheLendingError::Unauthorized
    )]
    pub system_config: Account<'info, SystemConfig>,
}
