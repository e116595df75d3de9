use crate::constants::*;
use crate::error::*;
use crate::events::{SystemPaused, SystemUnpaused};
use crate::state::*;
use anchor_lang::prelude::*;

pub fn pause_system(ctx: Context<PauseSystem>) -> Result<()> {
    let system_config = &mut ctx.accounts.system_config;
    require!(!system_config.paused, TrancheLendingError::SystemPaused);

    system_config.paused = true;

    emit!(SystemPaused {
        timestamp: Clock::get()?.unix_timestamp,
    });
    msg!("System paused");
    Ok(())
}

/// The one mutating operation that must work while paused.
pub fn unpause_system(ctx: Context<PauseSystem>) -> Result<()> {
    let system_config = &mut ctx.accounts.system_config;
    system_config.paused = false;

    emit!(SystemUnpaused {
        timestamp: Clock::get()?.unix_timestamp,
    });
    msg!("System unpaused");
    Ok(())
}

#[derive(Accounts)]
pub struct PauseSystem<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [SEEDS_SYSTEM_CONFIG],
        bump,
        constraint = system_config.super_admin == admin.key() @ TrancheLendingError::Unauthorized
    )]
    pub system_config: Account<'info, SystemConfig>,
}
