use crate::constants::*;
use crate::error::*;
use crate::events::TreasuryUpdated;
use crate::state::*;
use anchor_lang::prelude::*;

/// Repoints the platform fee destination. Pools created earlier keep the
/// treasury ATA they were wired to.
pub fn set_treasury(ctx: Context<SetTreasury>, new_treasury: Pubkey) -> Result<()> {
    let system_config = &mut ctx.accounts.system_config;
    let old_treasury = system_config.treasury;

    system_config.treasury = new_treasury;

    emit!(TreasuryUpdated {
        old_treasury,
        new_treasury,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Treasury updated: {} -> {}", old_treasury, new_treasury);
    Ok(())
}

#[derive(Accounts)]
pub struct SetTreasury<'info> {
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
