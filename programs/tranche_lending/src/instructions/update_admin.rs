use crate::constants::*;
use crate::error::*;
use crate::events::AdminUpdated;
use crate::state::*;
use anchor_lang::prelude::*;

/// Every role change requires the current super admin's signature. When
/// rotating all four roles, the super admin itself must be rotated last or
/// the caller loses authority over the remaining updates.
pub fn update_admin(ctx: Context<UpdateAdmin>, role: AdminRole, new_admin: Pubkey) -> Result<()> {
    let system_config = &mut ctx.accounts.system_config;

    let old_admin = match role {
        AdminRole::Super => {
            let old = system_config.super_admin;
            system_config.super_admin = new_admin;
            old
        }
        AdminRole::System => {
            let old = system_config.system_admin;
            system_config.system_admin = new_admin;
            old
        }
        AdminRole::Treasury => {
            let old = system_config.treasury_admin;
            system_config.treasury_admin = new_admin;
            old
        }
        AdminRole::Operation => {
            let old = system_config.operation_admin;
            system_config.operation_admin = new_admin;
            old
        }
    };

    emit!(AdminUpdated {
        role: role as u8,
        old_admin,
        new_admin,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Admin updated: {} -> {}", old_admin, new_admin);
    Ok(())
}

#[derive(Accounts)]
pub struct UpdateAdmin<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [SEEDS_SYSTEM_CONFIG],
        bump,
        constraint = !system_config.paused @ TrancheLendingError::SystemPaused,
        constraint = system_config.super_admin == admin.key() @ TrancheLendingError::Unauthorized
    )]
    pub system_config: Account<'info, SystemConfig>,
}
