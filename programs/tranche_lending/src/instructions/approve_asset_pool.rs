use crate::constants::*;
use crate::error::*;
use crate::state::*;
use anchor_lang::prelude::*;

pub fn approve_asset_pool(
    ctx: Context<ApproveAssetPool>,
    _creator: Pubkey,
    _name: String,
) -> Result<()> {
    let asset_pool = &mut ctx.accounts.asset_pool;

    require!(
        asset_pool.status == PoolStatus::Created,
        TrancheLendingError::AssetPoolAlreadyApproved
    );

    asset_pool.status = PoolStatus::Approved;

    msg!("Asset pool approved: {}", asset_pool.name);
    Ok(())
}

#[derive(Accounts)]
#[instruction(creator: Pubkey, name: String)]
pub struct ApproveAssetPool<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [SEEDS_SYSTEM_CONFIG],
        bump,
        constraint = !system_config.paused @ TrancheLendingError::SystemPaused,
        constraint = system_config.operation_admin == admin.key()
            || system_config.super_admin == admin.key() @ TrancheLendingError::Unauthorized
    )]
    pub system_config: Account<'info, SystemConfig>,

    #[account(
        mut,
        seeds = [SEEDS_ASSET_POOL, creator.as_ref(), name.as_bytes()],
        bump
    )]
    pub asset_pool: Account<'info, AssetPool>,
}
