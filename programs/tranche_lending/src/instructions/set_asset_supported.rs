use crate::constants::*;
use crate::error::*;
use crate::events::AssetSupportUpdated;
use crate::state::*;
use anchor_lang::prelude::*;

pub fn set_asset_supported(
    ctx: Context<SetAssetSupported>,
    asset: Pubkey,
    supported: bool,
) -> Result<()> {
    let asset_whitelist = &mut ctx.accounts.asset_whitelist;

    if supported {
        if !asset_whitelist.assets.contains(&asset) {
            require!(
                asset_whitelist.assets.len() < MAX_WHITELISTED_ASSETS,
                TrancheLendingError::WhitelistFull
            );
            asset_whitelist.assets.push(asset);
        }
    } else {
        asset_whitelist.assets.retain(|a| a != &asset);
    }

    emit!(AssetSupportUpdated {
        asset,
        supported,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Asset {} supported: {}", asset, supported);
    Ok(())
}

#[derive(Accounts)]
pub struct SetAssetSupported<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [SEEDS_SYSTEM_CONFIG],
        bump,
        constraint = !system_config.paused @ TrancheLendingError::SystemPaused,
        constraint = system_config.operation_admin == admin.key() @ TrancheLendingError::Unauthorized
    )]
    pub system_config: Account<'info, SystemConfig>,

    #[account(
        mut,
        seeds = [SEEDS_ASSET_WHITELIST],
        bump
    )]
    pub asset_whitelist: Account<'info, AssetWhitelist>,
}
