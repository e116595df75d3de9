pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod tranche_lending {
    use super::*;

    // ==================== System configuration ====================

    pub fn initialize_system_config(
        ctx: Context<InitializeSystemConfig>,
        platform_fee_rate: u16,
        senior_early_before_exit_fee_rate: u16,
        senior_early_after_exit_fee_rate: u16,
        junior_early_before_exit_fee_rate: u16,
        default_min_junior_ratio: u16,
    ) -> Result<()> {
        instructions::initialize_system_config(
            ctx,
            platform_fee_rate,
            senior_early_before_exit_fee_rate,
            senior_early_after_exit_fee_rate,
            junior_early_before_exit_fee_rate,
            default_min_junior_ratio,
        )
    }

    pub fn update_admin(
        ctx: Context<UpdateAdmin>,
        role: AdminRole,
        new_admin: Pubkey,
    ) -> Result<()> {
        instructions::update_admin(ctx, role, new_admin)
    }

    pub fn pause_system(ctx: Context<PauseSystem>) -> Result<()> {
        instructions::pause_system(ctx)
    }

    pub fn unpause_system(ctx: Context<PauseSystem>) -> Result<()> {
        instructions::unpause_system(ctx)
    }

    pub fn update_fee_rate(
        ctx: Context<UpdateFeeRate>,
        fee_type: FeeType,
        new_rate: u16,
    ) -> Result<()> {
        instructions::update_fee_rate(ctx, fee_type, new_rate)
    }

    pub fn set_treasury(ctx: Context<SetTreasury>, new_treasury: Pubkey) -> Result<()> {
        instructions::set_treasury(ctx, new_treasury)
    }

    pub fn set_asset_supported(
        ctx: Context<SetAssetSupported>,
        asset: Pubkey,
        supported: bool,
    ) -> Result<()> {
        instructions::set_asset_supported(ctx, asset, supported)
    }

    // ==================== Asset pool lifecycle ====================

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
        instructions::create_asset_pool(
            ctx,
            name,
            platform_fee,
            senior_early_before_exit_fee,
            senior_early_after_exit_fee,
            junior_early_before_exit_fee,
            min_junior_ratio,
            repayment_rate,
            senior_fixed_rate,
            repayment_period,
            repayment_count,
            total_amount,
            min_amount,
            funding_start_time,
            funding_end_time,
        )
    }

    pub fn approve_asset_pool(
        ctx: Context<ApproveAssetPool>,
        creator: Pubkey,
        name: String,
    ) -> Result<()> {
        instructions::approve_asset_pool(ctx, creator, name)
    }

    pub fn initialize_related_accounts(ctx: Context<InitializeRelatedAccounts>) -> Result<()> {
        instructions::initialize_related_accounts(ctx)
    }

    pub fn cancel_asset_pool(ctx: Context<CancelAssetPool>) -> Result<()> {
        instructions::cancel_asset_pool(ctx)
    }

    // ==================== Funding ====================

    pub fn subscribe_senior(ctx: Context<SubscribeSenior>, amount: u64) -> Result<()> {
        instructions::subscribe_senior(ctx, amount)
    }

    pub fn subscribe_junior(ctx: Context<SubscribeJunior>, amount: u64) -> Result<()> {
        instructions::subscribe_junior(ctx, amount)
    }

    pub fn withdraw_senior_subscription(
        ctx: Context<WithdrawSeniorSubscription>,
        amount: u64,
    ) -> Result<()> {
        instructions::withdraw_senior_subscription(ctx, amount)
    }

    pub fn withdraw_junior_subscription(
        ctx: Context<WithdrawJuniorSubscription>,
        amount: u64,
    ) -> Result<()> {
        instructions::withdraw_junior_subscription(ctx, amount)
    }

    pub fn complete_funding(ctx: Context<CompleteFunding>) -> Result<()> {
        instructions::complete_funding(ctx)
    }

    pub fn distribute_senior_token(ctx: Context<DistributeSeniorToken>) -> Result<()> {
        instructions::distribute_senior_token(ctx)
    }

    pub fn mint_junior_nft(ctx: Context<MintJuniorNft>, position_id: u64) -> Result<()> {
        instructions::mint_junior_nft(ctx, position_id)
    }

    pub fn process_refund(ctx: Context<ProcessRefund>) -> Result<()> {
        instructions::process_refund(ctx)
    }

    // ==================== Repayment and claims ====================

    pub fn repay(ctx: Context<Repay>, amount: u64, period: u64) -> Result<()> {
        instructions::repay(ctx, amount, period)
    }

    pub fn claim_junior_interest(
        ctx: Context<ClaimJuniorInterest>,
        position_id: u64,
    ) -> Result<()> {
        instructions::claim_junior_interest(ctx, position_id)
    }

    pub fn withdraw_principal(ctx: Context<WithdrawPrincipal>, position_id: u64) -> Result<()> {
        instructions::withdraw_principal(ctx, position_id)
    }

    pub fn early_exit_senior(ctx: Context<EarlyExitSenior>, amount: u64) -> Result<()> {
        instructions::early_exit_senior(ctx, amount)
    }
}
