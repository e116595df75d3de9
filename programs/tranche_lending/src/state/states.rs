use anchor_lang::prelude::*;

use crate::constants::{MAX_POOL_NAME_LEN, MAX_WHITELISTED_ASSETS};

#[account]
#[derive(InitSpace)]
pub struct SystemConfig {
    pub super_admin: Pubkey,
    pub system_admin: Pubkey,
    pub treasury_admin: Pubkey,
    pub operation_admin: Pubkey,
    pub treasury: Pubkey,
    pub platform_fee_rate: u16, // basis points
    pub senior_early_before_exit_fee_rate: u16,
    pub senior_early_after_exit_fee_rate: u16,
    pub junior_early_before_exit_fee_rate: u16,
    pub default_min_junior_ratio: u16,
    pub initialized: bool,
    pub paused: bool,
}

#[account]
#[derive(InitSpace)]
pub struct AssetWhitelist {
    #[max_len(MAX_WHITELISTED_ASSETS)]
    pub assets: Vec<Pubkey>,
}

impl AssetWhitelist {
    pub fn contains(&self, asset: &Pubkey) -> bool {
        self.assets.contains(asset)
    }
}

#[account]
#[derive(InitSpace)]
pub struct AssetPool {
    #[max_len(MAX_POOL_NAME_LEN)]
    pub name: String,
    pub status: PoolStatus,
    pub asset_mint: Pubkey,
    pub creator: Pubkey,
    // linked sub-accounts, wired by initialize_related_accounts
    pub senior_pool: Pubkey,
    pub first_loss_pool: Pubkey,
    pub junior_interest_pool: Pubkey,
    pub senior_receipt_mint: Pubkey,
    pub junior_position_base_mint: Pubkey,
    pub vault: Pubkey,
    pub first_loss_vault: Pubkey,
    pub treasury_ata: Pubkey,
    // fee and rate parameters, fixed at creation
    pub platform_fee: u16, // basis points
    pub senior_early_before_exit_fee: u16,
    pub senior_early_after_exit_fee: u16,
    pub junior_early_before_exit_fee: u16,
    pub min_junior_ratio: u16,
    pub repayment_rate: u16,    // per-period, basis points
    pub senior_fixed_rate: u16, // per-period, basis points
    pub repayment_period: u64,  // seconds
    pub repayment_count: u64,
    // funding configuration
    pub total_amount: u64,
    pub min_amount: u64,
    pub funding_start_time: i64,
    pub funding_end_time: i64,
    // running totals
    pub senior_amount: u64,
    pub junior_amount: u64,
    pub repaid_amount: u64,
    pub related_accounts_initialized: bool,
    pub created_at: i64,
}

#[derive(InitSpace, AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum PoolStatus {
    Created,
    Approved,
    Funded,
    Repaying,
    Ended,
    Cancelled,
}

#[derive(InitSpace, AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tranche {
    Senior,
    Junior,
}

#[account]
#[derive(InitSpace)]
pub struct Subscription {
    pub asset_pool: Pubkey,
    pub user: Pubkey,
    pub tranche: Tranche,
    pub amount: u64,
    pub status: SubscriptionStatus,
    pub subscribed_at: i64,
}

#[derive(InitSpace, AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubscriptionStatus {
    Active,
    Issued,
    Withdrawn,
    Refunded,
}

#[account]
#[derive(InitSpace)]
pub struct SeniorPool {
    pub asset_pool: Pubkey,
    pub senior_receipt_mint: Pubkey,
    pub total_deposits: u64,
    pub repaid_amount: u64,
}

#[account]
#[derive(InitSpace)]
pub struct FirstLossPool {
    pub asset_pool: Pubkey,
    pub total_deposits: u64,
    pub repaid_amount: u64,
}

#[account]
#[derive(InitSpace)]
pub struct JuniorInterestPool {
    pub asset_pool: Pubkey,
    pub total_interest: u64,
    pub distributed_interest: u64,
}

#[account]
#[derive(InitSpace)]
pub struct RepaymentRecord {
    pub asset_pool: Pubkey,
    pub period: u64,
    pub amount: u64,
    pub repaid_at: i64,
    pub status: RepaymentStatus,
}

#[derive(InitSpace, AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum RepaymentStatus {
    Pending,
    Completed,
}

/// One certificate per junior allocation. Principal never changes after
/// issuance; claimed interest only grows; the principal flag flips once.
#[account]
#[derive(InitSpace)]
pub struct JuniorPosition {
    pub position_id: u64,
    pub asset_pool: Pubkey,
    pub owner: Pubkey,
    pub principal: u64,
    pub claimed_interest: u64,
    pub principal_withdrawn: bool,
    pub created_at: i64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum AdminRole {
    Super,
    System,
    Treasury,
    Operation,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum FeeType {
    Platform,
    SeniorEarlyBeforeExit,
    SeniorEarlyAfterExit,
    JuniorEarlyBeforeExit,
    DefaultMinJuniorRatio,
}
