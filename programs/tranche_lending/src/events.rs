use anchor_lang::prelude::*;

#[event]
pub struct AdminUpdated {
    pub role: u8,
    pub old_admin: Pubkey,
    pub new_admin: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct SystemPaused {
    pub timestamp: i64,
}

#[event]
pub struct SystemUnpaused {
    pub timestamp: i64,
}

#[event]
pub struct FeeRateUpdated {
    pub fee_type: u8,
    pub old_rate: u16,
    pub new_rate: u16,
    pub timestamp: i64,
}

#[event]
pub struct TreasuryUpdated {
    pub old_treasury: Pubkey,
    pub new_treasury: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct AssetSupportUpdated {
    pub asset: Pubkey,
    pub supported: bool,
    pub timestamp: i64,
}

#[event]
pub struct RelatedAccountsInitialized {
    pub asset_pool: Pubkey,
    pub senior_pool: Pubkey,
    pub first_loss_pool: Pubkey,
    pub junior_interest_pool: Pubkey,
    pub senior_receipt_mint: Pubkey,
    pub vault: Pubkey,
    pub first_loss_vault: Pubkey,
    pub treasury_ata: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct FundingCompleted {
    pub asset_pool: Pubkey,
    pub senior_amount: u64,
    pub junior_amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct RefundProcessed {
    pub asset_pool: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
    pub tranche: u8,
    pub timestamp: i64,
}

#[event]
pub struct RepaymentDistributed {
    pub asset_pool: Pubkey,
    pub period: u64,
    pub total_amount: u64,
    pub platform_fee: u64,
    pub senior_amount: u64,
    pub junior_interest: u64,
    pub timestamp: i64,
}

#[event]
pub struct EarlyExitProcessed {
    pub asset_pool: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
    pub fee: u64,
    pub net_amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct InterestClaimed {
    pub asset_pool: Pubkey,
    pub user: Pubkey,
    pub position_id: u64,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct PrincipalWithdrawn {
    pub asset_pool: Pubkey,
    pub user: Pubkey,
    pub position_id: u64,
    pub amount: u64,
    pub timestamp: i64,
}
