use anchor_lang::prelude::*;

#[error_code]
pub enum TrancheLendingError {
    #[msg("Invalid system configuration")]
    InvalidSystemConfig,
    #[msg("Invalid fee type")]
    InvalidFeeType,
    #[msg("Invalid admin role")]
    InvalidAdminRole,
    #[msg("Platform fee exceeds the allowed maximum")]
    InvalidPlatformFee,
    #[msg("Early exit fee exceeds the allowed maximum")]
    InvalidEarlyExitFee,
    #[msg("Minimum junior ratio is out of bounds")]
    InvalidMinJuniorRatio,
    #[msg("Senior fixed rate is out of bounds")]
    InvalidSeniorFixedRate,
    #[msg("Repayment rate is out of bounds")]
    InvalidRepaymentRate,
    #[msg("Pool name is empty or too long")]
    InvalidStringLength,
    #[msg("Asset whitelist is full")]
    WhitelistFull,
    #[msg("Invalid funding parameters")]
    InvalidFundingParams,
    #[msg("Invalid time parameters")]
    InvalidTimeParameters,
    #[msg("Invalid subscription amount")]
    InvalidSubscriptionAmount,
    #[msg("Invalid repayment amount")]
    InvalidRepaymentAmount,
    #[msg("Invalid repayment period")]
    InvalidRepaymentPeriod,
    #[msg("Invalid repayment count")]
    InvalidRepaymentCount,
    #[msg("Invalid early exit amount")]
    InvalidEarlyExitAmount,
    #[msg("Invalid refund amount")]
    InvalidRefundAmount,
    #[msg("Funding has not started")]
    FundingNotStarted,
    #[msg("Funding has already ended")]
    FundingEnded,
    #[msg("Funding is not completed")]
    FundingNotCompleted,
    #[msg("Funding target was met; no refunds")]
    FundingTargetNotMet,
    #[msg("Funding minimum was not met")]
    FundingMinimumNotMet,
    #[msg("Junior ratio is below the pool minimum")]
    InvalidJuniorRatio,
    #[msg("Asset pool is in the wrong status for this operation")]
    InvalidAssetPoolStatus,
    #[msg("Asset pool is already approved")]
    AssetPoolAlreadyApproved,
    #[msg("Asset pool is not approved")]
    AssetPoolNotApproved,
    #[msg("Repayment for this period is already completed")]
    RepaymentAlreadyCompleted,
    #[msg("Repayment period is not due yet")]
    RepaymentNotDue,
    #[msg("Principal has already been withdrawn")]
    PrincipalAlreadyWithdrawn,
    #[msg("Related accounts are already initialized")]
    RelatedAccountsAlreadyInitialized,
    #[msg("Related accounts are not initialized")]
    RelatedAccountsNotInitialized,
    #[msg("Subscription is in the wrong status for this operation")]
    InvalidSubscriptionStatus,
    #[msg("Refund was already processed")]
    RefundAlreadyProcessed,
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Position certificate is not owned by the caller")]
    NftNotOwnedByUser,
    #[msg("Insufficient balance")]
    InsufficientBalance,
    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,
    #[msg("Insufficient undistributed funds in pool")]
    InsufficientPoolFunds,
    #[msg("No interest to claim")]
    NoInterestToClaim,
    #[msg("No principal to withdraw")]
    NoPrincipalToWithdraw,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Precision loss in calculation")]
    PrecisionLoss,
    #[msg("System is paused")]
    SystemPaused,
    #[msg("Asset is not whitelisted")]
    AssetNotSupported,
}
