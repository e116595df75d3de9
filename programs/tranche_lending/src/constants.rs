pub const BASIS_POINTS: u16 = 10_000;

/// Platform fee is capped at 50%.
pub const MAX_PLATFORM_FEE: u16 = 5_000;

/// Early-exit fees are capped at 20%.
pub const MAX_EARLY_EXIT_FEE: u16 = 2_000;

/// Junior share of a pool must stay within [5%, 50%].
pub const MIN_JUNIOR_RATIO: u16 = 500;
pub const MAX_JUNIOR_RATIO: u16 = 5_000;

/// Repayment and senior fixed rates are per-period basis points.
pub const MAX_PERIOD_RATE: u16 = 10_000;

/// Funding window bounds, in seconds.
pub const MIN_FUNDING_PERIOD: i64 = 86_400;
pub const MAX_FUNDING_PERIOD: i64 = 365 * 86_400;

/// Repayment period length bounds, in seconds.
pub const MIN_REPAYMENT_PERIOD: u64 = 86_400;
pub const MAX_REPAYMENT_PERIOD: u64 = 365 * 86_400;

pub const MAX_REPAYMENT_COUNT: u64 = 120;

pub const MAX_POOL_NAME_LEN: usize = 64;

pub const MAX_WHITELISTED_ASSETS: usize = 32;

pub const SEEDS_SYSTEM_CONFIG: &[u8] = b"system_config";
pub const SEEDS_ASSET_WHITELIST: &[u8] = b"asset_whitelist";
pub const SEEDS_ASSET_POOL: &[u8] = b"asset_pool";
pub const SEEDS_SENIOR_POOL: &[u8] = b"senior_pool";
pub const SEEDS_FIRST_LOSS_POOL: &[u8] = b"first_loss_pool";
pub const SEEDS_JUNIOR_INTEREST_POOL: &[u8] = b"junior_interest_pool";
pub const SEEDS_SENIOR_RECEIPT_MINT: &[u8] = b"senior_receipt_mint";
pub const SEEDS_JUNIOR_POSITION_MINT: &[u8] = b"junior_position_mint";
pub const SEEDS_JUNIOR_POSITION: &[u8] = b"junior_position";
pub const SEEDS_POOL_VAULT: &[u8] = b"pool_vault";
pub const SEEDS_FIRST_LOSS_VAULT: &[u8] = b"first_loss_vault";
pub const SEEDS_SUBSCRIPTION: &[u8] = b"subscription";
pub const SEEDS_REPAYMENT_RECORD: &[u8] = b"repayment_record";
