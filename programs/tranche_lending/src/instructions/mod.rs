pub mod approve_asset_pool;
pub mod cancel_asset_pool;
pub mod claim_junior_interest;
pub mod complete_funding;
pub mod create_asset_pool;
pub mod distribute_senior_token;
pub mod early_exit_senior;
pub mod initialize_related_accounts;
pub mod initialize_system_config;
pub mod mint_junior_nft;
pub mod pause_system;
pub mod process_refund;
pub mod repay;
pub mod set_asset_supported;
pub mod set_treasury;
pub mod subscribe_junior;
pub mod subscribe_senior;
pub mod update_admin;
pub mod update_fee_rate;
pub mod utils;
pub mod withdraw_junior_subscription;
pub mod withdraw_principal;
pub mod withdraw_senior_subscription;

pub use approve_asset_pool::*;
pub use cancel_asset_pool::*;
pub use claim_junior_interest::*;
pub use complete_funding::*;
pub use create_asset_pool::*;
pub use distribute_senior_token::*;
pub use early_exit_senior::*;
pub use initialize_related_accounts::*;
pub use initialize_system_config::*;
pub use mint_junior_nft::*;
pub use pause_system::*;
pub use process_refund::*;
pub use repay::*;
pub use set_asset_supported::*;
pub use set_treasury::*;
pub use subscribe_junior::*;
pub use subscribe_senior::*;
pub use update_admin::*;
pub use update_fee_rate::*;
pub use utils::*;
pub use withdraw_junior_subscription::*;
pub use withdraw_principal::*;
pub use withdraw_senior_subscription::*;
