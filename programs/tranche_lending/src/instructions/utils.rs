use crate::constants::*;
use crate::error::TrancheLendingError;
use anchor_lang::prelude::*;

/// Shared bounds check for the four fee rates and the junior floor, used
/// at system bootstrap and at pool creation.
pub fn validate_fee_rates(
    platform_fee: u16,
    senior_early_before_exit_fee: u16,
    senior_early_after_exit_fee: u16,
    junior_early_before_exit_fee: u16,
    min_junior_ratio: u16,
) -> Result<()> {
    require!(
        platform_fee <= MAX_PLATFORM_FEE,
        TrancheLendingError::InvalidPlatformFee
    );
    require!(
        senior_early_before_exit_fee <= MAX_EARLY_EXIT_FEE
            && senior_early_after_exit_fee <= MAX_EARLY_EXIT_FEE
            && junior_early_before_exit_fee <= MAX_EARLY_EXIT_FEE,
        TrancheLendingError::InvalidEarlyExitFee
    );
    require!(
        min_junior_ratio >= MIN_JUNIOR_RATIO && min_junior_ratio <= MAX_JUNIOR_RATIO,
        TrancheLendingError::InvalidMinJuniorRatio
    );
    Ok(())
}

/// Basis-point fee, floored: fee = amount * rate / 10000.
pub fn calculate_fee(amount: u64, fee_rate: u16) -> Result<u64> {
    let fee = (amount as u128)
        .checked_mul(fee_rate as u128)
        .ok_or(TrancheLendingError::ArithmeticOverflow)?
        .checked_div(BASIS_POINTS as u128)
        .ok_or(TrancheLendingError::ArithmeticOverflow)?;
    Ok(fee as u64)
}

/// Minimum amount due each period: principal amortized linearly plus
/// per-period interest on the full raise target.
pub fn calculate_per_period_amount(
    total_amount: u64,
    repayment_count: u64,
    repayment_rate: u16,
) -> Result<u64> {
    require!(repayment_count > 0, TrancheLendingError::InvalidRepaymentCount);

    let principal_per_period = total_amount
        .checked_div(repayment_count)
        .ok_or(TrancheLendingError::ArithmeticOverflow)?;
    let interest_per_period = calculate_fee(total_amount, repayment_rate)?;

    principal_per_period
        .checked_add(interest_per_period)
        .ok_or(TrancheLendingError::ArithmeticOverflow.into())
}

/// Senior entitlement per period: senior principal amortized linearly plus
/// the fixed per-period rate on the senior total.
pub fn calculate_senior_entitlement(
    senior_total: u64,
    repayment_count: u64,
    senior_fixed_rate: u16,
) -> Result<u64> {
    require!(repayment_count > 0, TrancheLendingError::InvalidRepaymentCount);

    let principal_per_period = senior_total
        .checked_div(repayment_count)
        .ok_or(TrancheLendingError::ArithmeticOverflow)?;
    let interest_per_period = calculate_fee(senior_total, senior_fixed_rate)?;

    principal_per_period
        .checked_add(interest_per_period)
        .ok_or(TrancheLendingError::ArithmeticOverflow.into())
}

/// Highest repayment period due at `now`. Zero before the funding window
/// closes; the first period is due immediately after it closes.
pub fn calculate_current_period(
    funding_end_time: i64,
    repayment_period: u64,
    now: i64,
) -> Result<u64> {
    if now < funding_end_time || repayment_period == 0 {
        return Ok(0);
    }

    let elapsed = now
        .checked_sub(funding_end_time)
        .ok_or(TrancheLendingError::ArithmeticOverflow)? as u64;
    let count = elapsed / repayment_period;

    Ok(count.max(1))
}

/// Junior share of the raise, in basis points, must clear the pool minimum.
pub fn validate_junior_ratio(junior_amount: u64, total_amount: u64, min_ratio: u16) -> Result<()> {
    require!(total_amount > 0, TrancheLendingError::InvalidJuniorRatio);

    let ratio = (junior_amount as u128)
        .checked_mul(BASIS_POINTS as u128)
        .ok_or(TrancheLendingError::ArithmeticOverflow)?
        .checked_div(total_amount as u128)
        .ok_or(TrancheLendingError::ArithmeticOverflow)?;
    require!(
        ratio >= min_ratio as u128,
        TrancheLendingError::InvalidJuniorRatio
    );

    Ok(())
}

/// How one repayment is carved up. Amounts are denominated in the pool
/// asset; the sum of the four fields equals the repayment when the senior
/// entitlement is fully covered.
#[derive(Debug, PartialEq, Eq)]
pub struct RepaymentSplit {
    pub platform_fee: u64,
    pub senior_amount: u64,
    pub first_loss_used: u64,
    pub junior_interest: u64,
}

/// Waterfall for a single period: platform fee off the gross, the senior
/// entitlement next (first-loss capital covering any shortfall), and the
/// residual of the net accruing as junior interest. `vault_balance` is the
/// pool vault balance after the repayment has landed.
pub fn calculate_repayment_split(
    amount: u64,
    platform_fee_rate: u16,
    senior_entitlement: u64,
    vault_balance: u64,
    first_loss_available: u64,
) -> Result<RepaymentSplit> {
    let platform_fee = calculate_fee(amount, platform_fee_rate)?;
    let net = amount
        .checked_sub(platform_fee)
        .ok_or(TrancheLendingError::ArithmeticOverflow)?;
    let available_for_senior = vault_balance
        .checked_sub(platform_fee)
        .ok_or(TrancheLendingError::ArithmeticOverflow)?;

    let mut senior_amount = senior_entitlement;
    let mut first_loss_used = 0u64;
    if available_for_senior < senior_entitlement {
        let shortfall = senior_entitlement
            .checked_sub(available_for_senior)
            .ok_or(TrancheLendingError::ArithmeticOverflow)?;
        if first_loss_available >= shortfall {
            first_loss_used = shortfall;
        } else {
            first_loss_used = first_loss_available;
            senior_amount = available_for_senior
                .checked_add(first_loss_used)
                .ok_or(TrancheLendingError::ArithmeticOverflow)?;
        }
    }

    let junior_interest = net.saturating_sub(senior_amount);

    Ok(RepaymentSplit {
        platform_fee,
        senior_amount,
        first_loss_used,
        junior_interest,
    })
}

/// Interest a position may still claim: its pro-rata share of everything
/// accrued so far, minus what it already took.
pub fn calculate_claimable_interest(
    total_interest: u64,
    principal: u64,
    junior_total_principal: u64,
    claimed_interest: u64,
) -> Result<u64> {
    let share = (total_interest as u128)
        .checked_mul(principal as u128)
        .ok_or(TrancheLendingError::ArithmeticOverflow)?
        .checked_div(junior_total_principal as u128)
        .ok_or(TrancheLendingError::ArithmeticOverflow)? as u64;

    share
        .checked_sub(claimed_interest)
        .ok_or(TrancheLendingError::ArithmeticOverflow.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fee_is_floored_basis_points() {
        assert_eq!(calculate_fee(1_000, 100).unwrap(), 10);
        // 102,250 at 5% platform fee
        assert_eq!(calculate_fee(102_250, 500).unwrap(), 5_112);
        // 50,000 at 1% early exit fee
        assert_eq!(calculate_fee(50_000, 100).unwrap(), 500);
        assert_eq!(calculate_fee(0, 5_000).unwrap(), 0);
        assert_eq!(calculate_fee(u64::MAX, 10_000).unwrap(), u64::MAX);
    }

    #[test]
    fn per_period_amount_combines_principal_and_interest() {
        // 300k over 3 periods at 0.75% per period = 100k + 2.25k
        assert_eq!(
            calculate_per_period_amount(300_000, 3, 75).unwrap(),
            102_250
        );
        assert!(calculate_per_period_amount(300_000, 0, 75).is_err());
    }

    #[test]
    fn senior_entitlement_uses_fixed_rate() {
        // 250k senior over 5 periods at 0.5% per period
        assert_eq!(
            calculate_senior_entitlement(250_000, 5, 50).unwrap(),
            50_000 + 1_250
        );
    }

    #[test]
    fn current_period_counts_from_funding_end() {
        let end = 1_000;
        let period = 86_400;
        assert_eq!(calculate_current_period(end, period, 500).unwrap(), 0);
        // funding just closed, first period already payable
        assert_eq!(calculate_current_period(end, period, end).unwrap(), 1);
        assert_eq!(
            calculate_current_period(end, period, end + 86_400).unwrap(),
            1
        );
        assert_eq!(
            calculate_current_period(end, period, end + 3 * 86_400).unwrap(),
            3
        );
        assert_eq!(calculate_current_period(end, 0, end + 100).unwrap(), 0);
    }

    #[test]
    fn junior_ratio_gate() {
        // 125k junior of 375k total = 33.3%, above a 10% minimum
        assert!(validate_junior_ratio(125_000, 375_000, 1_000).is_ok());
        // 5% junior against a 10% minimum fails
        assert!(validate_junior_ratio(5_000, 100_000, 1_000).is_err());
        // exact boundary passes
        assert!(validate_junior_ratio(10_000, 100_000, 1_000).is_ok());
        assert!(validate_junior_ratio(0, 0, 500).is_err());
    }

    #[test]
    fn fee_rate_bounds() {
        // platform fee cap is inclusive
        assert!(validate_fee_rates(5_000, 0, 0, 0, 500).is_ok());
        assert!(validate_fee_rates(5_001, 0, 0, 0, 500).is_err());
        // early exit cap
        assert!(validate_fee_rates(0, 2_000, 2_000, 2_000, 500).is_ok());
        assert!(validate_fee_rates(0, 2_001, 0, 0, 500).is_err());
        assert!(validate_fee_rates(0, 0, 0, 2_001, 500).is_err());
        // junior floor and ceiling
        assert!(validate_fee_rates(0, 0, 0, 0, 499).is_err());
        assert!(validate_fee_rates(0, 0, 0, 0, 5_001).is_err());
    }

    #[test]
    fn repayment_split_matches_waterfall() {
        // 102,250 repaid at a 5% platform fee; senior entitled to 67,666
        // (200k/3 + 200k * 0.5%), vault flush
        let split = calculate_repayment_split(102_250, 500, 67_666, 1_000_000, 0).unwrap();
        assert_eq!(split.platform_fee, 5_112);
        assert_eq!(split.senior_amount, 67_666);
        assert_eq!(split.first_loss_used, 0);
        // junior takes the residual of the net (97,138)
        assert_eq!(split.junior_interest, 97_138 - 67_666);
        assert_eq!(
            split.platform_fee + split.senior_amount + split.junior_interest,
            102_250
        );
    }

    #[test]
    fn repayment_split_draws_on_first_loss() {
        // vault can only back 40k of a 50k entitlement
        let split = calculate_repayment_split(50_000, 0, 50_000, 40_000, 25_000).unwrap();
        assert_eq!(split.senior_amount, 50_000);
        assert_eq!(split.first_loss_used, 10_000);
        assert_eq!(split.junior_interest, 0);

        // first-loss capital itself runs dry
        let split = calculate_repayment_split(50_000, 0, 80_000, 40_000, 10_000).unwrap();
        assert_eq!(split.senior_amount, 50_000);
        assert_eq!(split.first_loss_used, 10_000);
        assert_eq!(split.junior_interest, 0);
    }

    #[test]
    fn claimable_interest_is_monotonic() {
        // single junior holding the full first-loss book
        assert_eq!(
            calculate_claimable_interest(9_000, 125_000, 125_000, 0).unwrap(),
            9_000
        );
        // after claiming, nothing left until new interest accrues
        assert_eq!(
            calculate_claimable_interest(9_000, 125_000, 125_000, 9_000).unwrap(),
            0
        );
        // two equal holders split the accrual
        assert_eq!(
            calculate_claimable_interest(9_001, 62_500, 125_000, 0).unwrap(),
            4_500
        );
    }
}
