//! Mortgage-readiness worksheet.
//!
//! This module implements the readiness assessment that turns a completed
//! borrower profile into a verdict plus an estimated affordable home-price
//! range.
//!
//! # Worksheet Structure
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Middle (median) of the three FICO 8 scores |
//! | 2    | Monthly income (annual income ÷ 12) |
//! | 3    | Debt-to-income ratio (monthly debt ÷ monthly income × 100) |
//! | 4    | Housing ratio (fixed share of monthly income allowed for housing) |
//! | 5    | Max monthly payment (monthly income × housing ratio ÷ 100) |
//! | 6    | Loan amount (payment amortized over the configured term at the user's rate) |
//! | 7    | House price (loan amount ÷ loan-to-value) |
//! | 8    | Price range (house price ± spread, low bound floored at 0) |
//! | 9    | Status decision (credit score, then DTI, then history answers) |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use mortgage_core::calculations::{LendingGuidelines, ReadinessCalculator, ReadinessStatus};
//! use mortgage_core::models::{IncomeType, LoanType, ReadinessProfile, YesNo};
//!
//! let profile = ReadinessProfile {
//!     monthly_debt: dec!(500),
//!     annual_income: dec!(72000),
//!     fico_scores: [dec!(700), dec!(680), dec!(720)],
//!     income_type: IncomeType::W2,
//!     loan_type: LoanType::Conventional,
//!     interest_rate: dec!(7),
//!     has_income_history: YesNo::Yes,
//!     has_tax_records: YesNo::Yes,
//! };
//!
//! let guidelines = LendingGuidelines::default();
//! let calculator = ReadinessCalculator::new(&guidelines);
//! let report = calculator.calculate(&profile).unwrap();
//!
//! assert_eq!(report.status, ReadinessStatus::Ready);
//! assert_eq!(report.middle_score, dec!(700));
//! assert_eq!(report.dti, dec!(8.33));
//! assert_eq!(report.max_monthly_payment, dec!(1860.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::common::{annuity_factor, max, round_half_up};
use crate::models::{CalculationId, ReadinessProfile};

/// Verdict message shown when the borrower clears every gate.
pub const READY_MESSAGE: &str =
    "Congratulations! Based on the information provided, you appear to be ready to apply for a mortgage.";

/// Verdict message for a middle score below the credit floor.
pub const CREDIT_MESSAGE: &str =
    "Your credit score may make it difficult to secure a mortgage at this time.";

/// Verdict message for a debt-to-income ratio above the ceiling.
pub const DTI_MESSAGE: &str =
    "Your debt-to-income ratio is higher than typically accepted for mortgages.";

/// Verdict message when income history or tax records are missing.
pub const HISTORY_MESSAGE: &str = "You may need more income history or up-to-date tax records.";

/// Errors that can occur during the readiness calculation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReadinessError {
    /// Annual income of zero (or less) would make the debt-to-income
    /// ratio undefined, so the calculation refuses to proceed.
    #[error("annual income must be positive, got {0}")]
    NonPositiveIncome(Decimal),
}

/// Underwriting constants for the readiness assessment.
///
/// Kept as configuration so a deployment can tune the thresholds without
/// touching the worksheet itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LendingGuidelines {
    /// Share of monthly income allowed for housing, in percent.
    pub housing_ratio: Decimal,

    /// Amortization term in monthly payments.
    pub term_months: u32,

    /// Loan-to-value assumption (0.80 assumes a 20% down payment).
    pub loan_to_value: Decimal,

    /// Half-width of the displayed home-price range.
    pub price_range_spread: Decimal,

    /// Minimum middle FICO score before the credit gate trips.
    pub min_middle_score: Decimal,

    /// Maximum debt-to-income ratio, in percent.
    pub max_dti: Decimal,

    /// Lowest annual interest rate the form accepts, in percent.
    pub min_interest_rate: Decimal,

    /// Highest annual interest rate the form accepts, in percent.
    pub max_interest_rate: Decimal,

    /// Granularity of the interest-rate control.
    pub interest_rate_step: Decimal,

    /// Annual interest rate a fresh form starts with, in percent.
    pub default_interest_rate: Decimal,
}

impl Default for LendingGuidelines {
    fn default() -> Self {
        Self {
            housing_ratio: Decimal::from(31),
            term_months: 360,
            loan_to_value: Decimal::new(80, 2),
            price_range_spread: Decimal::from(15_000),
            min_middle_score: Decimal::from(660),
            max_dti: Decimal::from(43),
            min_interest_rate: Decimal::ONE,
            max_interest_rate: Decimal::from(12),
            interest_rate_step: Decimal::new(1, 1),
            default_interest_rate: Decimal::from(7),
        }
    }
}

/// Readiness verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadinessStatus {
    Ready,
    #[serde(rename = "Not Ready")]
    NotReady,
}

impl ReadinessStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::NotReady => "Not Ready",
        }
    }
}

/// Result of the readiness worksheet.
///
/// Immutable once produced; a fresh id is generated per calculation.
/// Serializes in camelCase because it is forwarded verbatim in webhook
/// payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessReport {
    pub id: CalculationId,
    pub status: ReadinessStatus,
    pub status_message: String,
    /// Median of the three FICO scores.
    pub middle_score: Decimal,
    /// Debt-to-income ratio, in percent.
    pub dti: Decimal,
    /// Housing ratio used for the payment ceiling, in percent.
    pub housing_ratio: Decimal,
    pub max_monthly_payment: Decimal,
    pub low_price_range: Decimal,
    pub high_price_range: Decimal,
}

/// Calculator for the readiness worksheet.
#[derive(Debug, Clone)]
pub struct ReadinessCalculator<'a> {
    guidelines: &'a LendingGuidelines,
}

impl<'a> ReadinessCalculator<'a> {
    pub fn new(guidelines: &'a LendingGuidelines) -> Self {
        Self { guidelines }
    }

    /// Runs the complete readiness worksheet over a borrower profile.
    ///
    /// # Errors
    ///
    /// Returns [`ReadinessError::NonPositiveIncome`] when the annual income
    /// is zero or negative.
    pub fn calculate(
        &self,
        profile: &ReadinessProfile,
    ) -> Result<ReadinessReport, ReadinessError> {
        let middle_score = self.middle_score(&profile.fico_scores);

        let monthly_income = self.monthly_income(profile.annual_income)?;
        let dti = self.debt_to_income(profile.monthly_debt, monthly_income);
        let max_monthly_payment = self.max_monthly_payment(monthly_income);

        let loan_amount = self.loan_amount(max_monthly_payment, profile.interest_rate);
        let house_price = self.house_price(loan_amount);
        let (low_price_range, high_price_range) = self.price_range(house_price);

        let (status, status_message) = self.decide_status(middle_score, dti, profile);

        Ok(ReadinessReport {
            id: CalculationId::generate(),
            status,
            status_message: status_message.to_string(),
            middle_score,
            dti,
            housing_ratio: self.guidelines.housing_ratio,
            max_monthly_payment,
            low_price_range,
            high_price_range,
        })
    }

    /// Median of the three scores, regardless of entry order.
    fn middle_score(
        &self,
        scores: &[Decimal; 3],
    ) -> Decimal {
        let mut sorted = *scores;
        sorted.sort();
        sorted[1]
    }

    /// Monthly income from annual income.
    fn monthly_income(
        &self,
        annual_income: Decimal,
    ) -> Result<Decimal, ReadinessError> {
        if annual_income <= Decimal::ZERO {
            return Err(ReadinessError::NonPositiveIncome(annual_income));
        }
        Ok(round_half_up(annual_income / Decimal::from(12)))
    }

    /// Debt-to-income ratio, in percent.
    fn debt_to_income(
        &self,
        monthly_debt: Decimal,
        monthly_income: Decimal,
    ) -> Decimal {
        round_half_up(monthly_debt / monthly_income * Decimal::ONE_HUNDRED)
    }

    /// Largest housing payment the guidelines allow.
    fn max_monthly_payment(
        &self,
        monthly_income: Decimal,
    ) -> Decimal {
        round_half_up(monthly_income * self.guidelines.housing_ratio / Decimal::ONE_HUNDRED)
    }

    /// Principal the max payment supports over the configured term.
    fn loan_amount(
        &self,
        max_monthly_payment: Decimal,
        annual_rate: Decimal,
    ) -> Decimal {
        let monthly_rate = annual_rate / Decimal::ONE_HUNDRED / Decimal::from(12);
        let factor = annuity_factor(monthly_rate, self.guidelines.term_months);
        round_half_up(max_monthly_payment * factor)
    }

    /// Purchase price the loan supports at the configured loan-to-value.
    fn house_price(
        &self,
        loan_amount: Decimal,
    ) -> Decimal {
        round_half_up(loan_amount / self.guidelines.loan_to_value)
    }

    /// Displayed price range around the house price; the low bound never
    /// drops below zero.
    fn price_range(
        &self,
        house_price: Decimal,
    ) -> (Decimal, Decimal) {
        let spread = self.guidelines.price_range_spread;
        let low = max(house_price - spread, Decimal::ZERO);
        (round_half_up(low), round_half_up(house_price + spread))
    }

    /// Status decision, first matching rule wins: credit floor, then DTI
    /// ceiling, then the two history answers.
    fn decide_status(
        &self,
        middle_score: Decimal,
        dti: Decimal,
        profile: &ReadinessProfile,
    ) -> (ReadinessStatus, &'static str) {
        if middle_score < self.guidelines.min_middle_score {
            (ReadinessStatus::NotReady, CREDIT_MESSAGE)
        } else if dti > self.guidelines.max_dti {
            (ReadinessStatus::NotReady, DTI_MESSAGE)
        } else if !profile.has_income_history.is_yes() || !profile.has_tax_records.is_yes() {
            (ReadinessStatus::NotReady, HISTORY_MESSAGE)
        } else {
            (ReadinessStatus::Ready, READY_MESSAGE)
        }
    }
}
