use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{IncomeType, LoanType, YesNo};

/// Validated, parsed form inputs consumed by the readiness calculator.
///
/// Field names serialize in camelCase because the profile is echoed
/// verbatim into outbound webhook payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessProfile {
    pub monthly_debt: Decimal,
    pub annual_income: Decimal,
    /// Exactly three FICO 8 scores, in the order entered.
    pub fico_scores: [Decimal; 3],
    pub income_type: IncomeType,
    pub loan_type: LoanType,
    /// Annual interest rate, in percent.
    pub interest_rate: Decimal,
    pub has_income_history: YesNo,
    pub has_tax_records: YesNo,
}
