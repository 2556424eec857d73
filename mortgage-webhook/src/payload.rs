//! Outbound webhook payloads.
//!
//! Two shapes, discriminated by a `type` field: the calculation result
//! forwarded when the wizard reaches the results step, and the
//! pre-approval request forwarded when the lead form is submitted. Both
//! echo the full borrower profile next to the report fields.

use mortgage_core::ReadinessReport;
use mortgage_core::models::{CalculationId, PreApprovalLead, ReadinessProfile};
use mortgage_core::wizard::{CalculationSnapshot, LeadSnapshot};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WebhookPayload {
    #[serde(rename = "calculation_result")]
    CalculationResult(CalculationResultBody),
    #[serde(rename = "pre_approval_request")]
    PreApprovalRequest(PreApprovalRequestBody),
}

impl WebhookPayload {
    pub fn calculation_result(snapshot: &CalculationSnapshot) -> Self {
        Self::CalculationResult(CalculationResultBody {
            report: snapshot.report.clone(),
            profile: snapshot.profile.clone(),
        })
    }

    pub fn pre_approval_request(snapshot: &LeadSnapshot) -> Self {
        Self::PreApprovalRequest(PreApprovalRequestBody {
            lead: snapshot.lead.clone(),
            calculation_id: snapshot.calculation.report.id.clone(),
            report: snapshot.calculation.report.clone(),
            profile: snapshot.calculation.profile.clone(),
        })
    }

    /// Discriminant string, as sent in the `type` field. Used as the task
    /// name when logging delivery failures.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CalculationResult(_) => "calculation_result",
            Self::PreApprovalRequest(_) => "pre_approval_request",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResultBody {
    #[serde(flatten)]
    pub report: ReadinessReport,
    #[serde(flatten)]
    pub profile: ReadinessProfile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreApprovalRequestBody {
    #[serde(flatten)]
    pub lead: PreApprovalLead,
    pub calculation_id: CalculationId,
    #[serde(flatten)]
    pub report: ReadinessReport,
    #[serde(flatten)]
    pub profile: ReadinessProfile,
}

#[cfg(test)]
mod tests {
    use mortgage_core::models::{IncomeType, LoanType, YesNo};
    use mortgage_core::{LendingGuidelines, ReadinessCalculator};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn snapshot() -> CalculationSnapshot {
        let profile = ReadinessProfile {
            monthly_debt: dec!(500),
            annual_income: dec!(72000),
            fico_scores: [dec!(700), dec!(680), dec!(720)],
            income_type: IncomeType::W2,
            loan_type: LoanType::Conventional,
            interest_rate: dec!(7),
            has_income_history: YesNo::Yes,
            has_tax_records: YesNo::Yes,
        };
        let guidelines = LendingGuidelines::default();
        let report = ReadinessCalculator::new(&guidelines)
            .calculate(&profile)
            .expect("calculation should succeed");
        CalculationSnapshot { profile, report }
    }

    fn lead_snapshot() -> LeadSnapshot {
        LeadSnapshot {
            lead: PreApprovalLead {
                name: "Jordan Smith".to_string(),
                email: "jordan@example.com".to_string(),
                zip: "30301".to_string(),
                phone: "555-0100".to_string(),
            },
            calculation: snapshot(),
        }
    }

    #[test]
    fn calculation_result_carries_tag_report_and_profile_echo() {
        let payload = WebhookPayload::calculation_result(&snapshot());
        let json = serde_json::to_value(&payload).expect("payload should serialize");

        assert_eq!(json["type"], "calculation_result");
        assert_eq!(json["status"], "Ready");
        assert_eq!(json["middleScore"], "700");
        assert_eq!(json["incomeType"], "W2");
        assert_eq!(json["loanType"], "Conventional");
        assert_eq!(json["hasIncomeHistory"], "Yes");
        assert_eq!(json["ficoScores"].as_array().map(|a| a.len()), Some(3));
    }

    #[test]
    fn pre_approval_request_adds_contact_and_back_reference() {
        let snapshot = lead_snapshot();
        let payload = WebhookPayload::pre_approval_request(&snapshot);
        let json = serde_json::to_value(&payload).expect("payload should serialize");

        assert_eq!(json["type"], "pre_approval_request");
        assert_eq!(json["name"], "Jordan Smith");
        assert_eq!(json["email"], "jordan@example.com");
        assert_eq!(json["zip"], "30301");
        assert_eq!(json["phone"], "555-0100");
        assert_eq!(
            json["calculationId"],
            snapshot.calculation.report.id.as_str()
        );
        // Report id rides along next to the back-reference.
        assert_eq!(json["id"], snapshot.calculation.report.id.as_str());
        assert_eq!(json["annualIncome"], "72000");
    }

    #[test]
    fn payloads_round_trip() {
        let payload = WebhookPayload::pre_approval_request(&lead_snapshot());
        let json = serde_json::to_string(&payload).expect("payload should serialize");
        let back: WebhookPayload = serde_json::from_str(&json).expect("payload should deserialize");

        assert_eq!(back, payload);
    }

    #[test]
    fn kind_matches_wire_tag() {
        assert_eq!(
            WebhookPayload::calculation_result(&snapshot()).kind(),
            "calculation_result"
        );
        assert_eq!(
            WebhookPayload::pre_approval_request(&lead_snapshot()).kind(),
            "pre_approval_request"
        );
    }
}
