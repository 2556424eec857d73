//! Wizard state machine for the four-step readiness flow.
//!
//! A [`WizardSession`] owns the raw form values exactly as typed, the
//! current step, and the report once a calculation succeeds. The
//! presentation layer edits fields through the session and drives the
//! Next / Previous / Calculate / Start Over actions; everything else is
//! internal.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::calculations::{LendingGuidelines, ReadinessCalculator, ReadinessReport};
use crate::models::{IncomeType, LoanType, PreApprovalLead, ReadinessProfile, YesNo};
use crate::parse::{ParseDecimalError, parse_decimal};
use crate::validate::{ValidationError, validate};

/// Message shown when the arithmetic fails after the emptiness gate passed
/// (e.g. a malformed numeric value or non-positive income).
pub const CALCULATION_ERROR_MESSAGE: &str =
    "An error occurred during calculation. Please check your inputs and try again.";

/// The four wizard steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    FinancialInfo,
    CreditInfo,
    AdditionalInfo,
    Results,
}

impl WizardStep {
    /// 1-based step number, as displayed to the user.
    pub fn number(&self) -> u8 {
        match self {
            Self::FinancialInfo => 1,
            Self::CreditInfo => 2,
            Self::AdditionalInfo => 3,
            Self::Results => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::FinancialInfo => "Financial Information",
            Self::CreditInfo => "Credit Information",
            Self::AdditionalInfo => "Additional Information",
            Self::Results => "Results",
        }
    }

    /// Completion percentage for a progress indicator.
    pub fn progress(&self) -> u8 {
        self.number() * 25
    }
}

/// Errors turning raw form values into a [`ReadinessProfile`].
#[derive(Debug, Error)]
pub enum FormError {
    #[error(transparent)]
    Incomplete(#[from] ValidationError),

    /// A field passed the emptiness gate but does not parse as a number.
    #[error("invalid value for {field}")]
    InvalidNumber {
        field: &'static str,
        #[source]
        source: ParseDecimalError,
    },
}

/// Raw form values, held exactly as typed until calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadinessForm {
    pub monthly_debt: String,
    pub annual_income: String,
    pub fico_scores: [String; 3],
    pub income_type: Option<IncomeType>,
    pub loan_type: Option<LoanType>,
    /// Annual interest rate in percent; starts at the guidelines default.
    pub interest_rate: Decimal,
    pub has_income_history: Option<YesNo>,
    pub has_tax_records: Option<YesNo>,
}

impl ReadinessForm {
    pub fn new(guidelines: &LendingGuidelines) -> Self {
        Self {
            monthly_debt: String::new(),
            annual_income: String::new(),
            fico_scores: [String::new(), String::new(), String::new()],
            income_type: None,
            loan_type: None,
            interest_rate: guidelines.default_interest_rate,
            has_income_history: None,
            has_tax_records: None,
        }
    }

    /// Parses the form into a calculator-ready profile.
    ///
    /// # Errors
    ///
    /// [`FormError::Incomplete`] when any field is empty/unset,
    /// [`FormError::InvalidNumber`] when a filled field is not numeric.
    pub fn parse(&self) -> Result<ReadinessProfile, FormError> {
        validate(self)?;

        let fico_scores = [
            parse_field("FICO score 1", &self.fico_scores[0])?,
            parse_field("FICO score 2", &self.fico_scores[1])?,
            parse_field("FICO score 3", &self.fico_scores[2])?,
        ];

        Ok(ReadinessProfile {
            monthly_debt: parse_field("monthly debt", &self.monthly_debt)?,
            annual_income: parse_field("annual income", &self.annual_income)?,
            fico_scores,
            income_type: self.income_type.ok_or(ValidationError::MissingFields)?,
            loan_type: self.loan_type.ok_or(ValidationError::MissingFields)?,
            interest_rate: self.interest_rate,
            has_income_history: self
                .has_income_history
                .ok_or(ValidationError::MissingFields)?,
            has_tax_records: self.has_tax_records.ok_or(ValidationError::MissingFields)?,
        })
    }
}

fn parse_field(
    field: &'static str,
    raw: &str,
) -> Result<Decimal, FormError> {
    parse_decimal(raw).map_err(|source| FormError::InvalidNumber { field, source })
}

/// Everything needed to forward a completed calculation downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationSnapshot {
    pub profile: ReadinessProfile,
    pub report: ReadinessReport,
}

/// A calculation snapshot plus the captured contact details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadSnapshot {
    pub lead: PreApprovalLead,
    pub calculation: CalculationSnapshot,
}

/// Session-scoped controller owning all wizard state.
#[derive(Debug)]
pub struct WizardSession {
    guidelines: LendingGuidelines,
    step: WizardStep,
    form: ReadinessForm,
    snapshot: Option<CalculationSnapshot>,
    error: Option<String>,
    lead_submitted: bool,
}

impl WizardSession {
    pub fn new(guidelines: LendingGuidelines) -> Self {
        let form = ReadinessForm::new(&guidelines);
        Self {
            guidelines,
            step: WizardStep::default(),
            form,
            snapshot: None,
            error: None,
            lead_submitted: false,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn form(&self) -> &ReadinessForm {
        &self.form
    }

    /// Mutable access for field edits from the presentation layer.
    /// Interest-rate edits should go through [`Self::set_interest_rate`]
    /// so the guidelines bounds apply.
    pub fn form_mut(&mut self) -> &mut ReadinessForm {
        &mut self.form
    }

    pub fn guidelines(&self) -> &LendingGuidelines {
        &self.guidelines
    }

    pub fn report(&self) -> Option<&ReadinessReport> {
        self.snapshot.as_ref().map(|s| &s.report)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn lead_submitted(&self) -> bool {
        self.lead_submitted
    }

    /// Sets the interest rate, clamped to the guidelines bounds and snapped
    /// to the configured step.
    pub fn set_interest_rate(
        &mut self,
        rate: Decimal,
    ) {
        let clamped = rate
            .max(self.guidelines.min_interest_rate)
            .min(self.guidelines.max_interest_rate);
        let step = self.guidelines.interest_rate_step;
        self.form.interest_rate = (clamped / step).round() * step;
    }

    /// Advances one step. No validation gate; only calculation moves past
    /// the additional-info step.
    pub fn next(&mut self) {
        self.step = match self.step {
            WizardStep::FinancialInfo => WizardStep::CreditInfo,
            WizardStep::CreditInfo => WizardStep::AdditionalInfo,
            other => other,
        };
    }

    /// Goes back one step; not available from the first or last step.
    pub fn previous(&mut self) {
        self.step = match self.step {
            WizardStep::CreditInfo => WizardStep::FinancialInfo,
            WizardStep::AdditionalInfo => WizardStep::CreditInfo,
            other => other,
        };
    }

    /// Runs the readiness calculation from the additional-info step.
    ///
    /// On success the session advances to the results step and returns a
    /// snapshot for downstream forwarding. On failure the session stays
    /// put and [`Self::error`] carries the user-facing message: the
    /// all-fields message when validation fails, the generic calculation
    /// message otherwise.
    pub fn calculate(&mut self) -> Option<CalculationSnapshot> {
        if self.step != WizardStep::AdditionalInfo {
            return None;
        }

        let profile = match self.form.parse() {
            Ok(profile) => profile,
            Err(FormError::Incomplete(error)) => {
                self.error = Some(error.to_string());
                return None;
            }
            Err(error) => {
                tracing::warn!(%error, "form rejected during calculation");
                self.error = Some(CALCULATION_ERROR_MESSAGE.to_string());
                return None;
            }
        };

        let calculator = ReadinessCalculator::new(&self.guidelines);
        match calculator.calculate(&profile) {
            Ok(report) => {
                let snapshot = CalculationSnapshot { profile, report };
                self.snapshot = Some(snapshot.clone());
                self.error = None;
                self.step = WizardStep::Results;
                Some(snapshot)
            }
            Err(error) => {
                tracing::warn!(%error, "readiness calculation failed");
                self.error = Some(CALCULATION_ERROR_MESSAGE.to_string());
                None
            }
        }
    }

    /// Resets the session to a fresh step 1. Only available from the
    /// results step; discards the report, all field values, any error,
    /// and the lead-submission flag.
    pub fn start_over(&mut self) {
        if self.step != WizardStep::Results {
            return;
        }
        self.step = WizardStep::FinancialInfo;
        self.form = ReadinessForm::new(&self.guidelines);
        self.snapshot = None;
        self.error = None;
        self.lead_submitted = false;
    }

    /// Accepts the pre-approval form once a report exists.
    ///
    /// Returns the forwarding snapshot, or `None` when no report exists,
    /// a lead was already submitted, or any contact field is blank.
    pub fn submit_lead(
        &mut self,
        lead: PreApprovalLead,
    ) -> Option<LeadSnapshot> {
        if self.lead_submitted || !lead.is_complete() {
            return None;
        }
        let calculation = self.snapshot.clone()?;

        self.lead_submitted = true;
        Some(LeadSnapshot { lead, calculation })
    }
}
