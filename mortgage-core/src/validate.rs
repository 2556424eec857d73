//! Emptiness gate for the wizard form.
//!
//! Progression from the additional-info step is blocked until every
//! required field has a value. No field-level detail is produced; the
//! contract is a single all-or-nothing message.

use thiserror::Error;

use crate::wizard::ReadinessForm;

/// Validation failure for the readiness form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    MissingFields,
}

/// Checks that every required field on the form is filled in.
///
/// Fails when monthly debt, annual income, any FICO entry, income type,
/// loan type, or either history answer is empty/unset.
pub fn validate(form: &ReadinessForm) -> Result<(), ValidationError> {
    let text_fields_filled = !form.monthly_debt.trim().is_empty()
        && !form.annual_income.trim().is_empty()
        && form.fico_scores.iter().all(|s| !s.trim().is_empty());

    let selections_made = form.income_type.is_some()
        && form.loan_type.is_some()
        && form.has_income_history.is_some()
        && form.has_tax_records.is_some();

    if text_fields_filled && selections_made {
        Ok(())
    } else {
        Err(ValidationError::MissingFields)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::calculations::LendingGuidelines;
    use crate::models::{IncomeType, LoanType, YesNo};

    fn filled_form() -> ReadinessForm {
        let mut form = ReadinessForm::new(&LendingGuidelines::default());
        form.monthly_debt = "500".to_string();
        form.annual_income = "72000".to_string();
        form.fico_scores = ["700".to_string(), "680".to_string(), "720".to_string()];
        form.income_type = Some(IncomeType::W2);
        form.loan_type = Some(LoanType::Conventional);
        form.has_income_history = Some(YesNo::Yes);
        form.has_tax_records = Some(YesNo::Yes);
        form
    }

    #[test]
    fn complete_form_passes() {
        assert_eq!(validate(&filled_form()), Ok(()));
    }

    #[test]
    fn blank_monthly_debt_fails() {
        let mut form = filled_form();
        form.monthly_debt = "  ".to_string();

        assert_eq!(validate(&form), Err(ValidationError::MissingFields));
    }

    #[test]
    fn any_blank_fico_entry_fails() {
        for index in 0..3 {
            let mut form = filled_form();
            form.fico_scores[index] = String::new();

            assert_eq!(validate(&form), Err(ValidationError::MissingFields));
        }
    }

    #[test]
    fn unset_selection_fails() {
        let mut form = filled_form();
        form.loan_type = None;

        assert_eq!(validate(&form), Err(ValidationError::MissingFields));
    }

    #[test]
    fn failure_message_is_the_single_inline_string() {
        assert_eq!(
            ValidationError::MissingFields.to_string(),
            "Please fill in all fields."
        );
    }
}
