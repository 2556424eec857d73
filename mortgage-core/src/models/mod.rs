mod calculation_id;
mod income_type;
mod lead;
mod loan_type;
mod readiness_profile;
mod yes_no;

pub use calculation_id::CalculationId;
pub use income_type::IncomeType;
pub use lead::PreApprovalLead;
pub use loan_type::LoanType;
pub use readiness_profile::ReadinessProfile;
pub use yes_no::YesNo;
