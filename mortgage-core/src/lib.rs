pub mod calculations;
pub mod format;
pub mod models;
pub mod parse;
pub mod validate;
pub mod wizard;

pub use calculations::{
    LendingGuidelines, ReadinessCalculator, ReadinessError, ReadinessReport, ReadinessStatus,
};
pub use models::*;
pub use wizard::{CalculationSnapshot, LeadSnapshot, WizardSession, WizardStep};
