use serde::{Deserialize, Serialize};

/// Contact details captured on the pre-approval form.
///
/// Forwarded downstream only; never stored locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreApprovalLead {
    pub name: String,
    pub email: String,
    pub zip: String,
    pub phone: String,
}

impl PreApprovalLead {
    /// True when every field has a non-blank value.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.zip, &self.phone]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}
