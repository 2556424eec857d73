use serde::{Deserialize, Serialize};

/// Answer to the two-state history questions on the additional-info step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Yes" => Some(Self::Yes),
            "No" => Some(Self::No),
            _ => None,
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, Self::Yes)
    }

    pub fn all() -> &'static [YesNo] {
        &[Self::Yes, Self::No]
    }
}
