use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncomeType {
    W2,
    #[serde(rename = "1099")]
    Contractor1099,
    K1,
}

impl IncomeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::W2 => "W2",
            Self::Contractor1099 => "1099",
            Self::K1 => "K1",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "W2" => Some(Self::W2),
            "1099" => Some(Self::Contractor1099),
            "K1" => Some(Self::K1),
            _ => None,
        }
    }

    pub fn all() -> &'static [IncomeType] {
        &[Self::W2, Self::Contractor1099, Self::K1]
    }
}
