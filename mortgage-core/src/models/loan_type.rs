use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanType {
    #[serde(rename = "FHA")]
    Fha,
    Conventional,
    #[serde(rename = "VA")]
    Va,
    #[serde(rename = "USDA")]
    Usda,
}

impl LoanType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fha => "FHA",
            Self::Conventional => "Conventional",
            Self::Va => "VA",
            Self::Usda => "USDA",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "FHA" => Some(Self::Fha),
            "Conventional" => Some(Self::Conventional),
            "VA" => Some(Self::Va),
            "USDA" => Some(Self::Usda),
            _ => None,
        }
    }

    pub fn all() -> &'static [LoanType] {
        &[Self::Fha, Self::Conventional, Self::Va, Self::Usda]
    }
}
