use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FamilyStatus {
    Single,
    Married,
    Divorced,
    Widowed,
}

impl FamilyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Married => "married",
            Self::Divorced => "divorced",
            Self::Widowed => "widowed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "single" | "celibataire" => Some(Self::Single),
            "married" | "marie" | "mariee" => Some(Self::Married),
            "divorced" | "divorce" => Some(Self::Divorced),
            "widowed" | "veuf" | "veuve" => Some(Self::Widowed),
            _ => None,
        }
    }
}

/// Family situation of the employee.
///
/// Accepted by every calculation entry point and echoed back in the result,
/// but applied to no rule table: neither jurisdiction's bracket tables carry
/// a quotient-familial adjustment today. The fields exist so callers do not
/// have to change shape if such a rule is introduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyProfile {
    pub status: FamilyStatus,
    pub children_count: u8,
}

impl Default for FamilyProfile {
    fn default() -> Self {
        Self {
            status: FamilyStatus::Single,
            children_count: 0,
        }
    }
}
