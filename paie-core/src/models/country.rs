use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    Benin,
    Togo,
}

impl Country {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Benin => "benin",
            Self::Togo => "togo",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "benin" | "bénin" | "bj" => Some(Self::Benin),
            "togo" | "tg" => Some(Self::Togo),
            _ => None,
        }
    }
}
