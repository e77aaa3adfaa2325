use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle of a rental. `Active` means the movie is currently held
/// (no end date recorded); `Closed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RentalStatus {
    Active,
    Closed,
}

impl RentalStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, RentalStatus::Active)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, RentalStatus::Closed)
    }
}

impl fmt::Display for RentalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RentalStatus::Active => write!(f, "active"),
            RentalStatus::Closed => write!(f, "closed"),
        }
    }
}

impl FromStr for RentalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(RentalStatus::Active),
            "closed" => Ok(RentalStatus::Closed),
            other => Err(format!("Unknown rental status: {}", other)),
        }
    }
}
