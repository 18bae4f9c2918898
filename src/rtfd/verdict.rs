use std::fmt;

use serde::Serialize;

/// Probabilities strictly above this are flagged
pub const FRAUD_THRESHOLD: f64 = 0.5;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    #[serde(rename = "FRAUD")]
    Fraud,
    #[serde(rename = "NOT_FRAUD")]
    NotFraud,
}

impl Verdict {
    /// Exactly 0.5 is not fraud
    pub fn from_probability(probability: f64) -> Self {
        if probability > FRAUD_THRESHOLD {
            return Self::Fraud;
        }

        return Self::NotFraud;
    }

    pub fn is_fraud(&self) -> bool {
        return *self == Self::Fraud;
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return match self {
            Self::Fraud => write!(f, "FRAUD"),
            Self::NotFraud => write!(f, "NOT_FRAUD"),
        };
    }
}
