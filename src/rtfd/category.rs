use crate::Result;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CategoryError {
    #[error("Invalid transaction type: {0:?}")]
    InvalidCategory(String),
}

/// Closed set of transaction types the classifier was trained on
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionCategory {
    Transfer,
    Payment,
    Debit,
    #[serde(rename = "Cash_In")]
    CashIn,
    #[serde(rename = "Cash_Out")]
    CashOut,
}

impl TransactionCategory {
    pub const ALL: [Self; 5] = [
        Self::Transfer,
        Self::Payment,
        Self::Debit,
        Self::CashIn,
        Self::CashOut,
    ];

    /// Numeric encoding used in the feature vector
    pub fn code(&self) -> u8 {
        return match self {
            Self::Transfer => 0,
            Self::Payment => 1,
            Self::Debit => 2,
            Self::CashIn => 3,
            Self::CashOut => 4,
        };
    }

    pub fn name(&self) -> &'static str {
        return match self {
            Self::Transfer => "Transfer",
            Self::Payment => "Payment",
            Self::Debit => "Debit",
            Self::CashIn => "Cash_In",
            Self::CashOut => "Cash_Out",
        };
    }

    /// Case-sensitive lookup by symbolic name, e.g. "Cash_Out"
    pub fn parse(name: &str) -> Result<Self> {
        let category = Self::ALL
            .iter()
            .copied()
            .find(|category| category.name() == name)
            .ok_or_else(|| CategoryError::InvalidCategory(name.to_string()))?;

        return Ok(category);
    }
}

impl FromStr for TransactionCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        return Self::parse(s);
    }
}

impl fmt::Display for TransactionCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.name());
    }
}
