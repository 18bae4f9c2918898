use crate::features::derive_features;
use crate::{FeatureVector, Result};

use serde::Deserialize;

/// A row of a batch input file: `type,amount,old_balance`.
///
/// The type stays a raw string here so unknown types surface as an
/// invalid category when features are derived.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct InputTransaction {
    #[serde(rename = "type")]
    pub typ: String,

    pub amount: f64,
    pub old_balance: f64,
}

impl InputTransaction {
    pub fn parse_features(&self) -> Result<FeatureVector> {
        return derive_features(&self.typ, self.amount, self.old_balance);
    }
}
