use crate::Result;
use crate::TransactionCategory;

/// Number of inputs the classifier expects
pub const FEATURE_COUNT: usize = 4;

/// Classifier input, ordered as [code, amount, old_balance, new_balance]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub category: TransactionCategory,
    pub amount: f64,
    pub old_balance: f64,
    pub new_balance: f64,
}

impl FeatureVector {
    /// new_balance is always derived, never supplied
    pub fn new(category: TransactionCategory, amount: f64, old_balance: f64) -> Self {
        return Self {
            category,
            amount,
            old_balance,
            new_balance: old_balance - amount,
        };
    }

    pub fn as_array(&self) -> [f64; FEATURE_COUNT] {
        return [
            f64::from(self.category.code()),
            self.amount,
            self.old_balance,
            self.new_balance,
        ];
    }
}

/// Maps raw form values into a feature vector.
///
/// Amount and balance are taken as-is, negative values included.
pub fn derive_features(category: &str, amount: f64, old_balance: f64) -> Result<FeatureVector> {
    let category = TransactionCategory::parse(category)?;

    return Ok(FeatureVector::new(category, amount, old_balance));
}
