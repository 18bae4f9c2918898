use crate::{FeatureVector, TransactionCategory};

/// Inputs of a scoring call together with the probability it produced
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransactionRecord {
    pub category: TransactionCategory,
    pub amount: f64,
    pub old_balance: f64,
    pub new_balance: f64,
    pub probability: f64,
}

impl TransactionRecord {
    pub fn new(features: &FeatureVector, probability: f64) -> Self {
        return Self {
            category: features.category,
            amount: features.amount,
            old_balance: features.old_balance,
            new_balance: features.new_balance,
            probability,
        };
    }
}
