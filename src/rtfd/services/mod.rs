mod fraud_scorer;

pub use fraud_scorer::{FraudScorer, ScoringError};
