use crate::classifier::Classifier;
use crate::features::derive_features;
use crate::models::{ScoredTransaction, TransactionRecord};
use crate::{FeatureVector, History, Result};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("Scoring failed: {0}")]
    ScoringFailure(String),

    #[error("Scoring failed: classifier returned {0}, expected a probability in [0, 1]")]
    InvalidProbability(f64),
}

/// Scoring context: owns the classifier handle and the session History
pub struct FraudScorer<C: Classifier> {
    classifier: C,
    history: History,
}

impl<C: Classifier> FraudScorer<C> {
    pub fn new(classifier: C) -> Self {
        return Self {
            classifier,
            history: History::new(),
        };
    }

    /// Derives features from raw values, scores them, and records the result.
    ///
    /// An invalid category fails before the classifier is called.
    pub fn score(
        &mut self,
        category: &str,
        amount: f64,
        old_balance: f64,
    ) -> Result<ScoredTransaction> {
        log::debug!("Deriving features: {category:?}, {amount}, {old_balance}");
        let features = derive_features(category, amount, old_balance)?;

        return self.score_features(features);
    }

    pub fn score_features(&mut self, features: FeatureVector) -> Result<ScoredTransaction> {
        let probability = self.probability(&features)?;

        let entry = ScoredTransaction::new(TransactionRecord::new(&features, probability));

        let index = self.history.append(entry);
        log::debug!("Appended {entry:?} at history index: {index}");

        return Ok(entry);
    }

    /// Raw classifier call, without touching the History
    pub fn probability(&self, features: &FeatureVector) -> Result<f64> {
        log::debug!("Scoring features: {:?}", features.as_array());

        let probability = self
            .classifier
            .predict_probability(features)
            .map_err(|e| ScoringError::ScoringFailure(format!("{e:#}")))?;

        if !(0.0..=1.0).contains(&probability) {
            Err(ScoringError::InvalidProbability(probability))?
        }

        return Ok(probability);
    }

    pub fn history(&self) -> &History {
        return &self.history;
    }

    pub fn take(self) -> History {
        log::debug!("Destructuring FraudScorer");
        return self.history;
    }
}
