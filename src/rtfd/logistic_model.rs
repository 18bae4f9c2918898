use crate::classifier::Classifier;
use crate::features::FEATURE_COUNT;
use crate::FeatureVector;
use crate::Result;

use std::{fs, path::Path};

use anyhow::Context;

use serde::Deserialize;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Non-finite feature value: {0:?}")]
    NonFiniteFeature([f64; FEATURE_COUNT]),

    #[error("Model score is undefined (NaN) for {0:?}")]
    UndefinedScore([f64; FEATURE_COUNT]),
}

/// Binary logistic regression exported from training as JSON:
///
/// `{ "weights": [w_type, w_amount, w_old_balance, w_new_balance], "bias": b }`
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct LogisticModel {
    pub weights: [f64; FEATURE_COUNT],
    pub bias: f64,
}

impl LogisticModel {
    pub fn new(weights: [f64; FEATURE_COUNT], bias: f64) -> Self {
        return Self { weights, bias };
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let json = fs::read_to_string(path)
            .with_context(|| format!("Couldn't read model file: {path:?}"))?;

        let model = Self::from_json(&json)
            .with_context(|| format!("Couldn't parse model file: {path:?}"))?;

        log::debug!("Loaded model from {path:?}: {model:?}");

        return Ok(model);
    }

    pub fn from_json(json: &str) -> Result<Self> {
        return Ok(serde_json::from_str(json)?);
    }

    fn logit(&self, x: &[f64; FEATURE_COUNT]) -> f64 {
        return self
            .weights
            .iter()
            .zip(x.iter())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.bias;
    }
}

impl Classifier for LogisticModel {
    fn predict_probability(&self, features: &FeatureVector) -> Result<f64> {
        let x = features.as_array();

        if x.iter().any(|v| !v.is_finite()) {
            Err(ModelError::NonFiniteFeature(x))?
        }

        // An infinite logit still saturates to 0 or 1, only NaN has no probability
        let z = self.logit(&x);
        if z.is_nan() {
            Err(ModelError::UndefinedScore(x))?
        }

        return Ok(1.0 / (1.0 + (-z).exp()));
    }
}
