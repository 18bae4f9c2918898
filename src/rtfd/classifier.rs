use crate::FeatureVector;
use crate::Result;

/// Anything that can turn a feature vector into a probability of fraud.
///
/// Implementations must be shareable across threads so a scorer can be
/// moved into a background monitor.
pub trait Classifier: Send + Sync {
    /// Probability of the positive (fraud) class
    fn predict_probability(&self, features: &FeatureVector) -> Result<f64>;
}

impl<F> Classifier for F
where
    F: Fn(&FeatureVector) -> Result<f64> + Send + Sync,
{
    fn predict_probability(&self, features: &FeatureVector) -> Result<f64> {
        return self(features);
    }
}
