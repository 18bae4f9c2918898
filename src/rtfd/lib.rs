pub mod category;
pub mod classifier;
pub mod display;
pub mod features;
mod history;
pub mod history_report;
pub mod input;
mod logistic_model;
pub mod models;
pub mod monitor;
mod result;
pub mod services;
pub mod simulator;
mod verdict;

pub use category::TransactionCategory;
pub use classifier::Classifier;
pub use features::{derive_features, FeatureVector};
pub use history::{History, HistoryError};
pub use logistic_model::{LogisticModel, ModelError};
pub use result::Result;
pub use verdict::{Verdict, FRAUD_THRESHOLD};

pub fn build_fraud_scorer<C: Classifier>(classifier: C) -> services::FraudScorer<C> {
    let scorer = services::FraudScorer::new(classifier);

    return scorer;
}
