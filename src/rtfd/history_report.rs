use crate::models::ScoredTransaction;
use crate::{History, Verdict};

use serde::Serialize;

/// Tabular row of the fraud history, one per scored transaction
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HistoryReport {
    #[serde(rename = "Index")]
    pub index: usize,
    #[serde(rename = "Transaction Type")]
    pub transaction_type: String,
    #[serde(rename = "Amount")]
    pub amount: f64,
    #[serde(rename = "Old Balance")]
    pub old_balance: f64,
    #[serde(rename = "New Balance")]
    pub new_balance: f64,
    #[serde(rename = "Predicted Probability")]
    pub probability: f64,
    #[serde(rename = "Verdict")]
    pub verdict: Verdict,
}

impl HistoryReport {
    pub fn new(index: usize, entry: &ScoredTransaction) -> Self {
        return Self {
            index,
            transaction_type: entry.category.to_string(),
            amount: entry.amount,
            old_balance: entry.old_balance,
            new_balance: entry.new_balance,
            probability: entry.probability,
            verdict: entry.verdict(),
        };
    }
}

pub fn build_report(history: &History) -> Vec<HistoryReport> {
    return history
        .iter()
        .enumerate()
        .map(|(index, entry)| HistoryReport::new(index, entry))
        .collect();
}

#[cfg(test)]
mod tests {
    use crate::models::TransactionRecord;
    use crate::{FeatureVector, TransactionCategory};

    use super::*;

    #[test]
    fn build_report_keeps_order() {
        let mut history = History::new();

        let features1 = FeatureVector::new(TransactionCategory::CashIn, 50.0, 500.0);
        let features2 = FeatureVector::new(TransactionCategory::Debit, 300.0, 100.0);
        history.append(ScoredTransaction::new(TransactionRecord::new(&features1, 0.2)));
        history.append(ScoredTransaction::new(TransactionRecord::new(&features2, 0.9)));

        let report = build_report(&history);

        assert_eq!(
            report,
            vec![
                HistoryReport {
                    index: 0,
                    transaction_type: "Cash_In".to_string(),
                    amount: 50.0,
                    old_balance: 500.0,
                    new_balance: 450.0,
                    probability: 0.2,
                    verdict: Verdict::NotFraud,
                },
                HistoryReport {
                    index: 1,
                    transaction_type: "Debit".to_string(),
                    amount: 300.0,
                    old_balance: 100.0,
                    new_balance: -200.0,
                    probability: 0.9,
                    verdict: Verdict::Fraud,
                },
            ]
        );
    }
}
