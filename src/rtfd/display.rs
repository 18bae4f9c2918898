use crate::models::ScoredTransaction;
use crate::{History, Verdict};

pub const INVALID_CATEGORY_WARNING: &str =
    "Invalid transaction type. Please select a valid transaction type.";
pub const FRAUD_ALERT: &str = "ALERT: Potential Fraud Detected!";

/// Rendering side of the application. The core only pushes structured
/// results here and never depends on how they are shown.
pub trait DisplaySurface {
    fn show_result(&mut self, entry: &ScoredTransaction);

    fn show_history(&mut self, history: &History);

    fn warn(&mut self, message: &str);

    fn error(&mut self, message: &str);
}

/// One-line verdict message, probability shown for the predicted class
pub fn describe(entry: &ScoredTransaction) -> String {
    return match entry.verdict() {
        Verdict::Fraud => format!(
            "This transaction is likely a Fraud with probability {:.2}%",
            entry.probability * 100.0
        ),
        Verdict::NotFraud => format!(
            "This transaction is likely Not a Fraud with probability {:.2}%",
            (1.0 - entry.probability) * 100.0
        ),
    };
}

/// Compact line used by the live monitor
pub fn summarize(entry: &ScoredTransaction) -> String {
    let summary = format!(
        "Transaction Type: {}, Amount: {}, Old Balance: {}, New Balance: {}",
        entry.category, entry.amount, entry.old_balance, entry.new_balance
    );

    if entry.verdict().is_fraud() {
        return format!("Potential Fraud Detected! {summary}");
    }

    return summary;
}
