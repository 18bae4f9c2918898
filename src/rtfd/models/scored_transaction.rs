use super::TransactionRecord;

use crate::Verdict;

use std::ops::Deref;

/// Immutable history entry: a record plus its thresholded verdict
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredTransaction {
    record: TransactionRecord,
    verdict: Verdict,
}

impl ScoredTransaction {
    pub fn new(record: TransactionRecord) -> Self {
        return Self {
            verdict: Verdict::from_probability(record.probability),
            record,
        };
    }

    pub fn verdict(&self) -> Verdict {
        return self.verdict;
    }

    pub fn record(&self) -> &TransactionRecord {
        return &self.record;
    }
}

impl Deref for ScoredTransaction {
    type Target = TransactionRecord;

    fn deref(&self) -> &Self::Target {
        return &self.record;
    }
}
