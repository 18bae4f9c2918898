use crate::models::ScoredTransaction;
use crate::Result;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    #[error("History index {index} out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// WORM (Write Once, Read Many) log of every scored transaction in the session
#[derive(Debug, Default, Clone, PartialEq)]
pub struct History {
    entries: Vec<ScoredTransaction>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index the entry was stored at
    pub fn append(&mut self, entry: ScoredTransaction) -> usize {
        let index = self.entries.len();

        self.entries.push(entry);

        index
    }

    pub fn all(&self) -> &[ScoredTransaction] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Result<&ScoredTransaction> {
        let entry = self.entries.get(index).ok_or(HistoryError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        })?;

        Ok(entry)
    }

    /// Probability series in insertion order, for charting
    pub fn probabilities(&self) -> Vec<f64> {
        self.entries.iter().map(|entry| entry.probability).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoredTransaction> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
