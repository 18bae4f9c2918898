use crate::TransactionCategory;

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub const AMOUNT_RANGE: RangeInclusive<f64> = 10.0..=1000.0;
pub const OLD_BALANCE_RANGE: RangeInclusive<f64> = 1000.0..=10000.0;

/// Raw values of a synthetic transaction, before feature derivation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedTransaction {
    pub category: TransactionCategory,
    pub amount: f64,
    pub old_balance: f64,
}

/// Generates synthetic transactions for the live monitor.
///
/// Each draw is independent; the random source is injected so tests can
/// pin it down.
#[derive(Debug)]
pub struct TransactionSimulator<R: Rng = StdRng> {
    rng: R,
}

impl TransactionSimulator<StdRng> {
    pub fn new() -> Self {
        return Self::from_rng(StdRng::from_entropy());
    }

    pub fn seeded(seed: u64) -> Self {
        return Self::from_rng(StdRng::seed_from_u64(seed));
    }
}

impl Default for TransactionSimulator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> TransactionSimulator<R> {
    pub fn from_rng(rng: R) -> Self {
        return Self { rng };
    }

    pub fn simulate(&mut self) -> SimulatedTransaction {
        let category = *TransactionCategory::ALL
            .choose(&mut self.rng)
            .unwrap_or(&TransactionCategory::Transfer);

        let amount = round_cents(self.rng.gen_range(AMOUNT_RANGE));
        let old_balance = round_cents(self.rng.gen_range(OLD_BALANCE_RANGE));

        return SimulatedTransaction {
            category,
            amount,
            old_balance,
        };
    }
}

/// Unbounded: the caller decides when to stop pulling
impl<R: Rng> Iterator for TransactionSimulator<R> {
    type Item = SimulatedTransaction;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.simulate())
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
