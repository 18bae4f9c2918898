mod scored_transaction;
mod transaction_record;

pub use scored_transaction::ScoredTransaction;
pub use transaction_record::TransactionRecord;
