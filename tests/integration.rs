use rtfd::category::CategoryError;
use rtfd::monitor::{Monitor, MonitorEvent, MonitorOptions};
use rtfd::simulator::TransactionSimulator;
use rtfd::{FeatureVector, LogisticModel, Result, TransactionCategory, Verdict};

use std::{process::Command, time::Duration};

use csv::{ReaderBuilder, StringRecord, Trim};

use rand::rngs::mock::StepRng;

const MODEL: &str = "./resources/model.json";
const TRANSACTIONS: &str = "./resources/test-examples/transactions_1.csv";

fn stub(probability: f64) -> impl Fn(&FeatureVector) -> Result<f64> + Send + Sync {
    move |_: &FeatureVector| -> Result<f64> { Ok(probability) }
}

#[test]
fn score_transfer() {
    let mut scorer = rtfd::build_fraud_scorer(stub(0.73));

    let features = rtfd::derive_features("Transfer", 200.0, 1000.0).unwrap();
    assert_eq!(features.as_array(), [0.0, 200.0, 1000.0, 800.0]);

    let entry = scorer.score("Transfer", 200.0, 1000.0).unwrap();

    assert_eq!(entry.verdict(), Verdict::Fraud);
    assert_eq!(scorer.history().len(), 1);

    let stored = scorer.history().get(0).unwrap();
    assert_eq!(stored.category, TransactionCategory::Transfer);
    assert_eq!(stored.amount, 200.0);
    assert_eq!(stored.old_balance, 1000.0);
    assert_eq!(stored.new_balance, 800.0);
    assert_eq!(stored.probability, 0.73);
    assert_eq!(stored.verdict(), Verdict::Fraud);
}

#[test]
fn score_unknown_category() {
    let mut scorer = rtfd::build_fraud_scorer(stub(0.73));
    assert_eq!(scorer.history().len(), 0);

    let err = scorer.score("Unknown", 200.0, 1000.0).unwrap_err();

    assert!(err.downcast_ref::<CategoryError>().is_some());
    assert_eq!(scorer.history().len(), 0);
}

#[test]
fn simulated_transaction_is_reproducible() {
    let run = || {
        let mut simulator = TransactionSimulator::from_rng(StepRng::new(0, 0));
        let mut scorer = rtfd::build_fraud_scorer(stub(0.5));

        let tx = simulator.simulate();
        scorer
            .score(tx.category.name(), tx.amount, tx.old_balance)
            .unwrap()
    };

    let first = run();
    let second = run();

    assert_eq!(first, second);
    assert_eq!(first.category, TransactionCategory::Transfer);
    assert_eq!(first.amount, 10.0);
    assert_eq!(first.old_balance, 1000.0);
    assert_eq!(first.new_balance, 990.0);
    assert_eq!(first.verdict(), Verdict::NotFraud);
}

#[test]
fn logistic_model_from_resources() {
    let model = LogisticModel::load(MODEL).unwrap();
    let mut scorer = rtfd::build_fraud_scorer(model);

    let low = scorer.score("Payment", 15.25, 4200.0).unwrap();
    let high = scorer.score("Cash_Out", 950.0, 1000.0).unwrap();

    assert_eq!(low.verdict(), Verdict::NotFraud);
    assert_eq!(high.verdict(), Verdict::Fraud);
    assert_eq!(scorer.history().probabilities().len(), 2);
}

#[tokio::test]
async fn monitor_with_logistic_model() {
    let model = LogisticModel::load(MODEL).unwrap();
    let options = MonitorOptions {
        period: Duration::from_millis(1),
        max_ticks: Some(4),
    };

    let mut handle = Monitor::spawn(
        rtfd::build_fraud_scorer(model),
        TransactionSimulator::seeded(2024),
        options,
    );

    let mut scored = vec![];
    while let Some(event) = handle.next_event().await {
        match event {
            MonitorEvent::Scored(entry) => scored.push(entry),
            MonitorEvent::Failed(e) => panic!("unexpected failure: {e}"),
        }
    }

    let history = handle.join().await.unwrap().take();

    assert_eq!(history.all(), scored.as_slice());
    assert_eq!(history.len(), 4);
}

#[test]
fn score_command() {
    let output = Command::new(env!("CARGO_BIN_EXE_rtfd"))
        .args([MODEL, "score", "Cash_Out", "950", "1000"])
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("This transaction is likely a Fraud with probability 93.02%"));
    assert!(stdout.contains("ALERT: Potential Fraud Detected!"));
}

#[test]
fn score_command_unknown_type() {
    let output = Command::new(env!("CARGO_BIN_EXE_rtfd"))
        .args([MODEL, "score", "Unknown", "200", "1000"])
        .output()
        .unwrap();

    // Invalid input is a warning, not a crash
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout).unwrap().is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid transaction type"));
}

#[test]
fn batch_command() {
    let output = Command::new(env!("CARGO_BIN_EXE_rtfd"))
        .args([MODEL, "batch", TRANSACTIONS])
        .output()
        .unwrap();

    println!("{}", String::from_utf8(output.stderr).unwrap());
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let table_start = stdout.find("Index,").unwrap();
    let table_end = stdout.find("Predicted Probability: [").unwrap();

    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(stdout[table_start..table_end].as_bytes());

    let rows: Vec<StringRecord> = rdr.records().map(|r| r.unwrap()).collect();

    let types: Vec<&str> = rows.iter().map(|r| &r[1]).collect();
    let verdicts: Vec<&str> = rows.iter().map(|r| &r[6]).collect();

    assert_eq!(types, vec!["Transfer", "Payment", "Cash_Out", "Cash_In"]);
    assert_eq!(verdicts, vec!["NOT_FRAUD", "NOT_FRAUD", "FRAUD", "FRAUD"]);
    assert_eq!(rows[3][4].parse::<f64>().unwrap(), -250.0);
}

#[test]
fn detail_command() {
    let output = Command::new(env!("CARGO_BIN_EXE_rtfd"))
        .args([MODEL, "detail", TRANSACTIONS, "1"])
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Transaction 1: "));
    assert!(lines[0].contains("category: Payment"));
    assert!(lines[0].contains("amount: 15.25"));
    assert!(lines[1].starts_with("This transaction is likely Not a Fraud"));
}

#[test]
fn detail_command_out_of_range() {
    let output = Command::new(env!("CARGO_BIN_EXE_rtfd"))
        .args([MODEL, "detail", TRANSACTIONS, "99"])
        .output()
        .unwrap();

    // Reported to the user, the process still exits cleanly
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout).unwrap().is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("History index 99 out of range (length 4)"));
}

#[test]
fn monitor_command() {
    let output = Command::new(env!("CARGO_BIN_EXE_rtfd"))
        .args([MODEL, "monitor", "2"])
        .env("RTFD_MONITOR_PERIOD_MS", "1")
        .output()
        .unwrap();

    println!("{}", String::from_utf8(output.stderr).unwrap());
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();

    let results = stdout
        .lines()
        .filter(|line| line.contains("Transaction Type: "))
        .count();
    assert_eq!(results, 2);

    let table_start = stdout.find("Index,").unwrap();
    let table_end = stdout.find("Predicted Probability: [").unwrap();

    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(stdout[table_start..table_end].as_bytes());

    let rows: Vec<StringRecord> = rdr.records().map(|r| r.unwrap()).collect();

    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][0], "0");
    assert_eq!(&rows[1][0], "1");
}

#[test]
fn monitor_command_zero_period() {
    let output = Command::new(env!("CARGO_BIN_EXE_rtfd"))
        .args([MODEL, "monitor", "2"])
        .env("RTFD_MONITOR_PERIOD_MS", "0")
        .output()
        .unwrap();

    // Rejected up front, before any transaction is scored
    assert!(!output.status.success());
    assert!(String::from_utf8(output.stdout).unwrap().is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("RTFD_MONITOR_PERIOD_MS must be at least 1 millisecond"));
    assert!(!stderr.contains("panicked"));
}

#[tokio::test]
async fn monitor_zero_period_keeps_history() {
    let options = MonitorOptions {
        period: Duration::ZERO,
        max_ticks: Some(2),
    };

    let mut handle = Monitor::spawn(
        rtfd::build_fraud_scorer(stub(0.25)),
        TransactionSimulator::seeded(1),
        options,
    );

    let mut scored = vec![];
    while let Some(event) = handle.next_event().await {
        match event {
            MonitorEvent::Scored(entry) => scored.push(entry),
            MonitorEvent::Failed(e) => panic!("unexpected failure: {e}"),
        }
    }

    let history = handle.join().await.unwrap().take();

    assert_eq!(scored.len(), 2);
    assert_eq!(history.all(), scored.as_slice());
}
