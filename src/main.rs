mod args;
mod config;
mod console;
mod reader;
mod writer;

use args::Command;
use console::ConsoleDisplay;

use rtfd::category::CategoryError;
use rtfd::display::{DisplaySurface, INVALID_CATEGORY_WARNING};
use rtfd::monitor::{Monitor, MonitorEvent};
use rtfd::services::FraudScorer;
use rtfd::simulator::TransactionSimulator;
use rtfd::{Classifier, History, LogisticModel, Result};

use std::path::PathBuf;

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Parsing arguments...");
    let args = args::parse_args()?;

    let model = LogisticModel::load(&args.model)?;
    let mut scorer = rtfd::build_fraud_scorer(model);

    match args.command {
        Command::Score {
            category,
            amount,
            old_balance,
        } => {
            let mut display = ConsoleDisplay::new();
            score_one(&mut scorer, &mut display, &category, amount, old_balance);
        }
        Command::Batch { input } => {
            let mut display = ConsoleDisplay::new();
            process_batch(&mut scorer, &mut display, input)?;
            display.show_history(scorer.history());
        }
        Command::Monitor { ticks } => {
            let mut display = ConsoleDisplay::live();
            let options = config::monitor_options(ticks)?;

            let runtime = tokio::runtime::Runtime::new()?;
            let history = runtime.block_on(run_monitor(scorer, &mut display, options))?;

            display.show_history(&history);
        }
        Command::Detail { input, index } => {
            process_batch(&mut scorer, &mut ConsoleDisplay::quiet(), input)?;

            let mut display = ConsoleDisplay::new();
            match scorer.history().get(index) {
                Ok(entry) => {
                    println!("Transaction {index}: {:?}", entry.record());
                    display.show_result(entry);
                }
                Err(e) => display.error(&format!("{e}")),
            }
        }
    }

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Scores a single form submission; failures are reported, not propagated
fn score_one<C: Classifier>(
    scorer: &mut FraudScorer<C>,
    display: &mut impl DisplaySurface,
    category: &str,
    amount: f64,
    old_balance: f64,
) {
    match scorer.score(category, amount, old_balance) {
        Ok(entry) => display.show_result(&entry),
        Err(e) => report_error(display, &e),
    }
}

/// Read input file, score every row, and keep results in the history
fn process_batch<C: Classifier>(
    scorer: &mut FraudScorer<C>,
    display: &mut impl DisplaySurface,
    input: PathBuf,
) -> Result {
    log::debug!("Reading transactions from: {input:?}");

    for (line, row) in reader::read_transactions(input)?.into_iter().enumerate() {
        log::debug!("Parsing row {line}: {row:?}");
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                display.warn(&format!("Skipping row {line}: {e}"));
                continue;
            }
        };

        score_one(scorer, display, &row.typ, row.amount, row.old_balance);
    }

    Ok(())
}

async fn run_monitor<C: Classifier + 'static>(
    scorer: FraudScorer<C>,
    display: &mut impl DisplaySurface,
    options: rtfd::monitor::MonitorOptions,
) -> Result<History> {
    let mut handle = Monitor::spawn(scorer, TransactionSimulator::new(), options);

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            event = handle.next_event() => match event {
                Some(MonitorEvent::Scored(entry)) => display.show_result(&entry),
                Some(MonitorEvent::Failed(message)) => {
                    display.error(&format!("An error occurred: {message}"));
                }
                None => break,
            },
            _ = &mut ctrl_c => {
                log::debug!("Interrupted, stopping monitor");
                break;
            }
        }
    }

    let scorer = handle.stop().await?;

    return Ok(scorer.take());
}

fn report_error(display: &mut impl DisplaySurface, e: &anyhow::Error) {
    if e.downcast_ref::<CategoryError>().is_some() {
        display.warn(INVALID_CATEGORY_WARNING);
        return;
    }

    display.error(&format!("An error occurred: {e:#}"));
}
