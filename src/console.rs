use crate::writer;

use rtfd::display::{self, DisplaySurface, FRAUD_ALERT};
use rtfd::models::ScoredTransaction;
use rtfd::History;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum Mode {
    #[default]
    Form,
    /// Compact one-line output for the live monitor
    Live,
    /// Results are kept out of stdout, warnings and errors still go through
    Quiet,
}

/// Results on stdout, warnings and errors through the logger
#[derive(Debug, Default)]
pub struct ConsoleDisplay {
    mode: Mode,
}

impl ConsoleDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live() -> Self {
        Self { mode: Mode::Live }
    }

    pub fn quiet() -> Self {
        Self { mode: Mode::Quiet }
    }
}

impl DisplaySurface for ConsoleDisplay {
    fn show_result(&mut self, entry: &ScoredTransaction) {
        match self.mode {
            Mode::Quiet => return,
            Mode::Live => {
                println!("{}", display::summarize(entry));
                return;
            }
            Mode::Form => {}
        }

        println!("{}", display::describe(entry));

        if entry.verdict().is_fraud() {
            println!("{FRAUD_ALERT}");
        }
    }

    fn show_history(&mut self, history: &History) {
        if history.is_empty() || self.mode == Mode::Quiet {
            log::debug!("History is empty, nothing to show");
            return;
        }

        match writer::write_history(history) {
            Ok(table) => {
                println!("Fraud History");
                print!("{table}");
            }
            Err(e) => self.error(&format!("Couldn't render history: {e:#}")),
        }

        let series = history
            .probabilities()
            .iter()
            .map(|p| format!("{p:.4}"))
            .collect::<Vec<_>>()
            .join(", ");
        println!("Predicted Probability: [{series}]");
    }

    fn warn(&mut self, message: &str) {
        log::warn!("{message}");
    }

    fn error(&mut self, message: &str) {
        log::error!("{message}");
    }
}
