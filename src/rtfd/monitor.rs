use crate::classifier::Classifier;
use crate::models::ScoredTransaction;
use crate::services::FraudScorer;
use crate::simulator::TransactionSimulator;
use crate::{FeatureVector, Result};

use std::time::Duration;

use rand::Rng;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

pub const DEFAULT_PERIOD: Duration = Duration::from_secs(2);
/// Shortest delay the monitor will tick at; zero is clamped up to this
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorOptions {
    /// Delay between two simulated transactions
    pub period: Duration,
    /// Stop after this many ticks, or run until cancelled
    pub max_ticks: Option<usize>,
}

impl Default for MonitorOptions {
    fn default() -> Self {
        Self {
            period: DEFAULT_PERIOD,
            max_ticks: None,
        }
    }
}

impl MonitorOptions {
    /// The timer rejects a zero period, so anything shorter than
    /// `MIN_PERIOD` is raised to it
    pub fn clamped(self) -> Self {
        if self.period >= MIN_PERIOD {
            return self;
        }

        log::warn!(
            "Monitor period {:?} is below {MIN_PERIOD:?}, using {MIN_PERIOD:?}",
            self.period
        );

        return Self {
            period: MIN_PERIOD,
            ..self
        };
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MonitorEvent {
    Scored(ScoredTransaction),
    /// The loop stops after reporting a failure
    Failed(String),
}

/// Live monitor: one simulated, scored transaction per tick.
///
/// The background task owns the scorer while it runs and hands it back,
/// History included, once it finishes or is stopped.
pub struct Monitor;

impl Monitor {
    /// Must be called from within a tokio runtime
    pub fn spawn<C, R>(
        scorer: FraudScorer<C>,
        simulator: TransactionSimulator<R>,
        options: MonitorOptions,
    ) -> MonitorHandle<C>
    where
        C: Classifier + 'static,
        R: Rng + Send + 'static,
    {
        let options = options.clamped();

        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (cancel_tx, cancel_rx) = oneshot::channel();

        log::debug!("Spawning monitor: {options:?}");
        let task = tokio::spawn(run(scorer, simulator, options, events_tx, cancel_rx));

        return MonitorHandle {
            events: events_rx,
            cancel: cancel_tx,
            task,
        };
    }
}

pub struct MonitorHandle<C: Classifier> {
    events: mpsc::UnboundedReceiver<MonitorEvent>,
    cancel: oneshot::Sender<()>,
    task: JoinHandle<FraudScorer<C>>,
}

impl<C: Classifier> MonitorHandle<C> {
    /// Events arrive in generation order; `None` once the loop has ended
    pub async fn next_event(&mut self) -> Option<MonitorEvent> {
        return self.events.recv().await;
    }

    /// Cancels at the next tick boundary and returns the scorer
    pub async fn stop(self) -> Result<FraudScorer<C>> {
        log::debug!("Stopping monitor");

        // Err means the loop already ended on its own
        let _ = self.cancel.send(());

        return Ok(self.task.await?);
    }

    /// Waits for a bounded or failed loop to end on its own
    pub async fn join(self) -> Result<FraudScorer<C>> {
        let Self { cancel, task, .. } = self;

        let scorer = task.await?;
        drop(cancel);

        return Ok(scorer);
    }
}

async fn run<C, R>(
    mut scorer: FraudScorer<C>,
    mut simulator: TransactionSimulator<R>,
    options: MonitorOptions,
    events: mpsc::UnboundedSender<MonitorEvent>,
    mut cancel: oneshot::Receiver<()>,
) -> FraudScorer<C>
where
    C: Classifier,
    R: Rng,
{
    let mut interval = tokio::time::interval(options.period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut ticks = 0;

    loop {
        if options.max_ticks.map_or(false, |max| ticks >= max) {
            log::debug!("Monitor reached {ticks} ticks");
            break;
        }

        tokio::select! {
            biased;
            _ = &mut cancel => {
                log::debug!("Monitor cancelled after {ticks} ticks");
                break;
            }
            _ = interval.tick() => {}
        }

        ticks += 1;

        let tx = simulator.simulate();
        log::debug!("Simulated transaction {ticks}: {tx:?}");

        let features = FeatureVector::new(tx.category, tx.amount, tx.old_balance);

        match scorer.score_features(features) {
            Ok(entry) => {
                if events.send(MonitorEvent::Scored(entry)).is_err() {
                    log::debug!("Monitor receiver dropped, stopping");
                    break;
                }
            }
            Err(e) => {
                log::error!("Monitor stopped: {e:#}");
                let _ = events.send(MonitorEvent::Failed(format!("{e:#}")));
                break;
            }
        }
    }

    scorer
}
