use rtfd::monitor::MonitorOptions;
use rtfd::Result;

use std::{env, time::Duration};

use anyhow::Context;

use log::LevelFilter;
use simple_logger::SimpleLogger;

use thiserror::Error;

/// Overrides the monitor's delay between simulated transactions
pub const PERIOD_ENV_VAR: &str = "RTFD_MONITOR_PERIOD_MS";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{} must be at least 1 millisecond", PERIOD_ENV_VAR)]
    ZeroPeriod,
}

pub fn configure_app() -> Result {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    return Ok(());
}

pub fn monitor_options(max_ticks: Option<usize>) -> Result<MonitorOptions> {
    return monitor_options_from(env::var(PERIOD_ENV_VAR).ok(), max_ticks);
}

fn monitor_options_from(period: Option<String>, max_ticks: Option<usize>) -> Result<MonitorOptions> {
    let mut options = MonitorOptions {
        max_ticks,
        ..MonitorOptions::default()
    };

    if let Some(period) = period {
        let millis: u64 = period
            .parse()
            .with_context(|| format!("{PERIOD_ENV_VAR} must be a number of milliseconds: {period:?}"))?;

        if millis == 0 {
            Err(ConfigError::ZeroPeriod)?
        }

        options.period = Duration::from_millis(millis);
    }

    log::debug!("Monitor options: {options:?}");

    return Ok(options);
}
