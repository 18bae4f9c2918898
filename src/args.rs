use rtfd::Result;

use std::{env, fs, path::PathBuf};

use anyhow::Context;

use thiserror::Error;

pub const USAGE: &str = "Usage: rtfd <model.json> <command>

Commands:
    score <type> <amount> <old_balance>
    batch <transactions.csv>
    monitor [ticks]
    detail <transactions.csv> <index>";

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("Couldn't parse input arguments: {0}\n\n{usage}", usage = USAGE)]
    Parse(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Score {
        category: String,
        amount: f64,
        old_balance: f64,
    },
    Batch {
        input: PathBuf,
    },
    Monitor {
        ticks: Option<usize>,
    },
    Detail {
        input: PathBuf,
        index: usize,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub model: PathBuf,
    pub command: Command,
}

/// Parses the input arguments: a model file followed by a command
pub fn parse_args() -> Result<Args> {
    return parse_from(env::args().skip(1).collect());
}

fn parse_from(args: Vec<String>) -> Result<Args> {
    let mut args = args.into_iter();

    let model = existing_path(next_arg(&mut args, "model file")?)?;

    let command = match next_arg(&mut args, "command")?.as_str() {
        "score" => Command::Score {
            category: next_arg(&mut args, "transaction type")?,
            amount: parse_number(next_arg(&mut args, "amount")?)?,
            old_balance: parse_number(next_arg(&mut args, "old balance")?)?,
        },
        "batch" => Command::Batch {
            input: existing_path(next_arg(&mut args, "input file")?)?,
        },
        "monitor" => Command::Monitor {
            ticks: args.next().map(parse_number).transpose()?,
        },
        "detail" => Command::Detail {
            input: existing_path(next_arg(&mut args, "input file")?)?,
            index: parse_number(next_arg(&mut args, "index")?)?,
        },
        other => Err(InputArgsError::Parse(format!("Unknown command: {other:?}")))?,
    };

    if let Some(extra) = args.next() {
        Err(InputArgsError::Parse(format!("Unexpected argument: {extra:?}")))?
    }

    return Ok(Args { model, command });
}

fn next_arg(args: &mut impl Iterator<Item = String>, name: &str) -> Result<String> {
    let arg = args
        .next()
        .ok_or_else(|| InputArgsError::Parse(format!("Missing {name}.")))?;

    return Ok(arg);
}

fn parse_number<T: std::str::FromStr>(arg: String) -> Result<T> {
    let number = arg
        .parse::<T>()
        .map_err(|_| InputArgsError::Parse(format!("Not a number: {arg:?}")))?;

    return Ok(number);
}

fn existing_path(filename: String) -> Result<PathBuf> {
    let path = fs::canonicalize(filename.clone())
        .with_context(|| InputArgsError::FileNotFound(filename))?;

    return Ok(path);
}
