//! One-shot CLI actions.

use anyhow::{anyhow, Result};
use std::time::Instant;

use clap::ArgMatches;
use serde::Serialize;

use crate::{
    api::{spawn_sort, SortConfig, DEFAULT_DELAY_UNIT},
    utils::values::parse_values,
};

/// One-shot sort report emitted by `--json`.
#[derive(Debug, Serialize)]
pub struct SortReport {
    pub input: Vec<u64>,
    pub output: Vec<u64>,
    pub delay_unit_ms: u64,
    pub elapsed_ms: u64,
}

impl SortReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Handle the one-shot `--values` invocation: run a single sort on the
/// runtime, print the result (text or JSON), and return.
///
/// Empty input is rejected here, at the process boundary: the core never
/// signals completion for an empty sequence, and a CLI process must not
/// wait forever on it.
pub async fn handle_sort_once(matches: &ArgMatches) -> Result<()> {
    let list = matches
        .get_one::<String>("values")
        .ok_or_else(|| anyhow!("missing --values argument"))?;
    let input = parse_values(list)?;

    if input.is_empty() {
        log::warn!("rejecting empty value list at the CLI boundary");
        return Err(anyhow!(
            "empty value list: nothing is ever scheduled for it, so completion would never be signalled"
        ));
    }

    let delay_unit_ms = match matches.get_one::<String>("delay-unit-ms") {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|err| anyhow!("invalid --delay-unit-ms '{raw}': {err}"))?,
        None => DEFAULT_DELAY_UNIT.as_millis() as u64,
    };
    let config = SortConfig::with_delay_unit_ms(delay_unit_ms);

    log::info!(
        "sorting {} values at {delay_unit_ms}ms per unit",
        input.len()
    );

    let started = Instant::now();
    let handle = spawn_sort(&input, &config);
    let output = handle
        .completed()
        .await
        .ok_or_else(|| anyhow!("sort ended without signalling completion"))?;
    let elapsed_ms = started.elapsed().as_millis() as u64;

    log::info!("sort completed in {elapsed_ms}ms");

    if matches.get_flag("json") {
        let report = SortReport {
            input,
            output,
            delay_unit_ms,
            elapsed_ms,
        };
        println!("{}", report.to_json()?);
    } else {
        let rendered = output
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        println!("{rendered}");
    }

    Ok(())
}
