//! sift-demo
//! =========
//!
//! A command-line host for the `sift` crate. It plays the part a UI would:
//! it owns a [`FilterState`], forwards every "keystroke" (a `--query` value or
//! a line on stdin) to [`FilterState::on_query_change`], and renders either the
//! matching records or the fallback text.
//!
//! Usage examples
//! --------------
//!
//! ```text
//! $ sift --input fruits.json --query app --query cafe
//! > app
//! Apple
//! Pineapple
//! > cafe
//! Café
//!
//! $ printf 'ni\nnino\nxyz\n' | sift -i fruits.json
//! ```

pub mod args;
pub mod logging;

use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value as Json;
use sift::{FieldPath, FieldSelector, FilterState, RecomputePolicy};

pub use crate::args::Args;

/// Reads a JSON file whose root is an array of records.
pub fn load_records(path: &Path) -> Result<Vec<Json>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let root: Json = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    match root {
        Json::Array(records) => Ok(records),
        other => bail!(
            "expected a JSON array of records in {}, found {}",
            path.display(),
            kind_of(&other)
        ),
    }
}

fn kind_of(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "a boolean",
        Json::Number(_) => "a number",
        Json::String(_) => "a string",
        Json::Array(_) => "an array",
        Json::Object(_) => "an object",
    }
}

/// Builds the filter state described by `args` over `records`.
pub fn build_state(args: &Args, records: Vec<Json>) -> Result<FilterState<Json, String>> {
    let path = FieldPath::parse(&args.key).with_context(|| format!("invalid --key {:?}", args.key))?;
    let policy = if args.eager {
        RecomputePolicy::Eager
    } else {
        RecomputePolicy::Memoized
    };

    tracing::info!(records = records.len(), key = %path, ?policy, "filter ready");

    Ok(FilterState::builder(records, FieldSelector::field(path.as_str().to_string()))
        .fallback(args.fallback.clone())
        .policy(policy)
        .build())
}

/// Writes the current view: the query echo, then matches or the fallback.
pub fn render<W: Write>(state: &FilterState<Json, String>, out: &mut W) -> Result<()> {
    let snapshot = state.snapshot();
    writeln!(out, "> {}", snapshot.query)?;

    if let Some(fallback) = snapshot.indicator {
        writeln!(out, "{fallback}")?;
        return Ok(());
    }
    for record in &snapshot.items {
        writeln!(out, "{}", state.key().text(record))?;
    }
    Ok(())
}

/// Runs the host loop.
///
/// Queries come from `args.query` when given, otherwise one per line of
/// `input`. Every query is one input-change event followed by a render.
pub fn run<R: BufRead, W: Write>(args: &Args, input: R, mut out: W) -> Result<()> {
    let records = load_records(&args.input)?;
    let mut state = build_state(args, records)?;

    if !args.query.is_empty() {
        for query in &args.query {
            state.on_query_change(query.as_str());
            render(&state, &mut out)?;
        }
    } else {
        for line in input.lines() {
            let line = line.context("failed to read query from stdin")?;
            state.on_query_change(line);
            render(&state, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
