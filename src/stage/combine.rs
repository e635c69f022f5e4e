//! Partial aggregator, the combiner stage of the pipeline.
//!
//! Merges counts for contiguous runs of records sharing a compound key.
//! Input is presumed key-grouped (one upstream tokenizer instance emits all
//! records for a key back to back); no global sort happens here. If a key
//! reappears non-contiguously its counts are emitted as separate partial
//! sums, which the downstream shuffle merges anyway.

use crate::{CountRecord, FIELD_DELIM};
use anyhow::Result;
use std::collections::BTreeMap;
use std::io::{BufRead, Write};

/// Per-key word totals. A `BTreeMap` makes the flush order deterministic
/// (word-ascending); consumers accept any order.
type WordCountTable = BTreeMap<String, u64>;

/// Accumulation state: nothing seen yet, or one active key with its table.
/// The table lives exactly as long as the key's contiguous run.
enum State {
    Idle,
    Active { key: String, table: WordCountTable },
}

impl State {
    fn seed(record: CountRecord) -> Self {
        State::Active {
            key: record.key,
            table: WordCountTable::from([(record.word, record.count)]),
        }
    }
}

fn flush(key: &str, table: &WordCountTable, output: &mut impl Write) -> Result<()> {
    for (word, total) in table {
        writeln!(output, "{key}{FIELD_DELIM}{word}{FIELD_DELIM}{total}")?;
    }
    Ok(())
}

/// Runs the stage: merge counts per contiguous key run, flushing a run's
/// table when the key changes and once more at end of input.
///
/// Malformed lines (wrong field count or non-integer count) are dropped
/// silently, per the malformed-lines policy of the post-map stages.
pub fn run(input: impl BufRead, mut output: impl Write) -> Result<()> {
    let mut state = State::Idle;
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some(record) = CountRecord::parse(line) else {
            continue;
        };

        state = match state {
            State::Idle => State::seed(record),
            State::Active { key, mut table } if key == record.key => {
                *table.entry(record.word).or_insert(0) += record.count;
                State::Active { key, table }
            }
            // Key boundary: emit the finished run, start the next one.
            State::Active { key, table } => {
                flush(&key, &table, &mut output)?;
                State::seed(record)
            }
        };
    }

    if let State::Active { key, table } = state {
        flush(&key, &table, &mut output)?;
    }
    output.flush()?;
    Ok(())
}
