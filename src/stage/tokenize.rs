//! Tokenizer/emitter, the map stage of the pipeline.
//!
//! Turns raw review records into one count-1 record per retained word
//! occurrence, keyed by `item_type_sentiment`.

use crate::stopwords::StopwordSet;
use crate::{RawRecord, FIELD_DELIM};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::warn;

/// Cleans one whitespace-delimited token: lowercase, drop digit characters
/// (Unicode-aware, so `٣٤` is stripped like `34`), drop every character
/// that is neither alphanumeric nor whitespace (punctuation, apostrophes
/// included), then trim.
///
/// Idempotent: cleaning a cleaned token is a no-op.
pub fn clean_word(raw: &str) -> String {
    let cleaned: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_numeric())
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    cleaned.trim().to_string()
}

/// Whether a cleaned token should be emitted: non-empty, not all digits,
/// and not a stopword. The digit check is redundant after [`clean_word`]
/// strips digits, but it keeps discard rules independent of cleaning order.
fn retain(word: &str, stopwords: &StopwordSet) -> bool {
    !word.is_empty() && !word.chars().all(char::is_numeric) && !stopwords.contains(word)
}

/// Runs the stage: one count record per retained token of every input line.
///
/// Lines that do not split into exactly three tab-separated fields are
/// reported and skipped whole. An unexpected sentiment label is reported
/// but its record is still processed under the label it carries.
pub fn run(input: impl BufRead, mut output: impl Write, stopwords: &StopwordSet) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some(record) = RawRecord::parse(line) else {
            warn!("cannot parse review record, skipping: {line:?}");
            continue;
        };
        if !record.sentiment_is_valid() {
            warn!(
                "unexpected sentiment value {:?}, emitting under it anyway",
                record.sentiment
            );
        }

        let key = record.compound_key();
        for token in record.review.split_whitespace() {
            let word = clean_word(token);
            if retain(&word, stopwords) {
                writeln!(output, "{key}{FIELD_DELIM}{word}{FIELD_DELIM}1")?;
            }
        }
    }
    output.flush()?;
    Ok(())
}
