//! In-process pipeline runner.
//!
//! Plays the role the external execution framework plays in a real
//! deployment: feeds every input file to the tokenizer, performs the local
//! shuffle (sort by key) so the combiner sees contiguous runs, then hands
//! the merged records to the ranker.

use anyhow::{Context, Result};
use glob::glob;
use itertools::Itertools;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

use crate::stage::{combine, rank, tokenize};
use crate::standalone::Job;
use crate::stopwords::StopwordSet;
use crate::FIELD_DELIM;

/// Runs the tokenizer over every file matching the job's input glob,
/// collecting the emitted count records into one buffer.
pub fn perform_map(job: &Job, stopwords: &StopwordSet) -> Result<Vec<u8>> {
    let mut mapped = Vec::new();
    for pathspec in glob(&job.input)?.flatten() {
        let file = File::open(&pathspec)
            .with_context(|| format!("failed to open input file {}", pathspec.display()))?;
        tokenize::run(BufReader::new(file), &mut mapped, stopwords)?;
    }
    Ok(mapped)
}

/// The local stand-in for the shuffle step: sorts count records by their
/// key field so every key forms one contiguous run. The sort is stable, so
/// records keep their emission order within a key.
pub fn perform_shuffle(mapped: &[u8]) -> Result<Vec<u8>> {
    let text = std::str::from_utf8(mapped).context("mapper output is not valid UTF-8")?;
    let sorted = text
        .lines()
        .sorted_by(|a, b| key_of(a).cmp(key_of(b)))
        .fold(String::with_capacity(text.len()), |mut buf, line| {
            buf.push_str(line);
            buf.push('\n');
            buf
        });
    Ok(sorted.into_bytes())
}

fn key_of(line: &str) -> &str {
    line.split(FIELD_DELIM).next().unwrap_or(line)
}

/// Runs a whole job: map, local shuffle, combine, rank.
pub fn run_job(job: &Job) -> Result<()> {
    let stopwords = StopwordSet::load(&job.stopwords);

    let mapped = perform_map(job, &stopwords)?;
    let shuffled = perform_shuffle(&mapped)?;

    let mut combined = Vec::new();
    combine::run(shuffled.as_slice(), &mut combined)?;

    // The ranker keeps a full table per key, so no second sort is needed.
    let output: Box<dyn Write> = if job.output == "-" {
        Box::new(io::stdout().lock())
    } else {
        let file = File::create(&job.output)
            .with_context(|| format!("failed to create output file {}", job.output))?;
        Box::new(BufWriter::new(file))
    };
    rank::run(combined.as_slice(), output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffle_groups_keys_contiguously_and_keeps_order_within_a_key() {
        let mapped = b"k_1\tb\t1\nj_1\tz\t1\nk_1\ta\t1\n";
        let shuffled = perform_shuffle(mapped).unwrap();
        assert_eq!(
            String::from_utf8(shuffled).unwrap(),
            "j_1\tz\t1\nk_1\tb\t1\nk_1\ta\t1\n"
        );
    }

    #[test]
    fn shuffle_of_nothing_is_nothing() {
        assert!(perform_shuffle(b"").unwrap().is_empty());
    }
}
