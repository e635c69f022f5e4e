//! Ranker, the reduce stage of the pipeline.
//!
//! Accumulates final word totals per compound key over the whole run, then
//! writes one summary line per key with its top five words. Unlike the
//! combiner this stage keeps every key's table until end of input, so it
//! works even if the runner's grouping is not contiguous.

use crate::{CompoundKey, CountRecord, TOP_K};
use anyhow::Result;
use itertools::Itertools;
use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};
use std::io::{BufRead, Write};
use tracing::warn;

/// Word totals for every compound key seen this run. The outer `BTreeMap`
/// gives the ascending key order the output contract requires.
type KeyTables = BTreeMap<String, HashMap<String, u64>>;

/// Reads every count record off `input` into a two-level table.
/// Malformed lines are dropped silently.
fn accumulate(input: impl BufRead) -> Result<KeyTables> {
    let mut tables = KeyTables::new();
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some(record) = CountRecord::parse(line) else {
            continue;
        };
        *tables
            .entry(record.key)
            .or_default()
            .entry(record.word)
            .or_insert(0) += record.count;
    }
    Ok(tables)
}

/// The at-most-`k` most frequent entries of `table`, ordered by descending
/// count with ascending-word tie-break. Both orders are total, so the
/// ranking is deterministic.
pub fn top_words(table: &HashMap<String, u64>, k: usize) -> Vec<(&str, u64)> {
    table
        .iter()
        .map(|(word, &count)| (word.as_str(), count))
        .sorted_by_key(|&(word, count)| (Reverse(count), word))
        .take(k)
        .collect()
}

/// Runs the stage: accumulate everything, then emit one line per key in
/// ascending key order: `item_type SP sentiment SP word...` with up to
/// [`TOP_K`] ranked words.
///
/// A key that does not split into exactly two parts is reported on the
/// diagnostics channel and its line is omitted.
pub fn run(input: impl BufRead, mut output: impl Write) -> Result<()> {
    let tables = accumulate(input)?;
    for (key, table) in &tables {
        let Some(parts) = CompoundKey::parse(key) else {
            warn!("malformed compound key {key:?}, omitting from output");
            continue;
        };
        let mut line = format!("{} {}", parts.item_type, parts.sentiment);
        for (word, _) in top_words(table, TOP_K) {
            line.push(' ');
            line.push_str(word);
        }
        writeln!(output, "{line}")?;
    }
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank(input: &str) -> Vec<String> {
        let mut out = Vec::new();
        run(input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn ranks_by_count_then_word() {
        let input = "k_1\tvalue\t1\nk_1\tgreat\t2\nk_1\tproduct\t1\n";
        assert_eq!(rank(input), vec!["k 1 great product value"]);
    }

    #[test]
    fn caps_output_at_five_words() {
        let input = "k_0\tb\t2\nk_0\ta\t2\nk_0\tf\t1\nk_0\td\t1\nk_0\tc\t1\nk_0\te\t1\n";
        // a and b tie at 2 and sort first; f loses the tie among the 1s.
        assert_eq!(rank(input), vec!["k 0 a b c d e"]);
    }

    #[test]
    fn emits_fewer_words_when_fewer_exist() {
        assert_eq!(rank("k_1\tonly\t3\n"), vec!["k 1 only"]);
    }

    #[test]
    fn keys_are_output_in_ascending_order() {
        let input = "toys_1\tfun\t1\nbooks_0\tdull\t1\nbooks_1\tcrisp\t1\n";
        assert_eq!(
            rank(input),
            vec!["books 0 dull", "books 1 crisp", "toys 1 fun"]
        );
    }

    #[test]
    fn accumulates_counts_even_when_keys_are_not_contiguous() {
        let input = "k_1\ta\t1\nj_1\tz\t1\nk_1\ta\t2\nk_1\tb\t4\n";
        assert_eq!(rank(input), vec!["j 1 z", "k 1 b a"]);
    }

    #[test]
    fn malformed_keys_are_reported_and_omitted() {
        let input = "abc\tword\t9\nk_1\tfine\t1\n";
        assert_eq!(rank(input), vec!["k 1 fine"]);
    }

    #[test]
    fn malformed_lines_are_dropped_silently() {
        let input = "bad\tline\nk_1\ta\tx\nk_1\ta\t1\n";
        assert_eq!(rank(input), vec!["k 1 a"]);
    }

    #[test]
    fn top_words_is_a_total_order() {
        let table: HashMap<String, u64> =
            [("b", 1), ("a", 1), ("c", 1)].map(|(w, c)| (w.to_string(), c)).into();
        let ranked = top_words(&table, 5);
        assert_eq!(ranked, vec![("a", 1), ("b", 1), ("c", 1)]);
    }
}
