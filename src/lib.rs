//! A sentiment top-words pipeline (lite MapReduce).
//!
//! Three stage executables compute, for each combination of item category
//! and sentiment label, the five most frequent words found in review text.
//! Each stage reads tab-separated records on stdin and writes records on
//! stdout, so the stages can be wired together by Hadoop streaming or any
//! similar runner that performs the shuffle/sort between them. The bundled
//! `standalone` binary runs the whole pipeline in one process for local jobs.

pub mod cmd;
pub mod diagnostics;
pub mod stage;
pub mod standalone;
pub mod stopwords;

/////////////////////////////////////////////////////////////////////////////
// Wire format
/////////////////////////////////////////////////////////////////////////////

/// Delimiter between record fields on the wire.
pub const FIELD_DELIM: char = '\t';

/// Separator between item type and sentiment inside a compound key.
///
/// Distinct from [`FIELD_DELIM`] so a compound key survives field splitting
/// at later stages.
pub const KEY_SEP: char = '_';

/// Number of words reported per compound key by the ranker.
pub const TOP_K: usize = 5;

/////////////////////////////////////////////////////////////////////////////
// Record types
/////////////////////////////////////////////////////////////////////////////

/// A raw review record, the input of the tokenizer stage.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct RawRecord {
    /// Item category, free text without tabs.
    pub item_type: String,
    /// Review body, free text without tabs.
    pub review: String,
    /// Sentiment label, `"0"` or `"1"` when well formed.
    pub sentiment: String,
}

impl RawRecord {
    /// Parses an `item_type \t review \t sentiment` line.
    ///
    /// Returns [`None`] unless the line splits into exactly three fields.
    pub fn parse(line: &str) -> Option<Self> {
        let mut fields = line.split(FIELD_DELIM);
        match (fields.next(), fields.next(), fields.next(), fields.next()) {
            (Some(item_type), Some(review), Some(sentiment), None) => Some(Self {
                item_type: item_type.to_string(),
                review: review.to_string(),
                sentiment: sentiment.to_string(),
            }),
            _ => None,
        }
    }

    /// Whether the sentiment label is one of the two defined values.
    pub fn sentiment_is_valid(&self) -> bool {
        matches!(self.sentiment.as_str(), "0" | "1")
    }

    /// The compound grouping key for this record.
    ///
    /// Built even when the sentiment is invalid: the tokenizer warns about
    /// such records but still emits under the label it was given.
    pub fn compound_key(&self) -> String {
        format!("{}{KEY_SEP}{}", self.item_type, self.sentiment)
    }
}

/// An intermediate count record, the currency of the combiner and ranker.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct CountRecord {
    /// Compound grouping key, `item_type` + [`KEY_SEP`] + sentiment.
    pub key: String,
    /// A cleaned, lowercased word.
    pub word: String,
    /// Occurrence count for `word` under `key`.
    pub count: u64,
}

impl CountRecord {
    /// Parses a `key \t word \t count` line.
    ///
    /// Returns [`None`] if the line does not have exactly three fields or
    /// the count field is not a non-negative integer.
    pub fn parse(line: &str) -> Option<Self> {
        let mut fields = line.split(FIELD_DELIM);
        match (fields.next(), fields.next(), fields.next(), fields.next()) {
            (Some(key), Some(word), Some(count), None) => Some(Self {
                key: key.to_string(),
                word: word.to_string(),
                count: count.parse().ok()?,
            }),
            _ => None,
        }
    }
}

/// A compound key split back into its parts.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct CompoundKey {
    pub item_type: String,
    pub sentiment: String,
}

impl CompoundKey {
    /// Splits `key` on [`KEY_SEP`].
    ///
    /// Returns [`None`] unless the separator occurs exactly once, i.e. the
    /// key yields exactly two parts.
    pub fn parse(key: &str) -> Option<Self> {
        let mut parts = key.split(KEY_SEP);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(item_type), Some(sentiment), None) => Some(Self {
                item_type: item_type.to_string(),
                sentiment: sentiment.to_string(),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_record_requires_three_fields() {
        assert!(RawRecord::parse("bad\tline").is_none());
        assert!(RawRecord::parse("a\tb\tc\td").is_none());

        let record = RawRecord::parse("electronics\tGreat product\t1").unwrap();
        assert_eq!(record.item_type, "electronics");
        assert_eq!(record.review, "Great product");
        assert_eq!(record.sentiment, "1");
        assert!(record.sentiment_is_valid());
        assert_eq!(record.compound_key(), "electronics_1");
    }

    #[test]
    fn raw_record_keeps_invalid_sentiment_verbatim() {
        let record = RawRecord::parse("books\tmeh\t7").unwrap();
        assert!(!record.sentiment_is_valid());
        assert_eq!(record.compound_key(), "books_7");
    }

    #[test]
    fn count_record_rejects_bad_counts() {
        assert!(CountRecord::parse("k\tword\tx").is_none());
        assert!(CountRecord::parse("k\tword\t-3").is_none());
        assert!(CountRecord::parse("k\tword").is_none());

        let record = CountRecord::parse("electronics_1\tgreat\t2").unwrap();
        assert_eq!(record.key, "electronics_1");
        assert_eq!(record.word, "great");
        assert_eq!(record.count, 2);
    }

    #[test]
    fn compound_key_needs_exactly_one_separator() {
        assert!(CompoundKey::parse("abc").is_none());
        assert!(CompoundKey::parse("a_b_c").is_none());

        let key = CompoundKey::parse("electronics_1").unwrap();
        assert_eq!(key.item_type, "electronics");
        assert_eq!(key.sentiment, "1");
    }
}
