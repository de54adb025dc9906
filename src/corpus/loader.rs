//! Corpus file formats.
//!
//! Time-parse corpus (`load_timeparse_corpus`):
//!
//! ```json
//! [{"text": "tomorrow at 3pm", "ref_time": "2023-01-01T00:00:00", "gold_parse": "Time(2023-01-02T15:00:00)"}]
//! ```
//!
//! Regression test corpus (`load_test_corpus`), one `[target, reference time, sentences]` triple per target:
//!
//! ```json
//! [["Time(2023-01-02T15:00:00)", "2023-01-01T00:00", ["tomorrow at 3pm", "3pm tomorrow"]]]
//! ```

use crate::{Artifact, CorpusError};
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub(crate) const ENTRY_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
pub(crate) const TEST_CASE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// A sentence, the time it was written at, and its single correct value.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeParseEntry {
    pub text: String,
    pub ts: NaiveDateTime,
    pub gold: Artifact,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    text: String,
    ref_time: String,
    gold_parse: String,
}

impl TryFrom<RawEntry> for TimeParseEntry {
    type Error = CorpusError;

    fn try_from(raw: RawEntry) -> Result<Self, Self::Error> {
        Ok(TimeParseEntry {
            ts: parse_reference_time(&raw.ref_time, ENTRY_TIME_FORMAT)?,
            gold: parse_nb_string(&raw.gold_parse)?,
            text: raw.text,
        })
    }
}

/// Parse a `Time`, `Interval` or `Duration` from its canonical text form.
pub fn parse_nb_string(gold_parse: &str) -> Result<Artifact, CorpusError> {
    gold_parse.parse()
}

pub(crate) fn parse_reference_time(value: &str, format: &'static str) -> Result<NaiveDateTime, CorpusError> {
    NaiveDateTime::parse_from_str(value, format)
        .map_err(|_| CorpusError::ReferenceTime { value: value.to_string(), expected: format })
}

/// Load a time-parse corpus from disk. The file is closed once deserialized.
pub fn load_timeparse_corpus(path: impl AsRef<Path>) -> Result<Vec<TimeParseEntry>, CorpusError> {
    let entries = {
        let file = File::open(path.as_ref())?;
        load_timeparse_corpus_from_reader(BufReader::new(file))?
    };
    tracing::debug!(path = %path.as_ref().display(), entries = entries.len(), "loaded time-parse corpus");
    Ok(entries)
}

/// Load a time-parse corpus from any reader holding the JSON document.
pub fn load_timeparse_corpus_from_reader<R: Read>(reader: R) -> Result<Vec<TimeParseEntry>, CorpusError> {
    let raw: Vec<RawEntry> = serde_json::from_reader(reader)?;
    raw.into_iter().map(TimeParseEntry::try_from).collect()
}

/// Same as [`load_timeparse_corpus`], for an in-memory JSON document.
pub fn parse_timeparse_corpus(json: &str) -> Result<Vec<TimeParseEntry>, CorpusError> {
    load_timeparse_corpus_from_reader(json.as_bytes())
}

/// An expected value and the sentences that must all be able to produce it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "(String, String, Vec<String>)")]
pub struct CorpusTestCase {
    /// Canonical text of the expected value.
    pub target: String,
    /// Reference time as `YYYY-MM-DDTHH:MM`.
    pub reference_time: String,
    pub sentences: Vec<String>,
}

impl CorpusTestCase {
    pub fn new(target: &str, reference_time: &str, sentences: &[&str]) -> Self {
        Self {
            target: target.to_string(),
            reference_time: reference_time.to_string(),
            sentences: sentences.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl From<(String, String, Vec<String>)> for CorpusTestCase {
    fn from((target, reference_time, sentences): (String, String, Vec<String>)) -> Self {
        Self { target, reference_time, sentences }
    }
}

pub fn load_test_corpus(path: impl AsRef<Path>) -> Result<Vec<CorpusTestCase>, CorpusError> {
    let file = File::open(path.as_ref())?;
    load_test_corpus_from_reader(BufReader::new(file))
}

pub fn load_test_corpus_from_reader<R: Read>(reader: R) -> Result<Vec<CorpusTestCase>, CorpusError> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn parse_test_corpus(json: &str) -> Result<Vec<CorpusTestCase>, CorpusError> {
    load_test_corpus_from_reader(json.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Time;
    use crate::testing::datetime;
    use std::io::Write;

    const CORPUS: &str = r#"[
        {"text": "tomorrow at 3pm", "ref_time": "2023-01-01T00:00:00", "gold_parse": "Time(2023-01-02T15:00:00)"},
        {"text": "for three nights", "ref_time": "2023-01-01T12:30:00", "gold_parse": "Duration(3 nights)"}
    ]"#;

    #[test]
    fn parses_entries_with_gold_values() {
        let entries = parse_timeparse_corpus(CORPUS).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].text, "tomorrow at 3pm");
        assert_eq!(entries[0].ts, datetime(2023, 1, 1, 0, 0));
        assert_eq!(entries[0].gold, Artifact::Time(Time::from_datetime(datetime(2023, 1, 2, 15, 0))));
        assert_eq!(entries[1].gold.kind(), "Duration");
    }

    #[test]
    fn unknown_gold_prefix_is_a_format_error() {
        let json = r#"[{"text": "x", "ref_time": "2023-01-01T00:00:00", "gold_parse": "Span(1 day)"}]"#;
        assert!(matches!(parse_timeparse_corpus(json), Err(CorpusError::Format(_))));
    }

    #[test]
    fn reference_time_requires_seconds() {
        let json = r#"[{"text": "x", "ref_time": "2023-01-01T00:00", "gold_parse": "Duration(1 days)"}]"#;
        assert!(matches!(parse_timeparse_corpus(json), Err(CorpusError::ReferenceTime { .. })));
    }

    #[test]
    fn loads_corpus_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CORPUS.as_bytes()).unwrap();

        let entries = load_timeparse_corpus(file.path()).unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn loads_corpora_from_readers() {
        let entries = load_timeparse_corpus_from_reader(std::io::Cursor::new(CORPUS)).unwrap();
        assert_eq!(entries, parse_timeparse_corpus(CORPUS).unwrap());

        let json = br#"[["Duration(3 nights)", "2023-01-01T12:30", ["for three nights"]]]"#;
        let cases = load_test_corpus_from_reader(&json[..]).unwrap();
        assert_eq!(cases, vec![CorpusTestCase::new("Duration(3 nights)", "2023-01-01T12:30", &["for three nights"])]);
    }

    #[test]
    fn truncated_reader_is_a_json_error() {
        let err = load_timeparse_corpus_from_reader(&CORPUS.as_bytes()[..40]).unwrap_err();
        assert!(matches!(err, CorpusError::Json(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_timeparse_corpus(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CorpusError::Io(_)));
    }

    #[test]
    fn test_cases_deserialize_from_triples() {
        let json = r#"[["Time(2023-01-02T15:00:00)", "2023-01-01T00:00", ["tomorrow at 3pm", "3pm tomorrow"]]]"#;
        let cases = parse_test_corpus(json).unwrap();
        assert_eq!(
            cases,
            vec![CorpusTestCase::new("Time(2023-01-02T15:00:00)", "2023-01-01T00:00", &[
                "tomorrow at 3pm",
                "3pm tomorrow"
            ])]
        );
    }
}
