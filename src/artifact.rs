//! Structured time values and their canonical ("no-bound") text form.
//!
//! Every value prints as `<Kind>(<payload>)`:
//!
//! ```text
//! Time(2023-01-02T15:00:00)
//! Time(X-X-XTX:X:X (Mon/morning))
//! Interval(2023-01-02T09:00:00 - 2023-01-02T17:00:00)
//! Interval(None - 2023-01-02T17:00:00)
//! Duration(3 days)
//! ```
//!
//! Unknown components print as `X`. Numeric fields are unbounded (a year may be
//! negative or wider than four digits). Inside the part-of-day label, `\`, `/`,
//! `(`, `)` and `-` are backslash-escaped, and a label that is literally `X`
//! prints as `\X`. Parsing is the exact inverse of printing.

use crate::error::CorpusError;
use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use std::fmt;
use std::str::FromStr;

/// A (possibly partial) point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Time {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub second: Option<u32>,
    /// Day of week, for expressions like "on monday".
    pub dow: Option<Weekday>,
    /// Part of day label ("morning", "evening", ...).
    pub pod: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interval {
    pub start: Option<Time>,
    pub end: Option<Time>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationUnit {
    Minutes,
    Hours,
    Days,
    Nights,
    Weeks,
    Months,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration {
    pub value: u32,
    pub unit: DurationUnit,
}

/// Any resolved value a candidate parse can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    Time(Time),
    Interval(Interval),
    Duration(Duration),
}

impl Time {
    /// A fully specified time with no weekday or part-of-day annotation.
    pub fn from_datetime(dt: NaiveDateTime) -> Self {
        Time {
            year: Some(dt.year()),
            month: Some(dt.month()),
            day: Some(dt.day()),
            hour: Some(dt.hour()),
            minute: Some(dt.minute()),
            second: Some(dt.second()),
            dow: None,
            pod: None,
        }
    }

    pub fn payload(&self) -> String {
        let mut out = format!(
            "{}-{}-{}T{}:{}:{}",
            self.year.map_or_else(|| "X".to_string(), |y| format!("{:04}", y)),
            two_digits(self.month),
            two_digits(self.day),
            two_digits(self.hour),
            two_digits(self.minute),
            two_digits(self.second),
        );
        if self.dow.is_some() || self.pod.is_some() {
            let dow = self.dow.map_or_else(|| "X".to_string(), |d| d.to_string());
            let pod = self.pod.as_deref().map_or_else(|| "X".to_string(), escape_pod);
            out.push_str(&format!(" ({}/{})", dow, pod));
        }
        out
    }

    pub fn parse_payload(payload: &str) -> Option<Self> {
        let re = regex!(
            r"(?s)^(-?\d+|X)-(\d+|X)-(\d+|X)T(\d+|X):(\d+|X):(\d+|X)(?: \(([A-Za-z]+)/((?:[^\\/()\-]|\\.)*)\))?$"
        );
        let caps = re.captures(payload)?;
        let field = |i: usize| -> Option<Option<u32>> {
            match caps.get(i).map(|m| m.as_str()) {
                Some("X") => Some(None),
                Some(digits) => digits.parse().ok().map(Some),
                None => None,
            }
        };

        let year = match &caps[1] {
            "X" => None,
            digits => Some(digits.parse().ok()?),
        };
        let dow = match caps.get(7).map(|m| m.as_str()) {
            None | Some("X") => None,
            Some(name) => Some(name.parse::<Weekday>().ok()?),
        };
        let pod = match caps.get(8).map(|m| m.as_str()) {
            None | Some("X") => None,
            Some(label) => Some(unescape_pod(label)),
        };

        Some(Time {
            year,
            month: field(2)?,
            day: field(3)?,
            hour: field(4)?,
            minute: field(5)?,
            second: field(6)?,
            dow,
            pod,
        })
    }
}

fn two_digits(v: Option<u32>) -> String {
    v.map_or_else(|| "X".to_string(), |v| format!("{:02}", v))
}

fn escape_pod(label: &str) -> String {
    if label == "X" {
        return "\\X".to_string();
    }
    let mut out = String::with_capacity(label.len());
    for c in label.chars() {
        if matches!(c, '\\' | '/' | '(' | ')' | '-') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn unescape_pod(escaped: &str) -> String {
    let mut out = String::with_capacity(escaped.len());
    let mut chars = escaped.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.extend(chars.next()),
            c => out.push(c),
        }
    }
    out
}

impl Interval {
    pub fn payload(&self) -> String {
        let side = |t: &Option<Time>| t.as_ref().map_or_else(|| "None".to_string(), Time::payload);
        format!("{} - {}", side(&self.start), side(&self.end))
    }

    pub fn parse_payload(payload: &str) -> Option<Self> {
        let (start, end) = payload.split_once(" - ")?;
        let side = |s: &str| -> Option<Option<Time>> {
            if s == "None" { Some(None) } else { Time::parse_payload(s).map(Some) }
        };
        Some(Interval { start: side(start)?, end: side(end)? })
    }
}

impl DurationUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            DurationUnit::Minutes => "minutes",
            DurationUnit::Hours => "hours",
            DurationUnit::Days => "days",
            DurationUnit::Nights => "nights",
            DurationUnit::Weeks => "weeks",
            DurationUnit::Months => "months",
        }
    }
}

impl FromStr for DurationUnit {
    type Err = CorpusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minutes" => Ok(DurationUnit::Minutes),
            "hours" => Ok(DurationUnit::Hours),
            "days" => Ok(DurationUnit::Days),
            "nights" => Ok(DurationUnit::Nights),
            "weeks" => Ok(DurationUnit::Weeks),
            "months" => Ok(DurationUnit::Months),
            _ => Err(CorpusError::Format(s.to_string())),
        }
    }
}

impl Duration {
    pub fn payload(&self) -> String {
        format!("{} {}", self.value, self.unit.as_str())
    }

    pub fn parse_payload(payload: &str) -> Option<Self> {
        let (value, unit) = payload.split_once(' ')?;
        Some(Duration { value: value.parse().ok()?, unit: unit.parse().ok()? })
    }
}

impl Artifact {
    /// Name of the value kind, also used as the canonical prefix.
    pub fn kind(&self) -> &'static str {
        match self {
            Artifact::Time(_) => "Time",
            Artifact::Interval(_) => "Interval",
            Artifact::Duration(_) => "Duration",
        }
    }

    /// Canonical text form, prefixed by the kind name.
    pub fn nb_str(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let payload = match self {
            Artifact::Time(t) => t.payload(),
            Artifact::Interval(i) => i.payload(),
            Artifact::Duration(d) => d.payload(),
        };
        write!(f, "{}({})", self.kind(), payload)
    }
}

impl FromStr for Artifact {
    type Err = CorpusError;

    /// Dispatch on the kind prefix and parse the payload with the matching parser.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let payload = |prefix: &str| s.strip_prefix(prefix).and_then(|rest| rest.strip_suffix(')'));

        let parsed = if let Some(p) = payload("Time(") {
            Time::parse_payload(p).map(Artifact::Time)
        } else if let Some(p) = payload("Interval(") {
            Interval::parse_payload(p).map(Artifact::Interval)
        } else if let Some(p) = payload("Duration(") {
            Duration::parse_payload(p).map(Artifact::Duration)
        } else {
            None
        };

        parsed.ok_or_else(|| CorpusError::Format(s.to_string()))
    }
}

impl From<Time> for Artifact {
    fn from(t: Time) -> Self {
        Artifact::Time(t)
    }
}

impl From<Interval> for Artifact {
    fn from(i: Interval) -> Self {
        Artifact::Interval(i)
    }
}

impl From<Duration> for Artifact {
    fn from(d: Duration) -> Self {
        Artifact::Duration(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> Time {
        let dt = NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap();
        Time::from_datetime(dt)
    }

    #[test]
    fn time_prints_full_timestamp() {
        let v = Artifact::Time(at(2023, 1, 2, 15, 0));
        assert_eq!(v.nb_str(), "Time(2023-01-02T15:00:00)");
    }

    #[test]
    fn partial_time_uses_placeholders() {
        let t = Time { day: Some(5), dow: Some(Weekday::Mon), ..Time::default() };
        assert_eq!(Artifact::Time(t).nb_str(), "Time(X-X-05TX:X:X (Mon/X))");
    }

    #[test]
    fn canonical_text_round_trips_for_each_kind() {
        let values = vec![
            Artifact::Time(at(2023, 1, 2, 15, 0)),
            Artifact::Time(Time {
                month: Some(12),
                hour: Some(8),
                pod: Some("morning".to_string()),
                ..Time::default()
            }),
            Artifact::Interval(Interval { start: Some(at(2023, 1, 2, 9, 0)), end: Some(at(2023, 1, 2, 17, 30)) }),
            Artifact::Interval(Interval { start: None, end: Some(Time { hour: Some(17), ..Time::default() }) }),
            Artifact::Duration(Duration { value: 3, unit: DurationUnit::Nights }),
        ];

        for v in values {
            let text = v.nb_str();
            let back: Artifact = text.parse().unwrap();
            assert_eq!(back, v, "{}", text);
        }
    }

    #[test]
    fn boundary_values_round_trip() {
        let pods = ["", "X", "late - night", "a/b", "(evening)", "back\\slash", "-", "x\n y"];
        let mut values: Vec<Artifact> = pods
            .iter()
            .map(|pod| Artifact::Time(Time { pod: Some(pod.to_string()), ..Time::default() }))
            .collect();

        for year in [i32::MIN, -5, 0, 9999, 10000, i32::MAX] {
            values.push(Artifact::Time(Time { year: Some(year), ..Time::default() }));
        }
        values.push(Artifact::Time(Time {
            month: Some(123),
            day: Some(u32::MAX),
            hour: Some(0),
            minute: Some(1000),
            second: Some(60),
            dow: Some(Weekday::Sun),
            pod: Some("X".to_string()),
            ..Time::default()
        }));
        values.push(Artifact::Interval(Interval::default()));
        values.push(Artifact::Interval(Interval {
            start: Some(Time { year: Some(-5), pod: Some("late - night".to_string()), ..Time::default() }),
            end: Some(Time { year: Some(-12), ..Time::default() }),
        }));
        values.push(Artifact::Interval(Interval { start: None, end: Some(Time { year: Some(-1), ..Time::default() }) }));
        values.push(Artifact::Duration(Duration { value: 0, unit: DurationUnit::Minutes }));
        values.push(Artifact::Duration(Duration { value: u32::MAX, unit: DurationUnit::Months }));

        for v in values {
            let text = v.nb_str();
            let back: Artifact = text.parse().unwrap_or_else(|e| panic!("{}: {}", text, e));
            assert_eq!(back, v, "{}", text);
        }
    }

    #[test]
    fn part_of_day_is_escaped() {
        let t = Time { pod: Some("late - night".to_string()), ..Time::default() };
        assert_eq!(t.payload(), "X-X-XTX:X:X (X/late \\- night)");

        let literal_x = Time { pod: Some("X".to_string()), ..Time::default() };
        assert_eq!(literal_x.payload(), "X-X-XTX:X:X (X/\\X)");
        assert_eq!(Time::parse_payload("X-X-XTX:X:X (X/X)"), Some(Time::default()));
    }

    #[test]
    fn parses_interval_with_open_start() {
        let v: Artifact = "Interval(None - 2023-01-02T17:00:00)".parse().unwrap();
        match v {
            Artifact::Interval(Interval { start: None, end: Some(end) }) => assert_eq!(end.hour, Some(17)),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_prefix() {
        let err = "Moment(2023-01-02T15:00:00)".parse::<Artifact>().unwrap_err();
        assert!(matches!(err, CorpusError::Format(ref s) if s == "Moment(2023-01-02T15:00:00)"));
    }

    #[test]
    fn rejects_malformed_payloads() {
        for bad in [
            "Time(2023-01-02 15:00)",
            "Interval(None)",
            "Time(X-X-XTX:X:X (X/a/b))",
            "Duration(three days)",
            "Duration(3 fortnights)",
            "Time(2023-01-02T15:00:00",
        ] {
            assert!(bad.parse::<Artifact>().is_err(), "{}", bad);
        }
    }
}
