use crate::{
    interval::{FlexibleInterval, Interval, IntervalKind, SchedulingInterval},
    parser, Error, Result,
};
use std::{fmt::Display, str::FromStr};

/// Validated list of intervals parsed from a `;`-separated source.
///
/// For the source syntax and usage examples, please refer to the [crate documentation](crate).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
#[cfg_attr(feature = "serde", serde(into = "String"))]
pub struct Intervals {
    intervals: Vec<Interval>,
}

impl Intervals {
    /// Parses and validates provided `source` and constructs [`Intervals`] instance.
    ///
    /// Alternative way to construct [`Intervals`] is to use one of `try_from` or `from_str` methods.
    ///
    /// Returns [`Error`] if the source has any syntax or value errors.
    pub fn new(source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        let intervals = parser::parse(&source)?;
        Ok(Self { intervals })
    }

    /// All intervals in the source order.
    #[inline]
    pub fn as_slice(&self) -> &[Interval] {
        &self.intervals
    }

    /// Returns iterator over all intervals in the source order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    /// Number of intervals.
    #[inline]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Returns `true` if there are no intervals, which never happens for a parsed source.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Flexible intervals only, in the source order.
    pub fn flexible_only(&self) -> impl Iterator<Item = &FlexibleInterval> {
        self.intervals.iter().filter_map(Interval::as_flexible)
    }

    /// Scheduling intervals only, in the source order.
    pub fn scheduling_only(&self) -> impl Iterator<Item = &SchedulingInterval> {
        self.intervals.iter().filter_map(Interval::as_scheduling)
    }

    /// Canonical forms of the intervals of the specified kind.
    pub fn raw_of_kind(&self, kind: IntervalKind) -> Vec<String> {
        self.intervals
            .iter()
            .filter(|interval| interval.kind() == kind)
            .map(Interval::raw)
            .collect()
    }

    /// Consumes [`Intervals`] and returns the underlying list.
    #[inline]
    pub fn into_vec(self) -> Vec<Interval> {
        self.intervals
    }
}

impl IntoIterator for Intervals {
    type Item = Interval;
    type IntoIter = std::vec::IntoIter<Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}

impl<'a> IntoIterator for &'a Intervals {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl From<Intervals> for String {
    fn from(value: Intervals) -> Self {
        value.to_string()
    }
}

impl From<&Intervals> for String {
    fn from(value: &Intervals) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Intervals {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&String> for Intervals {
    type Error = Error;

    fn try_from(value: &String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Intervals {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl FromStr for Intervals {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl Display for Intervals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values = self.intervals.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(";");
        write!(f, "{}", values)
    }
}

/// Parses a source on construction and answers questions about it.
///
/// Intended for callers which need a validity flag and a message to show,
/// rather than a [`Result`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntervalParser {
    source: String,
    result: Result<Intervals>,
}

impl IntervalParser {
    /// Parses provided `source`, never fails.
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let result = Intervals::new(source.as_str());
        Self { source, result }
    }

    /// Parsed source.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns `true` if the whole source is valid.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.result.is_ok()
    }

    /// Diagnostic message, `None` for a valid source.
    pub fn error(&self) -> Option<String> {
        self.result.as_ref().err().map(Error::to_string)
    }

    /// Byte offset where parsing stopped, `None` for a valid source.
    pub fn error_position(&self) -> Option<usize> {
        self.result.as_ref().err().map(Error::position)
    }

    /// All intervals, empty for an invalid source.
    pub fn intervals(&self) -> &[Interval] {
        match &self.result {
            Ok(intervals) => intervals.as_slice(),
            Err(_) => &[],
        }
    }

    /// Canonical forms of the flexible intervals.
    pub fn flexible_intervals(&self) -> Vec<String> {
        self.raw_of_kind(IntervalKind::Flexible)
    }

    /// Canonical forms of the scheduling intervals.
    pub fn scheduling_intervals(&self) -> Vec<String> {
        self.raw_of_kind(IntervalKind::Scheduling)
    }

    /// Consumes the parser and returns the parsing result.
    #[inline]
    pub fn into_result(self) -> Result<Intervals> {
        self.result
    }

    fn raw_of_kind(&self, kind: IntervalKind) -> Vec<String> {
        match &self.result {
            Ok(intervals) => intervals.raw_of_kind(kind),
            Err(_) => vec![],
        }
    }
}
