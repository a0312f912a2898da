use crate::field::Field;
use std::fmt::Display;
use thiserror::Error;

/// Crate specific Errors implementation.
///
/// Both variants mean the whole source is invalid: nothing parsed before the failure is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
pub enum Error {
    /// Source contains a character or value which can't be accepted at `position`.
    #[error("incorrect syntax near \"{near}\"")]
    IncorrectSyntax {
        /// Visible part of the source starting at `position`, shortened with `...` if needed.
        near: String,
        /// Byte offset where the offending part starts.
        position: usize,
        /// Rule that was violated.
        cause: Cause,
    },
    /// Source ends in the middle of an interval, or is empty.
    #[error("unexpected end of interval")]
    UnexpectedEnd {
        /// Byte offset where parsing stopped, which is the source length.
        position: usize,
    },
}

impl Error {
    /// Byte offset in the source where parsing stopped.
    pub fn position(&self) -> usize {
        match self {
            Error::IncorrectSyntax { position, .. } | Error::UnexpectedEnd { position } => *position,
        }
    }

    /// Violated rule, `None` for a premature end of the source.
    pub fn cause(&self) -> Option<Cause> {
        match self {
            Error::IncorrectSyntax { cause, .. } => Some(*cause),
            Error::UnexpectedEnd { .. } => None,
        }
    }
}

/// Rule which rejected a source.
///
/// It doesn't change the error message, it's intended for callers which need to distinguish failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cause {
    /// Character isn't allowed in the current position.
    UnexpectedCharacter,
    /// Flexible delay is greater than [`MAX_DELAY`](crate::MAX_DELAY).
    DelayOutOfRange,
    /// Flexible period day isn't in `1..=7`.
    DayOutOfRange,
    /// Flexible period time isn't a valid `hh:mm`.
    TimeOutOfRange,
    /// Flexible period starts on a later day than it ends.
    InvalidDayRange,
    /// Flexible period doesn't end after it starts.
    InvalidTimePeriod,
    /// Value is out of the field bounds.
    ValueOutOfRange(Field),
    /// Range end is less than its start.
    InvalidRange(Field),
    /// Step is zero or too large for its range.
    InvalidStep(Field),
    /// Value is opened by a separator which can't precede it.
    MisplacedValue(Field),
}

impl Display for Cause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cause::UnexpectedCharacter => write!(f, "unexpected character"),
            Cause::DelayOutOfRange => write!(f, "delay exceeds maximum"),
            Cause::DayOutOfRange => write!(f, "invalid day of week"),
            Cause::TimeOutOfRange => write!(f, "invalid time"),
            Cause::InvalidDayRange => write!(f, "start day is after end day"),
            Cause::InvalidTimePeriod => write!(f, "start time is not before end time"),
            Cause::ValueOutOfRange(field) => write!(f, "invalid {field} value"),
            Cause::InvalidRange(field) => write!(f, "invalid {field} range"),
            Cause::InvalidStep(field) => write!(f, "invalid {field} step"),
            Cause::MisplacedValue(field) => write!(f, "misplaced {field} value"),
        }
    }
}
