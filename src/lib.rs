//! Parser and validator of custom polling intervals.
#![deny(unsafe_code, warnings, missing_docs)]

//! This is a tiny crate, intended to:
//! - parse `;`-separated lists of _flexible_ and _scheduling_ intervals;
//! - validate every value, range and step, reporting the exact place of the first error;
//! - provide typed intervals and their canonical textual forms for storage.
//!
//! _This is not a scheduler._ It doesn't answer whether some timestamp is inside an interval.
//!
//! ## Interval format
//!
//! A source is one or more intervals separated by `;`, each of them is either flexible or scheduling.
//! Spaces aren't allowed anywhere.
//!
//! ### Flexible interval
//!
//! `delay/period` overrides the polling delay during the period, for example `50/1-5,09:00-18:00`.
//!
//! | Part   | Format          | Allowed values                                      |
//! |--------|-----------------|-----------------------------------------------------|
//! | delay  | `seconds`       | 0-86400, up to 5 digits                             |
//! | period | `d[-d],hh:mm-hh:mm` | days of week 1-7 (Monday is 1), time 0:00-24:00 |
//!
//! Period's start day can't be after its end day, start time should be before end time,
//! and `24:00` is allowed as an end time only. Minutes always have two digits.
//!
//! ### Scheduling interval
//!
//! A sequence of field groups, each group is a prefix followed by a comma-separated list of entries,
//! for example `md1-5,8-31`, `wd1-5h9-18/3m0`.
//! Groups are optional, but those present have to be in the order of the table below:
//!
//! | Group        | Prefix | Allowed values | Maximum step |
//! |--------------|--------|----------------|--------------|
//! | Day of month | `md`   | 1-31           | 30           |
//! | Day of week  | `wd`   | 1-7            | 6            |
//! | Hour         | `h`    | 0-23           | 23           |
//! | Minute       | `m`    | 0-59           | 59           |
//! | Second       | `s`    | 0-59           | 59           |
//!
//! Entry formats:
//! - `from` - particular value, i.e. `h9`;
//! - `from-to` - range of values, i.e. `wd1-5`;
//! - `from-to/step`, `from/step`, `/step` - repeating values, i.e. `h9-18/3`, `s10/5`, `m/5`;
//!   missing `from` and `to` mean the first and the last value of the group.
//!
//! Step can't exceed the maximum step of the group, nor `to - from` when both bounds are present,
//! so a single-value range accepts step `1` only.
//! Leading zeros are allowed within two digits (one digit for days of week).
//!
//! ## How to use
//!
//! The main entity of the crate is a [`Intervals`] structure, constructed with
//! [new()](Intervals::new) or any of `try_from`/`from_str` methods.
//! [`IntervalParser`] wraps the same parsing for callers which need a validity flag and a message,
//! and [`parse()`] is the bare parsing function.
//!
//! ### Example with `Intervals`
//! ```rust
//! use delay_flex::{Field, Intervals, Result};
//!
//! fn intervals() -> Result<()> {
//!     let intervals = Intervals::new("50/1-5,09:00-18:00;h1-5,7-10/03")?;
//!
//!     let flexible = intervals.flexible_only().next().unwrap();
//!     assert_eq!(flexible.delay_secs(), 50);
//!
//!     let scheduling = intervals.scheduling_only().next().unwrap();
//!     assert_eq!(scheduling.group(Field::Hour).len(), 2);
//!
//!     // Canonical form
//!     assert_eq!(intervals.to_string(), "50/1-5,9:00-18:00;h1-5,7-10/3");
//!
//!     Ok(())
//! }
//! # intervals().unwrap();
//! ```
//!
//! ### Example with `IntervalParser`
//! ```rust
//! use delay_flex::IntervalParser;
//!
//! let parser = IntervalParser::new("h1;wd9-9/9");
//!
//! assert!(!parser.is_valid());
//! assert_eq!(parser.error().unwrap(), "incorrect syntax near \"9-9/9\"");
//! assert!(parser.intervals().is_empty());
//! ```
//!
//! # Feature flags
//! * `serde`: adds [`Serialize`](https://docs.rs/serde/latest/serde/trait.Serialize.html) and [`Deserialize`](https://docs.rs/serde/latest/serde/trait.Deserialize.html) trait implementation for [`Intervals`].

/// Crate specific Error implementation.
pub mod error;
mod field;
mod interval;
mod intervals;
mod parser;
mod series;
mod utils;

// Re-export of public entities.
pub use error::{Cause, Error};
pub use field::Field;
pub use interval::{DayRange, FlexibleInterval, Interval, IntervalKind, Period, RangeStep, SchedulingInterval, TimeOfDay};
pub use intervals::{IntervalParser, Intervals};
pub use parser::parse;

/// Maximum delay of a flexible interval in seconds, one day.
pub const MAX_DELAY: u32 = 86400;

/// Maximum number of source characters quoted in an error message.
pub const MAX_SNIPPET_LENGTH: usize = 50;

/// Convenient alias for `Result`.
pub type Result<T, E = Error> = std::result::Result<T, E>;
