use crate::Cause;
use std::fmt::Display;

pub(crate) type ValueType = u32;

/// Field group of a scheduling interval.
///
/// Groups are ordered the same way they have to appear in a scheduling interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Day of month, `md`, values `1-31`.
    MonthDay,
    /// Day of week, `wd`, values `1-7` (Monday is 1).
    WeekDay,
    /// Hour, `h`, values `0-23`.
    Hour,
    /// Minute, `m`, values `0-59`.
    Minute,
    /// Second, `s`, values `0-59`.
    Second,
}

impl Field {
    /// All groups in the order of appearance.
    pub const ALL: [Field; 5] = [
        Field::MonthDay,
        Field::WeekDay,
        Field::Hour,
        Field::Minute,
        Field::Second,
    ];

    /// Group prefix in the source.
    pub fn prefix(&self) -> &'static str {
        match self {
            Field::MonthDay => "md",
            Field::WeekDay => "wd",
            Field::Hour => "h",
            Field::Minute => "m",
            Field::Second => "s",
        }
    }

    /// Inclusive bounds of the group values.
    pub fn min_max(&self) -> (u32, u32) {
        match self {
            Field::MonthDay => (1, 31),
            Field::WeekDay => (1, 7),
            Field::Hour => (0, 23),
            Field::Minute | Field::Second => (0, 59),
        }
    }

    /// Largest step the group accepts.
    pub fn max_step(&self) -> u32 {
        let (min, max) = self.min_max();
        max - min
    }

    /// Maximum number of digits of a value or a step.
    pub(crate) fn width(&self) -> usize {
        match self {
            Field::WeekDay => 1,
            _ => 2,
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::MonthDay => "day of month",
            Field::WeekDay => "day of week",
            Field::Hour => "hour",
            Field::Minute => "minute",
            Field::Second => "second",
        };
        write!(f, "{name}")
    }
}

/// Last control character consumed by the parser.
///
/// Every value is opened by one of them, validators use it to check that the value stands in the right place.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Separator {
    #[default]
    None,
    Comma,
    Dash,
    Slash,
    Colon,
    GroupPrefix(Field),
}

/// Validates the start of an entry, which opens a group or follows a comma.
pub(crate) fn validate_from(value: ValueType, field: Field, opened_by: Separator) -> Result<(), Cause> {
    match opened_by {
        Separator::Comma => {}
        Separator::GroupPrefix(prefix) if prefix == field => {}
        _ => return Err(Cause::MisplacedValue(field)),
    }

    let (min, max) = field.min_max();
    if value < min || value > max {
        return Err(Cause::ValueOutOfRange(field));
    }

    Ok(())
}

/// Validates the end of a range.
pub(crate) fn validate_to(from: ValueType, to: ValueType, field: Field, opened_by: Separator) -> Result<(), Cause> {
    if opened_by != Separator::Dash {
        return Err(Cause::MisplacedValue(field));
    }

    let (min, max) = field.min_max();
    if to < min || to > max {
        return Err(Cause::ValueOutOfRange(field));
    }
    if to < from {
        return Err(Cause::InvalidRange(field));
    }

    Ok(())
}

/// Validates a step against the range it applies to.
///
/// The step can't exceed the range when both its bounds are present,
/// so a single-value range accepts step `1` only.
pub(crate) fn validate_step(
    from: Option<ValueType>,
    to: Option<ValueType>,
    step: ValueType,
    field: Field,
    opened_by: Separator,
) -> Result<(), Cause> {
    if opened_by != Separator::Slash {
        return Err(Cause::MisplacedValue(field));
    }

    if step == 0 || step > field.max_step() {
        return Err(Cause::InvalidStep(field));
    }

    if let (Some(from), Some(to)) = (from, to) {
        if step > to.saturating_sub(from).max(1) {
            return Err(Cause::InvalidStep(field));
        }
    }

    Ok(())
}
