/// Common utility functions.
use crate::{field::ValueType, MAX_SNIPPET_LENGTH};

/// Number which is being read digit by digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Number {
    pub(crate) value: ValueType,
    pub(crate) digits: usize,
    /// Byte offset of the first digit.
    pub(crate) start: usize,
}

impl Number {
    pub(crate) fn new(start: usize) -> Self {
        Self {
            value: 0,
            digits: 0,
            start,
        }
    }

    /// Appends a decimal digit with bounds validation.
    ///
    /// Returns `None` if the number would have more than `width` digits or would exceed `max`,
    /// in this case the number is left unchanged.
    pub(crate) fn push_digit(&mut self, digit: u8, max: ValueType, width: Option<usize>) -> Option<ValueType> {
        if width.is_some_and(|width| self.digits >= width) {
            return None;
        }

        let value = self
            .value
            .checked_mul(10)?
            .checked_add(ValueType::from(digit))
            .filter(|value| *value <= max)?;

        self.value = value;
        self.digits += 1;
        Some(value)
    }
}

/// Returns the visible part of the source, starting from `position`, to show in a diagnostic.
///
/// Long tails are cut to [`MAX_SNIPPET_LENGTH`] characters and marked with an ellipsis.
pub(crate) fn snippet(source: &str, position: usize) -> String {
    let tail = source.get(position..).unwrap_or_default();
    let mut chars = tail.chars();
    let mut near: String = chars.by_ref().take(MAX_SNIPPET_LENGTH).collect();
    if chars.next().is_some() {
        near.push_str("...");
    }
    near
}
