/// Generator of numbers series.
use crate::field::ValueType;

/// Iterates `start, start + step, ...` up to `end` inclusively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct SeriesWithStep {
    end: ValueType,
    step: ValueType,
    next: Option<ValueType>,
}

impl SeriesWithStep {
    /// Zero step or `start` after `end` produce an empty series.
    #[inline]
    pub(crate) fn new(start: ValueType, end: ValueType, step: ValueType) -> Self {
        let next = if step == 0 || start > end { None } else { Some(start) };
        Self { end, step, next }
    }
}

impl Iterator for SeriesWithStep {
    type Item = ValueType;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.checked_add(self.step).filter(|next| *next <= self.end);
        Some(current)
    }
}
