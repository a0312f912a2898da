use crate::{
    field::{Field, ValueType},
    series::SeriesWithStep,
};
use chrono::{NaiveTime, TimeDelta, Weekday};
use std::fmt::Display;

/// Kind of a parsed interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IntervalKind {
    /// Override delay during a day/time period.
    Flexible,
    /// Cron-like selection of days, hours, minutes and seconds.
    Scheduling,
}

/// Single interval out of a `;`-separated source.
///
/// [`Display`] produces its canonical form, which parses back into an equal value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Interval {
    /// `delay/period`, i.e. `50/1-5,09:00-18:00`.
    Flexible(FlexibleInterval),
    /// Field groups, i.e. `wd1-5h9-18/3`.
    Scheduling(SchedulingInterval),
}

impl Interval {
    /// Returns kind of the interval.
    pub fn kind(&self) -> IntervalKind {
        match self {
            Interval::Flexible(_) => IntervalKind::Flexible,
            Interval::Scheduling(_) => IntervalKind::Scheduling,
        }
    }

    /// Canonical textual form of the interval.
    #[inline]
    pub fn raw(&self) -> String {
        self.to_string()
    }

    /// Returns flexible interval or `None` for scheduling one.
    pub fn as_flexible(&self) -> Option<&FlexibleInterval> {
        match self {
            Interval::Flexible(interval) => Some(interval),
            Interval::Scheduling(_) => None,
        }
    }

    /// Returns scheduling interval or `None` for flexible one.
    pub fn as_scheduling(&self) -> Option<&SchedulingInterval> {
        match self {
            Interval::Scheduling(interval) => Some(interval),
            Interval::Flexible(_) => None,
        }
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Interval::Flexible(interval) => write!(f, "{interval}"),
            Interval::Scheduling(interval) => write!(f, "{interval}"),
        }
    }
}

/// Polling delay which overrides the default one during the period.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlexibleInterval {
    delay: ValueType,
    period: Period,
}

impl FlexibleInterval {
    pub(crate) fn new(delay: ValueType, period: Period) -> Self {
        Self { delay, period }
    }

    /// Delay in seconds.
    pub fn delay_secs(&self) -> u32 {
        self.delay
    }

    /// Delay as a time delta.
    pub fn delay(&self) -> TimeDelta {
        TimeDelta::seconds(i64::from(self.delay))
    }

    /// Period when the delay is active.
    pub fn period(&self) -> &Period {
        &self.period
    }
}

impl Display for FlexibleInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.delay, self.period)
    }
}

/// Days of week and time of day when a flexible interval is active.
///
/// The time range applies to every day of the range.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Period {
    days: DayRange,
    start: TimeOfDay,
    end: TimeOfDay,
}

impl Period {
    pub(crate) fn new(days: DayRange, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { days, start, end }
    }

    /// Days of week.
    pub fn days(&self) -> &DayRange {
        &self.days
    }

    /// Start time, inclusively.
    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    /// End time, exclusively, may be `24:00`.
    pub fn end(&self) -> TimeOfDay {
        self.end
    }
}

impl Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}-{}", self.days, self.start, self.end)
    }
}

/// Inclusive range of days of week, Monday is 1 and Sunday is 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayRange {
    from: u8,
    to: u8,
}

impl DayRange {
    const WEEKDAYS: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    pub(crate) fn new(from: u8, to: u8) -> Self {
        Self { from, to }
    }

    /// First day of the range.
    pub fn from(&self) -> u8 {
        self.from
    }

    /// Last day of the range, equals to [`from`](Self::from) for a single day.
    pub fn to(&self) -> u8 {
        self.to
    }

    /// Days of the range in ascending order.
    pub fn weekdays(&self) -> impl Iterator<Item = Weekday> {
        let skip = usize::from(self.from.saturating_sub(1));
        let take = usize::from(self.to.saturating_sub(self.from)) + 1;
        Self::WEEKDAYS.into_iter().skip(skip).take(take)
    }
}

impl Display for DayRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.from == self.to {
            write!(f, "{}", self.from)
        } else {
            write!(f, "{}-{}", self.from, self.to)
        }
    }
}

/// Time of day with minute precision, `24:00` is valid as an end of period only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub(crate) fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    /// Hour, `0-24`.
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute, `0-59`.
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes since midnight, `1440` for `24:00`.
    pub fn minutes(&self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }

    /// Converts into [`NaiveTime`], `None` for `24:00`.
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

/// Cron-like interval: lists of entries for each field group which is present.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct SchedulingInterval {
    month_days: Vec<RangeStep>,
    week_days: Vec<RangeStep>,
    hours: Vec<RangeStep>,
    minutes: Vec<RangeStep>,
    seconds: Vec<RangeStep>,
}

impl SchedulingInterval {
    /// Entries of the specified group, empty if the group is absent.
    pub fn group(&self, field: Field) -> &[RangeStep] {
        match field {
            Field::MonthDay => &self.month_days,
            Field::WeekDay => &self.week_days,
            Field::Hour => &self.hours,
            Field::Minute => &self.minutes,
            Field::Second => &self.seconds,
        }
    }

    /// Days of month entries.
    pub fn month_days(&self) -> &[RangeStep] {
        &self.month_days
    }

    /// Days of week entries.
    pub fn week_days(&self) -> &[RangeStep] {
        &self.week_days
    }

    /// Hours entries.
    pub fn hours(&self) -> &[RangeStep] {
        &self.hours
    }

    /// Minutes entries.
    pub fn minutes(&self) -> &[RangeStep] {
        &self.minutes
    }

    /// Seconds entries.
    pub fn seconds(&self) -> &[RangeStep] {
        &self.seconds
    }

    pub(crate) fn push(&mut self, field: Field, entry: RangeStep) {
        let group = match field {
            Field::MonthDay => &mut self.month_days,
            Field::WeekDay => &mut self.week_days,
            Field::Hour => &mut self.hours,
            Field::Minute => &mut self.minutes,
            Field::Second => &mut self.seconds,
        };
        group.push(entry);
    }
}

impl Display for SchedulingInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for field in Field::ALL {
            let group = self.group(field);
            if group.is_empty() {
                continue;
            }

            let entries = group.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(",");
            write!(f, "{}{}", field.prefix(), entries)?;
        }
        Ok(())
    }
}

/// Single entry of a field group: value, range or stepped range.
///
/// At least one of `from` and `step` is present, `to` requires `from`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RangeStep {
    /// Start of the range or a single value.
    pub from: Option<u32>,
    /// End of the range, inclusively.
    pub to: Option<u32>,
    /// Step through the range.
    pub step: Option<u32>,
}

impl RangeStep {
    /// Constructs an entry.
    pub const fn new(from: Option<u32>, to: Option<u32>, step: Option<u32>) -> Self {
        Self { from, to, step }
    }

    /// Values selected by the entry, in ascending order.
    ///
    /// Missing `from` means the field minimum. Missing `to` means the field maximum
    /// if a step is present, and a single value otherwise.
    pub fn values(&self, field: Field) -> impl Iterator<Item = u32> {
        let (min, max) = field.min_max();
        let from = self.from.unwrap_or(min);
        let to = match (self.to, self.step) {
            (Some(to), _) => to,
            (None, Some(_)) => max,
            (None, None) => from,
        };
        SeriesWithStep::new(from, to, self.step.unwrap_or(1))
    }
}

impl Display for RangeStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(from) = self.from {
            write!(f, "{from}")?;
        }
        if let Some(to) = self.to {
            write!(f, "-{to}")?;
        }
        if let Some(step) = self.step {
            write!(f, "/{step}")?;
        }
        Ok(())
    }
}
