use crate::{
    field::{validate_from, validate_step, validate_to, Field, Separator, ValueType},
    interval::{DayRange, FlexibleInterval, Interval, Period, RangeStep, SchedulingInterval, TimeOfDay},
    utils::{self, Number},
    Cause, Error, Result, MAX_DELAY,
};

/// Digits of the longest delay, `86400`.
const DELAY_WIDTH: usize = 5;

/// Parses `;`-separated list of flexible and scheduling intervals.
///
/// The source is read once, left to right. The first rule violation rejects the whole source,
/// intervals closed before it are discarded.
pub fn parse(source: &str) -> Result<Vec<Interval>> {
    let result = Parser::new(source).run();
    match &result {
        Ok(intervals) => log::trace!("parsed {} interval(s) from {source:?}", intervals.len()),
        Err(error) => log::debug!("rejected intervals source {source:?}: {error}"),
    }
    result
}

/// Parser state, i.e. the slot which the next digit is appended to.
///
/// Flexible states are listed in order of appearance.
/// Scheduling states carry the field group they belong to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
enum State {
    #[default]
    New,
    Delay,
    DayFrom,
    DayTo,
    HourFrom,
    MinuteFrom,
    HourTo,
    MinuteTo,
    From(Field),
    To(Field),
    Step(Field),
}

impl State {
    /// Maximum value and maximum number of digits which the slot accepts.
    fn bounds(&self) -> (ValueType, Option<usize>) {
        match self {
            // digit in `New` opens a delay
            State::New | State::Delay => (MAX_DELAY, Some(DELAY_WIDTH)),
            State::DayFrom | State::DayTo => (7, Some(1)),
            State::HourFrom => (23, Some(2)),
            State::HourTo => (24, Some(2)),
            State::MinuteFrom | State::MinuteTo => (59, Some(2)),
            State::From(field) | State::To(field) => (field.min_max().1, Some(field.width())),
            State::Step(field) => (field.max_step(), Some(field.width())),
        }
    }

    /// Cause to report when a digit doesn't fit into the bounds.
    fn overflow(&self) -> Cause {
        match self {
            State::New | State::Delay => Cause::DelayOutOfRange,
            State::DayFrom | State::DayTo => Cause::DayOutOfRange,
            State::HourFrom | State::MinuteFrom | State::HourTo | State::MinuteTo => Cause::TimeOutOfRange,
            State::From(field) | State::To(field) => Cause::ValueOutOfRange(*field),
            State::Step(field) => Cause::InvalidStep(*field),
        }
    }

    fn field(&self) -> Option<Field> {
        match self {
            State::From(field) | State::To(field) | State::Step(field) => Some(*field),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Token {
    Digit(u8),
    Separator(Separator),
    Semicolon,
    End,
    Other,
}

impl Token {
    /// Reads a token from the start of `input`, returns it with its length in bytes.
    fn lex(input: &[u8]) -> (Token, usize) {
        match input {
            [] => (Token::End, 0),
            [b'm', b'd', ..] => (Token::Separator(Separator::GroupPrefix(Field::MonthDay)), 2),
            [b'w', b'd', ..] => (Token::Separator(Separator::GroupPrefix(Field::WeekDay)), 2),
            [b'h', ..] => (Token::Separator(Separator::GroupPrefix(Field::Hour)), 1),
            [b'm', ..] => (Token::Separator(Separator::GroupPrefix(Field::Minute)), 1),
            [b's', ..] => (Token::Separator(Separator::GroupPrefix(Field::Second)), 1),
            [digit @ b'0'..=b'9', ..] => (Token::Digit(*digit - b'0'), 1),
            [b',', ..] => (Token::Separator(Separator::Comma), 1),
            [b'-', ..] => (Token::Separator(Separator::Dash), 1),
            [b'/', ..] => (Token::Separator(Separator::Slash), 1),
            [b':', ..] => (Token::Separator(Separator::Colon), 1),
            [b';', ..] => (Token::Semicolon, 1),
            [_, ..] => (Token::Other, 1),
        }
    }
}

/// What the driver does with the consumed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Action {
    /// Append a digit to the pending number.
    Digit(u8),
    /// Start a scheduling interval, nothing is pending yet.
    Open(Separator),
    /// Close the pending number into the slot of the current state.
    Close(Separator),
    /// Close the pending number and append the pending entry to its group.
    Commit(Separator),
    /// Close everything and emit the interval.
    Emit,
}

/// Transition table: next state and the action for the token, `None` if the token isn't allowed.
fn transition(state: State, token: Token) -> Option<(State, Action)> {
    use Separator::{Colon, Comma, Dash, GroupPrefix, Slash};

    let next = match (state, token) {
        (State::New, Token::Digit(digit)) => (State::Delay, Action::Digit(digit)),
        (_, Token::Digit(digit)) => (state, Action::Digit(digit)),
        (State::New, Token::Separator(GroupPrefix(field))) => (State::From(field), Action::Open(GroupPrefix(field))),

        (State::Delay, Token::Separator(Slash)) => (State::DayFrom, Action::Close(Slash)),
        (State::DayFrom, Token::Separator(Dash)) => (State::DayTo, Action::Close(Dash)),
        (State::DayFrom | State::DayTo, Token::Separator(Comma)) => (State::HourFrom, Action::Close(Comma)),
        (State::HourFrom, Token::Separator(Colon)) => (State::MinuteFrom, Action::Close(Colon)),
        (State::MinuteFrom, Token::Separator(Dash)) => (State::HourTo, Action::Close(Dash)),
        (State::HourTo, Token::Separator(Colon)) => (State::MinuteTo, Action::Close(Colon)),
        (State::MinuteTo, Token::Semicolon | Token::End) => (State::New, Action::Emit),

        (State::From(field), Token::Separator(Dash)) => (State::To(field), Action::Close(Dash)),
        (State::From(field) | State::To(field), Token::Separator(Slash)) => (State::Step(field), Action::Close(Slash)),
        (State::From(field) | State::To(field) | State::Step(field), Token::Separator(Comma)) => {
            (State::From(field), Action::Commit(Comma))
        }
        (State::From(field) | State::To(field) | State::Step(field), Token::Separator(GroupPrefix(group)))
            if group > field =>
        {
            (State::From(group), Action::Commit(GroupPrefix(group)))
        }
        (State::From(_) | State::To(_) | State::Step(_), Token::Semicolon | Token::End) => (State::New, Action::Emit),

        _ => return None,
    };

    Some(next)
}

/// Values of a flexible interval under construction.
#[derive(Debug, Default)]
struct FlexibleScratch {
    delay: Option<ValueType>,
    day_from: Option<ValueType>,
    day_to: Option<ValueType>,
    days_start: usize,
    hour_from: Option<ValueType>,
    minute_from: Option<ValueType>,
    hour_to: Option<ValueType>,
    minute_to: Option<ValueType>,
    time_start: usize,
}

impl FlexibleScratch {
    fn build(&self) -> Option<FlexibleInterval> {
        let day_from = self.day_from?;
        let days = DayRange::new(day_from as u8, self.day_to.unwrap_or(day_from) as u8);
        let start = TimeOfDay::new(self.hour_from? as u8, self.minute_from? as u8);
        let end = TimeOfDay::new(self.hour_to? as u8, self.minute_to? as u8);

        Some(FlexibleInterval::new(self.delay?, Period::new(days, start, end)))
    }
}

/// Everything the driver accumulates for a single interval.
#[derive(Debug, Default)]
struct IntervalBuilder {
    number: Option<Number>,
    opened_by: Separator,
    flexible: FlexibleScratch,
    entry: RangeStep,
    entry_start: usize,
    groups: SchedulingInterval,
}

impl IntervalBuilder {
    #[inline]
    fn reset(&mut self) {
        *self = Self::default();
    }
}

struct Parser<'a> {
    source: &'a str,
    position: usize,
    state: State,
    builder: IntervalBuilder,
    intervals: Vec<Interval>,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            state: State::New,
            builder: IntervalBuilder::default(),
            intervals: vec![],
        }
    }

    fn run(mut self) -> Result<Vec<Interval>> {
        loop {
            let (token, length) = Token::lex(&self.source.as_bytes()[self.position..]);
            let Some((next, action)) = transition(self.state, token) else {
                return Err(self.unexpected(token));
            };

            match action {
                Action::Digit(digit) => self.push_digit(next, digit)?,
                Action::Open(separator) => self.builder.opened_by = separator,
                Action::Close(separator) => {
                    self.close(token)?;
                    self.builder.opened_by = separator;
                }
                Action::Commit(separator) => {
                    self.close(token)?;
                    self.commit();
                    self.builder.opened_by = separator;
                }
                Action::Emit => self.emit(token)?,
            }
            self.state = next;

            if token == Token::End {
                return Ok(self.intervals);
            }
            self.position += length;
        }
    }

    fn push_digit(&mut self, state: State, digit: u8) -> Result<()> {
        let (max, width) = state.bounds();
        let position = self.position;
        let number = self.builder.number.get_or_insert_with(|| Number::new(position));
        let start = number.start;

        if number.push_digit(digit, max, width).is_none() {
            return Err(self.syntax_error(start, state.overflow()));
        }
        Ok(())
    }

    /// Moves the pending number into its slot after validation.
    fn close(&mut self, token: Token) -> Result<()> {
        match self.builder.number.take() {
            Some(number) => self
                .store(number)
                .map_err(|(position, cause)| self.syntax_error(position, cause)),
            // an entry may start with a step
            None if matches!(self.state, State::From(_)) && token == Token::Separator(Separator::Slash) => {
                self.builder.entry_start = self.position;
                Ok(())
            }
            None => Err(self.unexpected(token)),
        }
    }

    /// Stores a closed number, or returns the position and the cause of the violation.
    fn store(&mut self, number: Number) -> std::result::Result<(), (usize, Cause)> {
        let builder = &mut self.builder;
        let flexible = &mut builder.flexible;
        let value = number.value;

        match self.state {
            State::New => return Err((number.start, Cause::UnexpectedCharacter)),
            State::Delay => flexible.delay = Some(value),
            State::DayFrom => {
                if value < 1 {
                    return Err((number.start, Cause::DayOutOfRange));
                }
                flexible.days_start = number.start;
                flexible.day_from = Some(value);
            }
            State::DayTo => {
                if value < 1 {
                    return Err((number.start, Cause::DayOutOfRange));
                }
                if flexible.day_from.is_some_and(|from| value < from) {
                    return Err((flexible.days_start, Cause::InvalidDayRange));
                }
                flexible.day_to = Some(value);
            }
            State::HourFrom => {
                flexible.time_start = number.start;
                flexible.hour_from = Some(value);
            }
            State::MinuteFrom => {
                if number.digits != 2 {
                    return Err((number.start, Cause::TimeOutOfRange));
                }
                flexible.minute_from = Some(value);
            }
            State::HourTo => flexible.hour_to = Some(value),
            State::MinuteTo => {
                if number.digits != 2 {
                    return Err((number.start, Cause::TimeOutOfRange));
                }
                if flexible.hour_to == Some(24) && value != 0 {
                    return Err((flexible.time_start, Cause::TimeOutOfRange));
                }

                let start = flexible.hour_from.unwrap_or_default() * 60 + flexible.minute_from.unwrap_or_default();
                let end = flexible.hour_to.unwrap_or_default() * 60 + value;
                if start >= end {
                    return Err((flexible.time_start, Cause::InvalidTimePeriod));
                }
                flexible.minute_to = Some(value);
            }
            State::From(field) => {
                validate_from(value, field, builder.opened_by).map_err(|cause| (number.start, cause))?;
                builder.entry_start = number.start;
                builder.entry.from = Some(value);
            }
            State::To(field) => {
                let Some(from) = builder.entry.from else {
                    return Err((number.start, Cause::MisplacedValue(field)));
                };
                validate_to(from, value, field, builder.opened_by).map_err(|cause| match cause {
                    Cause::ValueOutOfRange(_) => (number.start, cause),
                    _ => (builder.entry_start, cause),
                })?;
                builder.entry.to = Some(value);
            }
            State::Step(field) => {
                validate_step(builder.entry.from, builder.entry.to, value, field, builder.opened_by)
                    .map_err(|cause| (builder.entry_start, cause))?;
                builder.entry.step = Some(value);
            }
        }

        Ok(())
    }

    /// Appends the pending entry to the group of the current state.
    fn commit(&mut self) {
        if let Some(field) = self.state.field() {
            let entry = std::mem::take(&mut self.builder.entry);
            self.builder.groups.push(field, entry);
        }
    }

    fn emit(&mut self, token: Token) -> Result<()> {
        self.close(token)?;

        let interval = if self.state.field().is_some() {
            self.commit();
            Interval::Scheduling(std::mem::take(&mut self.builder.groups))
        } else {
            let flexible = self.builder.flexible.build().ok_or_else(|| self.unexpected(token))?;
            Interval::Flexible(flexible)
        };

        log::trace!(
            "closed {:?} interval {interval} at offset {}",
            interval.kind(),
            self.position
        );
        self.intervals.push(interval);
        self.builder.reset();

        Ok(())
    }

    fn unexpected(&self, token: Token) -> Error {
        if token == Token::End {
            Error::UnexpectedEnd {
                position: self.source.len(),
            }
        } else {
            self.syntax_error(self.position, Cause::UnexpectedCharacter)
        }
    }

    fn syntax_error(&self, position: usize, cause: Cause) -> Error {
        Error::IncorrectSyntax {
            near: utils::snippet(self.source, position),
            position,
            cause,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IntervalKind;
    use rstest::rstest;
    use rstest_reuse::{apply, template};

    #[rstest]
    #[case("", Token::End, 0)]
    #[case("md1", Token::Separator(Separator::GroupPrefix(Field::MonthDay)), 2)]
    #[case("m1", Token::Separator(Separator::GroupPrefix(Field::Minute)), 1)]
    #[case("wd", Token::Separator(Separator::GroupPrefix(Field::WeekDay)), 2)]
    #[case("w1", Token::Other, 1)]
    #[case("7-", Token::Digit(7), 1)]
    #[case(";", Token::Semicolon, 1)]
    #[case(" ", Token::Other, 1)]
    fn test_lex(#[case] input: &str, #[case] token: Token, #[case] length: usize) {
        assert_eq!(Token::lex(input.as_bytes()), (token, length));
    }

    #[rstest]
    #[case(State::New, Token::Digit(5), Some((State::Delay, Action::Digit(5))))]
    #[case(State::New, Token::Semicolon, None)]
    #[case(State::New, Token::End, None)]
    #[case(State::Delay, Token::Separator(Separator::Slash), Some((State::DayFrom, Action::Close(Separator::Slash))))]
    #[case(State::DayTo, Token::Separator(Separator::Dash), None)]
    #[case(State::MinuteTo, Token::End, Some((State::New, Action::Emit)))]
    #[case(State::HourTo, Token::End, None)]
    #[case(
        State::From(Field::Hour),
        Token::Separator(Separator::GroupPrefix(Field::Second)),
        Some((State::From(Field::Second), Action::Commit(Separator::GroupPrefix(Field::Second))))
    )]
    #[case(State::Step(Field::Hour), Token::Separator(Separator::GroupPrefix(Field::WeekDay)), None)]
    #[case(State::To(Field::Hour), Token::Separator(Separator::GroupPrefix(Field::Hour)), None)]
    #[case(State::Step(Field::Hour), Token::Separator(Separator::Slash), None)]
    #[case(State::To(Field::Hour), Token::Separator(Separator::Dash), None)]
    fn test_transition(#[case] state: State, #[case] token: Token, #[case] expected: Option<(State, Action)>) {
        assert_eq!(transition(state, token), expected);
    }

    #[template]
    #[rstest]
    #[case("86400/7-7,23:59-24:00", "86400/7,23:59-24:00")]
    #[case("50/1-5,09:00-18:00", "50/1-5,9:00-18:00")]
    #[case("0/1-7,00:00-24:00", "0/1-7,0:00-24:00")]
    #[case("86400/7,0:01-0:02", "86400/7,0:01-0:02")]
    #[case("00060/3,9:00-9:01", "60/3,9:00-9:01")]
    #[case("wd1-7/6", "wd1-7/6")]
    #[case("md1-5,8-31", "md1-5,8-31")]
    #[case("h1-5,7-10/03", "h1-5,7-10/3")]
    #[case("md01wd1h0m0s0", "md1wd1h0m0s0")]
    #[case("m/5", "m/5")]
    #[case("s10/5", "s10/5")]
    #[case("s50/10", "s50/10")]
    #[case("h23/2", "h23/2")]
    #[case("md/30", "md/30")]
    #[case("wd/6", "wd/6")]
    #[case("h5-5/1", "h5-5/1")]
    #[case("h9-18/3m30", "h9-18/3m30")]
    #[case("wd1,3,5h/2", "wd1,3,5h/2")]
    #[case("h1;wd2", "h1;wd2")]
    #[case("50/1,1:00-2:00;md1;s59", "50/1,1:00-2:00;md1;s59")]
    fn valid_sources(#[case] input: &str, #[case] expected: &str) {}

    #[apply(valid_sources)]
    fn test_parse_canonical_form(#[case] input: &str, #[case] expected: &str) {
        let intervals = parse(input);
        assert!(intervals.is_ok(), "input = {input}, error = {}", intervals.err().unwrap());

        let canonical = intervals
            .unwrap()
            .iter()
            .map(|i| i.raw())
            .collect::<Vec<_>>()
            .join(";");
        assert_eq!(canonical, expected, "input = {input}");
    }

    #[apply(valid_sources)]
    fn test_parse_canonical_form_again(#[case] input: &str, #[case] expected: &str) {
        let first = parse(input).unwrap();
        let second = parse(expected).unwrap();
        assert_eq!(first, second, "input = {input}");
    }

    #[template]
    #[rstest]
    #[case("86401/7,0:01-0:02", 0, Some(Cause::DelayOutOfRange))]
    #[case("000060/3,9:00-9:01", 0, Some(Cause::DelayOutOfRange))]
    #[case("wd9-9/9", 2, Some(Cause::ValueOutOfRange(Field::WeekDay)))]
    #[case("wd0", 2, Some(Cause::ValueOutOfRange(Field::WeekDay)))]
    #[case("wd1-8", 4, Some(Cause::ValueOutOfRange(Field::WeekDay)))]
    #[case("wd01", 2, Some(Cause::ValueOutOfRange(Field::WeekDay)))]
    #[case("md0", 2, Some(Cause::ValueOutOfRange(Field::MonthDay)))]
    #[case("md32", 2, Some(Cause::ValueOutOfRange(Field::MonthDay)))]
    #[case("md1-0", 4, Some(Cause::ValueOutOfRange(Field::MonthDay)))]
    #[case("h24", 1, Some(Cause::ValueOutOfRange(Field::Hour)))]
    #[case("h001", 1, Some(Cause::ValueOutOfRange(Field::Hour)))]
    #[case("m60", 1, Some(Cause::ValueOutOfRange(Field::Minute)))]
    #[case("h5-4", 1, Some(Cause::InvalidRange(Field::Hour)))]
    #[case("h7-10/4", 1, Some(Cause::InvalidStep(Field::Hour)))]
    #[case("h5-5/2", 1, Some(Cause::InvalidStep(Field::Hour)))]
    #[case("h/0", 1, Some(Cause::InvalidStep(Field::Hour)))]
    #[case("h/24", 2, Some(Cause::InvalidStep(Field::Hour)))]
    #[case("wd/7", 3, Some(Cause::InvalidStep(Field::WeekDay)))]
    #[case("md/31", 3, Some(Cause::InvalidStep(Field::MonthDay)))]
    #[case("h1-5,7-10/04", 5, Some(Cause::InvalidStep(Field::Hour)))]
    #[case("0/0,0:00-24:00", 2, Some(Cause::DayOutOfRange))]
    #[case("60/8,0:00-1:00", 3, Some(Cause::DayOutOfRange))]
    #[case("60/5-3,0:00-1:00", 3, Some(Cause::InvalidDayRange))]
    #[case("60/1,24:00-24:00", 5, Some(Cause::TimeOutOfRange))]
    #[case("60/1,0:00-24:01", 5, Some(Cause::TimeOutOfRange))]
    #[case("60/1,0:60-1:00", 7, Some(Cause::TimeOutOfRange))]
    #[case("60/1,0:5-1:00", 7, Some(Cause::TimeOutOfRange))]
    #[case("60/1,0:005-1:00", 7, Some(Cause::TimeOutOfRange))]
    #[case("60/1,10:00-9:59", 5, Some(Cause::InvalidTimePeriod))]
    #[case("60/1,10:00-10:00", 5, Some(Cause::InvalidTimePeriod))]
    #[case("60/1,25:00-26:00", 5, Some(Cause::TimeOutOfRange))]
    #[case("", 0, None)]
    #[case("h1;", 3, None)]
    #[case("h", 1, None)]
    #[case("h5-", 3, None)]
    #[case("60/1,0:00-1:0", 12, Some(Cause::TimeOutOfRange))]
    #[case("60/1", 4, None)]
    #[case("60", 2, None)]
    #[case(";h1", 0, Some(Cause::UnexpectedCharacter))]
    #[case("h1;;h2", 3, Some(Cause::UnexpectedCharacter))]
    #[case(" h1", 0, Some(Cause::UnexpectedCharacter))]
    #[case("h1 ", 2, Some(Cause::UnexpectedCharacter))]
    #[case("x", 0, Some(Cause::UnexpectedCharacter))]
    #[case("w1", 0, Some(Cause::UnexpectedCharacter))]
    #[case("hm5", 1, Some(Cause::UnexpectedCharacter))]
    #[case("h,5", 1, Some(Cause::UnexpectedCharacter))]
    #[case("h-5", 1, Some(Cause::UnexpectedCharacter))]
    #[case("h5-10-12", 5, Some(Cause::UnexpectedCharacter))]
    #[case("h5/2-3", 4, Some(Cause::UnexpectedCharacter))]
    #[case("h5//2", 3, Some(Cause::UnexpectedCharacter))]
    #[case("h1md1", 2, Some(Cause::UnexpectedCharacter))]
    #[case("h1h2", 2, Some(Cause::UnexpectedCharacter))]
    #[case("wd1md1", 3, Some(Cause::UnexpectedCharacter))]
    #[case("s1m1", 2, Some(Cause::UnexpectedCharacter))]
    #[case("60/,0:00-1:00", 3, Some(Cause::UnexpectedCharacter))]
    #[case("60/1-,0:00-1:00", 5, Some(Cause::UnexpectedCharacter))]
    #[case("60/1,:00-1:00", 5, Some(Cause::UnexpectedCharacter))]
    #[case("60/1,0:00-1:00;", 15, None)]
    #[case("60/1,0:00-1:00h1", 14, Some(Cause::UnexpectedCharacter))]
    #[case("60/1,0:00-1:00,", 14, Some(Cause::UnexpectedCharacter))]
    #[case("60/1,0:00-:00", 10, Some(Cause::UnexpectedCharacter))]
    #[case("60/1,0:00-1:;", 12, Some(Cause::UnexpectedCharacter))]
    #[case("h1;60/1,0:00-1:00;wd8", 20, Some(Cause::ValueOutOfRange(Field::WeekDay)))]
    #[case("h1;ąę", 3, Some(Cause::UnexpectedCharacter))]
    fn invalid_sources(#[case] input: &str, #[case] position: usize, #[case] cause: Option<Cause>) {}

    #[apply(invalid_sources)]
    fn test_parse_invalid(#[case] input: &str, #[case] position: usize, #[case] cause: Option<Cause>) {
        let error = parse(input).err();
        assert!(error.is_some(), "input = {input}");

        let error = error.unwrap();
        assert_eq!(error.position(), position, "input = {input}, error = {error}");
        assert_eq!(error.cause(), cause, "input = {input}, error = {error}");
    }

    #[apply(invalid_sources)]
    fn test_parse_invalid_message(#[case] input: &str, #[case] position: usize, #[case] cause: Option<Cause>) {
        let error = parse(input).unwrap_err();
        let expected = match cause {
            Some(_) => format!("incorrect syntax near \"{}\"", &input[position..]),
            None => "unexpected end of interval".to_string(),
        };
        assert_eq!(error.to_string(), expected, "input = {input}");
    }

    #[test]
    fn test_parse_flexible_scenario() {
        let intervals = parse("86400/7-7,23:59-24:00").unwrap();
        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].kind(), IntervalKind::Flexible);

        let flexible = intervals[0].as_flexible().unwrap();
        assert_eq!(flexible.delay_secs(), 86400);
        assert_eq!(flexible.period().days(), &DayRange::new(7, 7));
        assert_eq!(flexible.period().start(), TimeOfDay::new(23, 59));
        assert_eq!(flexible.period().end(), TimeOfDay::new(24, 0));
    }

    #[rstest]
    #[case("wd1-7/6", Field::WeekDay, vec![RangeStep::new(Some(1), Some(7), Some(6))])]
    #[case("md1-5,8-31", Field::MonthDay, vec![RangeStep::new(Some(1), Some(5), None), RangeStep::new(Some(8), Some(31), None)])]
    #[case("h1-5,7-10/03", Field::Hour, vec![RangeStep::new(Some(1), Some(5), None), RangeStep::new(Some(7), Some(10), Some(3))])]
    #[case("m/5", Field::Minute, vec![RangeStep::new(None, None, Some(5))])]
    #[case("wd1h2s30/10", Field::Second, vec![RangeStep::new(Some(30), None, Some(10))])]
    fn test_parse_scheduling_scenario(#[case] input: &str, #[case] field: Field, #[case] expected: Vec<RangeStep>) {
        let intervals = parse(input).unwrap();
        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].kind(), IntervalKind::Scheduling);
        assert_eq!(intervals[0].as_scheduling().unwrap().group(field), expected.as_slice());
    }

    #[test]
    fn test_parse_multiple_intervals() {
        let a = "50/1-5,9:00-18:00";
        let b = "wd6-7h0-23/2";
        let both = parse(&format!("{a};{b}")).unwrap();

        assert_eq!(both.len(), 2);
        assert_eq!(both[0], parse(a).unwrap()[0]);
        assert_eq!(both[1], parse(b).unwrap()[0]);
    }

    #[test]
    fn test_parse_delay_digits_are_limited() {
        let input = format!("{}1/1,0:00-1:00", "0".repeat(100_000));
        let error = parse(&input).unwrap_err();
        assert_eq!(error.position(), 0);
        assert_eq!(error.cause(), Some(Cause::DelayOutOfRange));
        assert_eq!(error.to_string(), format!("incorrect syntax near \"{}...\"", "0".repeat(50)));
    }

    #[test]
    fn test_parse_long_error_snippet() {
        let input = format!("h1;x{}", "1".repeat(80));
        let error = parse(&input).unwrap_err();
        assert_eq!(error.position(), 3);
        assert_eq!(error.to_string(), format!("incorrect syntax near \"x{}...\"", "1".repeat(49)));
    }
}
