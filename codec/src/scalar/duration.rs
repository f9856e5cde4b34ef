//! ISO 8601 durations (`xsd:duration`).
//!
//! Components are kept as written rather than normalized to seconds: a year
//! or a month has no fixed length, so `P1M` and `P30D` are different values.
//! [`Duration::to_time_delta`] gives the usual approximation when a caller
//! needs arithmetic.

use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;

use crate::error::ScalarError;

const SECONDS_PER_DAY: u64 = 86_400;

/// A signed ISO 8601 duration such as `P1DT2H30M` or `-PT0.5S`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Duration {
    /// Whether the duration was written with a leading `-`.
    pub negative: bool,
    /// `Y` component.
    pub years: u64,
    /// `M` component of the date part.
    pub months: u64,
    /// `D` component; `W` weeks are folded in as seven days each.
    pub days: u64,
    /// `H` component.
    pub hours: u64,
    /// `M` component of the time part.
    pub minutes: u64,
    /// Whole part of the `S` component.
    pub seconds: u64,
    /// Fractional part of the `S` component, in nanoseconds.
    pub nanos: u32,
}

impl Duration {
    /// Parses an ISO 8601 duration.
    ///
    /// # Errors
    ///
    /// Returns [`ScalarError::InvalidDuration`] if the text is not of the
    /// form `[-]P[nY][nM][nW][nD][T[nH][nM][n[.f]S]]` with at least one
    /// component.
    pub fn parse(text: &str) -> Result<Self, ScalarError> {
        parse(text).map_err(|reason| ScalarError::InvalidDuration {
            text: text.to_owned(),
            reason,
        })
    }

    /// Returns true if every component is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.years == 0
            && self.months == 0
            && self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0
            && self.nanos == 0
    }

    /// Approximates the duration as a [`TimeDelta`], counting a year as 365
    /// days and a month as 30. Returns `None` on overflow.
    #[must_use]
    pub fn to_time_delta(&self) -> Option<TimeDelta> {
        let days = self
            .years
            .checked_mul(365)?
            .checked_add(self.months.checked_mul(30)?)?
            .checked_add(self.days)?;
        let seconds = days
            .checked_mul(SECONDS_PER_DAY)?
            .checked_add(self.hours.checked_mul(3_600)?)?
            .checked_add(self.minutes.checked_mul(60)?)?
            .checked_add(self.seconds)?;
        let delta = TimeDelta::try_seconds(i64::try_from(seconds).ok()?)?
            .checked_add(&TimeDelta::nanoseconds(i64::from(self.nanos)))?;
        Some(if self.negative { -delta } else { delta })
    }

    /// Builds a duration from a [`TimeDelta`], using days, hours, minutes and
    /// seconds only.
    #[must_use]
    pub fn from_time_delta(delta: TimeDelta) -> Self {
        let negative = delta < TimeDelta::zero();
        let magnitude = delta.abs();
        let total = magnitude.num_seconds().unsigned_abs();
        Self {
            negative,
            years: 0,
            months: 0,
            days: total / SECONDS_PER_DAY,
            hours: (total % SECONDS_PER_DAY) / 3_600,
            minutes: (total % 3_600) / 60,
            seconds: total % 60,
            nanos: magnitude.subsec_nanos().unsigned_abs(),
        }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str("P")?;
        if self.years > 0 {
            write!(f, "{}Y", self.years)?;
        }
        if self.months > 0 {
            write!(f, "{}M", self.months)?;
        }
        if self.days > 0 {
            write!(f, "{}D", self.days)?;
        }
        let has_time = self.hours > 0 || self.minutes > 0 || self.seconds > 0 || self.nanos > 0;
        if has_time {
            f.write_str("T")?;
            if self.hours > 0 {
                write!(f, "{}H", self.hours)?;
            }
            if self.minutes > 0 {
                write!(f, "{}M", self.minutes)?;
            }
            if self.seconds > 0 || self.nanos > 0 {
                write!(f, "{}", self.seconds)?;
                if self.nanos > 0 {
                    let fraction = format!("{:09}", self.nanos);
                    write!(f, ".{}", fraction.trim_end_matches('0'))?;
                }
                f.write_str("S")?;
            }
        } else if self.is_zero() {
            f.write_str("T0S")?;
        }
        Ok(())
    }
}

impl FromStr for Duration {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Duration::parse(s)
    }
}

fn parse(text: &str) -> Result<Duration, &'static str> {
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let rest = rest.strip_prefix('P').ok_or("missing 'P' designator")?;
    let (date, time) = match rest.split_once('T') {
        Some((date, time)) => (date, Some(time)),
        None => (rest, None),
    };

    let mut duration = Duration {
        negative,
        ..Duration::default()
    };
    let mut any = false;

    let mut next_slot = 0;
    for (number, designator) in components(date)? {
        let slot = match designator {
            'Y' => 0,
            'M' => 1,
            'W' => 2,
            'D' => 3,
            _ => return Err("unknown date designator"),
        };
        if slot < next_slot {
            return Err("date components out of order");
        }
        next_slot = slot + 1;
        let value = whole(number)?;
        match designator {
            'Y' => duration.years = value,
            'M' => duration.months = value,
            'W' => {
                duration.days = value
                    .checked_mul(7)
                    .and_then(|days| days.checked_add(duration.days))
                    .ok_or("component too large")?;
            }
            _ => {
                duration.days = duration
                    .days
                    .checked_add(value)
                    .ok_or("component too large")?;
            }
        }
        any = true;
    }

    if let Some(time) = time {
        if time.is_empty() {
            return Err("'T' without time components");
        }
        let mut next_slot = 0;
        for (number, designator) in components(time)? {
            let slot = match designator {
                'H' => 0,
                'M' => 1,
                'S' => 2,
                _ => return Err("unknown time designator"),
            };
            if slot < next_slot {
                return Err("time components out of order");
            }
            next_slot = slot + 1;
            match designator {
                'H' => duration.hours = whole(number)?,
                'M' => duration.minutes = whole(number)?,
                _ => {
                    let (seconds, nanos) = seconds(number)?;
                    duration.seconds = seconds;
                    duration.nanos = nanos;
                }
            }
            any = true;
        }
    }

    if !any {
        return Err("no duration components");
    }
    Ok(duration)
}

/// Splits `1Y2M` into `[("1", 'Y'), ("2", 'M')]`.
fn components(part: &str) -> Result<Vec<(&str, char)>, &'static str> {
    let mut out = Vec::new();
    let mut start = 0;
    for (i, c) in part.char_indices() {
        if c.is_ascii_digit() || c == '.' {
            continue;
        }
        if i == start {
            return Err("designator without a number");
        }
        out.push((&part[start..i], c));
        start = i + c.len_utf8();
    }
    if start != part.len() {
        return Err("number without a designator");
    }
    Ok(out)
}

fn whole(number: &str) -> Result<u64, &'static str> {
    if number.contains('.') {
        return Err("only seconds may be fractional");
    }
    number.parse().map_err(|_| "component too large")
}

fn seconds(number: &str) -> Result<(u64, u32), &'static str> {
    let Some((whole_part, fraction)) = number.split_once('.') else {
        return Ok((whole(number)?, 0));
    };
    if whole_part.is_empty() || fraction.is_empty() || fraction.contains('.') {
        return Err("malformed fractional seconds");
    }
    if fraction.len() > 9 {
        return Err("fractional seconds beyond nanosecond precision");
    }
    let seconds = whole(whole_part)?;
    let nanos: u32 = format!("{fraction:0<9}")
        .parse()
        .map_err(|_| "malformed fractional seconds")?;
    Ok((seconds, nanos))
}
