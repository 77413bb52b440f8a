use std::fmt;

use crate::foundation::error::{CountdownError, CountdownResult};

/// A remaining-time value split into clock fields.
///
/// `hours` is unbounded (a 100-hour countdown prints `100:00:00`); `minutes` and `seconds` are
/// always in `0..60`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimeParts {
    /// Whole hours.
    pub hours: u64,
    /// Minutes within the hour (`0..60`).
    pub minutes: u8,
    /// Seconds within the minute (`0..60`).
    pub seconds: u8,
}

impl TimeParts {
    /// Total seconds represented by these fields.
    pub fn total_seconds(self) -> u64 {
        self.hours * 3600 + u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }

    /// Zero-padded `HH`, `MM`, `SS` fields.
    pub fn fields(self) -> [String; 3] {
        [
            format!("{:02}", self.hours),
            format!("{:02}", self.minutes),
            format!("{:02}", self.seconds),
        ]
    }

    /// Render as `HH<sep>MM<sep>SS`.
    pub fn join(self, separator: &str) -> String {
        let [h, m, s] = self.fields();
        format!("{h}{separator}{m}{separator}{s}")
    }
}

impl fmt::Display for TimeParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Split `remaining_seconds` into hours, minutes and seconds.
pub fn format(remaining_seconds: i64) -> CountdownResult<TimeParts> {
    if remaining_seconds < 0 {
        return Err(CountdownError::invalid_input(format!(
            "remaining seconds must be >= 0 (got {remaining_seconds})"
        )));
    }
    let r = remaining_seconds as u64;
    Ok(TimeParts {
        hours: r / 3600,
        minutes: ((r % 3600) / 60) as u8,
        seconds: (r % 60) as u8,
    })
}

/// Fraction of the countdown already elapsed, clamped to `[0, 1]`.
///
/// `0.0` means the countdown just started, `1.0` that it is complete.
pub fn elapsed_ratio(remaining_seconds: i64, total_seconds: i64) -> CountdownResult<f64> {
    if total_seconds <= 0 {
        return Err(CountdownError::invalid_input(format!(
            "total seconds must be > 0 (got {total_seconds})"
        )));
    }
    if remaining_seconds < 0 {
        return Err(CountdownError::invalid_input(format!(
            "remaining seconds must be >= 0 (got {remaining_seconds})"
        )));
    }
    let ratio = 1.0 - (remaining_seconds as f64) / (total_seconds as f64);
    Ok(ratio.clamp(0.0, 1.0))
}

#[cfg(test)]
#[path = "../../tests/unit/time/format.rs"]
mod tests;
