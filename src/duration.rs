use crate::error::{Error, Result};

/// Clock components of a duration, days down to nanoseconds.
///
/// Values are `f64` because the input is; every field holds a whole number
/// (possibly negative) after decomposition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeParts {
    pub days: f64,
    pub hours: f64,
    pub minutes: f64,
    pub seconds: f64,
    pub milliseconds: f64,
    pub microseconds: f64,
    pub nanoseconds: f64,
}

/// Break a millisecond duration into clock components.
///
/// Each component is computed independently: truncate the total duration at
/// that unit's resolution, then reduce modulo the next larger unit's ratio.
/// The truncation direction (toward zero) is chosen once from the sign of
/// the whole duration, so fractional and negative inputs behave consistently
/// across every unit boundary.
pub fn parse_milliseconds(milliseconds: f64) -> Result<TimeParts> {
    if !milliseconds.is_finite() {
        return Err(Error::InvalidInput);
    }

    let truncate = |value: f64| -> f64 {
        if milliseconds > 0.0 {
            value.floor()
        } else {
            value.ceil()
        }
    };

    Ok(TimeParts {
        days: truncate(milliseconds / 86_400_000.0),
        hours: truncate(milliseconds / 3_600_000.0) % 24.0,
        minutes: truncate(milliseconds / 60_000.0) % 60.0,
        seconds: truncate(milliseconds / 1_000.0) % 60.0,
        milliseconds: truncate(milliseconds) % 1_000.0,
        microseconds: truncate(milliseconds * 1_000.0) % 1_000.0,
        nanoseconds: truncate(milliseconds * 1e6) % 1_000.0,
    })
}
