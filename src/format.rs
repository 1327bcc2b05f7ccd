use crate::duration::parse_milliseconds;
use crate::error::Result;
use crate::options::Options;

/// Bias added before flooring the combined-seconds value. Binary floating
/// point puts values like 33.00004s a hair under their decimal reading;
/// without the bias they would floor into the previous decimal step.
const SECOND_ROUNDING_EPSILON: f64 = 0.000_000_1;

/// One candidate piece of output: a unit value plus how to label it.
struct Segment<'a> {
    value: f64,
    long: &'a str,
    short: &'a str,
    /// Pre-rendered value, for seconds/milliseconds carrying decimals.
    formatted: Option<String>,
}

impl<'a> Segment<'a> {
    fn whole(value: f64, long: &'a str, short: &'a str) -> Self {
        Segment {
            value,
            long,
            short,
            formatted: None,
        }
    }
}

/// Convert a duration in milliseconds into a human readable string.
///
/// Accepts any finite input, including negative, fractional, and zero
/// durations; fails with `Error::InvalidInput` otherwise. Years and days are
/// fixed-length (1 year = 365 days), not calendar-aware.
pub fn format_duration(milliseconds: f64, options: &Options) -> Result<String> {
    let options = options.normalized();
    let parsed = parse_milliseconds(milliseconds)?;

    let mut result: Vec<String> = Vec::new();

    push_segment(
        &mut result,
        &options,
        Segment::whole((parsed.days / 365.0).trunc(), "year", "y"),
    );
    push_segment(
        &mut result,
        &options,
        Segment::whole(parsed.days % 365.0, "day", "d"),
    );
    push_segment(&mut result, &options, Segment::whole(parsed.hours, "hour", "h"));
    push_segment(
        &mut result,
        &options,
        Segment::whole(parsed.minutes, "minute", "m"),
    );

    if options.separate_milliseconds
        || options.format_sub_milliseconds
        || (!options.colon_notation && milliseconds < 1_000.0)
    {
        push_segment(
            &mut result,
            &options,
            Segment::whole(parsed.seconds, "second", "s"),
        );

        if options.format_sub_milliseconds {
            push_segment(
                &mut result,
                &options,
                Segment::whole(parsed.milliseconds, "millisecond", "ms"),
            );
            push_segment(
                &mut result,
                &options,
                Segment::whole(parsed.microseconds, "microsecond", "µs"),
            );
            push_segment(
                &mut result,
                &options,
                Segment::whole(parsed.nanoseconds, "nanosecond", "ns"),
            );
        } else {
            let milliseconds_and_below =
                parsed.milliseconds + parsed.microseconds / 1_000.0 + parsed.nanoseconds / 1e6;
            let digits = options.milliseconds_decimal_digits;

            if digits > 0 {
                let formatted = format!(
                    "{:.*}",
                    digits as usize,
                    round_decimals(milliseconds_and_below, digits)
                );
                let value = formatted.parse::<f64>().unwrap_or(milliseconds_and_below);
                push_segment(
                    &mut result,
                    &options,
                    Segment {
                        value,
                        long: "millisecond",
                        short: "ms",
                        formatted: Some(formatted),
                    },
                );
            } else {
                // Below 1ms the remainder rounds up so tiny durations never
                // collapse to zero; at 1ms and above it rounds to nearest.
                let rounded = if milliseconds_and_below >= 1.0 {
                    milliseconds_and_below.round()
                } else {
                    milliseconds_and_below.ceil()
                };
                push_segment(
                    &mut result,
                    &options,
                    Segment::whole(rounded, "millisecond", "ms"),
                );
            }
        }
    } else {
        let seconds = (milliseconds / 1_000.0) % 60.0;
        let fixed = floor_decimals(seconds, options.seconds_decimal_digits);
        let formatted = if options.keep_decimals_on_whole_seconds {
            fixed
        } else {
            strip_zero_fraction(&fixed).to_string()
        };
        let value = formatted.parse::<f64>().unwrap_or(seconds);
        push_segment(
            &mut result,
            &options,
            Segment {
                value,
                long: "second",
                short: "s",
                formatted: Some(formatted),
            },
        );
    }

    if result.is_empty() {
        return Ok(if options.verbose {
            "0 milliseconds".to_string()
        } else {
            "0ms".to_string()
        });
    }

    if options.compact {
        return Ok(result.swap_remove(0));
    }

    let separator = if options.colon_notation { "" } else { " " };

    if let Some(unit_count) = options.unit_count {
        result.truncate(unit_count.max(1) as usize);
    }

    Ok(result.join(separator))
}

/// Append one rendered segment, applying zero suppression and the
/// notation-specific prefix/suffix rules.
fn push_segment(result: &mut Vec<String>, options: &Options, segment: Segment<'_>) {
    // Colon notation keeps every segment once output has started, and always
    // keeps minutes so the result is at least `M:SS`. Everywhere else a zero
    // segment is dropped.
    let standalone = result.is_empty() || !options.colon_notation;
    let zero = segment.value == 0.0 && !(options.colon_notation && segment.short == "m");
    if standalone && zero {
        return;
    }

    let value_string = segment
        .formatted
        .unwrap_or_else(|| format!("{}", segment.value as i64));

    let rendered = if options.colon_notation {
        let prefix = if result.is_empty() { "" } else { ":" };
        let whole_digits = match value_string.split_once('.') {
            Some((whole, _)) => whole.len(),
            None => value_string.len(),
        };
        let min_length: usize = if result.is_empty() { 1 } else { 2 };
        let padding = "0".repeat(min_length.saturating_sub(whole_digits));
        format!("{prefix}{padding}{value_string}")
    } else if options.verbose {
        let name = if segment.value == 1.0 {
            segment.long.to_string()
        } else {
            format!("{}s", segment.long)
        };
        format!("{value_string} {name}")
    } else {
        format!("{}{}", value_string, segment.short)
    };

    result.push(rendered);
}

/// Floor `value` at `digits` decimal places (biased by the rounding epsilon)
/// and render with exactly that many places.
fn floor_decimals(value: f64, digits: u32) -> String {
    let factor = 10f64.powi(digits as i32);
    let floored = (value * factor + SECOND_ROUNDING_EPSILON).floor();
    format!("{:.*}", digits as usize, floored / factor)
}

/// Round to `digits` decimal places, halfway cases away from zero.
fn round_decimals(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}

/// Drop an all-zero fraction ("33.00" -> "33"); mixed fractions stay intact.
fn strip_zero_fraction(value: &str) -> &str {
    match value.split_once('.') {
        Some((whole, fraction)) if !fraction.is_empty() && fraction.bytes().all(|b| b == b'0') => {
            whole
        }
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_decimals_uses_epsilon() {
        // 33.00004s at two digits must not floor into 32.99.
        assert_eq!(floor_decimals(33.00004, 2), "33.00");
        assert_eq!(floor_decimals(59.999, 1), "59.9");
        assert_eq!(floor_decimals(1.001, 3), "1.001");
        assert_eq!(floor_decimals(0.999, 0), "0");
    }

    #[test]
    fn test_strip_zero_fraction() {
        assert_eq!(strip_zero_fraction("33.00"), "33");
        assert_eq!(strip_zero_fraction("0.0"), "0");
        assert_eq!(strip_zero_fraction("33.50"), "33.50");
        assert_eq!(strip_zero_fraction("33"), "33");
    }

    #[test]
    fn test_round_decimals_half_away_from_zero() {
        assert_eq!(round_decimals(5.254, 4), 5.254);
        assert_eq!(round_decimals(33.333, 4), 33.333);
    }
}
