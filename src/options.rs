use serde::{Deserialize, Serialize};

/// Formatting options. All fields are optional in config files and layered
/// under CLI flags; conflicting combinations are resolved by `normalized`,
/// never by erroring.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Options {
    /// Render as clock style `H:MM:SS.f` instead of unit-suffixed segments.
    pub colon_notation: bool,
    /// Show only the single largest non-zero unit.
    pub compact: bool,
    /// Cap the number of rendered segments (minimum 1).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_count: Option<u32>,
    /// Decimal precision for combined-seconds rendering.
    pub seconds_decimal_digits: u32,
    /// Decimal precision for combined-milliseconds rendering.
    pub milliseconds_decimal_digits: u32,
    /// Retain a trailing `.000` on whole-second values.
    pub keep_decimals_on_whole_seconds: bool,
    /// Long pluralized unit names ("1 hour 7 minutes") instead of suffixes.
    pub verbose: bool,
    /// Force milliseconds into their own segment instead of the seconds
    /// fraction.
    pub separate_milliseconds: bool,
    /// Break the sub-millisecond remainder into microsecond and nanosecond
    /// segments.
    pub format_sub_milliseconds: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            colon_notation: false,
            compact: false,
            unit_count: None,
            seconds_decimal_digits: 1,
            milliseconds_decimal_digits: 0,
            keep_decimals_on_whole_seconds: false,
            verbose: false,
            separate_milliseconds: false,
            format_sub_milliseconds: false,
        }
    }
}

impl Options {
    /// Resolve cross-option overrides into a canonical configuration.
    ///
    /// Colon notation always wins: it is visually incompatible with compact
    /// mode, sub-millisecond segments, separated milliseconds, and verbose
    /// names, so those are forced off. Compact mode shows a single unit, so
    /// it forces both decimal-digit counts to zero.
    pub fn normalized(&self) -> Options {
        let mut options = self.clone();

        if options.colon_notation {
            options.compact = false;
            options.format_sub_milliseconds = false;
            options.separate_milliseconds = false;
            options.verbose = false;
        }

        if options.compact {
            options.seconds_decimal_digits = 0;
            options.milliseconds_decimal_digits = 0;
        }

        options
    }
}
