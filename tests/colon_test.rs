use pretty_time::{Options, format_duration};

fn colon() -> Options {
    Options {
        colon_notation: true,
        ..Default::default()
    }
}

fn fmt(milliseconds: f64, options: Options) -> String {
    format_duration(milliseconds, &options).unwrap()
}

#[test]
fn test_colon_notation_defaults() {
    let cases: &[(f64, &str)] = &[
        (1000.0, "0:01"),
        (1543.0, "0:01.5"),
        (1000.0 * 60.0, "1:00"),
        (1000.0 * 90.0, "1:30"),
        (95_543.0, "1:35.5"),
        ((1000.0 * 60.0 * 10.0) + 543.0, "10:00.5"),
        ((1000.0 * 60.0 * 59.0) + (1000.0 * 59.0) + 543.0, "59:59.5"),
        (
            (1000.0 * 60.0 * 60.0 * 15.0) + (1000.0 * 60.0 * 59.0) + (1000.0 * 59.0) + 543.0,
            "15:59:59.5",
        ),
    ];

    for (input, expected) in cases {
        assert_eq!(fmt(*input, colon()), *expected, "input {}", input);
    }
}

#[test]
fn test_colon_notation_with_seconds_decimal_digits() {
    let with_digits = |digits: u32| Options {
        colon_notation: true,
        seconds_decimal_digits: digits,
        ..Default::default()
    };

    assert_eq!(fmt(999.0, with_digits(0)), "0:00");
    assert_eq!(fmt(999.0, with_digits(1)), "0:00.9");
    assert_eq!(fmt(999.0, with_digits(2)), "0:00.99");
    assert_eq!(fmt(999.0, with_digits(3)), "0:00.999");
    assert_eq!(fmt(1000.0, with_digits(0)), "0:01");
    assert_eq!(fmt(1000.0, with_digits(3)), "0:01");
    assert_eq!(fmt(1001.0, with_digits(2)), "0:01");
    assert_eq!(fmt(1001.0, with_digits(3)), "0:01.001");
    assert_eq!(fmt(1543.0, with_digits(0)), "0:01");
    assert_eq!(fmt(1543.0, with_digits(1)), "0:01.5");
    assert_eq!(fmt(1543.0, with_digits(2)), "0:01.54");
    assert_eq!(fmt(1543.0, with_digits(3)), "0:01.543");
    assert_eq!(fmt(95_543.0, with_digits(0)), "1:35");
    assert_eq!(fmt(95_543.0, with_digits(2)), "1:35.54");
    assert_eq!(fmt(95_543.0, with_digits(3)), "1:35.543");
    assert_eq!(fmt((1000.0 * 60.0 * 10.0) + 543.0, with_digits(3)), "10:00.543");
    assert_eq!(
        fmt(
            (1000.0 * 60.0 * 60.0 * 15.0) + (1000.0 * 60.0 * 59.0) + (1000.0 * 59.0) + 543.0,
            with_digits(3)
        ),
        "15:59:59.543"
    );
}

#[test]
fn test_colon_notation_with_keep_decimals() {
    let keep = |digits: Option<u32>| Options {
        colon_notation: true,
        keep_decimals_on_whole_seconds: true,
        seconds_decimal_digits: digits.unwrap_or(1),
        ..Default::default()
    };

    assert_eq!(fmt(999.0, keep(Some(3))), "0:00.999");
    assert_eq!(fmt(1000.0, keep(None)), "0:01.0");
    assert_eq!(fmt(1000.0, keep(Some(0))), "0:01");
    assert_eq!(fmt(1000.0, keep(Some(3))), "0:01.000");
    assert_eq!(fmt(1000.0 * 90.0, keep(None)), "1:30.0");
    assert_eq!(fmt(1000.0 * 90.0, keep(Some(3))), "1:30.000");
    assert_eq!(fmt(1000.0 * 60.0 * 10.0, keep(Some(3))), "10:00.000");
}

#[test]
fn test_colon_notation_with_unit_count() {
    let options = |digits: u32, count: u32| Options {
        colon_notation: true,
        seconds_decimal_digits: digits,
        unit_count: Some(count),
        ..Default::default()
    };

    assert_eq!(fmt(1000.0 * 90.0, options(0, 1)), "1");
    assert_eq!(fmt(1000.0 * 90.0, options(0, 2)), "1:30");
    assert_eq!(fmt(1000.0 * 60.0 * 90.0, options(0, 3)), "1:30:00");
    assert_eq!(fmt(95_543.0, options(1, 1)), "1");
    assert_eq!(fmt(95_543.0, options(1, 2)), "1:35.5");
    assert_eq!(fmt(95_543.0 + 1000.0 * 3600.0, options(1, 3)), "1:01:35.5");
}

#[test]
fn test_colon_notation_overrides_incompatible_options() {
    let input = (1000.0 * 60.0 * 59.0) + (1000.0 * 59.0) + 543.0;

    for options in [
        Options {
            colon_notation: true,
            format_sub_milliseconds: true,
            ..Default::default()
        },
        Options {
            colon_notation: true,
            separate_milliseconds: true,
            ..Default::default()
        },
        Options {
            colon_notation: true,
            verbose: true,
            ..Default::default()
        },
        Options {
            colon_notation: true,
            compact: true,
            ..Default::default()
        },
    ] {
        assert_eq!(fmt(input, options), "59:59.5");
    }
}
