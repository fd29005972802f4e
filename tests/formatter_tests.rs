use hrworkday::core::formatter::{
    Tone, format_duration, format_plain, format_with_color, seconds_from_f64,
};

#[test]
fn test_format_duration_hours_and_minutes() {
    assert_eq!(format_duration(3660, false), "1h 1m");
    assert_eq!(format_duration(3600, false), "1h");
    assert_eq!(format_duration(120, false), "2m");
    assert_eq!(format_duration(27000, true), "7h 30m");
}

#[test]
fn test_format_duration_sub_minute_is_empty() {
    assert_eq!(format_duration(0, false), "");
    assert_eq!(format_duration(59, false), "");
}

#[test]
fn test_format_duration_unsigned_negative_is_raw() {
    assert_eq!(format_duration(-10, false), "-10");
    assert_eq!(format_duration(-3600, false), "-3600");
}

#[test]
fn test_format_duration_signed_negative() {
    assert_eq!(format_duration(-3660, true), "-1h 1m");
    assert_eq!(format_duration(-1800, true), "-30m");
    // below one minute only the sign is left
    assert_eq!(format_duration(-10, true), "-");
}

#[test]
fn test_format_with_color_html() {
    assert_eq!(
        format_with_color(Some(3600), true).to_html(),
        "<span style='color:green'>1h</span>"
    );
    assert_eq!(
        format_with_color(Some(-3600), true).to_html(),
        "<span style='color:red'>-1h</span>"
    );
    assert_eq!(format_with_color(Some(0), true).to_html(), "");
}

#[test]
fn test_format_with_color_none_is_empty_neutral() {
    let c = format_with_color(None, true);
    assert_eq!(c.tone, Tone::Neutral);
    assert!(c.text.is_empty());
}

#[test]
fn test_format_with_color_ansi_wraps_text() {
    let neg = format_with_color(Some(-7200), true).to_ansi();
    assert!(neg.contains("-2h"));
    assert!(neg.starts_with('\x1b'));

    let zero = format_with_color(Some(0), false).to_ansi();
    assert_eq!(zero, "");
}

#[test]
fn test_format_plain_and_rounding() {
    assert_eq!(format_plain(None), "");
    assert_eq!(format_plain(Some(28800)), "8h");
    assert_eq!(seconds_from_f64(3599.6), 3600);
    assert_eq!(seconds_from_f64(-0.4), 0);
}
