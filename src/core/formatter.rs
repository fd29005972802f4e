//! Duration rendering for report cells: "Xh Ym" text plus an optional
//! red/green tone carried by the sign of the value.

use crate::utils::colors::{GREEN, RED, RESET};
use serde::Serialize;
use std::fmt;

/// Render `seconds` as `"{h}h {m}m"`, omitting zero components.
///
/// - `signed == false` and `seconds < 0`: the raw number is returned as-is
///   (e.g. `"-10"`), so unexpected negatives stay visible.
/// - `signed == true`: the absolute value is rendered and a leading `-` is
///   added for negatives. Sub-minute negatives therefore render as `"-"`.
pub fn format_duration(seconds: i64, signed: bool) -> String {
    if seconds < 0 && !signed {
        return seconds.to_string();
    }

    let n = seconds.unsigned_abs();
    let hours = n / 3600;
    let minutes = (n % 3600) / 60;

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}h "));
    }
    if minutes > 0 {
        out.push_str(&format!("{minutes}m"));
    }
    let out = out.trim().to_string();

    if seconds < 0 { format!("-{out}") } else { out }
}

/// Unsigned duration text without colour; missing values render empty.
pub fn format_plain(value: Option<i64>) -> String {
    value.map(|v| format_duration(v, false)).unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tone {
    Negative,
    Positive,
    Neutral,
}

impl Tone {
    pub fn of(value: i64) -> Self {
        if value < 0 {
            Tone::Negative
        } else if value > 0 {
            Tone::Positive
        } else {
            Tone::Neutral
        }
    }

    pub fn css_color(&self) -> Option<&'static str> {
        match self {
            Tone::Negative => Some("red"),
            Tone::Positive => Some("green"),
            Tone::Neutral => None,
        }
    }

    pub fn ansi_color(&self) -> Option<&'static str> {
        match self {
            Tone::Negative => Some(RED),
            Tone::Positive => Some(GREEN),
            Tone::Neutral => None,
        }
    }
}

/// A formatted duration tagged with the tone of the unformatted value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColoredDuration {
    pub tone: Tone,
    pub text: String,
}

impl ColoredDuration {
    pub fn empty() -> Self {
        Self {
            tone: Tone::Neutral,
            text: String::new(),
        }
    }

    pub fn to_html(&self) -> String {
        match self.tone.css_color() {
            Some(c) => format!("<span style='color:{c}'>{}</span>", self.text),
            None => self.text.clone(),
        }
    }

    pub fn to_ansi(&self) -> String {
        match self.tone.ansi_color() {
            Some(c) => format!("{c}{}{RESET}", self.text),
            None => self.text.clone(),
        }
    }
}

impl fmt::Display for ColoredDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Format a value and tag it red (< 0), green (> 0) or neutral (0).
/// `None` short-circuits to an empty neutral cell.
pub fn format_with_color(value: Option<i64>, signed: bool) -> ColoredDuration {
    let Some(v) = value else {
        return ColoredDuration::empty();
    };

    ColoredDuration {
        tone: Tone::of(v),
        text: format_duration(v, signed),
    }
}

/// Round a stored seconds quantity (REAL in the database) to whole seconds.
pub fn seconds_from_f64(value: f64) -> i64 {
    value.round() as i64
}
