use crate::errors::{AppError, AppResult};
use chrono::format::{Item, StrftimeItems};
use chrono::{Datelike, NaiveDate, Weekday};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

pub fn parse_optional_date(s: Option<&String>) -> AppResult<Option<NaiveDate>> {
    s.map(|v| parse_date(v)).transpose()
}

/// "January" → 1 ... "December" → 12 (case-insensitive, 3-letter prefixes allowed).
pub fn month_from_name(name: &str) -> AppResult<u32> {
    let n = name.trim().to_lowercase();
    if n.len() >= 3 {
        for (i, m) in MONTHS.iter().enumerate() {
            if m.to_lowercase().starts_with(&n) {
                return Ok(i as u32 + 1);
            }
        }
    }
    Err(AppError::InvalidMonth(name.to_string()))
}

pub fn month_name(month: u32) -> &'static str {
    MONTHS
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let Some(mut d) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return out;
    };

    while d.month() == month {
        out.push(d);
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }

    out
}

/// Every date in `[from, to]`; empty when `to < from`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
    from.iter_days().take_while(|d| *d <= to).collect()
}

/// Parse "YYYY-MM-DD:YYYY-MM-DD".
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let (start, end) = r
        .split_once(':')
        .ok_or_else(|| AppError::InvalidDate(format!("invalid range: {r}")))?;
    Ok((parse_date(start)?, parse_date(end)?))
}

/// Parse a comma separated list of dates.
pub fn parse_date_list(s: &str) -> AppResult<Vec<NaiveDate>> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(parse_date)
        .collect()
}

pub fn weekday_name(date: NaiveDate) -> &'static str {
    weekday_long(date.weekday())
}

pub fn weekday_long(w: Weekday) -> &'static str {
    match w {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// "monday", "Mon" → "Monday"
pub fn normalize_weekday(s: &str) -> Option<&'static str> {
    s.trim()
        .parse::<Weekday>()
        .ok()
        .map(weekday_long)
}

/// Format with a user supplied chrono pattern, falling back to ISO when the
/// pattern is invalid.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let valid = !StrftimeItems::new(pattern).any(|i| matches!(i, Item::Error));
    if valid {
        date.format(pattern).to_string()
    } else {
        date.format("%Y-%m-%d").to_string()
    }
}
