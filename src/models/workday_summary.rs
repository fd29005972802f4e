use serde::Serialize;

/// Seconds per hour, the factor between the hour and second mirrors.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Transient projection produced by [`crate::core::aggregator::aggregate`].
///
/// The `*_seconds` fields always equal their hour counterpart × 3600.
///
/// `first_checkin` / `last_checkout` are `None` when the summary does not
/// touch them and `Some("")` when they must be cleared (zero summary).
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct WorkdaySummary {
    pub hours_worked: f64,
    pub break_hours: f64,
    pub total_work_seconds: f64,
    pub total_break_seconds: f64,
    pub target_hours: f64,
    pub total_target_seconds: f64,
    pub expected_break_hours: f64,
    pub actual_working_hours: f64,
    pub first_checkin: Option<String>,
    pub last_checkout: Option<String>,
}

impl WorkdaySummary {
    /// All numerics zeroed, check-in/check-out cleared.
    pub fn zero() -> Self {
        Self {
            first_checkin: Some(String::new()),
            last_checkout: Some(String::new()),
            ..Self::default()
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}
