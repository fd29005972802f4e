use serde::Serialize;

/// Status of a workday document (mirrors the attendance status it is linked to).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum WorkdayStatus {
    #[default]
    Present,
    HalfDay,
    OnLeave,
    Absent,
    WorkFromHome,
}

impl WorkdayStatus {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            WorkdayStatus::Present => "Present",
            WorkdayStatus::HalfDay => "Half Day",
            WorkdayStatus::OnLeave => "On Leave",
            WorkdayStatus::Absent => "Absent",
            WorkdayStatus::WorkFromHome => "Work From Home",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Present" => Some(WorkdayStatus::Present),
            "Half Day" => Some(WorkdayStatus::HalfDay),
            "On Leave" => Some(WorkdayStatus::OnLeave),
            "Absent" => Some(WorkdayStatus::Absent),
            "Work From Home" => Some(WorkdayStatus::WorkFromHome),
            _ => None,
        }
    }

    /// Lenient parser for CLI input: accepts "half-day", "on_leave", "wfh", ...
    pub fn from_cli(s: &str) -> Option<Self> {
        let norm: String = s
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect();

        match norm.as_str() {
            "present" => Some(WorkdayStatus::Present),
            "halfday" => Some(WorkdayStatus::HalfDay),
            "onleave" | "leave" => Some(WorkdayStatus::OnLeave),
            "absent" => Some(WorkdayStatus::Absent),
            "workfromhome" | "wfh" => Some(WorkdayStatus::WorkFromHome),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmployeeStatus {
    Active,
    Inactive,
    Left,
}

impl EmployeeStatus {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::Inactive => "Inactive",
            EmployeeStatus::Left => "Left",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Active" => Some(EmployeeStatus::Active),
            "Inactive" => Some(EmployeeStatus::Inactive),
            "Left" => Some(EmployeeStatus::Left),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, EmployeeStatus::Active)
    }
}
