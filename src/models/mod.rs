pub mod employee;
pub mod status;
pub mod timesheet_entry;
pub mod workday;
pub mod workday_summary;
