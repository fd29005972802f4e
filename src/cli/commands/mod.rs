pub mod attendance;
pub mod config;
pub mod db;
pub mod employee;
pub mod holiday;
pub mod hours;
pub mod init;
pub mod log;
pub mod report;
pub mod timesheet;
pub mod workday;
