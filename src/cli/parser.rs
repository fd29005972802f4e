use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for hrworkday
#[derive(Parser)]
#[command(
    name = "hrworkday",
    version = env!("CARGO_PKG_VERSION"),
    about = "Aggregate timesheets into daily workdays and report worked vs target hours",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their defaults")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage employees
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Record a timesheet
    Timesheet {
        #[command(subcommand)]
        action: TimesheetAction,
    },

    /// Record an attendance
    Attendance {
        #[command(subcommand)]
        action: AttendanceAction,
    },

    /// Manage an employee's holiday list
    Holiday {
        #[command(subcommand)]
        action: HolidayAction,
    },

    /// Manage weekly working hours (target hours per weekday)
    Hours {
        #[command(subcommand)]
        action: HoursAction,
    },

    /// Create, bulk-process and inspect workdays
    Workday {
        #[command(subcommand)]
        action: WorkdayAction,
    },

    /// Monthly work hour report
    Report {
        /// Month name (January..December)
        #[arg(long)]
        month: String,

        /// Year (default: current year)
        #[arg(long)]
        year: Option<i32>,

        #[arg(long = "employee")]
        employee: String,

        #[arg(long, help = "Output style: ansi, html or plain (default from config)")]
        style: Option<String>,

        #[arg(long, help = "Show every column instead of the summary set")]
        details: bool,

        #[arg(long, value_enum, requires = "file")]
        format: Option<ExportFormat>,

        #[arg(long, value_name = "FILE", requires = "format")]
        file: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// Add or update an employee
    Add {
        id: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        company: Option<String>,

        #[arg(long, help = "Date of joining (YYYY-MM-DD)")]
        joined: Option<String>,

        #[arg(long, help = "Relieving date (YYYY-MM-DD)")]
        relieved: Option<String>,

        #[arg(long, help = "Mark the employee as inactive")]
        inactive: bool,
    },

    /// List employees
    List,
}

#[derive(Subcommand)]
pub enum TimesheetAction {
    /// Add a timesheet covering START..END (END defaults to START)
    Add {
        employee: String,

        /// Start date (YYYY-MM-DD)
        start: String,

        #[arg(long)]
        end: Option<String>,

        #[arg(long = "total", help = "Total hours")]
        total: f64,

        #[arg(long = "break", default_value_t = 0.0, help = "Break hours")]
        break_hours: f64,

        #[arg(long = "target", default_value_t = 0.0, help = "Target hours")]
        target: f64,

        #[arg(long = "actual", help = "Actual working hours (default: total - break)")]
        actual: Option<f64>,
    },
}

#[derive(Subcommand)]
pub enum AttendanceAction {
    /// Add an attendance record
    Add {
        employee: String,

        date: String,

        #[arg(long, default_value = "present")]
        status: String,
    },
}

#[derive(Subcommand)]
pub enum HolidayAction {
    /// Add a date to the employee's holiday list
    Add {
        employee: String,

        date: String,

        #[arg(long, default_value = "")]
        description: String,
    },
}

#[derive(Subcommand)]
pub enum HoursAction {
    /// Add a weekly schedule valid between two dates
    Add {
        employee: String,

        #[arg(long)]
        from: String,

        #[arg(long)]
        to: String,

        /// Weekday:hours, repeatable (e.g. --day Monday:8 --day Fri:6)
        #[arg(long = "day", required = true)]
        days: Vec<String>,
    },
}

#[derive(Subcommand)]
pub enum WorkdayAction {
    /// Create a workday: checks holidays, aggregates timesheets and saves
    New {
        employee: String,

        date: String,

        #[arg(long, help = "Attendance id to link (must match employee and date)")]
        attendance: Option<i64>,

        #[arg(long, help = "Workday status (present, half-day, on-leave, ...)")]
        status: Option<String>,

        #[arg(long, help = "Company (default from employee or config)")]
        company: Option<String>,

        #[arg(long, help = "Show the result without saving")]
        dry_run: bool,
    },

    /// Create workdays for several dates at once
    Bulk {
        employee: String,

        #[arg(long, value_name = "D1,D2,...", conflicts_with = "range")]
        days: Option<String>,

        #[arg(long, value_name = "FROM:TO", help = "Every unmarked date in the range")]
        range: Option<String>,
    },

    /// List dates without a workday
    Unmarked {
        employee: String,

        #[arg(long, conflicts_with = "range")]
        month: Option<String>,

        #[arg(long)]
        year: Option<i32>,

        #[arg(long = "exclude-holidays")]
        exclude_holidays: bool,

        #[arg(long, value_name = "FROM:TO")]
        range: Option<String>,
    },

    /// Cancel a workday (it no longer appears in reports)
    Cancel { name: String },
}
