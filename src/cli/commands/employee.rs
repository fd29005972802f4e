use crate::cli::parser::{Commands, EmployeeAction};
use crate::config::Config;
use crate::db::employees::{list_employees, upsert_employee};
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::employee::Employee;
use crate::models::status::EmployeeStatus;
use crate::ui::messages::{info, success};
use crate::utils::date::parse_optional_date;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Employee { action } = cmd else {
        return Ok(());
    };

    let pool = DbPool::new(&cfg.database)?;

    match action {
        EmployeeAction::Add {
            id,
            name,
            company,
            joined,
            relieved,
            inactive,
        } => {
            let employee = Employee {
                id: id.clone(),
                name: name.clone(),
                company: company.clone().unwrap_or_else(|| cfg.default_company.clone()),
                status: if *inactive {
                    EmployeeStatus::Inactive
                } else {
                    EmployeeStatus::Active
                },
                date_of_joining: parse_optional_date(joined.as_ref())?,
                relieving_date: parse_optional_date(relieved.as_ref())?,
            };

            upsert_employee(&pool.conn, &employee)?;
            ttlog_or_warn(&pool.conn, "employee_add", id, &format!("Employee {name} saved"));
            success(format!("Employee {id} saved."));
        }

        EmployeeAction::List => {
            let employees = list_employees(&pool.conn)?;
            if employees.is_empty() {
                info("No employees.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::left("ID"),
                Column::left("Name"),
                Column::left("Company"),
                Column::left("Status"),
                Column::left("Joined"),
                Column::left("Relieved"),
            ]);
            for e in employees {
                table.add_row(vec![
                    e.id,
                    e.name,
                    e.company,
                    e.status.to_db_str().to_string(),
                    e.date_of_joining.map(|d| d.to_string()).unwrap_or_default(),
                    e.relieving_date.map(|d| d.to_string()).unwrap_or_default(),
                ]);
            }
            print!("{}", table.render());
        }
    }

    Ok(())
}
