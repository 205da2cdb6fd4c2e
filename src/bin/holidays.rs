//! Prints the holiday list the widget would seed its task list with

use std::error::Error;

use chrono::{Datelike, Local};

use deskpad::holidays_for_years;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut as_json = false;
    let mut years = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => as_json = true,
            other => years.push(other.parse::<i32>().map_err(|_| format!("Invalid year: {}", other))?),
        }
    }

    let (start_year, end_year) = match years.as_slice() {
        // The widget seeds the current and the next year
        [] => {
            let this_year = Local::now().year();
            (this_year, this_year + 1)
        },
        [year] => (*year, *year),
        [start, end] => (*start, *end),
        _ => return Err("Usage: holidays [--json] [year] [end_year]".into()),
    };

    log::info!("Computing holidays for {} to {}", start_year, end_year);
    let holidays = holidays_for_years(start_year, end_year)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&holidays)?);
    } else {
        for holiday in &holidays {
            println!("  {}  {}", holiday.date, holiday.label);
        }
        println!("Total: {} holiday(s)", holidays.len());
    }

    Ok(())
}
