use crate::cli::AppContext;
use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::models::date::Time;
use crate::models::event::{MAX_DESC_LEN, NewEvent};
use crate::session::Session;
use crate::ui::messages::{success, warning};
use crate::utils::date::{parse_date, parse_time};

/// Add a new event to the calendar.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Add {
        date,
        time,
        all_day,
        desc,
        priority,
        category,
    } = cmd
    {
        //
        // 1. Validate input before touching the calendar
        //
        let d = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        let t = if *all_day {
            Time::midnight()
        } else {
            let raw = time.as_deref().unwrap_or_default();
            parse_time(raw).ok_or_else(|| AppError::InvalidTime(raw.to_string()))?
        };

        let description = desc.trim();
        if description.is_empty() {
            return Err(AppError::EmptyDescription);
        }
        if description.len() > MAX_DESC_LEN {
            warning(format!(
                "Description longer than {} characters will be truncated.",
                MAX_DESC_LEN
            ));
        }

        let new = if *all_day {
            NewEvent::all_day(d, description, *priority, *category)
        } else {
            NewEvent::timed(d, t, description, *priority, *category)
        };

        //
        // 2. Insert and persist
        //
        let mut session = Session::open(&ctx.data_path)?;
        let id = session.store_mut().insert(new)?;
        success(format!("Event added successfully! ID: {}", id));
        session.close()?;
    }

    Ok(())
}
