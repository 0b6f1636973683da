use crate::cli::AppContext;
use crate::cli::parser::Commands;
use crate::core::query::Filter;
use crate::errors::{AppError, AppResult};
use crate::session::Session;
use crate::ui::messages::{footer, header, info, warning};
use crate::utils::date::parse_date;
use crate::utils::formatting::events_table;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::List { .. } = cmd {
        let filter = resolve_filter(cmd, ctx)?;
        let session = Session::open(&ctx.data_path)?;

        let events = filter.apply(&session.store)?;

        header(filter.title());
        if events.is_empty() {
            warning(filter.empty_message());
        } else {
            print!("{}", events_table(events.iter().copied(), ctx.color));
            info(format!("{} event(s) found.", events.len()));
        }
        footer();
    }
    Ok(())
}

/// Turn the mutually exclusive list options into a [`Filter`].
fn resolve_filter(cmd: &Commands, ctx: &AppContext) -> AppResult<Filter> {
    let Commands::List {
        today,
        month,
        category,
        priority,
        upcoming,
        from,
        to,
        keyword,
    } = cmd
    else {
        return Ok(Filter::All);
    };

    if *today {
        return Ok(Filter::Today);
    }
    if let Some(m) = month {
        return Ok(Filter::Month(*m));
    }
    if let Some(c) = category {
        return Ok(Filter::Category(*c));
    }
    if let Some(p) = priority {
        return Ok(Filter::Priority(*p));
    }
    if let Some(days) = upcoming {
        return Ok(Filter::Upcoming(days.unwrap_or(ctx.cfg.upcoming_days)));
    }
    if let (Some(f), Some(t)) = (from, to) {
        let start = parse_date(f).ok_or_else(|| AppError::InvalidDate(f.clone()))?;
        let end = parse_date(t).ok_or_else(|| AppError::InvalidDate(t.clone()))?;
        if start > end {
            return Err(AppError::InvalidRange(
                "End date must be after or equal to start date".into(),
            ));
        }
        return Ok(Filter::Range(start, end));
    }
    if let Some(k) = keyword {
        if k.trim().is_empty() {
            return Err(AppError::EmptyKeyword);
        }
        return Ok(Filter::Keyword(k.trim().to_string()));
    }

    Ok(Filter::All)
}
