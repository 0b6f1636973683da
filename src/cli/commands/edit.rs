use crate::cli::AppContext;
use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::session::Session;
use crate::ui::messages::{info, success};
use crate::utils::formatting::event_details;

/// Change description, priority or category of an existing event.
/// Options left out keep the event's current value.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Edit {
        id,
        desc,
        priority,
        category,
    } = cmd
    {
        let mut session = Session::open(&ctx.data_path)?;

        let current = session.store.get(*id).ok_or(AppError::NotFound(*id))?;
        info("Current values:");
        println!("{}", event_details(current, ctx.color));

        let new_desc = desc.as_deref().map(str::trim).unwrap_or_default();
        let new_priority = priority.unwrap_or(current.priority);
        let new_category = category.unwrap_or(current.category);

        session
            .store_mut()
            .edit(*id, new_desc, new_priority, new_category)?;
        success(format!("Event ID {} updated successfully.", id));

        session.close()?;
    }

    Ok(())
}
