use crate::cli::AppContext;
use crate::cli::commands::ask_confirmation;
use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::session::Session;
use crate::ui::messages::{info, success};
use crate::utils::formatting::event_details;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut session = Session::open(&ctx.data_path)?;

        let ev = session.store.get(*id).ok_or(AppError::NotFound(*id))?;
        println!("{}", event_details(ev, ctx.color));

        //
        // Confirmation prompt
        //
        let prompt = format!("Delete event ID {}? This action is irreversible.", id);
        if !*yes && !ask_confirmation(&prompt) {
            info("Deletion cancelled.");
            return Ok(());
        }

        session.store_mut().delete(*id)?;
        success(format!("Event ID {} deleted successfully.", id));

        session.close()?;
    }

    Ok(())
}
