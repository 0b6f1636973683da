use crate::cli::AppContext;
use crate::cli::commands::ask_confirmation;
use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::session::Session;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Export {
        format,
        output,
        force,
    } = cmd
    {
        let session = Session::open(&ctx.data_path)?;
        let target = expand_tilde(output.as_deref().unwrap_or(ctx.cfg.export_file.as_str()));

        if target.exists() && !*force {
            let prompt = format!("The file '{}' already exists. Overwrite?", target.display());
            if !ask_confirmation(&prompt) {
                return Err(AppError::Export("existing file not overwritten".into()));
            }
        }

        let count = ExportLogic::export(&session.store, *format, &target)?;
        success(format!(
            "Successfully exported {} events to {}",
            count,
            target.display()
        ));
    }
    Ok(())
}
