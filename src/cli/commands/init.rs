use crate::cli::AppContext;
use crate::core::store::EventStore;
use crate::errors::AppResult;
use crate::storage;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates, when missing:
///  - the configuration file
///  - an empty calendar data file
pub fn handle(ctx: &AppContext) -> AppResult<()> {
    println!("⚙️  Initializing rcalendar…");

    if ctx.config_path.exists() {
        info(format!("Config file already exists: {}", ctx.config_path.display()));
    } else {
        ctx.cfg.write(&ctx.config_path)?;
        success(format!("Config file: {}", ctx.config_path.display()));
    }

    if ctx.data_path.exists() {
        info(format!("Data file already exists: {}", ctx.data_path.display()));
    } else {
        storage::save(&EventStore::new(), &ctx.data_path)?;
        success(format!("Data file: {}", ctx.data_path.display()));
    }

    println!("🎉 rcalendar initialization completed!");
    Ok(())
}
