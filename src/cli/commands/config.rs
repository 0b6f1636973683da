use crate::cli::AppContext;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if *print_config {
            println!("📄 Current configuration ({}):\n", ctx.config_path.display());
            println!("{}", ctx.cfg.to_yaml()?);
        } else {
            info(format!(
                "Configuration file: {} (use --print to show it)",
                ctx.config_path.display()
            ));
        }
    }
    Ok(())
}
