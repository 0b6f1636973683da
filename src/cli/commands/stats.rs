use crate::cli::AppContext;
use crate::cli::parser::Commands;
use crate::core::stats::Statistics;
use crate::errors::AppResult;
use crate::session::Session;
use crate::ui::messages::{footer, header};
use crate::utils::formatting::statistics;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Stats = cmd {
        let session = Session::open(&ctx.data_path)?;
        let stats = Statistics::collect(&session.store);

        header("CALENDAR STATISTICS");
        print!("{}", statistics(&stats, ctx.color));
        footer();
    }
    Ok(())
}
