use crate::cli::parser::Commands;
use crate::cli::commands::resolve_day;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::db::initialize::open_store;
use crate::errors::AppResult;
use crate::utils::formatting::pad_right;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { user, date } = cmd {
        let offset = cfg.offset()?;
        let (day, start) = resolve_day(date.as_ref(), &offset)?;

        let pool = open_store(&cfg.database)?;
        let listing = ReportLogic::raw(&pool, &offset, *user, start)?;

        println!("\n=== {} ===", day);
        for a in listing {
            println!(
                "{} | {} | {:<3} (#{})",
                a.date,
                pad_right(&a.activity, 20),
                a.source,
                a.activity_id
            );
        }
    }

    Ok(())
}
