use crate::cli::parser::Commands;
use crate::cli::commands::resolve_day;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::db::initialize::open_store;
use crate::errors::AppResult;
use crate::utils::date;
use crate::utils::formatting::pad_right;
use crate::utils::time::{SECONDS_PER_DAY, parse_optional_time, timestamp_at};
use chrono::Utc;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { user, date: d, now } = cmd {
        let offset = cfg.offset()?;
        let (day, start) = resolve_day(d.as_ref(), &offset)?;

        // --now wins; otherwise the current instant for today and the end of
        // any other day.
        let now_ts = match parse_optional_time(now.as_ref())? {
            Some(t) => timestamp_at(day, t, &offset)?,
            None if day == date::today() => Utc::now().timestamp(),
            None => start + SECONDS_PER_DAY - 1,
        };

        let reconciler = cfg.reconciler()?;
        let pool = open_store(&cfg.database)?;
        let report = ReportLogic::computed(&pool, &reconciler, *user, start, Some(now_ts))?;

        println!("\n=== {} ===", day);
        for a in &report.body {
            println!("{} {}", pad_right(&a.activity, 24), a.time);
        }
        println!("{} {}", pad_right("Total", 24), report.total);
        println!("{} {}", pad_right("Delta", 24), report.delta);
    }

    Ok(())
}
