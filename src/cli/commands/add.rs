use crate::cli::parser::Commands;
use crate::cli::commands::resolve_day;
use crate::config::Config;
use crate::core::activity::{ActivityLogic, Source};
use crate::db::initialize::open_store;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::{parse_optional_time, timestamp_at};
use chrono::Utc;

/// Log an activity for a user.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        user,
        label,
        date,
        at,
    } = cmd
    {
        let offset = cfg.offset()?;
        let (day, _) = resolve_day(date.as_ref(), &offset)?;

        let timestamp = match parse_optional_time(at.as_ref())? {
            Some(t) => timestamp_at(day, t, &offset)?,
            None => {
                let now = Utc::now().with_timezone(&offset);
                timestamp_at(day, now.time(), &offset)?
            }
        };

        let pool = open_store(&cfg.database)?;
        let id = ActivityLogic::add(
            &pool,
            Some(*user),
            Some(timestamp),
            Some(label.as_str()),
            Source::Cli,
        )?;

        success(format!("Activity #{} '{}' logged for user {}", id, label, user));
    }

    Ok(())
}
