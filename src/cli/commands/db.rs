use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::{applied_versions, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        //
        // 1) MIGRATE
        //
        if *migrate {
            info("Running migrations…");
            pool.with_conn(|conn| {
                run_pending_migrations(conn)?;
                for v in applied_versions(conn)? {
                    println!("  ✔ {}", v);
                }
                Ok(())
            })?;
            success("Migration completed.");
        }

        //
        // 2) CHECK
        //
        if *check {
            info("Running integrity check…");

            let integrity: String = pool.with_conn(|conn| {
                Ok(conn.query_row("PRAGMA integrity_check;", [], |row| row.get(0))?)
            })?;

            if integrity == "ok" {
                success("Integrity check passed.");
            } else {
                error(format!("Integrity check failed: {}", integrity));
            }
        }

        //
        // 3) VACUUM
        //
        if *vacuum {
            info("Running VACUUM…");
            pool.with_conn(|conn| Ok(conn.execute_batch("VACUUM;")?))?;
            success("Vacuum completed.");
        }
    }

    Ok(())
}
