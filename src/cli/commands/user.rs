use crate::cli::parser::{Commands, UserAction};
use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::db::initialize::open_store;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::User { action } = cmd {
        let pool = open_store(&cfg.database)?;

        match action {
            UserAction::Add { username, password } => {
                let id = AuthLogic::create_user(&pool, username, password)?;
                success(format!("User '{}' created with id {}", username, id));
            }
        }
    }

    Ok(())
}
