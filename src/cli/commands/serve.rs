use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::logging::init_tracing;
use crate::server;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { bind } = cmd {
        let bind = bind.clone().unwrap_or_else(|| cfg.bind_address.clone());

        init_tracing(Some(&cfg.log_level))?;

        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(server::serve(cfg, &bind))?;
    }

    Ok(())
}
