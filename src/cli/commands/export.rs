use crate::cli::commands::build_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
        filter,
    } = cmd
    {
        let session = build_session(cfg, filter)?;
        ExportLogic::export(&session, *format, file, &cfg.display_format, *force)?;
    }
    Ok(())
}
