use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config { print_config, path: show_path } = cmd {
        if *show_path {
            println!("{}", path.display());
        }

        if *print_config || !*show_path {
            println!("{}", cfg.to_yaml()?);
        }
    }

    Ok(())
}
