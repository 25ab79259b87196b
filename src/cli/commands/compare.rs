use crate::cli::commands::resolve_timezone;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::comparator::{TimestampComparator, ordering_sign};
use crate::core::date_value::DateValue;
use crate::errors::AppResult;
use crate::utils::colors::{RESET, color_for_sign};
use std::io::IsTerminal;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Compare { boundary, cell, tz } = cmd {
        let comparator = TimestampComparator::new(resolve_timezone(cfg, tz)?);
        let ord = comparator.compare(
            &DateValue::from(boundary.as_str()),
            &DateValue::from(cell.as_str()),
        )?;
        let sign = ordering_sign(ord);

        if std::io::stdout().is_terminal() {
            println!("{}{}{}", color_for_sign(sign), sign, RESET);
        } else {
            println!("{sign}");
        }
    }
    Ok(())
}
