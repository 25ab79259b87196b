use crate::cli::commands::build_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::RowExport;
use crate::ui::messages::info;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { filter } = cmd {
        let session = build_session(cfg, filter)?;
        let visible = session.displayed_rows()?;

        if visible.is_empty() {
            info("No rows match the current filter.");
            return Ok(());
        }

        let comparator = session.column().filter_params.comparator;
        let header = session.column().header_name.clone();
        let mut table = Table::with_headers(&["ID", header.as_str(), "Local time"]);

        for row in &visible {
            table.add_row(RowExport::from_row(row, &comparator, &cfg.display_format).to_cells());
        }

        print!("{}", table.render());
        info(format!(
            "{} of {} rows shown",
            visible.len(),
            session.rows().len()
        ));
    }
    Ok(())
}
