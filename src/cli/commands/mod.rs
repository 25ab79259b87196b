pub mod compare;
pub mod config;
pub mod export;
pub mod init;
pub mod list;

use crate::cli::parser::FilterArgs;
use crate::config::Config;
use crate::core::comparator::TimestampComparator;
use crate::core::timezone::TimezonePolicy;
use crate::data::load_rows;
use crate::errors::{AppError, AppResult};
use crate::grid::{ColumnDef, FilterPopup, GridEvent, GridSession};
use crate::ui::messages::warning;
use std::path::Path;
use tracing::debug;

/// `--tz` wins over the configured timezone.
pub(crate) fn resolve_timezone(cfg: &Config, tz: &Option<String>) -> AppResult<TimezonePolicy> {
    match tz {
        Some(s) => s.parse(),
        None => Ok(cfg.timezone),
    }
}

/// Load the dataset and apply the filter and sort options through the popup.
pub(crate) fn build_session(cfg: &Config, args: &FilterArgs) -> AppResult<GridSession> {
    let timezone = resolve_timezone(cfg, &args.tz)?;

    let data = args
        .data
        .clone()
        .or_else(|| cfg.data_file.clone())
        .ok_or_else(|| {
            AppError::Config("no dataset given: pass --data or set data_file".to_string())
        })?;
    let rows = load_rows(Path::new(&data))?;

    let comparator = TimestampComparator::new(timezone);
    let column = ColumnDef::event_timestamp(comparator, args.inclusive || cfg.inclusive_range);
    let mut session = GridSession::new(rows, column);

    session.add_global_listener(|event| {
        if let GridEvent::FilterChanged { model } = event {
            debug!(?model, "filterChanged");
        }
    });

    let mut popup = FilterPopup::new(&session.column().filter_params, timezone);
    popup.set_option(args.filter);

    if let Some(from) = &args.from {
        popup.from_input().set_date(from.as_str());
        if popup.from_input().get_date().is_none() {
            warning(format!("Ignoring unparseable --from value '{from}'"));
        }
    }

    if let Some(to) = &args.to {
        if !args.filter.needs_upper_bound() {
            warning(format!(
                "--to is only used by the in-range filter, ignoring '{to}'"
            ));
        } else {
            popup.to_input().set_date(to.as_str());
            if popup.to_input().get_date().is_none() {
                warning(format!("Ignoring unparseable --to value '{to}'"));
            }
        }
    }

    if (args.from.is_some() || args.to.is_some()) && popup.model().is_none() {
        warning(format!(
            "Filter '{}' is incomplete, showing all rows",
            args.filter.as_str()
        ));
    }

    popup.apply(&mut session)?;

    if args.sort.is_some() {
        session.set_sort(args.sort)?;
    }

    Ok(session)
}
