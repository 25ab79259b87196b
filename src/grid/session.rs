//! Explicit grid handle: rows, column definition, filter model, sort order and
//! global listeners. Anything that needs grid control receives a `&mut
//! GridSession`; there is no ambient grid state.

use crate::errors::{AppError, AppResult};
use crate::grid::column::ColumnDef;
use crate::grid::filter::FilterModel;
use crate::models::row::Row;
use clap::ValueEnum;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridEvent {
    FilterChanged { model: Option<FilterModel> },
    SortChanged { direction: Option<SortDirection> },
}

type GlobalListener = Box<dyn FnMut(&GridEvent)>;

pub struct GridSession {
    rows: Vec<Row>,
    column: ColumnDef,
    filter_model: Option<FilterModel>,
    sort: Option<SortDirection>,
    listeners: Vec<GlobalListener>,
}

impl fmt::Debug for GridSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridSession")
            .field("rows", &self.rows.len())
            .field("column", &self.column)
            .field("filter_model", &self.filter_model)
            .field("sort", &self.sort)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl GridSession {
    pub fn new(rows: Vec<Row>, column: ColumnDef) -> Self {
        Self {
            rows,
            column,
            filter_model: None,
            sort: None,
            listeners: Vec::new(),
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn column(&self) -> &ColumnDef {
        &self.column
    }

    pub fn filter_model(&self) -> Option<&FilterModel> {
        self.filter_model.as_ref()
    }

    pub fn sort(&self) -> Option<SortDirection> {
        self.sort
    }

    pub fn add_global_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&GridEvent) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Replace the filter model; `None` removes the filter.
    pub fn set_filter_model(&mut self, model: Option<FilterModel>) -> AppResult<()> {
        if let Some(m) = &model {
            m.validate()?;
        }

        self.filter_model = model;
        debug!(model = ?self.filter_model, "filter model updated");
        self.emit(GridEvent::FilterChanged { model });
        Ok(())
    }

    /// Clear every applied filter. Input widgets keep their own state.
    pub fn reset_filters(&mut self) -> AppResult<()> {
        self.set_filter_model(None)
    }

    pub fn set_sort(&mut self, direction: Option<SortDirection>) -> AppResult<()> {
        if direction.is_some() && !self.column.sortable {
            return Err(AppError::InvalidSort(format!(
                "column '{}' is not sortable",
                self.column.field
            )));
        }

        self.sort = direction;
        self.emit(GridEvent::SortChanged { direction });
        Ok(())
    }

    /// Rows visible under the current filter and sort, in display order.
    pub fn displayed_rows(&self) -> AppResult<Vec<&Row>> {
        let params = &self.column.filter_params;

        let mut visible = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let keep = match &self.filter_model {
                Some(model) => model.passes(params, &row.event_timestamp)?,
                None => true,
            };
            if keep {
                visible.push(row);
            }
        }

        if let Some(direction) = self.sort {
            let mut keyed = visible
                .into_iter()
                .map(|row| Ok((params.comparator.cell_millis(&row.event_timestamp)?, row)))
                .collect::<AppResult<Vec<_>>>()?;

            match direction {
                SortDirection::Asc => keyed.sort_by(|a, b| a.0.cmp(&b.0)),
                SortDirection::Desc => keyed.sort_by(|a, b| b.0.cmp(&a.0)),
            }

            visible = keyed.into_iter().map(|(_, row)| row).collect();
        }

        Ok(visible)
    }

    fn emit(&mut self, event: GridEvent) {
        for listener in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}
