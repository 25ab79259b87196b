//! Filter popup for the timestamp column: two date-time inputs plus the chosen
//! filter option, applied to a [`GridSession`] once the inputs report a change.

use crate::core::adapter::DateTimeInputAdapter;
use crate::core::timezone::TimezonePolicy;
use crate::core::widget::WidgetConfig;
use crate::errors::AppResult;
use crate::grid::filter::{DateFilterParams, FilterModel, FilterOption};
use crate::grid::session::GridSession;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug)]
pub struct FilterPopup {
    option: FilterOption,
    from: DateTimeInputAdapter,
    to: DateTimeInputAdapter,
    pending: Rc<Cell<bool>>,
}

impl FilterPopup {
    pub fn new(params: &DateFilterParams, timezone: TimezonePolicy) -> Self {
        let pending = Rc::new(Cell::new(false));

        let mut from = DateTimeInputAdapter::new(WidgetConfig::default(), timezone);
        let mut to = DateTimeInputAdapter::new(WidgetConfig::default(), timezone);

        let flag = Rc::clone(&pending);
        from.on_date_changed(move |_| flag.set(true));
        let flag = Rc::clone(&pending);
        to.on_date_changed(move |_| flag.set(true));

        Self {
            option: params.default_option,
            from,
            to,
            pending,
        }
    }

    pub fn option(&self) -> FilterOption {
        self.option
    }

    pub fn set_option(&mut self, option: FilterOption) {
        if option != self.option {
            self.option = option;
            self.pending.set(true);
        }
    }

    pub fn from_input(&mut self) -> &mut DateTimeInputAdapter {
        &mut self.from
    }

    pub fn to_input(&mut self) -> &mut DateTimeInputAdapter {
        &mut self.to
    }

    /// True when an input or the option changed since the last apply.
    pub fn is_dirty(&self) -> bool {
        self.pending.get()
    }

    /// Model described by the inputs, or `None` while incomplete.
    pub fn model(&self) -> Option<FilterModel> {
        let from = self.from.get_date()?;

        if self.option.needs_upper_bound() {
            let to = self.to.get_date()?;
            Some(FilterModel::in_range(from, to))
        } else {
            Some(FilterModel::new(self.option, from))
        }
    }

    /// Push pending changes into the session. Returns whether anything was applied.
    pub fn apply(&mut self, session: &mut GridSession) -> AppResult<bool> {
        if !self.pending.replace(false) {
            return Ok(false);
        }

        session.set_filter_model(self.model())?;
        Ok(true)
    }
}
