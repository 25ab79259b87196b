//! Imperative get/set/notify handle over a date-time input widget.
//!
//! The adapter owns the committed selection. The widget only reports raw
//! changes, and the host only reads through [`DateTimeInputAdapter::get_date`]
//! or writes through [`DateTimeInputAdapter::set_date`]. Every change to the
//! selection fires the change listener exactly once, after the new value is
//! stored.

use crate::core::date_value::{DateValue, parse_moment};
use crate::core::timezone::TimezonePolicy;
use crate::core::widget::{DateTimeWidget, Key, MaxDetail, WidgetConfig, WidgetInput, WidgetProps};
use chrono::{NaiveDateTime, Timelike};
use std::fmt;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Empty,
    Selected(NaiveDateTime),
}

impl Selection {
    pub fn date(&self) -> Option<NaiveDateTime> {
        match self {
            Selection::Empty => None,
            Selection::Selected(d) => Some(*d),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::Empty)
    }
}

type ChangeListener = Box<dyn FnMut(Option<NaiveDateTime>)>;

#[derive(Default)]
pub struct DateTimeInputAdapter {
    selection: Selection,
    config: WidgetConfig,
    timezone: TimezonePolicy,
    on_date_changed: Option<ChangeListener>,
}

impl fmt::Debug for DateTimeInputAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateTimeInputAdapter")
            .field("selection", &self.selection)
            .field("config", &self.config)
            .field("timezone", &self.timezone)
            .field("has_listener", &self.on_date_changed.is_some())
            .finish()
    }
}

impl DateTimeInputAdapter {
    pub fn new(config: WidgetConfig, timezone: TimezonePolicy) -> Self {
        Self {
            selection: Selection::Empty,
            config,
            timezone,
            on_date_changed: None,
        }
    }

    /// Register the host callback. Replaces any previous one.
    pub fn on_date_changed<F>(&mut self, listener: F)
    where
        F: FnMut(Option<NaiveDateTime>) + 'static,
    {
        self.on_date_changed = Some(Box::new(listener));
    }

    pub fn get_date(&self) -> Option<NaiveDateTime> {
        self.selection.date()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Programmatic write. Accepts everything the widget can emit, plus
    /// `Option<NaiveDateTime>` so that `set_date(get_date())` is a no-op.
    /// The value is stored at full precision.
    pub fn set_date(&mut self, value: impl Into<WidgetInput>) {
        let next = self.normalize_or_clear(&value.into());
        self.commit(next);
    }

    /// Entry point for raw widget output, cut to the widget's maximum detail.
    pub fn handle_change(&mut self, input: WidgetInput) {
        let next = match self.normalize_or_clear(&input) {
            Selection::Selected(naive) => Selection::Selected(self.truncate(naive)),
            Selection::Empty => Selection::Empty,
        };

        // Re-committing what the widget displays keeps the finer stored value.
        let shown = self.get_date().map(|d| self.truncate(d));
        if next.date().is_some() && next.date() == shown {
            return;
        }

        self.commit(next);
    }

    pub fn widget_props(&self) -> WidgetProps {
        WidgetProps {
            value: self.get_date(),
            config: self.config,
        }
    }

    /// Forward one key press to the widget and commit whatever it emits.
    pub fn dispatch<W: DateTimeWidget>(&mut self, widget: &mut W, key: Key) {
        if let Some(input) = widget.handle_key(key) {
            self.handle_change(input);
            widget.render(&self.widget_props());
        }
    }

    fn normalize_or_clear(&self, input: &WidgetInput) -> Selection {
        self.normalize(input).unwrap_or_else(|| {
            warn!(?input, "unparseable date-time input, clearing selection");
            Selection::Empty
        })
    }

    // None means the input could not be understood.
    fn normalize(&self, input: &WidgetInput) -> Option<Selection> {
        let value = match input {
            WidgetInput::Clear => return Some(Selection::Empty),
            WidgetInput::Event(ev) => DateValue::Text(ev.target.value.clone()),
            WidgetInput::Value(v) => v.clone(),
        };

        if value.is_blank() {
            return Some(Selection::Empty);
        }

        let naive = match value {
            DateValue::WallClock(naive) => naive,
            DateValue::Text(s) => parse_moment(&s)?.wall_clock(&self.timezone)?,
        };

        Some(Selection::Selected(naive))
    }

    fn truncate(&self, naive: NaiveDateTime) -> NaiveDateTime {
        let naive = naive.with_nanosecond(0).unwrap_or(naive);
        match self.config.max_detail {
            MaxDetail::Second => naive,
            MaxDetail::Minute => naive.with_second(0).unwrap_or(naive),
        }
    }

    fn commit(&mut self, next: Selection) {
        if next == self.selection {
            return;
        }

        let previous = std::mem::replace(&mut self.selection, next);
        debug!(?previous, current = ?next, "date-time selection changed");

        let date = self.selection.date();
        if let Some(listener) = self.on_date_changed.as_mut() {
            listener(date);
        }
    }
}
