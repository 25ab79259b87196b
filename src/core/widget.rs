//! Date-time input widget boundary.
//!
//! A widget owns its own editing state and reports raw changes: either a
//! date-like value or a change event whose `target.value` holds text. It is
//! driven by the adapter through [`WidgetProps`] (current value + display
//! configuration).

use crate::core::date_value::DateValue;
use chrono::NaiveDateTime;

/// Finest unit the widget lets the user edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxDetail {
    Minute,
    Second,
}

impl MaxDetail {
    pub fn display_format(&self) -> &'static str {
        match self {
            MaxDetail::Minute => "%Y-%m-%dT%H:%M",
            MaxDetail::Second => "%Y-%m-%dT%H:%M:%S",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetConfig {
    pub max_detail: MaxDetail,
    pub disable_calendar: bool,
    pub disable_clock: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            max_detail: MaxDetail::Second,
            disable_calendar: true,
            disable_clock: true,
        }
    }
}

/// What the adapter hands to the widget on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetProps {
    pub value: Option<NaiveDateTime>,
    pub config: WidgetConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventTarget {
    pub value: String,
}

/// Change event as emitted by a native form control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub target: EventTarget,
}

impl ChangeEvent {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            target: EventTarget {
                value: value.into(),
            },
        }
    }
}

/// Every shape a widget (or a host calling `set_date`) may produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetInput {
    Value(DateValue),
    Event(ChangeEvent),
    Clear,
}

impl From<DateValue> for WidgetInput {
    fn from(v: DateValue) -> Self {
        WidgetInput::Value(v)
    }
}

impl From<NaiveDateTime> for WidgetInput {
    fn from(naive: NaiveDateTime) -> Self {
        WidgetInput::Value(DateValue::WallClock(naive))
    }
}

impl From<Option<NaiveDateTime>> for WidgetInput {
    fn from(naive: Option<NaiveDateTime>) -> Self {
        naive.map_or(WidgetInput::Clear, WidgetInput::from)
    }
}

impl From<ChangeEvent> for WidgetInput {
    fn from(ev: ChangeEvent) -> Self {
        WidgetInput::Event(ev)
    }
}

impl From<&str> for WidgetInput {
    fn from(s: &str) -> Self {
        WidgetInput::Value(DateValue::from(s))
    }
}

impl From<String> for WidgetInput {
    fn from(s: String) -> Self {
        WidgetInput::Value(DateValue::from(s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    /// Commit the buffered text
    Enter,
    /// Discard the buffer and clear the value
    Escape,
}

pub trait DateTimeWidget {
    /// Receive the current value and display configuration.
    fn render(&mut self, props: &WidgetProps);

    /// Handle one key press; returns a change only when the edit is committed.
    fn handle_key(&mut self, key: Key) -> Option<WidgetInput>;
}

/// Single-line text entry that buffers keystrokes until Enter or Escape.
#[derive(Debug, Clone, Default)]
pub struct TextEntryWidget {
    buffer: String,
    props: Option<WidgetProps>,
}

impl TextEntryWidget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text currently shown in the field.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn props(&self) -> Option<&WidgetProps> {
        self.props.as_ref()
    }
}

impl DateTimeWidget for TextEntryWidget {
    fn render(&mut self, props: &WidgetProps) {
        self.buffer = props
            .value
            .map(|v| v.format(props.config.max_detail.display_format()).to_string())
            .unwrap_or_default();
        self.props = Some(*props);
    }

    fn handle_key(&mut self, key: Key) -> Option<WidgetInput> {
        match key {
            Key::Char(c) => {
                self.buffer.push(c);
                None
            }
            Key::Backspace => {
                self.buffer.pop();
                None
            }
            Key::Enter => Some(WidgetInput::Event(ChangeEvent::new(self.buffer.clone()))),
            Key::Escape => {
                self.buffer.clear();
                Some(WidgetInput::Clear)
            }
        }
    }
}
