//! Status lines for the user. They all go to stderr so that stdout carries
//! only the grid, the compare result or the printed config.

use crate::utils::colors::{BLUE, BOLD, GREEN, RED, RESET, YELLOW};
use std::fmt;
use std::io::{self, IsTerminal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Info,
    Success,
    Warning,
    Error,
}

impl Status {
    fn icon(self) -> &'static str {
        match self {
            Status::Info => "ℹ️",
            Status::Success => "✅",
            Status::Warning => "⚠️",
            Status::Error => "❌",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Status::Info => BLUE,
            Status::Success => GREEN,
            Status::Warning => YELLOW,
            Status::Error => RED,
        }
    }
}

fn emit(status: Status, msg: impl fmt::Display) {
    // Plain text when piped or captured
    if io::stderr().is_terminal() {
        eprintln!("{}{}{} {}{}", status.color(), BOLD, status.icon(), RESET, msg);
    } else {
        eprintln!("{} {}", status.icon(), msg);
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Status::Info, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Status::Success, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Status::Warning, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Status::Error, msg);
}
