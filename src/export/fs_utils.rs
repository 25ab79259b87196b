// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Make sure the export target can be (re)written.
///
/// A missing file is always fine. An existing one is replaced with `force`,
/// otherwise the user is asked on stdin. No answer at all counts as "no".
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if path.is_dir() {
        return Err(AppError::Export(format!(
            "'{}' is a directory",
            path.display()
        )));
    }

    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
            return Err(AppError::Export(format!(
                "directory '{}' does not exist",
                parent.display()
            )));
        }
        _ => {}
    }

    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("'{}' already exists.", path.display()));
    confirm_overwrite(&mut io::stdin().lock())
}

fn confirm_overwrite<R: BufRead>(answers: &mut R) -> AppResult<()> {
    eprint!("Overwrite? [y/N]: ");
    io::stderr().flush().ok();

    let mut answer = String::new();
    if answers.read_line(&mut answer)? == 0 {
        return Err(AppError::Export(
            "no confirmation received; use --force to overwrite".to_string(),
        ));
    }

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            info("Existing file will be replaced.");
            Ok(())
        }
        _ => Err(AppError::Export(
            "export cancelled: existing file kept".to_string(),
        )),
    }
}
