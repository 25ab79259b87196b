//! tsgrid main entrypoint.

use tsgrid::run;
use tsgrid::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
