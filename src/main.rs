//! rcalendar main entrypoint.

use rcalendar::run;
use rcalendar::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(&e);
        std::process::exit(1);
    }
}
