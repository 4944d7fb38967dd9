//! Cravings Coach entrypoint.

use cravings_coach::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
