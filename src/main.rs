//! stundenzettel main entrypoint.

use stundenzettel::run;

fn main() {
    if let Err(e) = run() {
        stundenzettel::ui::messages::error(e.to_string());
        std::process::exit(1);
    }
}
