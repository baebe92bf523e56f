//! wh main entrypoint.

use wh::run;
use wh::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(&e);
        std::process::exit(1);
    }
}
