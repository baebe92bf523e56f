//! One-line status messages for maintenance commands and fatal errors.

use crate::utils::colors::{BLUE, BOLD, GREEN, RED, RESET};
use std::fmt::Display;

fn tagged(color: &str, icon: &str, msg: impl Display) -> String {
    format!("{color}{BOLD}{icon} {RESET}{msg}")
}

pub fn info(msg: impl Display) {
    println!("{}", tagged(BLUE, "ℹ️", msg));
}

pub fn success(msg: impl Display) {
    println!("{}", tagged(GREEN, "✅", msg));
}

/// Goes to stderr so scripted stdout stays clean.
pub fn error(msg: impl Display) {
    eprintln!("{}", tagged(RED, "❌", msg));
}
