//! `~` expansion for user supplied paths.

use std::path::PathBuf;

/// `~` and `~/rest` resolve against the home directory; anything else is
/// returned unchanged. Without a home directory the input is kept as is.
pub fn expand_tilde(path: &str) -> PathBuf {
    let rest = match path {
        "~" => "",
        _ => match path.strip_prefix("~/") {
            Some(rest) => rest,
            None => return PathBuf::from(path),
        },
    };

    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => PathBuf::from(path),
    }
}
