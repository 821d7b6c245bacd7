mod unique;

pub use unique::{elements_are_unique, first_duplicate};

use std::path::PathBuf;

/// The name of the user-level tasktags folder
pub const TASKTAGS_FOLDER: &str = ".tasktags";

/// The name of the user config file inside the tasktags folder
pub const CONFIG_FILE: &str = "config.toml";

/// The name of the log directory inside the tasktags folder
pub const LOGS_FOLDER: &str = "logs";

/// Get the path to the user-level `~/.tasktags` folder
#[must_use]
pub fn get_tasktags_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(TASKTAGS_FOLDER))
}
