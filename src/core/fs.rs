//! File system helpers: config locations and tolerant file reads.

use std::{
    fs,
    io::Read,
    path::{Path, PathBuf},
};

pub const APP_DIR: &str = "dota-fantasy";

/// Path: ~/.config/dota-fantasy/rubric.json (platform config dir).
pub fn default_rubric_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_DIR).join("rubric.json"))
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}
