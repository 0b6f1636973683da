pub mod commands;
pub mod parser;

use crate::config::Config;
use std::path::PathBuf;

/// Settings resolved once per invocation and shared by every handler.
pub struct AppContext {
    pub cfg: Config,
    pub config_path: PathBuf,
    pub data_path: PathBuf,
    pub color: bool,
}
