pub mod config;
pub mod core;
pub mod utils;

pub use crate::config::{CliConfig, Exercise, DEFAULT_DUPLICATES_INPUT};
pub use crate::core::{
    find_duplicates, label, labels, render, render_duplicates, write_report, Label,
};
pub use crate::utils::error::{KataError, Result};
