pub mod commands;
pub mod config;
pub mod duration;
pub mod error;
pub mod format;
pub mod options;

use clap::ValueEnum;
use serde::Serialize;

pub use error::{Error, Result};
pub use format::format_duration;
pub use options::Options;

#[derive(Clone, Copy, ValueEnum, Debug, Default, Serialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
