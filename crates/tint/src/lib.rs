#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod hsl;
pub mod import;
pub mod logging;
pub mod preview;
pub mod source;
pub mod util;

pub use cli::{run, run_from_env};
pub use error::{Result, TintError};
