pub mod aggregate;
pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod github;
pub mod page;
pub mod progress;
pub mod snapshot;

pub use error::{LangLensError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 2;
