pub mod ci_output;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;
pub mod warning;

pub use error::{ReleaseOutputError, Result};
