//! User interface module - styled terminal messages.
//!
//! - `formatter` - Individual message formatters
//! - This module - Summaries composed from workflow results

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_dry_run, display_error, display_status, display_success, display_warning,
    format_dry_run, format_written,
};

use crate::cli::WorkflowResult;

/// Report a finished workflow: warnings first, then either the dry-run
/// preview or the file the lines were appended to.
pub fn display_workflow_result(result: &WorkflowResult, env_var: &str) {
    for warning in &result.warnings {
        display_warning(warning);
    }

    match &result.output_path {
        Some(path) => display_success(&format_written(&result.outputs, path)),
        None => display_dry_run(&result.outputs, env_var),
    }
}
