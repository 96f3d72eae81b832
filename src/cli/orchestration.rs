//! Main workflow orchestration logic
//!
//! Keeps the extract workflow separate from CLI argument parsing so it can be
//! called programmatically without depending on clap.

use std::path::PathBuf;

use crate::ci_output;
use crate::config::Config;
use crate::domain::{ReleaseInfo, ReleaseOutputs};
use crate::error::Result;
use crate::warning::{self, ReleaseWarning};

/// Arguments for the extract workflow
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtractWorkflowArgs {
    /// Preview mode - don't look up the output file or write to it
    pub dry_run: bool,
}

/// Result of a successful extract workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The lines that were (or, in dry-run mode, would be) appended
    pub outputs: ReleaseOutputs,

    /// Non-fatal observations about the release values
    pub warnings: Vec<ReleaseWarning>,

    /// File the lines were appended to; `None` in dry-run mode
    pub output_path: Option<PathBuf>,
}

/// Main extract workflow
///
/// 1. Read and decode the schema file
/// 2. Sanitize title and tag, collect warnings
/// 3. Build the three output lines
/// 4. Resolve the output file from the environment (skipped in dry-run)
/// 5. Append the lines (skipped in dry-run)
///
/// Every failure happens before step 5, so an error means nothing was written.
pub fn run_extract_workflow(args: &ExtractWorkflowArgs, config: &Config) -> Result<WorkflowResult> {
    let info = ReleaseInfo::load(&config.input.path)?.sanitized();
    let warnings = warning::check_release(&info);
    let outputs = ReleaseOutputs::from_release(&info, &config.output.key_prefix);

    if args.dry_run {
        return Ok(WorkflowResult {
            outputs,
            warnings,
            output_path: None,
        });
    }

    let output_path = ci_output::resolve_output_path(&config.output.env_var)?;
    ci_output::append_lines(&output_path, outputs.lines())?;

    Ok(WorkflowResult {
        outputs,
        warnings,
        output_path: Some(output_path),
    })
}
