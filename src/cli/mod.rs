//! CLI-facing workflow, decoupled from argument parsing

pub mod orchestration;

pub use orchestration::{run_extract_workflow, ExtractWorkflowArgs, WorkflowResult};
