//! Domain logic - release metadata and its key=value rendering, free of I/O
//! beyond reading the schema file

pub mod output;
pub mod release;

pub use output::{render_lines, OutputLine, ReleaseOutputs};
pub use release::ReleaseInfo;
