//! Pure formatting functions for UI output.
//!
//! Errors and warnings go to stderr so stdout stays clean for `--dry-run`
//! previews piped into other tools.

use std::path::Path;

use console::style;

use crate::domain::ReleaseOutputs;
use crate::warning::ReleaseWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a release warning to the user.
pub fn display_warning(warning: &ReleaseWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display the lines a dry run would append, exactly as they would appear
/// in the output file.
///
/// # Arguments
/// * `outputs` - The rendered release outputs
/// * `env_var` - Name of the variable that would supply the output path
pub fn display_dry_run(outputs: &ReleaseOutputs, env_var: &str) {
    print!("{}", format_dry_run(outputs, env_var));
}

/// Dry-run preview: a bold header naming `env_var`, then the rendered lines.
pub fn format_dry_run(outputs: &ReleaseOutputs, env_var: &str) -> String {
    format!(
        "\n{}\n{}",
        style(format!("Dry run: would append to ${}", env_var)).bold(),
        outputs.render()
    )
}

/// Success message after the lines were appended to `path`.
pub fn format_written(outputs: &ReleaseOutputs, path: &Path) -> String {
    format!(
        "Wrote release outputs for tag '{}' to {}",
        outputs.tag.value,
        path.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ReleaseInfo;
    use console::strip_ansi_codes;

    #[test]
    fn test_display_error() {
        // Visual verification test - output is printed to stderr
        display_error("test error");
    }

    #[test]
    fn test_format_dry_run() {
        let outputs =
            ReleaseOutputs::from_release(&ReleaseInfo::new("T", "a\nb", "v1.0"), "release_");
        let text = format_dry_run(&outputs, "GITHUB_OUTPUT");

        assert_eq!(
            strip_ansi_codes(&text),
            "\nDry run: would append to $GITHUB_OUTPUT\n\
             release_title=T\nrelease_description_b64=YQpi\nrelease_tag=v1.0\n"
        );
    }

    #[test]
    fn test_format_dry_run_empty_release() {
        let outputs = ReleaseOutputs::from_release(&ReleaseInfo::default(), "release_");
        let text = format_dry_run(&outputs, "STEP_OUT");

        assert!(strip_ansi_codes(&text).contains("$STEP_OUT\nrelease_title=\n"));
    }

    #[test]
    fn test_format_written() {
        let outputs = ReleaseOutputs::from_release(&ReleaseInfo::new("", "", "v2.0.0"), "rc_");
        let text = format_written(&outputs, Path::new("/tmp/github_output"));

        assert_eq!(text, "Wrote release outputs for tag 'v2.0.0' to /tmp/github_output");
    }
}
