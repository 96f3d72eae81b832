use std::fmt;

use crate::domain::ReleaseInfo;

/// Non-fatal observations about sanitized release values.
/// These are reported to the user but never change what gets written.
#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseWarning {
    /// A trimmed field is empty
    EmptyField { key: String },
    /// A trimmed field still contains a line break, which splits the output line
    MultilineValue { key: String },
    /// The tag is not a semantic version
    NonSemverTag { tag: String },
}

impl fmt::Display for ReleaseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseWarning::EmptyField { key } => {
                write!(f, "Field '{}' is empty", key)
            }
            ReleaseWarning::MultilineValue { key } => {
                write!(
                    f,
                    "Field '{}' contains a line break; the output file will be malformed",
                    key
                )
            }
            ReleaseWarning::NonSemverTag { tag } => {
                write!(f, "Tag '{}' is not a semantic version", tag)
            }
        }
    }
}

/// Inspect sanitized release info for suspicious values.
///
/// Only `title` and `tag` are checked; the description is always safe once
/// base64-encoded.
pub fn check_release(info: &ReleaseInfo) -> Vec<ReleaseWarning> {
    let mut warnings = Vec::new();

    for (key, value) in [("title", &info.title), ("tag", &info.tag)] {
        if value.is_empty() {
            warnings.push(ReleaseWarning::EmptyField {
                key: key.to_string(),
            });
        } else if value.contains(|c: char| c == '\n' || c == '\r') {
            warnings.push(ReleaseWarning::MultilineValue {
                key: key.to_string(),
            });
        }
    }

    if !info.tag.is_empty() && !is_semver_tag(&info.tag) {
        warnings.push(ReleaseWarning::NonSemverTag {
            tag: info.tag.clone(),
        });
    }

    warnings
}

/// Whether `tag` (with an optional leading `v`/`V`) parses as semver
pub fn is_semver_tag(tag: &str) -> bool {
    let version = tag
        .strip_prefix('v')
        .or_else(|| tag.strip_prefix('V'))
        .unwrap_or(tag);
    semver::Version::parse(version).is_ok()
}
