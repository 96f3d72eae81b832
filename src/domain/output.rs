use std::fmt;

use crate::domain::release::ReleaseInfo;

/// A single `key=value` entry destined for the CI output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub key: String,
    pub value: String,
}

impl OutputLine {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        OutputLine {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for OutputLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// The three output lines produced for one release, in write order:
/// title, base64 description, tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseOutputs {
    pub title: OutputLine,
    pub description_b64: OutputLine,
    pub tag: OutputLine,
}

impl ReleaseOutputs {
    /// Build output lines from already-sanitized release info.
    ///
    /// Keys are `{prefix}title`, `{prefix}description_b64` and `{prefix}tag`.
    pub fn from_release(info: &ReleaseInfo, prefix: &str) -> Self {
        ReleaseOutputs {
            title: OutputLine::new(format!("{}title", prefix), info.title.as_str()),
            description_b64: OutputLine::new(
                format!("{}description_b64", prefix),
                info.description_b64(),
            ),
            tag: OutputLine::new(format!("{}tag", prefix), info.tag.as_str()),
        }
    }

    pub fn lines(&self) -> [&OutputLine; 3] {
        [&self.title, &self.description_b64, &self.tag]
    }

    /// Render all lines, each terminated by `\n`
    pub fn render(&self) -> String {
        render_lines(self.lines())
    }
}

/// Join lines into the on-disk format, one `key=value` per line
pub fn render_lines<'a>(lines: impl IntoIterator<Item = &'a OutputLine>) -> String {
    let mut buf = String::new();
    for line in lines {
        buf.push_str(&line.to_string());
        buf.push('\n');
    }
    buf
}
