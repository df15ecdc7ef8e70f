//! Matcher for log lines carrying one fragment of a multi-part record.

use regex::Regex;

/// Pieces extracted from one matching log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineParts<'a> {
    /// Timestamp token pair at the start of the line, taken verbatim.
    pub timestamp: &'a str,
    /// 1-based index of this fragment within the message.
    pub part_index: u32,
    /// Total number of fragments in the message.
    pub part_count: u32,
    /// Base64 text chunk carried by this line.
    pub fragment: &'a str,
}

/// Matches log lines of the form
///
/// ```text
/// 11-30 15:32:22.892 13781 16553 I TuningFork: (TCL1/1)GgAqHAgAEgAaFg...
/// ```
///
/// where the tag (`TuningFork`) and the fragment marker (`TCL`) are
/// configurable.
pub struct LineMatcher {
    pattern: Regex,
}

impl LineMatcher {
    /// Log tag used by the telemetry debug backend.
    pub const DEFAULT_TAG: &'static str = "TuningFork";
    /// Fragment marker used by the telemetry debug backend.
    pub const DEFAULT_MARKER: &'static str = "TCL";

    /// Build a matcher for the given log tag and fragment marker.
    ///
    /// Both strings are escaped, so tags containing regex metacharacters
    /// are matched literally.
    pub fn new(tag: &str, marker: &str) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!(
            r"^(\S+ \S+).*{}: \({}(\d+)/(\d+)\)(.*)$",
            regex::escape(tag),
            regex::escape(marker),
        ))?;
        Ok(Self { pattern })
    }

    /// Attempt to extract fragment parts from one raw line.
    ///
    /// Returns `None` for lines that do not conform to the pattern,
    /// including part fields that do not fit in a `u32`. Such lines are
    /// unrelated log noise and are skipped, never an error.
    pub fn parse<'a>(&self, line: &'a str) -> Option<LineParts<'a>> {
        let caps = self.pattern.captures(line)?;
        let part_index = caps.get(2)?.as_str().parse().ok()?;
        let part_count = caps.get(3)?.as_str().parse().ok()?;
        Some(LineParts {
            timestamp: caps.get(1)?.as_str(),
            part_index,
            part_count,
            fragment: caps.get(4)?.as_str(),
        })
    }
}
