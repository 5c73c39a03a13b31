//! Published version literal.
//!
//! The version file is plain text; the first line that assigns to `VERSION`
//! (any case, so both `VERSION = '1.2'` and a manifest's `version = "1.2"`
//! match) carries the version as a quoted literal.

/// Outcome of comparing the running version with the published one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionStatus {
    /// No newer version is known (also the result of any failure).
    UpToDate,
    /// The published version differs from the running one.
    UpdateAvailable(String),
}

impl VersionStatus {
    /// Compares `published` with `current` textually.
    pub fn compare(current: &str, published: Option<&str>) -> Self {
        match published {
            Some(latest) if latest != current => VersionStatus::UpdateAvailable(latest.to_string()),
            _ => VersionStatus::UpToDate,
        }
    }
}

const MARKER: &str = "version";

/// Extracts the quoted version literal, if any.
pub fn parse_published_version(body: &str) -> Option<String> {
    body.lines().find_map(version_literal)
}

fn version_literal(line: &str) -> Option<String> {
    let line = line.trim_start();
    let head = line.get(..MARKER.len())?;
    if !head.eq_ignore_ascii_case(MARKER) {
        return None;
    }
    let value = line[MARKER.len()..].trim_start().strip_prefix('=')?.trim_start();

    let quote = value.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let rest = &value[1..];
    let end = rest.find(quote)?;
    Some(rest[..end].to_string())
}
