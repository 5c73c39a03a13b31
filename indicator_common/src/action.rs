//! User actions accepted by the indicator.
//!
//! Every menu activation maps to one `Action` variant and is dispatched by a
//! single handler. Actions arrive as text lines:
//!
//! - `refresh`: run a refresh cycle now.
//! - `default <field>`: mirror `<field>` onto the status label.
//! - `notify`: toggle arbitrage notifications.
//! - `open <n | label>`: open one of the [`LINKS`] (1-based) or any label.
//! - `quit`: leave the event loop.
use std::str::FromStr;

use crate::error::IndicatorError;
use crate::fields::FieldId;
use crate::net::{LINKS, link_url};

/// A user-initiated action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Cancel the pending timer and refresh immediately.
    Refresh,
    /// Select the field whose text is mirrored onto the status label.
    SetDefault(FieldId),
    /// Enable or disable arbitrage notifications.
    ToggleNotify,
    /// Open the given URL in the browser.
    LaunchUrl(String),
    /// Stop the indicator.
    Quit,
}

impl FromStr for Action {
    type Err = IndicatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match (verb.to_ascii_lowercase().as_str(), rest) {
            ("refresh" | "r", "") => Ok(Action::Refresh),
            ("notify" | "n", "") => Ok(Action::ToggleNotify),
            ("quit" | "q" | "exit", "") => Ok(Action::Quit),
            ("default" | "d", field) if !field.is_empty() => field
                .parse::<FieldId>()
                .map(Action::SetDefault)
                .map_err(|_| IndicatorError::InvalidAction(format!("unknown field '{}'", field))),
            ("open" | "o", target) if !target.is_empty() => Ok(Action::LaunchUrl(resolve_link(target))),
            _ => Err(IndicatorError::InvalidAction(line.to_string())),
        }
    }
}

/// Maps a 1-based link number to its URL; anything else is treated as a label.
fn resolve_link(target: &str) -> String {
    match target.parse::<usize>() {
        Ok(n) if (1..=LINKS.len()).contains(&n) => link_url(LINKS[n - 1]),
        _ if target.starts_with("http://") || target.starts_with("https://") => target.to_string(),
        _ => link_url(target),
    }
}
