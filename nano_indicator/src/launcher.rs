//! Opens links in the system browser.
use std::process::{Command, Stdio};

use indicator_common::{IndicatorError, Result};
use log::info;

/// Program and leading arguments of the platform's URL opener.
fn opener() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "macos") {
        ("open", &[])
    } else if cfg!(target_os = "windows") {
        ("cmd", &["/C", "start", ""])
    } else {
        ("xdg-open", &[])
    }
}

/// Starts the opener for `url` without waiting for it.
pub fn launch_url(url: &str) -> Result<()> {
    if url.trim().is_empty() {
        return Err(IndicatorError::InvalidAction("empty url".to_string()));
    }
    let (program, args) = opener();
    info!("Opening {}", url);
    Command::new(program)
        .args(args)
        .arg(url)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}
