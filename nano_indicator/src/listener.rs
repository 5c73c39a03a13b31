//! Reads user actions from standard input.
//!
//! Each non-empty line is parsed into an [`Action`] and forwarded to the
//! event loop. Lines that do not parse are logged and skipped. End of input
//! only stops the listener; the indicator keeps refreshing until `quit` or
//! Ctrl+C.
use std::io::{self, BufRead};
use std::thread::{self, JoinHandle};

use crossbeam_channel::Sender;
use indicator_common::{Action, IndicatorError, Result};
use log::{debug, info, warn};

/// Background reader of action lines.
pub struct ActionListener;

impl ActionListener {
    /// Spawn a thread that forwards stdin actions to `actions`.
    pub fn start(actions: Sender<Action>) -> Result<JoinHandle<()>> {
        let handle = thread::Builder::new()
            .name("action-listener".to_string())
            .spawn(move || {
                let stdin = io::stdin();
                if let Err(e) = forward_actions(stdin.lock(), &actions) {
                    debug!("Action listener stopped: {}", e);
                }
            })?;
        Ok(handle)
    }
}

/// Forwards every parsed line of `reader`; returns once the input ends or the
/// receiving side is gone.
pub fn forward_actions<R: BufRead>(reader: R, actions: &Sender<Action>) -> Result<()> {
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Action>() {
            Ok(action) => {
                debug!("Action received: {:?}", action);
                send(actions, action)?;
            }
            Err(e) => warn!("Ignoring input: {}", e),
        }
    }
    info!("Input closed, actions now only via Ctrl+C");
    Ok(())
}

fn send(actions: &Sender<Action>, action: Action) -> Result<()> {
    actions
        .send(action)
        .map_err(|e| IndicatorError::ChannelSend(format!("action: {:?}", e.into_inner())))
}
