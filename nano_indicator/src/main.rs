//! Nano Indicator: a terminal rendition of the RaiBlocks/Nano price indicator.
//! It polls the market ticker, the network statistics page and two exchanges
//! on a repeating timer, shows every figure as a menu line and raises a
//! notification when the cross-exchange arbitrage return crosses a threshold.
//!
//! Usage example (CLI):
//! ```bash
//! nano_indicator --interval 30 --default-field arbitrage --threshold 1.5
//! ```
//!
//! While running, actions are typed on stdin, one per line:
//! `refresh`, `default <field>`, `notify`, `open <n | label>` and `quit`.
//! See `indicator_common::action` for details.
#![warn(missing_docs)]
mod args;
mod launcher;
mod listener;
mod menu;
mod notifier;

use std::ops::ControlFlow;

use clap::Parser;
use crossbeam_channel::{Receiver, never, select, unbounded};
use indicator_common::net::USER_AGENT;
use indicator_common::{Action, Result};
use indicator_feed::scheduler::CycleState;
use indicator_feed::{DisplayState, FeedConfig, FeedEvent, RefreshScheduler, ReqwestSource, run_cycle};
use log::{debug, error, info, warn};

use crate::args::Args;
use crate::listener::ActionListener;
use crate::notifier::{ConsoleNotifier, Notifier};

fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();
    let config = args.feed_config();
    let source = ReqwestSource::new(USER_AGENT, args.request_timeout())?;
    let mut display = DisplayState::new(args.default_field, !args.no_notify);
    let notifier = ConsoleNotifier;

    if args.once {
        if let Some(note) = run_cycle(&source, &config, &mut display) {
            notifier.notify(&note);
        }
        print!("{}", menu::render(&display));
        return Ok(());
    }

    let (action_tx, action_rx) = unbounded::<Action>();
    {
        let action_tx = action_tx.clone();
        if let Err(e) = ctrlc::set_handler(move || {
            info!("Ctrl+C received. Shutting down indicator...");
            let _ = action_tx.send(Action::Quit);
        }) {
            error!("Failed to set Ctrl+C handler: {}", e);
        }
    }
    ActionListener::start(action_tx)?;

    info!(
        "Tracking '{}' every {}s. Type 'quit' or press Ctrl+C to exit.",
        config.asset_id,
        config.interval.as_secs()
    );
    let (scheduler, events) = RefreshScheduler::start(source, config.clone())?;
    run_event_loop(&scheduler, &events, &action_rx, &config, &mut display, &notifier);

    scheduler.shutdown();
    info!("Indicator stopped");
    Ok(())
}

/// Presentation loop: applies finished cycles and dispatches user actions
/// until `Quit` arrives or the worker goes away.
fn run_event_loop(
    scheduler: &RefreshScheduler,
    events: &Receiver<FeedEvent>,
    actions: &Receiver<Action>,
    config: &FeedConfig,
    display: &mut DisplayState,
    notifier: &dyn Notifier,
) {
    let mut inputs_open = true;
    loop {
        let pending = if inputs_open { actions.clone() } else { never() };
        select! {
            recv(events) -> event => match event {
                Ok(FeedEvent::Refreshing) => debug!("Refreshing..."),
                Ok(FeedEvent::Report(report)) => {
                    if let Some(note) = display.apply_report(*report, config) {
                        notifier.notify(&note);
                    }
                    print!("{}", menu::render(display));
                }
                Err(_) => {
                    error!("Refresh worker disconnected");
                    break;
                }
            },
            recv(pending) -> action => match action {
                Ok(action) => {
                    if handle_action(action, scheduler, display).is_break() {
                        break;
                    }
                }
                Err(_) => {
                    debug!("No action sources left");
                    inputs_open = false;
                }
            },
        }
    }
}

/// Single dispatcher for every user action.
fn handle_action(action: Action, scheduler: &RefreshScheduler, display: &mut DisplayState) -> ControlFlow<()> {
    match action {
        Action::Refresh => {
            if scheduler.state() == CycleState::Refreshing {
                info!("Refresh queued behind the running cycle");
            }
            if let Err(e) = scheduler.trigger() {
                warn!("Refresh not scheduled: {}", e);
            }
        }
        Action::SetDefault(field) => {
            info!("Status label now shows '{}'", field);
            display.set_default(field);
            print!("{}", menu::render(display));
        }
        Action::ToggleNotify => {
            let enabled = display.toggle_notify();
            info!("Arbitrage notifications {}", if enabled { "enabled" } else { "disabled" });
        }
        Action::LaunchUrl(url) => {
            if let Err(e) = launcher::launch_url(&url) {
                warn!("Could not open {}: {}", url, e);
            }
        }
        Action::Quit => return ControlFlow::Break(()),
    }
    ControlFlow::Continue(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
