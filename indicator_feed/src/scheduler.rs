//! Cancellable repeating refresh task.
//!
//! `RefreshScheduler::start` spawns a worker thread that owns the HTTP source
//! and runs one [`collect`] per cycle, so the presentation thread never blocks
//! on the network. The worker alternates between two states:
//!
//! - `Idle`: the [`RefreshTimer`] is armed; the worker waits on either the
//!   timer deadline or a [`Trigger`].
//! - `Refreshing`: the timer is cancelled and fetches are in flight.
//!
//! A manual trigger while idle cancels the pending deadline and starts a
//! cycle immediately. Triggers that arrive while refreshing are collapsed into
//! a single follow-up cycle that starts as soon as the current one finishes;
//! cycles never overlap. Results are published as [`FeedEvent`]s on a
//! `crossbeam_channel`.
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender, at, never, select, unbounded};
use indicator_common::{IndicatorError, Result};
use log::{debug, error, info};

use crate::config::FeedConfig;
use crate::cycle::{CycleReport, collect};
use crate::http::HttpSource;

/// Message sent to the worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Refresh now.
    Now,
    /// Stop after the current cycle.
    Shutdown,
}

/// Message published by the worker.
#[derive(Debug)]
pub enum FeedEvent {
    /// A cycle has started.
    Refreshing,
    /// A cycle has finished.
    Report(Box<CycleReport>),
}

/// Observable state of the worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleState {
    /// Waiting for the timer or a trigger.
    Idle,
    /// Fetches are in flight.
    Refreshing,
}

/// Deadline of the next timer-driven cycle.
///
/// Time is measured with `Instant`, which is monotonic and immune to system
/// clock changes. A cancelled timer never fires.
#[derive(Debug)]
pub struct RefreshTimer {
    interval: Duration,
    next_due: Option<Instant>,
}

impl RefreshTimer {
    /// Create a cancelled timer with the given period.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// Schedule the next cycle one interval from now.
    pub fn arm(&mut self) {
        self.next_due = Some(Instant::now() + self.interval);
    }

    /// Schedule the next cycle immediately.
    pub fn fire_now(&mut self) {
        self.next_due = Some(Instant::now());
    }

    /// Drop the pending deadline.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// When the next cycle is due, if armed.
    pub fn deadline(&self) -> Option<Instant> {
        self.next_due
    }

    /// Channel that delivers once the deadline passes (never when cancelled).
    fn expiry(&self) -> Receiver<Instant> {
        match self.next_due {
            Some(due) => at(due),
            None => never(),
        }
    }
}

/// Handle to the refresh worker thread.
pub struct RefreshScheduler {
    trigger_tx: Sender<Trigger>,
    refreshing: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl RefreshScheduler {
    /// Spawn the worker; the first cycle starts right away.
    ///
    /// Returns the handle and the channel on which [`FeedEvent`]s arrive.
    pub fn start<S>(source: S, config: FeedConfig) -> Result<(Self, Receiver<FeedEvent>)>
    where
        S: HttpSource + Send + 'static,
    {
        let (trigger_tx, trigger_rx) = unbounded::<Trigger>();
        let (event_tx, event_rx) = unbounded::<FeedEvent>();
        let refreshing = Arc::new(AtomicBool::new(false));

        let worker_flag = Arc::clone(&refreshing);
        let worker = thread::Builder::new()
            .name("refresh-worker".to_string())
            .spawn(move || {
                run_worker(source, config, trigger_rx, event_tx, worker_flag);
            })?;

        Ok((
            Self {
                trigger_tx,
                refreshing,
                worker: Some(worker),
            },
            event_rx,
        ))
    }

    /// Request an immediate cycle.
    pub fn trigger(&self) -> Result<()> {
        self.trigger_tx
            .send(Trigger::Now)
            .map_err(|e| IndicatorError::ChannelSend(format!("refresh trigger: {}", e)))
    }

    /// Whether the worker is between cycles or fetching.
    pub fn state(&self) -> CycleState {
        if self.refreshing.load(Ordering::SeqCst) {
            CycleState::Refreshing
        } else {
            CycleState::Idle
        }
    }

    /// Stop the worker and wait for it; an in-flight cycle runs to completion.
    pub fn shutdown(mut self) {
        let _ = self.trigger_tx.send(Trigger::Shutdown);
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                error!("Refresh worker panicked");
            }
        }
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        if self.worker.is_some() {
            let _ = self.trigger_tx.send(Trigger::Shutdown);
        }
    }
}

fn run_worker<S: HttpSource>(
    source: S,
    config: FeedConfig,
    trigger_rx: Receiver<Trigger>,
    event_tx: Sender<FeedEvent>,
    refreshing: Arc<AtomicBool>,
) {
    info!(
        "Refresh worker started (interval {}s, thread {:?})",
        config.interval.as_secs(),
        thread::current().id()
    );
    let mut timer = RefreshTimer::new(config.interval);
    timer.fire_now();

    loop {
        let expiry = timer.expiry();
        select! {
            recv(trigger_rx) -> msg => match msg {
                Ok(Trigger::Now) => debug!("Manual refresh requested"),
                Ok(Trigger::Shutdown) | Err(_) => break,
            },
            recv(expiry) -> _ => debug!("Refresh timer fired"),
        }

        timer.cancel();
        refreshing.store(true, Ordering::SeqCst);
        if event_tx.send(FeedEvent::Refreshing).is_err() {
            break;
        }

        let report = collect(&source, &config);
        refreshing.store(false, Ordering::SeqCst);
        if event_tx.send(FeedEvent::Report(Box::new(report))).is_err() {
            break;
        }

        let mut follow_up = false;
        for msg in trigger_rx.try_iter() {
            match msg {
                Trigger::Now => follow_up = true,
                Trigger::Shutdown => {
                    info!("Refresh worker stopping...");
                    return;
                }
            }
        }
        if follow_up {
            debug!("Refresh requested during cycle, running again");
            timer.fire_now();
        } else {
            timer.arm();
            if let Some(due) = timer.deadline() {
                debug!("Next refresh in {}s", due.saturating_duration_since(Instant::now()).as_secs());
            }
        }
    }
    info!("Refresh worker stopping...");
}
