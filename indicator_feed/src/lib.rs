//! Data acquisition for the Nano indicator.
//!
//! This crate fetches the upstream sources, parses them defensively, computes
//! the two-exchange arbitrage spread and keeps the formatted display state.
//! It wires together:
//!
//! - `http`: `HttpSource` trait and the `reqwest` blocking implementation.
//! - `parser`: one parser per upstream payload, free of I/O.
//! - `arbitrage`: best of the two cross-exchange returns.
//! - `cycle`: one refresh cycle: every fetch, each with its own outcome.
//! - `display`: `DisplayState`, the formatted labels a cycle rewrites.
//! - `scheduler`: worker thread with a cancellable repeating timer.
//! - `config`: endpoints, interval and notification threshold.
pub mod arbitrage;
pub mod config;
pub mod cycle;
pub mod display;
pub mod http;
pub mod parser;
pub mod scheduler;

pub use config::FeedConfig;
pub use cycle::{CycleReport, collect, run_cycle};
pub use display::{DisplayState, Notification};
pub use http::{HttpSource, ReqwestSource};
pub use scheduler::{FeedEvent, RefreshScheduler};
