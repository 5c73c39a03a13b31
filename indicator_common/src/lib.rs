//!
//! Common types and utilities shared by the feed and the indicator binary.
//!
//! This crate aggregates:
//! - `error`: unified error type `IndicatorError` used across the workspace.
//! - `result`: handy `Result<T, IndicatorError>` alias.
//! - `fields`: identifiers of the labelled menu fields.
//! - `action`: user actions dispatched by the indicator.
//! - `snapshot`: transient records produced by a refresh cycle.
//! - `net`: upstream endpoints, user agent and link table.
#![warn(missing_docs)]
pub mod action;
pub mod error;
pub mod fields;
pub mod net;
pub mod result;
pub mod snapshot;

pub use action::Action;
pub use error::{ErrorKind, IndicatorError};
pub use fields::FieldId;
pub use result::Result;
