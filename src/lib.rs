//! WSJF prioritization server.
//!
//! The data model, store and ranking engine live in `wsjf-core` and are
//! re-exported here. This crate adds the presentation layer: the HTTP API,
//! configuration loading and plain-text rendering.

pub mod api;
pub mod config;
pub mod render;

pub use wsjf_core::{error, models, ranking, session, store, Result, WsjfError};
