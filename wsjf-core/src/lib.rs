//! Core library for WSJF prioritization: the initiative data model, the
//! in-memory store and the ranking engine.
//!
//! Nothing here performs I/O or rendering. Presentation layers hold a
//! [`session::Prioritizer`] and read rankings from it.

pub mod error;
pub mod models;
pub mod ranking;
pub mod session;
pub mod store;

pub use error::{Result, WsjfError};
