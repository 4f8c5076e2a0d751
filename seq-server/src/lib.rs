//! Ticket number server.
//!
//! Every `GET /seq` issues the next number of the day as `{"seq": "..."}`.
//! The counter lives in a small YAML file (the biz file) so restarts keep
//! counting, and it drops back to zero at local midnight. Everything else
//! under `/` is served from the static directory, which holds the compiled
//! seq board.

pub mod config;
pub mod error;
pub mod reset;
pub mod routes;
pub mod seq;
pub mod store;

pub use error::{Error, Result};
