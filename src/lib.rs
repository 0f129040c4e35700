//! Daily top-N request-path aggregation from flat access-log exports.
//!
//! The crate is organized around a single batch pipeline ([`report`]): raw
//! lines go in, an ordered sequence of per-day path summaries comes out.
//! [`input`] materializes the batch and [`config`] carries the resolved
//! report options; the binary in `main.rs` wires them together.

pub mod config;
pub mod input;
pub mod report;
