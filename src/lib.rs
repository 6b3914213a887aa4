//! Live CPU utilization figures for small desktop panel windows.
//!
//! The reusable piece is [`sampler`]: it turns cumulative OS tick counters
//! into percentage shares. Everything else is window plumbing shared by the
//! two demo binaries.

pub mod config;
pub mod model;
pub mod monitor;
pub mod sampler;
pub mod ui;
