//! Core resolver and services for agrilink-mcp.
//!
//! This crate owns the five advisory operations, the month clock they read
//! the current season from, and the closed tool registry that dispatches
//! tool-calling requests by name.

pub mod clock;
pub mod control;
pub mod services;
