//! MCP tool modules.
//!
//! Tools are grouped by purpose: the advisory lookups an agent calls while
//! answering a farmer, and contextual help describing those lookups.

pub mod advisory;
mod context;
