//! Reference tables and record types for agrilink-mcp.
//!
//! This crate defines the static advisory tables (soil, disease, calendar,
//! sustainable practices) and the request/report records shared by the
//! resolver and its transports.

pub mod models;
pub mod schema;
pub mod tables;

pub use models::*;
pub use tables::{Challenge, Crop, CropCalendar, FarmingType, Season, SoilType, SymptomDiagnosis};
