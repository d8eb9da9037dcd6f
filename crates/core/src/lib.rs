//! Domain logic for the attendance service.
//!
//! This crate has zero internal dependencies so the rules it encodes --
//! event validation, the per-session reconciliation outcomes, report
//! day-window math -- can be used by the API/repository layer and unit
//! tested without a database.

pub mod attendance;
pub mod error;
pub mod reporting;
pub mod types;
