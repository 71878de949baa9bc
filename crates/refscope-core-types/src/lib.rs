//! Core types shared across refscope facilities
//!
//! This crate holds the canonical field keys and event names used by the
//! structured logging facility and by error reporting, so that every crate
//! in the workspace emits the same schema.

pub mod schema;
