//! Core data model types for header entries.

pub mod entry;
