//! `headerblock` — an editable RFC 5322 header-block engine.
//!
//! This crate parses the raw header section of a message (everything up to
//! and including the blank-line separator), answers case-insensitive
//! queries, applies ordered edits, and serializes the block back to bytes:
//! byte-identical to the input while untouched, canonical CRLF form once
//! modified. A leading MBOX `From ` envelope line is carried through
//! verbatim without being treated as a header.

pub mod block;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
