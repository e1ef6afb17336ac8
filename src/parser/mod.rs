//! Header parsing: the logical-line scanner for raw header blocks.

pub mod scanner;
