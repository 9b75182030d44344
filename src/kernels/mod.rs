//! Width-tagged entry points, one per Clock Engine width, each a thin
//! caller of the shared generic engine in [`crate::engine`]. Exposed
//! (doc-hidden) so property and conformance tests can force a specific
//! width and diff against the others (§8.1 P6); ordinary callers should
//! use the top-level `encrypt`/`decrypt` instead, which use whichever
//! width this build compiled in.

pub mod width1;
pub mod width32;
pub mod width8;
