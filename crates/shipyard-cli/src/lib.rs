//! Shipyard CLI library.
//!
//! Rendering helpers shared by the `shipyard` binary: terminal colour
//! detection and the text, markdown, and JSON views of designs and tables.

pub mod output;
pub mod terminal;
