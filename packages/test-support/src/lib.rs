//! Test support utilities shared by the workspace crates.
//!
//! Currently only provides unified logging initialization.

pub mod logging;
