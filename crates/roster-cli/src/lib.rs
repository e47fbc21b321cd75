//! CLI library components for the roster mapper.

pub mod logging;
pub mod preview;
