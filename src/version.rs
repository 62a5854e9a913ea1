//! Crate version re-exported for display.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
