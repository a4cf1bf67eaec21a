//! Utility functions for log-safe formatting.

pub mod format;

pub use format::mask_identifier;
