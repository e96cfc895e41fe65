//! Platform-specific abstractions.
//!
//! - [`clipboard`] - System clipboard access

pub mod clipboard;
