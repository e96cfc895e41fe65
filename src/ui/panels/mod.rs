//! Main content panels.
//!
//! - [`list`] - Paged transaction table with the pager line
//! - [`detail`] - Scrollable transaction detail rows

pub mod detail;
pub mod list;
