//! Application constants for the ccexplorer TUI.
//!
//! Numeric scales, paging sizes, well-known script hashes and UI dimensions
//! used throughout the application.

// ============================================================================
// Application
// ============================================================================

/// Directory name used under the user config and cache directories.
pub const APP_NAME: &str = "ccexplorer";

/// Indexer API base URL used when nothing is configured.
pub const DEFAULT_INDEXER_URL: &str = "http://localhost:8081/api";

/// Seconds between sync status polls.
pub const DEFAULT_SYNC_POLL_SECS: u64 = 10;

// ============================================================================
// Numeric Constants
// ============================================================================

/// Decimal places between quark and CCC (1 CCC = 10^18 quark).
pub const QUARK_DECIMALS: u32 = 18;

/// Number of sub-collection items revealed per "load more" step.
pub const DISCLOSURE_PAGE_SIZE: usize = 6;

// ============================================================================
// List Paging
// ============================================================================

/// Page shown when the query does not name a valid one.
pub const DEFAULT_PAGE: u64 = 1;

/// Allowed "items per page" values on the transaction list.
pub const PAGE_SIZE_OPTIONS: [u64; 4] = [25, 50, 75, 100];

// ============================================================================
// Lock Scripts
// ============================================================================

/// Lock script hash of the standard pay-to-public-key-hash script.
pub const P2PKH_LOCK_SCRIPT_HASH: &str = "5f5960a7bca6ceeeb0c97bc717562914e7a1de04";

/// Lock script hash of the burn variant of pay-to-public-key-hash.
pub const P2PKH_BURN_LOCK_SCRIPT_HASH: &str = "37572bdcc22d39a59c0d12d301f6271ba3fdd451";

// ============================================================================
// UI Dimension Constants
// ============================================================================

/// Height of the application header area (in rows).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the footer with key hints (in rows).
pub const FOOTER_HEIGHT: u16 = 1;

/// Rows moved by PageUp/PageDown on the detail screen.
pub const SCROLL_PAGE_ROWS: usize = 10;

/// Event poll interval of the UI loop, in milliseconds.
pub const TICK_RATE_MS: u64 = 100;

/// Width of the truncated hash column on the list screen.
pub const HASH_COLUMN_WIDTH: usize = 20;

// ============================================================================
// Tests
// ============================================================================
