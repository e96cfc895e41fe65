//! State management for the explorer TUI.
//!
//! - [`pagination`] - List page query and navigation
//! - [`disclosure`] - Per-collection "load more" cursors
//! - [`anchor`] - Section anchors and deferred scroll requests
//! - [`detail`] - The transaction detail view
//! - [`config`] - Persistent configuration
//!
//! [`App`] ties these together. Background tasks report back through
//! [`AppMessage`]s that the run loop drains between frames; key presses are
//! mapped to [`crate::commands::AppCommand`]s and may produce
//! [`FetchRequest`]s for the run loop to spawn.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::client::IndexerClient;
use crate::domain::{ScriptDecoder, SyncStatus, Transaction};

// ============================================================================
// Module Declarations
// ============================================================================

mod app_commands;
mod app_lifecycle;
mod app_messages;

pub mod anchor;
pub mod config;
pub mod detail;
pub mod disclosure;
pub mod pagination;
pub mod platform;

#[cfg(test)]
mod tests;

// ============================================================================
// Re-exports
// ============================================================================

pub use anchor::{Anchor, ParseAnchorError, SectionAddresses, SectionRequest};
pub use config::AppConfig;
pub use detail::TransactionView;
pub use disclosure::{Collection, Disclosure};
pub use pagination::{ListNavigator, ListPageQuery, NavAction, PageSize};

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent from background tasks to the main loop.
///
/// Failures carry the rendered error, since [`crate::domain::ExplorerError`]
/// wraps a non-cloneable transport error.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// One page of the transaction list.
    PageLoaded {
        query: ListPageQuery,
        result: Result<Vec<Transaction>, String>,
    },
    /// Total transaction count.
    CountLoaded(Result<u64, String>),
    /// A single transaction. `Ok(None)` means the indexer does not know it.
    TransactionLoaded {
        hash: String,
        result: Result<Option<Box<Transaction>>, String>,
    },
    /// Fresh indexer sync status.
    SyncStatusUpdated(Result<SyncStatus, String>),
}

/// Work the run loop should start on behalf of the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    Page(ListPageQuery),
    Count,
    Transaction(String),
}

// ============================================================================
// Startup Options
// ============================================================================

/// What the application shows first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupTarget {
    /// The transaction list at the given page.
    List(ListPageQuery),
    /// A transaction detail view, optionally scrolled to a section.
    Transaction {
        hash: String,
        anchor: Option<Anchor>,
    },
}

impl Default for StartupTarget {
    fn default() -> Self {
        Self::List(ListPageQuery::default())
    }
}

// ============================================================================
// Screen State
// ============================================================================

/// Which screen has the focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    List,
    Detail,
}

/// Transaction list screen.
#[derive(Debug, Clone, Default)]
pub struct ListState {
    pub navigator: ListNavigator,
    pub transactions: Vec<Transaction>,
    pub selected: usize,
    /// A page request is in flight.
    pub loading: bool,
    /// At least one page has arrived.
    pub loaded: bool,
}

impl ListState {
    #[must_use]
    pub fn new(query: ListPageQuery) -> Self {
        Self {
            navigator: ListNavigator::new(query),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn selected_transaction(&self) -> Option<&Transaction> {
        self.transactions.get(self.selected)
    }
}

/// Transaction detail screen.
#[derive(Debug, Clone, Default)]
pub struct DetailState {
    /// Hash the screen is showing or waiting for.
    pub hash: Option<String>,
    pub view: Option<TransactionView>,
    /// First visible line.
    pub scroll: usize,
    pub loading: bool,
    pub not_found: bool,
}

impl DetailState {
    /// Largest useful scroll offset.
    #[must_use]
    pub fn max_scroll(&self) -> usize {
        self.view
            .as_ref()
            .map_or(0, |view| view.layout().total_lines().saturating_sub(1))
    }
}

// ============================================================================
// App
// ============================================================================

/// Main application state.
pub struct App {
    pub screen: Screen,
    pub list: ListState,
    pub detail: DetailState,
    /// Pending "scroll to section" request for the detail screen.
    pub section_request: SectionRequest,
    /// Text of the open "go to section" prompt.
    pub prompt: Option<String>,
    pub sync_status: Option<SyncStatus>,
    pub status_message: Option<String>,
    pub exit: bool,
    pub config: AppConfig,
    pub(crate) decoder: Arc<dyn ScriptDecoder>,
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,
    pub(crate) client: IndexerClient,
    pub(crate) startup: Option<StartupTarget>,
}
