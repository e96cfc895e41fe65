//! Incremental disclosure of transaction sub-collections.
//!
//! Large transfers can carry hundreds of inputs or outputs. Each named
//! sub-collection has its own cursor counting revealed pages; the visible
//! item count is `min(len, cursor * DISCLOSURE_PAGE_SIZE)`. Cursors only know
//! counts, never item content.

use std::fmt;
use std::str::FromStr;

use crate::constants::DISCLOSURE_PAGE_SIZE;

// ============================================================================
// Collection
// ============================================================================

/// Named sub-collection of an asset transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Input,
    Output,
    Burn,
}

impl Collection {
    pub const ALL: [Self; 3] = [Self::Input, Self::Output, Self::Burn];

    /// Name used in anchors and on the command line.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Output => "output",
            Self::Burn => "burn",
        }
    }

    /// Heading word, e.g. "Input" for "Input #3" and "Load Input".
    #[must_use]
    pub const fn heading(&self) -> &'static str {
        match self {
            Self::Input => "Input",
            Self::Output => "Output",
            Self::Burn => "Burn",
        }
    }

    const fn slot(self) -> usize {
        match self {
            Self::Input => 0,
            Self::Output => 1,
            Self::Burn => 2,
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown collection '{s}', expected input, output or burn"))
    }
}

// ============================================================================
// Disclosure
// ============================================================================

/// Per-view disclosure cursors, one per [`Collection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disclosure {
    cursors: [usize; 3],
    identity: Option<String>,
}

impl Default for Disclosure {
    fn default() -> Self {
        Self::new()
    }
}

impl Disclosure {
    /// All cursors start at one page.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cursors: [1; 3],
            identity: None,
        }
    }

    /// Current cursor (revealed pages) of `collection`.
    #[must_use]
    pub const fn cursor(&self, collection: Collection) -> usize {
        self.cursors[collection.slot()]
    }

    /// Number of visible items of a collection holding `len` items.
    #[must_use]
    pub const fn visible(&self, collection: Collection, len: usize) -> usize {
        let limit = self.cursor(collection).saturating_mul(DISCLOSURE_PAGE_SIZE);
        if len < limit { len } else { limit }
    }

    /// Whether some of the `len` items are still hidden.
    #[must_use]
    pub const fn has_more(&self, collection: Collection, len: usize) -> bool {
        self.visible(collection, len) < len
    }

    /// Reveal one more page of `collection`. Over-revealing is harmless.
    pub fn reveal_more(&mut self, collection: Collection) {
        let slot = &mut self.cursors[collection.slot()];
        *slot = slot.saturating_add(1);
    }

    /// Reset all cursors when the viewed transaction changes.
    ///
    /// # Returns
    ///
    /// `true` if `hash` differs from the last one seen and cursors were reset.
    pub fn sync_identity(&mut self, hash: &str) -> bool {
        if self.identity.as_deref() == Some(hash) {
            return false;
        }
        if self.identity.is_some() {
            tracing::debug!("Transaction changed to {hash}, resetting disclosure");
        }
        self.reset();
        self.identity = Some(hash.to_string());
        true
    }

    /// Put every cursor back to one page.
    pub fn reset(&mut self) {
        self.cursors = [1; 3];
    }
}

// ============================================================================
// Tests
// ============================================================================
