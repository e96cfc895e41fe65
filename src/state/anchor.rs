//! Section addressing for "scroll to" requests.
//!
//! An [`Anchor`] names a sub-item by collection and index (`input-3`).
//! While rows are laid out, each rendered item registers a handle under its
//! anchor in [`SectionAddresses`]. A [`SectionRequest`] holds at most one
//! pending anchor and is cleared on consumption whether or not the anchor
//! resolved. Anchors beyond the revealed range do not expand disclosure.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::disclosure::Collection;

// ============================================================================
// Anchor
// ============================================================================

/// Logical name of a renderable sub-item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Anchor {
    pub collection: Collection,
    pub index: usize,
}

impl Anchor {
    #[must_use]
    pub const fn new(collection: Collection, index: usize) -> Self {
        Self { collection, index }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.collection, self.index)
    }
}

/// Error raised for anchor names that are not `<collection>-<index>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid anchor '{0}', expected input-N, output-N or burn-N")]
pub struct ParseAnchorError(pub String);

impl FromStr for Anchor {
    type Err = ParseAnchorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseAnchorError(s.to_string());
        let (name, index) = s.trim().rsplit_once('-').ok_or_else(invalid)?;
        let collection = name.parse::<Collection>().map_err(|_| invalid())?;
        if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let index = index.parse::<usize>().map_err(|_| invalid())?;
        Ok(Self { collection, index })
    }
}

// ============================================================================
// Section Addresses
// ============================================================================

/// Anchor to rendered-position map for the current layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionAddresses<H: Copy> {
    handles: HashMap<Anchor, H>,
}

impl<H: Copy> Default for SectionAddresses<H> {
    fn default() -> Self {
        Self {
            handles: HashMap::new(),
        }
    }
}

impl<H: Copy> SectionAddresses<H> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record where `anchor` was rendered.
    pub fn register(&mut self, anchor: Anchor, handle: H) {
        self.handles.insert(anchor, handle);
    }

    /// Handle of a rendered anchor, `None` if it is not rendered.
    #[must_use]
    pub fn resolve(&self, anchor: &Anchor) -> Option<H> {
        self.handles.get(anchor).copied()
    }

    /// Forget every registration, before a new layout pass.
    pub fn clear(&mut self) {
        self.handles.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

// ============================================================================
// Section Request
// ============================================================================

/// Single-slot "move to section" signal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionRequest {
    pending: Option<Anchor>,
}

impl SectionRequest {
    /// Ask for `anchor` to be brought into view. Replaces any pending request.
    pub fn request(&mut self, anchor: Anchor) {
        self.pending = Some(anchor);
    }

    #[must_use]
    pub const fn pending(&self) -> Option<Anchor> {
        self.pending
    }

    /// Take the pending request, leaving the slot empty.
    pub fn take(&mut self) -> Option<Anchor> {
        self.pending.take()
    }

    /// Take the pending request and resolve it against `addresses`.
    ///
    /// The request is cleared even if the anchor is not rendered.
    pub fn consume<H: Copy>(&mut self, addresses: &SectionAddresses<H>) -> Option<H> {
        let anchor = self.take()?;
        let handle = addresses.resolve(&anchor);
        if handle.is_none() {
            tracing::debug!("Anchor {anchor} is not rendered, dropping scroll request");
        }
        handle
    }
}

// ============================================================================
// Tests
// ============================================================================
