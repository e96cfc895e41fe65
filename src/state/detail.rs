//! State of one transaction detail view.
//!
//! A [`TransactionView`] owns the transaction snapshot, its plan, the
//! disclosure cursors and the current layout. The layout is rebuilt after
//! every change so anchors always match what is on screen.

use std::sync::Arc;

use crate::domain::{FormatError, ScriptDecoder, Transaction};
use crate::presentation::layout::{DetailLayout, DetailRow, build_rows};
use crate::presentation::plan::{VariantPlan, plan_variant};

use super::anchor::{Anchor, SectionRequest};
use super::disclosure::{Collection, Disclosure};

/// Detail view of one transaction.
#[derive(Clone)]
pub struct TransactionView {
    transaction: Transaction,
    plan: VariantPlan,
    disclosure: Disclosure,
    layout: DetailLayout,
    decoder: Arc<dyn ScriptDecoder>,
}

impl std::fmt::Debug for TransactionView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransactionView")
            .field("hash", &self.transaction.hash)
            .field("disclosure", &self.disclosure)
            .field("rows", &self.layout.rows.len())
            .finish_non_exhaustive()
    }
}

impl TransactionView {
    /// Build the view of `transaction` with every cursor at one page.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] if an amount of the transaction is malformed.
    pub fn new(
        transaction: Transaction,
        decoder: Arc<dyn ScriptDecoder>,
    ) -> Result<Self, FormatError> {
        let plan = plan_variant(&transaction, decoder.as_ref())?;
        let mut disclosure = Disclosure::new();
        disclosure.sync_identity(&transaction.hash);

        let mut view = Self {
            transaction,
            plan,
            disclosure,
            layout: DetailLayout::default(),
            decoder,
        };
        view.relayout();
        Ok(view)
    }

    /// Replace the snapshot with a freshly fetched one.
    ///
    /// Cursors survive a re-fetch of the same hash and are reset otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] if an amount of the new transaction is
    /// malformed. The view is left unchanged in that case.
    pub fn set_transaction(&mut self, transaction: Transaction) -> Result<(), FormatError> {
        let plan = plan_variant(&transaction, self.decoder.as_ref())?;
        self.disclosure.sync_identity(&transaction.hash);
        self.transaction = transaction;
        self.plan = plan;
        self.relayout();
        Ok(())
    }

    fn relayout(&mut self) {
        self.layout = build_rows(
            &self.transaction,
            &self.plan,
            &self.disclosure,
            self.decoder.as_ref(),
        );
    }

    #[must_use]
    pub const fn transaction(&self) -> &Transaction {
        &self.transaction
    }

    #[must_use]
    pub const fn plan(&self) -> &VariantPlan {
        &self.plan
    }

    #[must_use]
    pub const fn disclosure(&self) -> &Disclosure {
        &self.disclosure
    }

    #[must_use]
    pub const fn layout(&self) -> &DetailLayout {
        &self.layout
    }

    #[must_use]
    pub fn rows(&self) -> &[DetailRow] {
        &self.layout.rows
    }

    /// Whether `collection` still has hidden items.
    #[must_use]
    pub fn has_more(&self, collection: Collection) -> bool {
        self.layout.rows.iter().any(|row| {
            matches!(row, DetailRow::LoadMore { collection: c, .. } if *c == collection)
        })
    }

    /// Reveal one more page of `collection`.
    ///
    /// # Returns
    ///
    /// `false` if there was nothing left to reveal.
    pub fn reveal_more(&mut self, collection: Collection) -> bool {
        if !self.has_more(collection) {
            return false;
        }
        self.disclosure.reveal_more(collection);
        self.relayout();
        true
    }

    /// Resolve the pending scroll request against the current layout.
    ///
    /// # Returns
    ///
    /// The row index of the requested item, if it is rendered. The request
    /// is cleared either way.
    pub fn resolve_anchor(&self, request: &mut SectionRequest) -> Option<usize> {
        request.consume(&self.layout.addresses)
    }

    /// Row index of `anchor`, if rendered.
    #[must_use]
    pub fn row_of(&self, anchor: &Anchor) -> Option<usize> {
        self.layout.addresses.resolve(anchor)
    }
}

// ============================================================================
// Tests
// ============================================================================
