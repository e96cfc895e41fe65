//! Message processing.
//!
//! Results of background fetches are applied here. Responses for a page or
//! transaction the user has already moved away from are dropped.

use super::{App, AppMessage, TransactionView};

impl App {
    pub(crate) fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            self.apply_message(message);
        }
    }

    /// Apply one background result to the state.
    pub fn apply_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::PageLoaded { query, result } => {
                if query != self.list.navigator.query {
                    tracing::debug!("Dropping stale page {}", query.path());
                    return;
                }
                self.list.loading = false;
                match result {
                    Ok(transactions) => {
                        self.list.selected = self
                            .list
                            .selected
                            .min(transactions.len().saturating_sub(1));
                        self.list.transactions = transactions;
                        self.list.loaded = true;
                    }
                    Err(error) => {
                        self.status_message = Some(format!("Failed to load transactions: {error}"));
                    }
                }
            }
            AppMessage::CountLoaded(Ok(count)) => {
                self.list.navigator.total_count = Some(count);
            }
            AppMessage::CountLoaded(Err(error)) => {
                self.status_message = Some(format!("Failed to load transaction count: {error}"));
            }
            AppMessage::TransactionLoaded { hash, result } => {
                if self.detail.hash.as_deref() != Some(hash.as_str()) {
                    tracing::debug!("Dropping stale transaction {hash}");
                    return;
                }
                self.detail.loading = false;
                match result {
                    Ok(Some(transaction)) => self.show_transaction(*transaction),
                    Ok(None) => {
                        self.detail.view = None;
                        self.detail.not_found = true;
                        self.section_request.take();
                    }
                    Err(error) => {
                        self.status_message = Some(format!("Failed to load transaction: {error}"));
                    }
                }
            }
            AppMessage::SyncStatusUpdated(Ok(status)) => {
                self.sync_status = Some(status);
            }
            AppMessage::SyncStatusUpdated(Err(error)) => {
                tracing::warn!("Sync status unavailable: {error}");
            }
        }
    }

    fn show_transaction(&mut self, transaction: crate::domain::Transaction) {
        self.detail.not_found = false;
        let result = match self.detail.view.take() {
            Some(mut view) => {
                let result = view.set_transaction(transaction);
                self.detail.view = Some(view);
                result
            }
            None => TransactionView::new(transaction, self.decoder.clone())
                .map(|view| self.detail.view = Some(view)),
        };

        match result {
            Ok(()) => {
                self.detail.scroll = self.detail.scroll.min(self.detail.max_scroll());
                self.apply_section_request();
            }
            Err(e) => {
                self.status_message = Some(format!("Cannot display transaction: {e}"));
            }
        }
    }
}
