//! Command execution.
//!
//! [`App::handle_command`] applies an [`AppCommand`] to the state and
//! returns the fetches the run loop should start. Nothing here touches the
//! network, so every transition can be tested without a runtime.

use crate::commands::{AppCommand, InputContext};
use crate::constants::SCROLL_PAGE_ROWS;
use crate::domain::Transaction;
use crate::domain::transaction::parsing::strip_hex_prefix;

use super::platform::clipboard;
use super::{App, Collection, DetailState, FetchRequest, NavAction, Screen, TransactionView};

impl App {
    /// Current input context for key mapping.
    #[must_use]
    pub const fn input_context(&self) -> InputContext {
        if self.prompt.is_some() {
            return InputContext::JumpPrompt;
        }
        match self.screen {
            Screen::List => InputContext::List,
            Screen::Detail => InputContext::Detail,
        }
    }

    /// Execute `command`.
    ///
    /// # Returns
    ///
    /// Fetches to start. Empty when the command only changes local state.
    pub fn handle_command(&mut self, command: AppCommand) -> Vec<FetchRequest> {
        if command != AppCommand::Noop {
            self.status_message = None;
        }

        match command {
            AppCommand::Quit => {
                self.exit = true;
                Vec::new()
            }
            AppCommand::Back => self.back(),
            AppCommand::MoveUp => {
                self.list.selected = self.list.selected.saturating_sub(1);
                Vec::new()
            }
            AppCommand::MoveDown => {
                if self.list.selected + 1 < self.list.transactions.len() {
                    self.list.selected += 1;
                }
                Vec::new()
            }
            AppCommand::Open => self.open_selected(),
            AppCommand::Navigate(action) => self.navigate(action),
            AppCommand::CyclePageSize => {
                let next = self.list.navigator.query.items_per_page.next();
                self.navigate(NavAction::ChangePageSize(next))
            }
            AppCommand::Reload => self.reload(),
            AppCommand::Reveal(collection) => {
                self.reveal(collection);
                Vec::new()
            }
            AppCommand::ScrollUp => {
                self.scroll_by(-1);
                Vec::new()
            }
            AppCommand::ScrollDown => {
                self.scroll_by(1);
                Vec::new()
            }
            AppCommand::PageUp => {
                self.scroll_by(-(SCROLL_PAGE_ROWS as isize));
                Vec::new()
            }
            AppCommand::PageDown => {
                self.scroll_by(SCROLL_PAGE_ROWS as isize);
                Vec::new()
            }
            AppCommand::OpenJumpPrompt => {
                self.prompt = Some(String::new());
                Vec::new()
            }
            AppCommand::TypeChar(c) => {
                if let Some(prompt) = &mut self.prompt {
                    prompt.push(c);
                }
                Vec::new()
            }
            AppCommand::Backspace => {
                if let Some(prompt) = &mut self.prompt {
                    prompt.pop();
                }
                Vec::new()
            }
            AppCommand::SubmitPrompt => {
                self.submit_prompt();
                Vec::new()
            }
            AppCommand::Dismiss => {
                self.prompt = None;
                Vec::new()
            }
            AppCommand::CopyHash => {
                self.copy_hash();
                Vec::new()
            }
            AppCommand::Noop => Vec::new(),
        }
    }

    // ========================================================================
    // List
    // ========================================================================

    /// Mark the current page as loading and ask for it and the total count.
    pub(crate) fn request_list_page(&mut self) -> Vec<FetchRequest> {
        self.list.loading = true;
        vec![
            FetchRequest::Page(self.list.navigator.query),
            FetchRequest::Count,
        ]
    }

    fn navigate(&mut self, action: NavAction) -> Vec<FetchRequest> {
        if !self.list.loaded || self.list.loading {
            tracing::debug!("Ignoring {action:?} while the page is loading");
            return Vec::new();
        }
        let Some(target) = self.list.navigator.navigate(action) else {
            return Vec::new();
        };
        tracing::debug!("Navigating to {}", target.path());
        self.list.navigator.apply(target);
        self.list.selected = 0;
        self.list.loading = true;
        vec![FetchRequest::Page(target)]
    }

    fn open_selected(&mut self) -> Vec<FetchRequest> {
        match self.list.selected_transaction().cloned() {
            Some(tx) => self.open_transaction(tx.hash.clone(), Some(tx)),
            None => Vec::new(),
        }
    }

    // ========================================================================
    // Detail
    // ========================================================================

    /// Switch to the detail screen of `hash`.
    ///
    /// `snapshot` is shown until the fresh copy arrives. Every opened view
    /// starts with one page of each collection revealed.
    pub(crate) fn open_transaction(
        &mut self,
        hash: String,
        snapshot: Option<Transaction>,
    ) -> Vec<FetchRequest> {
        let hash = strip_hex_prefix(hash.trim()).to_string();

        self.detail.view = snapshot.and_then(|tx| {
            TransactionView::new(tx, self.decoder.clone())
                .inspect_err(|e| tracing::debug!("Not showing list snapshot: {e}"))
                .ok()
        });

        self.screen = Screen::Detail;
        self.detail.hash = Some(hash.clone());
        self.detail.scroll = 0;
        self.detail.loading = true;
        self.detail.not_found = false;
        self.apply_section_request();

        vec![FetchRequest::Transaction(hash)]
    }

    fn back(&mut self) -> Vec<FetchRequest> {
        if self.screen != Screen::Detail {
            return Vec::new();
        }
        self.screen = Screen::List;
        self.section_request.take();
        // Closing the view discards its disclosure cursors.
        self.detail = DetailState::default();

        if self.list.loaded || self.list.loading {
            Vec::new()
        } else {
            self.request_list_page()
        }
    }

    fn reload(&mut self) -> Vec<FetchRequest> {
        match self.screen {
            Screen::List => self.request_list_page(),
            Screen::Detail => match self.detail.hash.clone() {
                Some(hash) => {
                    self.detail.loading = true;
                    vec![FetchRequest::Transaction(hash)]
                }
                None => Vec::new(),
            },
        }
    }

    fn reveal(&mut self, collection: Collection) {
        let Some(view) = &mut self.detail.view else {
            return;
        };
        if !view.reveal_more(collection) {
            self.status_message = Some(format!("No more {} items", collection.heading()));
        }
    }

    fn scroll_by(&mut self, delta: isize) {
        if self.screen != Screen::Detail {
            return;
        }
        let max = self.detail.max_scroll();
        self.detail.scroll = self.detail.scroll.saturating_add_signed(delta).min(max);
    }

    /// Scroll to the pending section, if the view can resolve it.
    ///
    /// The request stays pending while no view is loaded.
    pub(crate) fn apply_section_request(&mut self) {
        if self.section_request.pending().is_none() {
            return;
        }
        let Some(view) = &self.detail.view else {
            return;
        };
        if let Some(row) = view.resolve_anchor(&mut self.section_request) {
            self.detail.scroll = view.layout().line_offset(row);
        }
    }

    fn submit_prompt(&mut self) {
        let Some(text) = self.prompt.take() else {
            return;
        };
        match text.parse() {
            Ok(anchor) => {
                self.section_request.request(anchor);
                self.apply_section_request();
            }
            Err(e) => self.status_message = Some(format!("{e}")),
        }
    }

    fn copy_hash(&mut self) {
        let Some(hash) = &self.detail.hash else {
            return;
        };
        let text = format!("0x{hash}");
        self.status_message = Some(match clipboard::copy_text(&text) {
            Ok(()) => format!("Copied {text}"),
            Err(e) => format!("Copy failed: {e}"),
        });
    }
}
