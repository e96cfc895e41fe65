//! Application lifecycle management.
//!
//! - `new()` builds the state from configuration and a startup target
//! - `run()` is the main event loop
//! - background polling of the indexer sync status
//! - spawning of [`FetchRequest`]s

use std::sync::Arc;
use std::time::{Duration, Instant};

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc;
use tokio::time::interval;

use crate::client::IndexerClient;
use crate::commands::KeyMapper;
use crate::constants::TICK_RATE_MS;
use crate::domain::HexScriptDecoder;
use crate::tui::Tui;
use crate::ui;

use super::{
    App, AppConfig, AppMessage, DetailState, FetchRequest, ListState, Screen, SectionRequest,
    StartupTarget,
};

// ============================================================================
// Lifecycle Methods
// ============================================================================

impl App {
    /// Creates a new App for `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the indexer URL is invalid or the HTTP client
    /// cannot be built.
    pub fn new(config: AppConfig, startup: StartupTarget) -> Result<Self> {
        let client = IndexerClient::new(&config.indexer_url)?;
        Ok(Self::with_client(config, client, startup))
    }

    /// Creates a new App around an existing client. Nothing is fetched
    /// until [`App::run`].
    #[must_use]
    pub fn with_client(config: AppConfig, client: IndexerClient, startup: StartupTarget) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let list_query = match &startup {
            StartupTarget::List(query) => *query,
            StartupTarget::Transaction { .. } => {
                super::ListPageQuery::new(crate::constants::DEFAULT_PAGE, config.page_size())
            }
        };

        Self {
            screen: Screen::List,
            list: ListState::new(list_query),
            detail: DetailState::default(),
            section_request: SectionRequest::default(),
            prompt: None,
            sync_status: None,
            status_message: None,
            exit: false,
            config,
            decoder: Arc::new(HexScriptDecoder),
            message_tx,
            message_rx,
            client,
            startup: Some(startup),
        }
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        self.start_background_tasks();
        let requests = self.start();
        self.dispatch(requests);

        let tick_rate = Duration::from_millis(TICK_RATE_MS);
        let mut last_tick = Instant::now();
        terminal.draw(|frame| ui::render(self, frame))?;

        while !self.exit {
            self.process_messages();

            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        let command = KeyMapper::map_key(key, &self.input_context());
                        let requests = self.handle_command(command);
                        self.dispatch(requests);
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= tick_rate {
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }
        }

        Ok(())
    }

    /// Applies the startup target.
    ///
    /// # Returns
    ///
    /// The fetches needed to fill the first screen.
    pub fn start(&mut self) -> Vec<FetchRequest> {
        match self.startup.take() {
            Some(StartupTarget::Transaction { hash, anchor }) => {
                if let Some(anchor) = anchor {
                    self.section_request.request(anchor);
                }
                self.open_transaction(hash, None)
            }
            Some(StartupTarget::List(_)) | None => self.request_list_page(),
        }
    }

    // ========================================================================
    // Background Tasks
    // ========================================================================

    fn start_background_tasks(&self) {
        let message_tx = self.message_tx.clone();
        let client = self.client.clone();
        let poll_interval = self.config.sync_poll_interval();

        tokio::spawn(async move {
            Self::sync_polling_task(message_tx, client, poll_interval).await;
        });
    }

    async fn sync_polling_task(
        message_tx: mpsc::UnboundedSender<AppMessage>,
        client: IndexerClient,
        poll_interval: Duration,
    ) {
        let mut sync_interval = interval(poll_interval);

        loop {
            tokio::select! {
                _ = sync_interval.tick() => {
                    let result = client.get_sync_status().await.map_err(|e| e.to_string());
                    // Receiver may be dropped during shutdown
                    if message_tx.send(AppMessage::SyncStatusUpdated(result)).is_err() {
                        break;
                    }
                }
                () = message_tx.closed() => break,
            }
        }
    }

    /// Spawns one task per request. Results arrive as [`AppMessage`]s.
    pub(crate) fn dispatch(&self, requests: Vec<FetchRequest>) {
        for request in requests {
            let client = self.client.clone();
            let message_tx = self.message_tx.clone();
            tracing::debug!("Fetching {request:?}");

            tokio::spawn(async move {
                let message = match request {
                    FetchRequest::Page(query) => AppMessage::PageLoaded {
                        query,
                        result: client
                            .get_transactions(query.page, query.items_per_page.value())
                            .await
                            .map_err(|e| e.to_string()),
                    },
                    FetchRequest::Count => AppMessage::CountLoaded(
                        client.get_transaction_count().await.map_err(|e| e.to_string()),
                    ),
                    FetchRequest::Transaction(hash) => {
                        let result = client
                            .get_transaction(&hash)
                            .await
                            .map(|tx| tx.map(Box::new))
                            .map_err(|e| e.to_string());
                        AppMessage::TransactionLoaded { hash, result }
                    }
                };
                // Receiver may be dropped during shutdown
                let _ = message_tx.send(message);
            });
        }
    }
}
