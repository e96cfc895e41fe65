//! Command-line interface.
//!
//! Without a subcommand, or for `tx`/`txs` without `--plain`, the terminal UI
//! opens. Every other command prints plain text and exits.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use clap::{Parser, Subcommand};
use color_eyre::Result;

use crate::client::IndexerClient;
use crate::constants::DEFAULT_PAGE;
use crate::domain::{ExplorerError, HexScriptDecoder, Transaction};
use crate::presentation::DetailLayout;
use crate::presentation::text::{
    render_block, render_detail, render_list, render_pager, render_sync_status,
};
use crate::state::{
    Anchor, AppConfig, Collection, ListPageQuery, SectionRequest, StartupTarget, TransactionView,
};

/// Terminal explorer for CodeChain transactions.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Indexer API base URL, overriding the configured one.
    #[arg(long, global = true)]
    pub indexer_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show one transaction.
    Tx {
        /// Transaction hash, with or without 0x.
        hash: String,
        /// Section to scroll to, e.g. input-3.
        #[arg(long)]
        anchor: Option<Anchor>,
        /// Print instead of opening the terminal UI.
        #[arg(long)]
        plain: bool,
    },
    /// Show a page of the transaction list.
    Txs {
        #[arg(long)]
        page: Option<u64>,
        #[arg(long)]
        items_per_page: Option<u64>,
        /// Page query string, e.g. "page=2&itemsPerPage=50". Overrides the
        /// other paging flags.
        #[arg(long)]
        query: Option<String>,
        /// Print instead of opening the terminal UI.
        #[arg(long)]
        plain: bool,
    },
    /// Render a transaction JSON file without contacting the indexer.
    Show {
        file: PathBuf,
        /// Start the output at this section, e.g. output-2.
        #[arg(long)]
        anchor: Option<Anchor>,
        /// Load one more page of a collection. Repeatable.
        #[arg(long)]
        reveal: Vec<Collection>,
    },
    /// Print a block and its transactions.
    Block { number: u64 },
    /// Print the indexer sync status.
    Status,
    /// Print the effective configuration.
    Config {
        /// Persist it to the configuration file.
        #[arg(long)]
        save: bool,
    },
}

/// What `main` should do after parsing.
#[derive(Debug)]
pub enum Action {
    /// Open the terminal UI.
    Tui(StartupTarget),
    /// Run a plain-text command.
    Print(Commands),
}

impl Cli {
    /// Decide between the terminal UI and a plain-text command.
    #[must_use]
    pub fn action(self, config: &AppConfig) -> Action {
        match self.command {
            None => Action::Tui(StartupTarget::List(ListPageQuery::new(
                DEFAULT_PAGE,
                config.page_size(),
            ))),
            Some(Commands::Tx {
                hash,
                anchor,
                plain: false,
            }) => Action::Tui(StartupTarget::Transaction { hash, anchor }),
            Some(Commands::Txs {
                page,
                items_per_page,
                query,
                plain: false,
            }) => Action::Tui(StartupTarget::List(list_query(
                page,
                items_per_page,
                query.as_deref(),
                config,
            ))),
            Some(command) => Action::Print(command),
        }
    }
}

/// Page requested by the paging flags.
///
/// Invalid values fall back the same way a query string does.
#[must_use]
pub fn list_query(
    page: Option<u64>,
    items_per_page: Option<u64>,
    query: Option<&str>,
    config: &AppConfig,
) -> ListPageQuery {
    if let Some(query) = query {
        return ListPageQuery::from_query(query);
    }
    let page = page.unwrap_or(DEFAULT_PAGE);
    let items_per_page = items_per_page.unwrap_or_else(|| config.page_size().value());
    ListPageQuery::from_query(&format!("page={page}&itemsPerPage={items_per_page}"))
}

// ============================================================================
// Plain-Text Commands
// ============================================================================

/// Run a plain-text command and print its output.
///
/// # Errors
///
/// Returns an error if the indexer request fails, the requested entity does
/// not exist, or the input cannot be rendered.
pub async fn run(command: Commands, config: &AppConfig) -> Result<()> {
    let output = match command {
        Commands::Show {
            file,
            anchor,
            reveal,
        } => show_file(&file, &reveal, anchor)?,
        Commands::Config { save } => {
            let mut output = serde_json::to_string_pretty(config)?;
            if save {
                let path = config.save()?;
                output.push_str(&format!("\nSaved to {}", path.display()));
            }
            output
        }
        command => {
            let client = IndexerClient::new(&config.indexer_url)?;
            fetch_and_render(&client, command, config).await?
        }
    };

    println!("{output}");
    Ok(())
}

async fn fetch_and_render(
    client: &IndexerClient,
    command: Commands,
    config: &AppConfig,
) -> Result<String> {
    let output = match command {
        Commands::Tx { hash, anchor, .. } => {
            let tx = client
                .get_transaction(&hash)
                .await?
                .ok_or_else(|| ExplorerError::not_found("transaction", hash.as_str()))?;
            render_transaction(tx, &[], anchor)?
        }
        Commands::Txs {
            page,
            items_per_page,
            query,
            ..
        } => {
            let query = list_query(page, items_per_page, query.as_deref(), config);
            let size = query.items_per_page;
            let (transactions, count) = tokio::join!(
                client.get_transactions(query.page, size.value()),
                client.get_transaction_count()
            );
            let max_page = crate::state::pagination::max_page(count?, size);
            format!(
                "{}\n\n{}",
                render_list(&transactions?, Utc::now()),
                render_pager(query.page, Some(max_page), size.value())
            )
        }
        Commands::Block { number } => {
            let block = client
                .get_block(number)
                .await?
                .ok_or_else(|| ExplorerError::not_found("block", number.to_string()))?;
            render_block(&block, Utc::now())
        }
        Commands::Status => render_sync_status(&client.get_sync_status().await?),
        Commands::Show { .. } | Commands::Config { .. } => String::new(),
    };
    Ok(output)
}

fn show_file(path: &Path, reveal: &[Collection], anchor: Option<Anchor>) -> Result<String> {
    let content = std::fs::read_to_string(path)?;
    let json: serde_json::Value = serde_json::from_str(&content)?;
    let tx = Transaction::from_json(&json)?;
    render_transaction(tx, reveal, anchor)
}

/// Plain-text detail of `tx` after revealing `reveal`, starting at `anchor`
/// if it is shown.
///
/// # Errors
///
/// Returns an error if an amount of `tx` is malformed.
pub fn render_transaction(
    tx: Transaction,
    reveal: &[Collection],
    anchor: Option<Anchor>,
) -> Result<String> {
    let mut view = TransactionView::new(tx, Arc::new(HexScriptDecoder))?;
    for collection in reveal {
        view.reveal_more(*collection);
    }

    let mut request = SectionRequest::default();
    if let Some(anchor) = anchor {
        request.request(anchor);
    }

    Ok(match view.resolve_anchor(&mut request) {
        Some(row) => render_detail(&DetailLayout {
            rows: view.rows()[row..].to_vec(),
            ..DetailLayout::default()
        }),
        None => render_detail(view.layout()),
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PageSize;
    use crate::test_utils::TransactionMother;
    use rstest::rstest;

    #[rstest]
    #[case::defaults(None, None, None, ListPageQuery::new(1, PageSize::TwentyFive))]
    #[case::flags(Some(3), Some(50), None, ListPageQuery::new(3, PageSize::Fifty))]
    #[case::bad_size(Some(2), Some(30), None, ListPageQuery::new(2, PageSize::TwentyFive))]
    #[case::query_wins(Some(3), None, Some("page=4&itemsPerPage=100"), ListPageQuery::new(4, PageSize::Hundred))]
    fn test_list_query(
        #[case] page: Option<u64>,
        #[case] items_per_page: Option<u64>,
        #[case] query: Option<&str>,
        #[case] expected: ListPageQuery,
    ) {
        let config = AppConfig::default();
        assert_eq!(list_query(page, items_per_page, query, &config), expected);
    }

    #[test]
    fn test_action_selects_tui_or_print() {
        let config = AppConfig::default();

        let cli = Cli::parse_from(["ccexplorer"]);
        assert!(matches!(cli.action(&config), Action::Tui(StartupTarget::List(_))));

        let cli = Cli::parse_from(["ccexplorer", "tx", "0xab12", "--anchor", "output-2"]);
        match cli.action(&config) {
            Action::Tui(StartupTarget::Transaction { hash, anchor }) => {
                assert_eq!(hash, "0xab12");
                assert_eq!(anchor, Some(Anchor::new(Collection::Output, 2)));
            }
            other => panic!("unexpected {other:?}"),
        }

        let cli = Cli::parse_from(["ccexplorer", "tx", "ab12", "--plain"]);
        assert!(matches!(cli.action(&config), Action::Print(Commands::Tx { .. })));
    }

    #[test]
    fn test_cli_rejects_bad_anchor() {
        assert!(Cli::try_parse_from(["ccexplorer", "tx", "ab12", "--anchor", "middle-1"]).is_err());
    }

    #[test]
    fn test_global_indexer_url() {
        let cli = Cli::parse_from(["ccexplorer", "status", "--indexer-url", "http://idx/api"]);
        assert_eq!(cli.indexer_url.as_deref(), Some("http://idx/api"));
    }

    #[test]
    fn test_render_transaction_from_anchor() {
        let tx = TransactionMother::transfer_asset("ab", 1, 8, 0);
        let text = render_transaction(
            tx,
            &[Collection::Output],
            Some(Anchor::new(Collection::Output, 7)),
        )
        .unwrap();

        assert!(text.starts_with("Output #7\n---------\n"));
        assert!(text.contains("Owner: tccqowner7"));
        assert!(!text.contains("Output #6"));
        assert!(!text.contains("[Load Output]"));
    }

    #[test]
    fn test_render_transaction_unrevealed_anchor_prints_everything() {
        let tx = TransactionMother::transfer_asset("ab", 1, 8, 0);
        let text =
            render_transaction(tx, &[], Some(Anchor::new(Collection::Output, 7))).unwrap();

        assert!(text.starts_with("Details\n======="));
        assert!(text.contains("Output #5"));
        assert!(!text.contains("Output #7"));
        assert!(text.contains("[Load Output] 2 more, use --reveal output"));
    }
}
