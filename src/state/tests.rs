//! Tests for the state module.

use rstest::rstest;

use super::{
    Anchor, App, AppConfig, AppMessage, Collection, FetchRequest, ListPageQuery, NavAction,
    PageSize, Screen, StartupTarget,
};
use crate::client::IndexerClient;
use crate::commands::{AppCommand, InputContext};
use crate::constants::DEFAULT_INDEXER_URL;
use crate::domain::{SyncStatus, Transaction};
use crate::presentation::DetailRow;
use crate::test_utils::TransactionMother;

// ========================================================================
// Test Helper Functions
// ========================================================================

/// Creates a test App instance without network operations.
fn create_test_app(startup: StartupTarget) -> App {
    let client = IndexerClient::new(DEFAULT_INDEXER_URL).expect("test client should build");
    App::with_client(AppConfig::default(), client, startup)
}

fn page(app: &App, transactions: Vec<Transaction>) -> AppMessage {
    AppMessage::PageLoaded {
        query: app.list.navigator.query,
        result: Ok(transactions),
    }
}

fn loaded(hash: &str, transaction: Transaction) -> AppMessage {
    AppMessage::TransactionLoaded {
        hash: hash.to_string(),
        result: Ok(Some(Box::new(transaction))),
    }
}

/// App on page 1 of a 60 item list, showing two transactions.
fn create_loaded_list_app() -> App {
    let mut app = create_test_app(StartupTarget::default());
    app.start();
    let message = page(
        &app,
        vec![
            TransactionMother::pay("aa01", "1"),
            TransactionMother::transfer_asset("bb02", 1, 14, 0),
        ],
    );
    app.apply_message(message);
    app.apply_message(AppMessage::CountLoaded(Ok(60)));
    app
}

fn create_detail_app() -> App {
    let mut app = create_loaded_list_app();
    app.handle_command(AppCommand::MoveDown);
    app.handle_command(AppCommand::Open);
    app
}

// ========================================================================
// Startup
// ========================================================================

#[test]
fn test_start_on_list_requests_page_and_count() {
    let query = ListPageQuery::new(3, PageSize::Fifty);
    let mut app = create_test_app(StartupTarget::List(query));

    let requests = app.start();

    assert_eq!(requests, vec![FetchRequest::Page(query), FetchRequest::Count]);
    assert_eq!(app.screen, Screen::List);
    assert!(app.list.loading);
}

#[test]
fn test_start_on_transaction_strips_prefix() {
    let mut app = create_test_app(StartupTarget::Transaction {
        hash: "0xbb02".to_string(),
        anchor: None,
    });

    let requests = app.start();

    assert_eq!(requests, vec![FetchRequest::Transaction("bb02".to_string())]);
    assert_eq!(app.screen, Screen::Detail);
    assert_eq!(app.detail.hash.as_deref(), Some("bb02"));
    assert!(app.detail.loading);
    assert!(app.detail.view.is_none());
}

#[test]
fn test_startup_anchor_resolved_when_transaction_arrives() {
    let mut app = create_test_app(StartupTarget::Transaction {
        hash: "bb02".to_string(),
        anchor: Some(Anchor::new(Collection::Output, 4)),
    });
    app.start();
    assert!(app.section_request.pending().is_some());

    app.apply_message(loaded("bb02", TransactionMother::transfer_asset("bb02", 1, 14, 0)));

    let view = app.detail.view.as_ref().expect("view should be built");
    let row = view
        .row_of(&Anchor::new(Collection::Output, 4))
        .expect("output 4 is revealed");
    assert_eq!(app.detail.scroll, view.layout().line_offset(row));
    assert!(app.detail.scroll > 0);
    assert_eq!(app.section_request.pending(), None);
    assert!(!app.detail.loading);
}

// ========================================================================
// List Navigation
// ========================================================================

#[test]
fn test_navigation_ignored_until_loaded() {
    let mut app = create_test_app(StartupTarget::default());
    app.start();
    app.apply_message(AppMessage::CountLoaded(Ok(200)));

    assert!(app.handle_command(AppCommand::Navigate(NavAction::Next)).is_empty());
    assert_eq!(app.list.navigator.query.page, 1);
}

#[rstest]
#[case::next(NavAction::Next, Some(2))]
#[case::last(NavAction::Last, Some(3))]
#[case::first_is_current(NavAction::First, None)]
#[case::prev_is_current(NavAction::Prev, None)]
fn test_navigate(#[case] action: NavAction, #[case] expected_page: Option<u64>) {
    let mut app = create_loaded_list_app();

    let requests = app.handle_command(AppCommand::Navigate(action));

    match expected_page {
        Some(page) => {
            let target = ListPageQuery::new(page, PageSize::TwentyFive);
            assert_eq!(requests, vec![FetchRequest::Page(target)]);
            assert_eq!(app.list.navigator.query, target);
            assert!(app.list.loading);
        }
        None => {
            assert!(requests.is_empty());
            assert!(!app.list.loading);
        }
    }
}

#[test]
fn test_navigation_ignored_while_page_in_flight() {
    let mut app = create_loaded_list_app();
    app.handle_command(AppCommand::Navigate(NavAction::Next));

    assert!(app.handle_command(AppCommand::Navigate(NavAction::Next)).is_empty());
    assert_eq!(app.list.navigator.query.page, 2);
}

#[test]
fn test_cycle_page_size_returns_to_first_page() {
    let mut app = create_loaded_list_app();
    app.handle_command(AppCommand::Navigate(NavAction::Last));
    let message = page(&app, vec![TransactionMother::store("cc03")]);
    app.apply_message(message);

    let requests = app.handle_command(AppCommand::CyclePageSize);

    let target = ListPageQuery::new(1, PageSize::Fifty);
    assert_eq!(requests, vec![FetchRequest::Page(target)]);
    assert_eq!(app.list.selected, 0);
}

#[test]
fn test_stale_page_dropped() {
    let mut app = create_loaded_list_app();
    app.handle_command(AppCommand::Navigate(NavAction::Next));

    app.apply_message(AppMessage::PageLoaded {
        query: ListPageQuery::new(1, PageSize::TwentyFive),
        result: Ok(vec![TransactionMother::store("ff09")]),
    });

    assert!(app.list.loading);
    assert_eq!(app.list.transactions.len(), 2);
}

#[test]
fn test_page_error_becomes_status_message() {
    let mut app = create_test_app(StartupTarget::default());
    app.start();
    let query = app.list.navigator.query;

    app.apply_message(AppMessage::PageLoaded {
        query,
        result: Err("connection refused".to_string()),
    });

    assert!(!app.list.loading);
    assert!(!app.list.loaded);
    assert_eq!(
        app.status_message.as_deref(),
        Some("Failed to load transactions: connection refused")
    );
}

#[test]
fn test_selection_stays_in_bounds() {
    let mut app = create_loaded_list_app();

    app.handle_command(AppCommand::MoveUp);
    assert_eq!(app.list.selected, 0);
    app.handle_command(AppCommand::MoveDown);
    app.handle_command(AppCommand::MoveDown);
    assert_eq!(app.list.selected, 1);
}

// ========================================================================
// Detail Screen
// ========================================================================

#[test]
fn test_open_shows_snapshot_and_fetches() {
    let mut app = create_loaded_list_app();
    app.handle_command(AppCommand::MoveDown);

    let requests = app.handle_command(AppCommand::Open);

    assert_eq!(requests, vec![FetchRequest::Transaction("bb02".to_string())]);
    assert_eq!(app.screen, Screen::Detail);
    assert_eq!(app.input_context(), InputContext::Detail);
    assert!(app.detail.view.is_some());
    assert!(app.detail.loading);
}

#[test]
fn test_back_returns_to_list_without_refetch() {
    let mut app = create_detail_app();
    app.section_request.request(Anchor::new(Collection::Input, 0));

    let requests = app.handle_command(AppCommand::Back);

    assert!(requests.is_empty());
    assert_eq!(app.screen, Screen::List);
    assert_eq!(app.section_request.pending(), None);
    assert!(app.detail.view.is_none());
    assert_eq!(app.detail.hash, None);
}

#[test]
fn test_reopen_after_back_starts_with_one_page() {
    let mut app = create_detail_app();
    app.handle_command(AppCommand::Reveal(Collection::Output));

    app.handle_command(AppCommand::Back);
    app.handle_command(AppCommand::Open);

    assert_eq!(
        app.detail
            .view
            .as_ref()
            .map(|v| v.disclosure().cursor(Collection::Output)),
        Some(1)
    );
}

#[test]
fn test_transaction_arriving_after_back_is_dropped() {
    let mut app = create_detail_app();
    app.handle_command(AppCommand::Back);

    app.apply_message(loaded("bb02", TransactionMother::transfer_asset("bb02", 1, 14, 0)));

    assert!(app.detail.view.is_none());
    assert_eq!(app.screen, Screen::List);
}

#[test]
fn test_back_from_startup_transaction_loads_list() {
    let mut app = create_test_app(StartupTarget::Transaction {
        hash: "aa01".to_string(),
        anchor: None,
    });
    app.start();

    let requests = app.handle_command(AppCommand::Back);

    assert_eq!(
        requests,
        vec![
            FetchRequest::Page(ListPageQuery::default()),
            FetchRequest::Count
        ]
    );
}

#[test]
fn test_reload_is_screen_dependent() {
    let mut app = create_detail_app();
    app.apply_message(loaded("bb02", TransactionMother::transfer_asset("bb02", 1, 14, 0)));

    assert_eq!(
        app.handle_command(AppCommand::Reload),
        vec![FetchRequest::Transaction("bb02".to_string())]
    );
    assert!(app.detail.loading);

    app.handle_command(AppCommand::Back);
    assert_eq!(
        app.handle_command(AppCommand::Reload),
        vec![
            FetchRequest::Page(ListPageQuery::default()),
            FetchRequest::Count
        ]
    );
}

#[test]
fn test_reveal_until_exhausted() {
    let mut app = create_detail_app();
    let load_more_rows = |app: &App| {
        app.detail
            .view
            .as_ref()
            .map(|view| {
                view.rows()
                    .iter()
                    .filter(|row| matches!(row, DetailRow::LoadMore { .. }))
                    .count()
            })
            .unwrap_or_default()
    };
    assert_eq!(load_more_rows(&app), 1);

    app.handle_command(AppCommand::Reveal(Collection::Output));
    assert_eq!(load_more_rows(&app), 1);
    assert_eq!(app.status_message, None);

    app.handle_command(AppCommand::Reveal(Collection::Output));
    assert_eq!(load_more_rows(&app), 0);

    app.handle_command(AppCommand::Reveal(Collection::Output));
    assert_eq!(app.status_message.as_deref(), Some("No more Output items"));
}

#[test]
fn test_status_message_cleared_by_next_command() {
    let mut app = create_detail_app();
    app.handle_command(AppCommand::Reveal(Collection::Burn));
    assert!(app.status_message.is_some());

    app.handle_command(AppCommand::Noop);
    assert!(app.status_message.is_some());

    app.handle_command(AppCommand::ScrollDown);
    assert_eq!(app.status_message, None);
}

#[test]
fn test_scroll_is_clamped() {
    let mut app = create_detail_app();
    let max = app.detail.max_scroll();
    assert!(max > 0);

    app.handle_command(AppCommand::ScrollUp);
    assert_eq!(app.detail.scroll, 0);

    for _ in 0..(max / 10 + 2) {
        app.handle_command(AppCommand::PageDown);
    }
    assert_eq!(app.detail.scroll, max);

    app.handle_command(AppCommand::PageUp);
    assert!(app.detail.scroll < max);
}

#[test]
fn test_scroll_ignored_on_list() {
    let mut app = create_loaded_list_app();
    app.handle_command(AppCommand::ScrollDown);
    assert_eq!(app.detail.scroll, 0);
}

#[test]
fn test_refetch_of_same_hash_keeps_revealed_items() {
    let mut app = create_detail_app();
    app.handle_command(AppCommand::Reveal(Collection::Output));
    let rows_before = app.detail.view.as_ref().map(|v| v.rows().len());

    app.apply_message(loaded("bb02", TransactionMother::transfer_asset("bb02", 1, 14, 0)));

    assert_eq!(app.detail.view.as_ref().map(|v| v.rows().len()), rows_before);
    assert_eq!(
        app.detail
            .view
            .as_ref()
            .map(|v| v.disclosure().cursor(Collection::Output)),
        Some(2)
    );
}

#[test]
fn test_stale_transaction_dropped() {
    let mut app = create_detail_app();

    app.apply_message(loaded("aa01", TransactionMother::pay("aa01", "1")));

    assert!(app.detail.loading);
    assert_eq!(
        app.detail.view.as_ref().map(|v| v.transaction().hash.clone()),
        Some("bb02".to_string())
    );
}

#[test]
fn test_unknown_transaction_marks_not_found() {
    let mut app = create_test_app(StartupTarget::Transaction {
        hash: "dead".to_string(),
        anchor: Some(Anchor::new(Collection::Input, 0)),
    });
    app.start();

    app.apply_message(AppMessage::TransactionLoaded {
        hash: "dead".to_string(),
        result: Ok(None),
    });

    assert!(app.detail.not_found);
    assert!(app.detail.view.is_none());
    assert!(!app.detail.loading);
    assert_eq!(app.section_request.pending(), None);
}

// ========================================================================
// Go To Section Prompt
// ========================================================================

#[test]
fn test_prompt_jumps_to_section() {
    let mut app = create_detail_app();
    app.handle_command(AppCommand::OpenJumpPrompt);
    assert_eq!(app.input_context(), InputContext::JumpPrompt);

    for c in "output-3".chars() {
        app.handle_command(AppCommand::TypeChar(c));
    }
    app.handle_command(AppCommand::SubmitPrompt);

    let view = app.detail.view.as_ref().expect("snapshot view");
    let row = view
        .row_of(&Anchor::new(Collection::Output, 3))
        .expect("output 3 is revealed");
    assert_eq!(app.detail.scroll, view.layout().line_offset(row));
    assert_eq!(app.prompt, None);
    assert_eq!(app.input_context(), InputContext::Detail);
}

#[test]
fn test_prompt_rejects_bad_anchor() {
    let mut app = create_detail_app();
    app.handle_command(AppCommand::OpenJumpPrompt);
    for c in "outputs".chars() {
        app.handle_command(AppCommand::TypeChar(c));
    }
    app.handle_command(AppCommand::Backspace);
    app.handle_command(AppCommand::SubmitPrompt);

    assert_eq!(app.detail.scroll, 0);
    assert!(app.status_message.is_some());
    assert_eq!(app.section_request.pending(), None);
}

#[test]
fn test_prompt_to_hidden_item_does_not_scroll() {
    let mut app = create_detail_app();
    app.handle_command(AppCommand::OpenJumpPrompt);
    for c in "output-12".chars() {
        app.handle_command(AppCommand::TypeChar(c));
    }
    app.handle_command(AppCommand::SubmitPrompt);

    assert_eq!(app.detail.scroll, 0);
    assert_eq!(app.section_request.pending(), None);
}

#[test]
fn test_dismiss_closes_prompt() {
    let mut app = create_detail_app();
    app.handle_command(AppCommand::OpenJumpPrompt);
    app.handle_command(AppCommand::TypeChar('i'));
    app.handle_command(AppCommand::Dismiss);

    assert_eq!(app.prompt, None);
    assert_eq!(app.detail.scroll, 0);
}

// ========================================================================
// Misc
// ========================================================================

#[test]
fn test_sync_status_update() {
    let mut app = create_test_app(StartupTarget::default());
    let status = SyncStatus {
        codechain_best_block_number: 10,
        codechain_best_block_hash: "aa".to_string(),
        indexed_block_number: 8,
        indexed_block_hash: "bb".to_string(),
    };

    app.apply_message(AppMessage::SyncStatusUpdated(Ok(status.clone())));
    app.apply_message(AppMessage::SyncStatusUpdated(Err("timeout".to_string())));

    assert_eq!(app.sync_status, Some(status));
    assert_eq!(app.status_message, None);
}

#[test]
fn test_quit() {
    let mut app = create_test_app(StartupTarget::default());
    app.handle_command(AppCommand::Quit);
    assert!(app.exit);
}
