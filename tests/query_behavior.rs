//! Behavior tests for the derived queries: movers ordering, search,
//! key lookups, tie stability, and idempotence.

use std::sync::Arc;

use tickboard_core::ManualClock;
use tickboard_tests::{
    index_row, indices_body, scripted_service, stock_row, stocks_body, ScriptedHttpClient,
};

/// Five stocks with percent changes [5, -3, 0, 2, -7].
fn movers_fixture() -> String {
    stocks_body(&[
        stock_row("UP5", "Up Five", 100.0, 5.0, 500.0),
        stock_row("DN3", "Down Three", 100.0, -3.0, 900.0),
        stock_row("FLAT", "Flat", 100.0, 0.0, 700.0),
        stock_row("UP2", "Up Two", 100.0, 2.0, 300.0),
        stock_row("DN7", "Down Seven", 100.0, -7.0, 100.0),
    ])
}

#[tokio::test]
async fn when_top_gainers_are_requested_then_positive_movers_come_descending() {
    let client = Arc::new(ScriptedHttpClient::new());
    client.push_ok(&movers_fixture());
    let service = scripted_service(Arc::clone(&client), Arc::new(ManualClock::new()));

    let gainers = service.top_gainers(2).await;

    let changes: Vec<f64> = gainers.iter().map(|s| s.change_percent).collect();
    assert_eq!(changes, vec![5.0, 2.0]);
}

#[tokio::test]
async fn when_top_losers_are_requested_then_most_negative_comes_first() {
    let client = Arc::new(ScriptedHttpClient::new());
    client.push_ok(&movers_fixture());
    let service = scripted_service(Arc::clone(&client), Arc::new(ManualClock::new()));

    let losers = service.top_losers(2).await;

    let changes: Vec<f64> = losers.iter().map(|s| s.change_percent).collect();
    assert_eq!(changes, vec![-7.0, -3.0]);
}

#[tokio::test]
async fn when_most_active_is_requested_then_all_stocks_rank_by_volume() {
    // No filter: flat and negative movers rank too
    let client = Arc::new(ScriptedHttpClient::new());
    client.push_ok(&movers_fixture());
    let service = scripted_service(Arc::clone(&client), Arc::new(ManualClock::new()));

    let active = service.most_active(3).await;

    let symbols: Vec<&str> = active.iter().map(|s| s.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["DN3", "FLAT", "UP5"]);
}

#[tokio::test]
async fn when_movers_tie_then_source_order_breaks_the_tie() {
    let client = Arc::new(ScriptedHttpClient::new());
    client.push_ok(&stocks_body(&[
        stock_row("FIRST", "First Listed", 10.0, 1.5, 100.0),
        stock_row("SECOND", "Second Listed", 10.0, 1.5, 100.0),
        stock_row("THIRD", "Third Listed", 10.0, 1.5, 100.0),
    ]));
    let service = scripted_service(Arc::clone(&client), Arc::new(ManualClock::new()));

    let gainers = service.top_gainers(3).await;

    let symbols: Vec<&str> = gainers.iter().map(|s| s.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["FIRST", "SECOND", "THIRD"]);
}

#[tokio::test]
async fn when_searching_then_matching_is_case_insensitive_on_symbol_and_name() {
    let client = Arc::new(ScriptedHttpClient::new());
    client.push_ok(&stocks_body(&[
        stock_row("REL", "Power Grid", 250.0, 0.2, 100.0),
        stock_row("TCS", "Tata Consultancy", 3500.0, 0.1, 200.0),
        stock_row("RIL", "Reliance Industries", 2450.0, 0.3, 300.0),
    ]));
    let service = scripted_service(Arc::clone(&client), Arc::new(ManualClock::new()));

    // "rel" hits the REL symbol and the "Reliance" name, in source order
    let matches = service.search_stocks("rel", 20).await;

    let symbols: Vec<&str> = matches.iter().map(|s| s.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["REL", "RIL"]);
}

#[tokio::test]
async fn when_search_exceeds_the_limit_then_results_truncate_in_source_order() {
    let client = Arc::new(ScriptedHttpClient::new());
    client.push_ok(&stocks_body(&[
        stock_row("BANKA", "Bank A", 10.0, 0.0, 1.0),
        stock_row("BANKB", "Bank B", 10.0, 0.0, 1.0),
        stock_row("BANKC", "Bank C", 10.0, 0.0, 1.0),
    ]));
    let service = scripted_service(Arc::clone(&client), Arc::new(ManualClock::new()));

    let matches = service.search_stocks("bank", 2).await;

    let symbols: Vec<&str> = matches.iter().map(|s| s.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["BANKA", "BANKB"]);
}

#[tokio::test]
async fn when_looking_up_by_symbol_then_only_an_exact_match_returns() {
    let client = Arc::new(ScriptedHttpClient::new());
    client.push_ok(&stocks_body(&[
        stock_row("REL", "Reliance Industries", 2450.0, 0.2, 100.0),
        stock_row("RELINFRA", "Reliance Infrastructure", 200.0, 0.1, 50.0),
    ]));
    let service = scripted_service(Arc::clone(&client), Arc::new(ManualClock::new()));

    let found = service.stock_by_symbol("REL").await;
    assert_eq!(found.map(|s| s.name), Some("Reliance Industries".into()));

    let missing = service.stock_by_symbol("rel").await;
    assert!(missing.is_none(), "lookup by key is exact, not fuzzy");
}

#[tokio::test]
async fn when_looking_up_an_index_by_name_then_none_means_not_found() {
    let client = Arc::new(ScriptedHttpClient::new());
    client.push_ok(&indices_body(&[
        index_row("NIFTY 50", "NIFTY", 22150.0, 0.14),
        index_row("SENSEX", "BSESN", 73000.0, 0.2),
    ]));
    let service = scripted_service(Arc::clone(&client), Arc::new(ManualClock::new()));

    let found = service.index_by_name("SENSEX").await;
    assert_eq!(found.map(|i| i.current_price), Some(73000.0));

    assert!(service.index_by_name("DOW").await.is_none());
}

#[tokio::test]
async fn when_a_query_repeats_with_no_time_passage_then_results_are_identical() {
    let client = Arc::new(ScriptedHttpClient::new());
    client.push_ok(&movers_fixture());
    let service = scripted_service(Arc::clone(&client), Arc::new(ManualClock::new()));

    let first = service.top_gainers(10).await;
    let second = service.top_gainers(10).await;

    assert_eq!(first, second);
    assert_eq!(client.calls(), 1, "repeat queries must hit the cache");
}

#[tokio::test]
async fn when_queries_run_then_the_cached_sequence_is_never_mutated() {
    // Sorting movers must not reorder what later callers see
    let client = Arc::new(ScriptedHttpClient::new());
    client.push_ok(&movers_fixture());
    let service = scripted_service(Arc::clone(&client), Arc::new(ManualClock::new()));

    service.most_active(5).await;
    let stocks = service.stocks().await;

    let symbols: Vec<&str> = stocks.iter().map(|s| s.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["UP5", "DN3", "FLAT", "UP2", "DN7"]);
}
