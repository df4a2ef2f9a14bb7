mod indices;
mod movers;
mod quote;
mod search;

use serde_json::Value;

use tickboard_core::{MarketDataService, StockRecord};

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::output::Table;

/// Data for the renderer: the JSON payload plus a table view of it.
pub struct CommandResult {
    pub data: Value,
    pub table: Table,
}

pub async fn run(cli: &Cli, service: &MarketDataService) -> Result<CommandResult, CliError> {
    match &cli.command {
        Command::Gainers { limit } => movers::gainers(service, *limit).await,
        Command::Losers { limit } => movers::losers(service, *limit).await,
        Command::Active { limit } => movers::active(service, *limit).await,
        Command::Search { query, limit } => search::run(service, query, *limit).await,
        Command::Quote { symbol } => quote::run(service, symbol).await,
        Command::Indices => indices::run(service).await,
    }
}

pub(crate) const STOCK_HEADER: [&str; 5] = ["SYMBOL", "NAME", "PRICE", "CHG%", "AVG VOL"];

pub(crate) fn stock_row(stock: &StockRecord) -> Vec<String> {
    vec![
        stock.symbol.clone(),
        stock.name.clone(),
        format!("{:.2}", stock.current_price),
        format!("{:+.2}", stock.change_percent),
        format!("{:.0}", stock.average_volume),
    ]
}

pub(crate) fn stock_table(stocks: &[StockRecord]) -> Table {
    Table {
        header: STOCK_HEADER.to_vec(),
        rows: stocks.iter().map(stock_row).collect(),
    }
}

pub(crate) fn stock_result(stocks: Vec<StockRecord>) -> Result<CommandResult, CliError> {
    let table = stock_table(&stocks);
    Ok(CommandResult {
        data: serde_json::to_value(stocks)?,
        table,
    })
}

/// Fail with a distinct exit code when the stocks feed has never loaded,
/// so "no data yet" is not confused with an empty result.
pub(crate) async fn require_stocks_loaded(service: &MarketDataService) -> Result<(), CliError> {
    let snapshot = service.stocks_snapshot().await;
    if snapshot.is_loading() {
        return Err(CliError::FeedUnavailable {
            feed: tickboard_core::FeedKind::Stocks,
        });
    }
    Ok(())
}
