use tickboard_core::MarketDataService;

use crate::error::CliError;

use super::{require_stocks_loaded, stock_result, CommandResult};

pub async fn run(
    service: &MarketDataService,
    query: &str,
    limit: usize,
) -> Result<CommandResult, CliError> {
    require_stocks_loaded(service).await?;
    stock_result(service.search_stocks(query, limit).await)
}
