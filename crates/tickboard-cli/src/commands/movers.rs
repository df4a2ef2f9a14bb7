use tickboard_core::MarketDataService;

use crate::error::CliError;

use super::{require_stocks_loaded, stock_result, CommandResult};

pub async fn gainers(service: &MarketDataService, limit: usize) -> Result<CommandResult, CliError> {
    require_stocks_loaded(service).await?;
    stock_result(service.top_gainers(limit).await)
}

pub async fn losers(service: &MarketDataService, limit: usize) -> Result<CommandResult, CliError> {
    require_stocks_loaded(service).await?;
    stock_result(service.top_losers(limit).await)
}

pub async fn active(service: &MarketDataService, limit: usize) -> Result<CommandResult, CliError> {
    require_stocks_loaded(service).await?;
    stock_result(service.most_active(limit).await)
}
