use tickboard_core::MarketDataService;

use crate::error::CliError;
use crate::output::Table;

use super::{require_stocks_loaded, CommandResult};

pub async fn run(service: &MarketDataService, symbol: &str) -> Result<CommandResult, CliError> {
    require_stocks_loaded(service).await?;

    let stock = service
        .stock_by_symbol(symbol)
        .await
        .ok_or_else(|| CliError::NotFound {
            symbol: symbol.to_string(),
        })?;

    let table = Table {
        header: vec!["FIELD", "VALUE"],
        rows: vec![
            vec!["symbol".into(), stock.symbol.clone()],
            vec!["name".into(), stock.name.clone()],
            vec!["price".into(), format!("{:.2}", stock.current_price)],
            vec!["open".into(), format!("{:.2}", stock.open)],
            vec!["high".into(), format!("{:.2}", stock.high)],
            vec!["low".into(), format!("{:.2}", stock.low)],
            vec!["prev close".into(), format!("{:.2}", stock.previous_close)],
            vec!["change".into(), format!("{:+.2}", stock.change)],
            vec!["change %".into(), format!("{:+.2}", stock.change_percent)],
            vec!["avg volume".into(), format!("{:.0}", stock.average_volume)],
            vec!["52w high".into(), format!("{:.2}", stock.week52_high)],
            vec!["52w low".into(), format!("{:.2}", stock.week52_low)],
            vec!["market cap".into(), format!("{:.0}", stock.market_cap)],
        ],
    };

    Ok(CommandResult {
        data: serde_json::to_value(stock)?,
        table,
    })
}
