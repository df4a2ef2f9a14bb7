use tickboard_core::{FeedKind, MarketDataService};

use crate::error::CliError;
use crate::output::Table;

use super::CommandResult;

pub async fn run(service: &MarketDataService) -> Result<CommandResult, CliError> {
    let snapshot = service.indices_snapshot().await;
    if snapshot.is_loading() {
        return Err(CliError::FeedUnavailable {
            feed: FeedKind::Indices,
        });
    }

    let table = Table {
        header: vec!["INDEX", "LEVEL", "CHG", "CHG%"],
        rows: snapshot
            .records
            .iter()
            .map(|index| {
                vec![
                    index.name.clone(),
                    format!("{:.2}", index.current_price),
                    format!("{:+.2}", index.change),
                    format!("{:+.2}", index.change_percent),
                ]
            })
            .collect(),
    };

    Ok(CommandResult {
        data: serde_json::to_value(snapshot.records)?,
        table,
    })
}
