use crate::cli::OutputFormat;
use crate::commands::CommandResult;
use crate::error::CliError;

/// Column-aligned text view of a command result.
pub struct Table {
    pub header: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

pub fn render(result: &CommandResult, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(&result.data)?
            } else {
                serde_json::to_string(&result.data)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => {
            for line in table_lines(&result.table) {
                println!("{line}");
            }
        }
    }
    Ok(())
}

fn table_lines(table: &Table) -> Vec<String> {
    if table.rows.is_empty() {
        return vec![String::from("(no results)")];
    }

    let mut widths: Vec<usize> = table.header.iter().map(|h| h.len()).collect();
    for row in &table.rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() && cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let mut lines = Vec::with_capacity(table.rows.len() + 1);
    let header: Vec<String> = table
        .header
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{h:<width$}", width = widths[i]))
        .collect();
    lines.push(header.join("  ").trim_end().to_string());

    for row in &table.rows {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{cell:<width$}", width = widths[i]))
            .collect();
        lines.push(cells.join("  ").trim_end().to_string());
    }
    lines
}
