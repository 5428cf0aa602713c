//! Trade and analytics views
//!
//! Read-only views over the journal service: the recorded trade ledger
//! and the aggregate analytics report.

use crate::api::types::AnalyticsReport;
use crate::api::JournalApi;
use crate::commands::build_api;
use crate::config::Config;
use crate::error::Result;

use colored::Colorize;
use prettytable::{row, Table};

/// List recorded trades
pub async fn list_trades(config: &Config) -> Result<()> {
    let api = build_api(config)?;
    let trades = api.list_trades().await?;

    if trades.is_empty() {
        println!("No trades recorded yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.add_row(row!["SYMBOL", "ENTRY", "EXIT", "QTY", "PNL", "EXECUTED"]);
    for trade in &trades {
        table.add_row(row![
            trade.symbol,
            format_price(trade.entry_price),
            format_price(trade.exit_price),
            trade
                .quantity
                .map(|q| q.to_string())
                .unwrap_or_else(|| "-".to_string()),
            format_pnl(trade.pnl),
            trade
                .executed_at
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string())
        ]);
    }
    table.printstd();
    println!("\n{} trade(s)", trades.len());

    Ok(())
}

/// Show the aggregate analytics report
pub async fn show_analytics(config: &Config) -> Result<()> {
    let api = build_api(config)?;
    let report = api.get_analytics().await?;
    print_report(&report);
    Ok(())
}

fn print_report(report: &AnalyticsReport) {
    println!("{}", "Journal analytics".bold());
    println!("  Trades:        {}", report.total_trades);
    println!("  Conversations: {}", report.total_conversations);

    let win_rate = report
        .win_rate
        .map(|w| format!("{:.1}%", w * 100.0))
        .unwrap_or_else(|| "-".to_string());
    println!("  Win rate:      {}", win_rate);

    match report.total_pnl {
        Some(pnl) => {
            let text = format!("{:+.2}", pnl);
            let text = if pnl >= 0.0 { text.green() } else { text.red() };
            println!("  Total P&L:     {}", text);
        }
        None => println!("  Total P&L:     -"),
    }

    if let Some(summary) = &report.summary {
        if !summary.is_empty() {
            println!("\n{}", summary);
        }
    }
}

fn format_price(price: Option<f64>) -> String {
    price
        .map(|p| format!("{:.2}", p))
        .unwrap_or_else(|| "-".to_string())
}

fn format_pnl(pnl: Option<f64>) -> String {
    pnl.map(|p| format!("{:+.2}", p))
        .unwrap_or_else(|| "-".to_string())
}
