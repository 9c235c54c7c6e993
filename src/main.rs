//! Terminal crypto dashboard.
//!
//! Renders the price cards for the tracked pairs and a daily OHLCV table,
//! using the same data layer a web front end would.

use anyhow::Result;
use clap::{Parser, Subcommand};
use crypto_dashboard::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "crypto-dashboard", version, about = "Crypto prices and daily candles in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Quotation API base URL
    #[arg(long, env = "DIA_BASE_URL", default_value = DEFAULT_QUOTE_URL, global = true)]
    quote_url: String,

    /// Chart API base URL
    #[arg(long, env = "YAHOO_BASE_URL", default_value = DEFAULT_HISTORY_URL, global = true)]
    history_url: String,

    /// Log filter, used when RUST_LOG is unset
    #[arg(long, default_value = "info", global = true)]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Price cards followed by the default BTC-USD table
    Dashboard,

    /// Price cards for the tracked pairs
    Prices,

    /// Daily OHLCV table for one ticker
    History {
        /// Ticker, e.g. BTC-USD, ETH-USD, SOL-USD
        #[arg(short, long, default_value = DEFAULT_HISTORY_SYMBOL)]
        symbol: String,

        /// Lookback period
        #[arg(short, long, default_value = DEFAULT_PERIOD,
              value_parser = clap::builder::PossibleValuesParser::new(VALID_PERIODS))]
        period: String,

        /// Show only the most recent N candles (10-500); all by default
        #[arg(short, long, value_parser = clap::value_parser!(u16).range(10..=500))]
        candles: Option<u16>,

        /// Print the canonical records as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    run(cli).await?;
    Ok(())
}

async fn run(cli: Cli) -> Result<(), DashboardError> {
    let client = DashboardClient::builder()
        .quote_base_url(&cli.quote_url)
        .history_base_url(&cli.history_url)
        .build()?;

    match cli.command.unwrap_or(Commands::Dashboard) {
        Commands::Dashboard => {
            print_cards(&client.quotes().fetch_all().await);
            println!();
            match client
                .history()
                .fetch_history(DEFAULT_HISTORY_SYMBOL, DEFAULT_PERIOD)
                .await
            {
                Ok(series) => print_table(&series),
                Err(e) => eprintln!("{}", e),
            }
        }
        Commands::Prices => print_cards(&client.quotes().fetch_all().await),
        Commands::History {
            symbol,
            period,
            candles,
            json,
        } => {
            let mut series = client.history().fetch_history(&symbol, &period).await?;
            if let Some(n) = candles {
                series = series.tail(n as usize);
            }
            if json {
                println!("{}", series.to_chart_json()?);
            } else {
                print_table(&series);
            }
        }
    }

    Ok(())
}

fn print_cards(cards: &[PriceCard]) {
    for card in cards {
        println!("{}", card);
    }
}

fn print_table(series: &Series) {
    let rows = format_series(series.records());

    let mut widths = DisplayRow::COLUMNS.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.cells()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    println!("{} ({} candles)", series.symbol(), rows.len());
    let header: Vec<String> = DisplayRow::COLUMNS
        .iter()
        .zip(widths)
        .map(|(name, w)| format!("{:>w$}", name, w = w))
        .collect();
    println!("{}", header.join("  "));

    for row in &rows {
        let line: Vec<String> = row
            .cells()
            .iter()
            .zip(widths)
            .map(|(cell, w)| format!("{:>w$}", cell, w = w))
            .collect();
        println!("{}", line.join("  "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_candles(args: &[&str]) -> Option<u16> {
        match Cli::try_parse_from(args).unwrap().command {
            Some(Commands::History { candles, .. }) => candles,
            other => panic!("expected history command, got {:?}", other),
        }
    }

    #[test]
    fn test_history_shows_full_period_by_default() {
        assert_eq!(history_candles(&["crypto-dashboard", "history", "--period", "max"]), None);
    }

    #[test]
    fn test_history_candles_range() {
        assert_eq!(
            history_candles(&["crypto-dashboard", "history", "--candles", "30"]),
            Some(30)
        );
        assert!(Cli::try_parse_from(["crypto-dashboard", "history", "--candles", "5"]).is_err());
        assert!(Cli::try_parse_from(["crypto-dashboard", "history", "--candles", "501"]).is_err());
    }
}
