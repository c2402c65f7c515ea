//! # Search and Chart Demo
//!
//! Browses the demo catalog, runs a search, and prints a 30-day price
//! series the way the dashboard chart consumes it.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example search_and_chart
//! ```

use tickwatch_core::StockDirectory;

#[tokio::main]
async fn main() {
    let directory = StockDirectory::default();

    println!("All stocks:");
    for stock in directory.search_stocks("").await {
        println!(
            "  {:<6} {:<24} {:>8.2} {:>+7.2} ({:>+6.2}%)",
            stock.symbol, stock.name, stock.price, stock.change, stock.change_percent
        );
    }

    println!("\nSearch 'micro':");
    for stock in directory.search_stocks("micro").await {
        println!("  {:<6} {}", stock.symbol, stock.name);
    }

    println!("\n30-day series for AAPL:");
    for point in directory.daily_series("AAPL").await {
        println!("  {}  {:.2}", point.date, point.value);
    }
}
