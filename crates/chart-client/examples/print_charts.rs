//! Fetch the live charts from every registered site and print a summary.
//!
//! Run with: cargo run --example print_charts

use chart_client::ChartService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let service = ChartService::new();
    let result = service.aggregate().await;

    for (site, records) in &result {
        println!("{site}: {} tracks", records.len());
        for (rank, record) in records.iter().take(5).enumerate() {
            let publisher = record.publisher.as_deref().unwrap_or("-");
            println!(
                "  {}. {} - {} [{}] publisher={publisher}",
                rank + 1,
                record.singer,
                record.name,
                record.album
            );
        }
    }

    Ok(())
}
