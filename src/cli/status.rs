//! Status command - protection summary

use dashguard::db::Database;
use dashguard::Config;

pub async fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    let db = Database::open(&config.resolved_db_path())?;
    let stats = db.get_stats()?;

    println!("🛡️ DashGuard Status");
    println!("─────────────────");
    println!("Messages scanned: {}", stats.scans);
    println!("Threats flagged:  {}", stats.threats);
    println!("Reports on file:  {}", stats.reports);

    if stats.scans == 0 {
        println!("\nRun 'dashguard scan --save' to start building the scan log");
    }

    Ok(())
}
