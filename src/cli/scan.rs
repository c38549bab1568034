//! Scan command - classify a single message

use dashguard::db::Database;
use dashguard::{Config, ScanRecord};

pub async fn run(body: &str, sender: &str, save: bool) -> anyhow::Result<()> {
    let config = Config::load()?;
    let classifier = super::build_classifier(&config);

    let result = classifier.assess(body, sender);

    println!("Scanning message from '{}'", sender);
    println!("────────────────────────────────────");
    println!("{} Risk: {}", super::tier_icon(result.tier), result.tier);
    println!("Score: {}", result.score);

    if result.matched_patterns.is_empty() {
        println!("No patterns matched");
    } else {
        println!("Matched patterns:");
        for name in &result.matched_patterns {
            println!("  - {}", name);
        }
    }

    if save {
        let db = Database::open(&config.resolved_db_path())?;
        let record = ScanRecord {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now(),
            sender: sender.to_string(),
            body: body.to_string(),
            risk: Some(result.tier),
            metadata: None,
        };
        db.store_scan(&record)?;
        println!("\nSaved scan {}", record.id);
    }

    Ok(())
}
