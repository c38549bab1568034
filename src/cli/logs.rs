//! Logs command - view recent scanned messages

use dashguard::db::Database;
use dashguard::{Config, RiskTier};

pub async fn run(tail: usize, risk: Option<String>, cleanup: bool) -> anyhow::Result<()> {
    let config = Config::load()?;
    let db = Database::open(&config.resolved_db_path())?;
    let classifier = super::build_classifier(&config);

    let filter = match risk.as_deref() {
        Some(s) => match RiskTier::parse(s) {
            Some(tier) => Some(tier),
            None => anyhow::bail!(
                "Unknown risk tier '{}' (expected high, suspicious, or safe)",
                s
            ),
        },
        None => None,
    };

    if cleanup {
        let deleted = db.cleanup(config.log_retention_days)?;
        println!(
            "Pruned {} scans older than {} days",
            deleted, config.log_retention_days
        );
    }

    println!("📋 Recent Scans (last {} entries)", tail);
    println!("─────────────────────────────────────");

    let scans = db.recent_scans(tail)?;
    if scans.is_empty() {
        println!("\nNo scans recorded yet. Run 'dashguard scan --save' to add one.");
        return Ok(());
    }

    for record in &scans {
        // Records without a stored tier fall back to local classification
        let tier = record
            .risk
            .unwrap_or_else(|| classifier.classify(&record.body, &record.sender));

        if let Some(wanted) = filter {
            if tier != wanted {
                continue;
            }
        }

        let preview: String = record.body.chars().take(60).collect();
        println!(
            "{} [{}] {}: {}",
            super::tier_icon(tier),
            record.timestamp.format("%Y-%m-%d %H:%M"),
            record.sender,
            preview
        );
    }

    Ok(())
}
