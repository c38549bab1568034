//! Report commands - submit and list community scam reports

use dashguard::db::Database;
use dashguard::{Config, ReportCategory, ScamReport};

pub async fn submit(
    category: &str,
    description: &str,
    phone_number: &str,
    severity: Option<&str>,
) -> anyhow::Result<()> {
    let config = Config::load()?;
    let db = Database::open(&config.resolved_db_path())?;

    let report = ScamReport {
        id: uuid::Uuid::new_v4().to_string(),
        timestamp: chrono::Utc::now(),
        category: ReportCategory::parse(category),
        description: description.to_string(),
        phone_number: phone_number.to_string(),
        // Pending reports carry a placeholder until moderation assigns
        // a severity; we never derive one locally.
        severity: severity.unwrap_or("unverified").to_string(),
    };
    db.store_report(&report)?;

    println!("✅ Report submitted");
    println!("  id: {}", report.id);
    println!("  category: {}", report.category);
    println!("  number: {}", report.phone_number);

    Ok(())
}

pub async fn list(tail: usize) -> anyhow::Result<()> {
    let config = Config::load()?;
    let db = Database::open(&config.resolved_db_path())?;

    println!("📢 Community Scam Reports (last {} entries)", tail);
    println!("─────────────────────────────────────");

    let reports = db.recent_reports(tail)?;
    if reports.is_empty() {
        println!("\nNo reports on file. Run 'dashguard report submit' to add one.");
        return Ok(());
    }

    for report in &reports {
        let kind = match report.category {
            ReportCategory::Sms => "SMS Scam",
            ReportCategory::Call => "Call Scam",
            ReportCategory::Unknown => "Scam",
        };
        println!(
            "[{}] {} from {}",
            report.timestamp.format("%Y-%m-%d %H:%M"),
            kind,
            report.phone_number
        );
        println!("  {}", report.description);
        // Severity comes from the moderation backend and is shown as-is
        println!("  severity: {}", report.severity);
    }

    println!("\nTotal: {} reports", reports.len());
    Ok(())
}
