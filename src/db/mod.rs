//! SQLite database for the scan log and community scam reports

use std::path::Path;

use rusqlite::{params, Connection};
use tracing::info;

use super::{ReportCategory, RiskTier, ScamReport, ScanRecord};

pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create the database
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    /// Initialize database schema
    fn initialize(&self) -> anyhow::Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS scans (
                id TEXT PRIMARY KEY,
                timestamp TEXT NOT NULL,
                sender TEXT NOT NULL,
                body TEXT NOT NULL,
                risk TEXT,
                metadata TEXT
            );

            CREATE TABLE IF NOT EXISTS reports (
                id TEXT PRIMARY KEY,
                timestamp TEXT NOT NULL,
                category TEXT NOT NULL,
                description TEXT NOT NULL,
                phone_number TEXT NOT NULL,
                severity TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_scans_timestamp ON scans(timestamp);
            CREATE INDEX IF NOT EXISTS idx_scans_risk ON scans(risk);
            CREATE INDEX IF NOT EXISTS idx_reports_timestamp ON reports(timestamp);
            "#,
        )?;

        info!("Database initialized");
        Ok(())
    }

    /// Store a scanned message
    pub fn store_scan(&self, record: &ScanRecord) -> anyhow::Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO scans (id, timestamp, sender, body, risk, metadata)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                record.id,
                record.timestamp.to_rfc3339(),
                record.sender,
                record.body,
                record.risk.map(|t| t.as_str()),
                record.metadata.as_ref().map(|m| m.to_string()),
            ],
        )?;

        Ok(())
    }

    /// Store a scam report
    pub fn store_report(&self, report: &ScamReport) -> anyhow::Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO reports (id, timestamp, category, description, phone_number, severity)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                report.id,
                report.timestamp.to_rfc3339(),
                report.category.to_string(),
                report.description,
                report.phone_number,
                report.severity,
            ],
        )?;

        Ok(())
    }

    /// Get recent scans, newest first
    pub fn recent_scans(&self, limit: usize) -> anyhow::Result<Vec<ScanRecord>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, timestamp, sender, body, risk, metadata
            FROM scans
            ORDER BY timestamp DESC
            LIMIT ?1
            "#,
        )?;

        let scans = stmt
            .query_map([limit], |row| {
                Ok(ScanRecord {
                    id: row.get(0)?,
                    timestamp: chrono::DateTime::parse_from_rfc3339(&row.get::<_, String>(1)?)
                        .unwrap_or_default()
                        .with_timezone(&chrono::Utc),
                    sender: row.get(2)?,
                    body: row.get(3)?,
                    risk: row
                        .get::<_, Option<String>>(4)?
                        .and_then(|s| RiskTier::parse(&s)),
                    metadata: row
                        .get::<_, Option<String>>(5)?
                        .and_then(|s| serde_json::from_str(&s).ok()),
                })
            })?
            .filter_map(|r| r.ok())
            .collect();

        Ok(scans)
    }

    /// Get recent reports, newest first
    pub fn recent_reports(&self, limit: usize) -> anyhow::Result<Vec<ScamReport>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, timestamp, category, description, phone_number, severity
            FROM reports
            ORDER BY timestamp DESC
            LIMIT ?1
            "#,
        )?;

        let reports = stmt
            .query_map([limit], |row| {
                Ok(ScamReport {
                    id: row.get(0)?,
                    timestamp: chrono::DateTime::parse_from_rfc3339(&row.get::<_, String>(1)?)
                        .unwrap_or_default()
                        .with_timezone(&chrono::Utc),
                    category: ReportCategory::parse(&row.get::<_, String>(2)?),
                    description: row.get(3)?,
                    phone_number: row.get(4)?,
                    severity: row.get(5)?,
                })
            })?
            .filter_map(|r| r.ok())
            .collect();

        Ok(reports)
    }

    /// Get statistics for the status summary
    pub fn get_stats(&self) -> anyhow::Result<Stats> {
        let scans: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM scans", [], |row| row.get(0))?;

        let threats: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM scans WHERE risk IN ('high', 'suspicious')",
            [],
            |row| row.get(0),
        )?;

        let reports: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM reports", [], |row| row.get(0))?;

        Ok(Stats {
            scans,
            threats,
            reports,
        })
    }

    /// Clean up old scan entries
    pub fn cleanup(&self, retention_days: u32) -> anyhow::Result<usize> {
        let cutoff = chrono::Utc::now() - chrono::Duration::days(retention_days as i64);

        let deleted = self.conn.execute(
            "DELETE FROM scans WHERE timestamp < ?1",
            [cutoff.to_rfc3339()],
        )?;

        info!("Cleaned up {} old scan records", deleted);
        Ok(deleted)
    }
}

#[derive(Debug)]
pub struct Stats {
    pub scans: i64,
    pub threats: i64,
    pub reports: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_scan(id: &str, risk: Option<RiskTier>) -> ScanRecord {
        ScanRecord {
            id: id.to_string(),
            timestamp: chrono::Utc::now(),
            sender: "09171234567".to_string(),
            body: "You won a prize!".to_string(),
            risk,
            metadata: None,
        }
    }

    #[test]
    fn test_scan_roundtrip() {
        let db = Database::open_in_memory().unwrap();

        db.store_scan(&test_scan("scan-1", Some(RiskTier::High)))
            .unwrap();
        db.store_scan(&test_scan("scan-2", None)).unwrap();

        let scans = db.recent_scans(10).unwrap();
        assert_eq!(scans.len(), 2);
        // Unlabeled record comes back with risk None for the caller to
        // resolve via the classifier
        let unlabeled = scans.iter().find(|s| s.id == "scan-2").unwrap();
        assert!(unlabeled.risk.is_none());
        let labeled = scans.iter().find(|s| s.id == "scan-1").unwrap();
        assert_eq!(labeled.risk, Some(RiskTier::High));
    }

    #[test]
    fn test_report_roundtrip() {
        let db = Database::open_in_memory().unwrap();

        let report = ScamReport {
            id: "report-1".to_string(),
            timestamp: chrono::Utc::now(),
            category: ReportCategory::Sms,
            description: "Fake prize SMS requesting personal information".to_string(),
            phone_number: "+63 912 XXX XXXX".to_string(),
            severity: "High Risk".to_string(),
        };
        db.store_report(&report).unwrap();

        let reports = db.recent_reports(10).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].category, ReportCategory::Sms);
        // Severity is stored and returned verbatim
        assert_eq!(reports[0].severity, "High Risk");
    }

    #[test]
    fn test_stats_counts() {
        let db = Database::open_in_memory().unwrap();

        db.store_scan(&test_scan("s1", Some(RiskTier::High))).unwrap();
        db.store_scan(&test_scan("s2", Some(RiskTier::Suspicious)))
            .unwrap();
        db.store_scan(&test_scan("s3", Some(RiskTier::Safe))).unwrap();
        db.store_scan(&test_scan("s4", None)).unwrap();

        let stats = db.get_stats().unwrap();
        assert_eq!(stats.scans, 4);
        assert_eq!(stats.threats, 2);
        assert_eq!(stats.reports, 0);
    }

    #[test]
    fn test_cleanup_prunes_old_scans() {
        let db = Database::open_in_memory().unwrap();

        let mut old = test_scan("old", None);
        old.timestamp = chrono::Utc::now() - chrono::Duration::days(90);
        db.store_scan(&old).unwrap();
        db.store_scan(&test_scan("recent", None)).unwrap();

        let deleted = db.cleanup(30).unwrap();
        assert_eq!(deleted, 1);

        let scans = db.recent_scans(10).unwrap();
        assert_eq!(scans.len(), 1);
        assert_eq!(scans[0].id, "recent");
    }

    #[test]
    fn test_file_backed_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/dashguard.db");

        let db = Database::open(&path).unwrap();
        db.store_scan(&test_scan("s1", None)).unwrap();
        drop(db);

        let db = Database::open(&path).unwrap();
        assert_eq!(db.recent_scans(10).unwrap().len(), 1);
    }
}
