//! DashGuard Library
//!
//! Core components for scam message risk analysis.

pub mod classifier;
pub mod db;
pub mod patterns;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An incoming text message to classify
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Raw message body, untrimmed
    pub body: String,
    /// Sender identifier: phone number or alphanumeric sender name
    pub sender: String,
}

impl Message {
    pub fn new(body: impl Into<String>, sender: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            sender: sender.into(),
        }
    }
}

/// Risk tier of a message, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    /// No meaningful signals, or safe signals dominate
    #[default]
    Safe,
    /// Enough signals to warrant caution
    Suspicious,
    /// Strong scam indicators
    High,
}

impl RiskTier {
    /// Map a final risk score to a tier. Scores below the suspicious
    /// threshold, including negative ones, clamp to `Safe`.
    pub fn from_score(score: i32) -> Self {
        if score >= HIGH_RISK_THRESHOLD {
            RiskTier::High
        } else if score >= SUSPICIOUS_THRESHOLD {
            RiskTier::Suspicious
        } else {
            RiskTier::Safe
        }
    }

    /// Stored/wire form, matching what the backend assigns
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Safe => "safe",
            RiskTier::Suspicious => "suspicious",
            RiskTier::High => "high",
        }
    }

    /// Parse a stored tier string. Unknown values return `None` so
    /// callers fall back to local classification.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "safe" => Some(RiskTier::Safe),
            "suspicious" => Some(RiskTier::Suspicious),
            "high" => Some(RiskTier::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskTier::Safe => write!(f, "SAFE"),
            RiskTier::Suspicious => write!(f, "SUSPICIOUS"),
            RiskTier::High => write!(f, "HIGH"),
        }
    }
}

/// Score at or above which a message is `high` risk
pub const HIGH_RISK_THRESHOLD: i32 = 7;
/// Score at or above which a message is `suspicious`
pub const SUSPICIOUS_THRESHOLD: i32 = 4;

/// Result of assessing a message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// The assessed message
    pub message: Message,
    /// Names of pattern rules that matched
    pub matched_patterns: Vec<String>,
    /// Final additive score
    pub score: i32,
    /// Tier the score maps to
    pub tier: RiskTier,
    /// Human-readable explanation
    pub explanation: String,
}

/// A scanned message as stored in the local log.
///
/// `risk` is the tier assigned upstream when the message was flagged;
/// it is `None` for records that arrived without a label, in which case
/// display code falls back to the local classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRecord {
    /// Unique identifier
    pub id: String,
    /// Timestamp of the scan
    pub timestamp: DateTime<Utc>,
    /// Sender identifier
    pub sender: String,
    /// Message body
    pub body: String,
    /// Stored risk tier, if one was assigned
    pub risk: Option<RiskTier>,
    /// Additional metadata (carrier info, SIM slot, etc.)
    pub metadata: Option<serde_json::Value>,
}

/// Category of a community scam report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportCategory {
    Sms,
    Call,
    Unknown,
}

impl std::fmt::Display for ReportCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportCategory::Sms => write!(f, "sms"),
            ReportCategory::Call => write!(f, "call"),
            ReportCategory::Unknown => write!(f, "unknown"),
        }
    }
}

impl ReportCategory {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "sms" => ReportCategory::Sms,
            "call" => ReportCategory::Call,
            _ => ReportCategory::Unknown,
        }
    }
}

/// A community-submitted scam report.
///
/// `severity` is assigned by the moderation backend and displayed
/// verbatim; it is never re-derived locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScamReport {
    /// Unique identifier
    pub id: String,
    /// Submission timestamp
    pub timestamp: DateTime<Utc>,
    /// Report category (sms, call)
    pub category: ReportCategory,
    /// Free-text description of the scam
    pub description: String,
    /// Offending phone number or sender name
    pub phone_number: String,
    /// Severity label as assigned upstream
    pub severity: String,
}

/// Configuration for the DashGuard CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Database path
    pub db_path: String,
    /// Home country calling code; senders outside it get the
    /// international-number bonus
    pub home_country_code: String,
    /// Optional YAML pattern table overriding the built-in one
    pub patterns_path: Option<String>,
    /// Scan log retention in days, enforced by `logs --cleanup`
    pub log_retention_days: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: "~/.dashguard/dashguard.db".to_string(),
            home_country_code: "63".to_string(),
            patterns_path: None,
            log_retention_days: 30,
        }
    }
}

impl Config {
    /// Load config from `~/.dashguard/config.yaml`, falling back to
    /// defaults when the file is absent.
    pub fn load() -> anyhow::Result<Self> {
        let home = dirs::home_dir().unwrap_or_default();
        let path = home.join(".dashguard/config.yaml");
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(Config::default())
        }
    }

    /// Resolve the db path, expanding a leading `~`.
    pub fn resolved_db_path(&self) -> std::path::PathBuf {
        if let Some(rest) = self.db_path.strip_prefix("~/") {
            dirs::home_dir().unwrap_or_default().join(rest)
        } else {
            std::path::PathBuf::from(&self.db_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ordering() {
        assert!(RiskTier::High > RiskTier::Suspicious);
        assert!(RiskTier::Suspicious > RiskTier::Safe);
    }

    #[test]
    fn test_tier_from_score_boundaries() {
        assert_eq!(RiskTier::from_score(-4), RiskTier::Safe);
        assert_eq!(RiskTier::from_score(0), RiskTier::Safe);
        assert_eq!(RiskTier::from_score(3), RiskTier::Safe);
        assert_eq!(RiskTier::from_score(4), RiskTier::Suspicious);
        assert_eq!(RiskTier::from_score(6), RiskTier::Suspicious);
        assert_eq!(RiskTier::from_score(7), RiskTier::High);
        assert_eq!(RiskTier::from_score(42), RiskTier::High);
    }

    #[test]
    fn test_tier_parse_roundtrip() {
        for tier in [RiskTier::Safe, RiskTier::Suspicious, RiskTier::High] {
            assert_eq!(RiskTier::parse(tier.as_str()), Some(tier));
        }
        assert_eq!(RiskTier::parse("HIGH"), Some(RiskTier::High));
        assert_eq!(RiskTier::parse("critical"), None);
        assert_eq!(RiskTier::parse(""), None);
    }
}
