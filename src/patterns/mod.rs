//! Pattern table definitions and matching logic
//!
//! A pattern rule is a named regex tagged with a scoring weight. Rules
//! match against the message body or the sender identifier; each rule is
//! evaluated independently and every match contributes its weight to the
//! final score.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Scoring weight class of a pattern rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternWeight {
    /// Strong scam indicator, +3 per match
    HighRisk,
    /// Weak scam indicator, +2 per match
    Suspicious,
    /// Legitimate-traffic indicator, -2 per match
    Safe,
}

impl Default for PatternWeight {
    fn default() -> Self {
        PatternWeight::Suspicious
    }
}

impl PatternWeight {
    /// Score contribution of one match in this weight class
    pub fn score(self) -> i32 {
        match self {
            PatternWeight::HighRisk => 3,
            PatternWeight::Suspicious => 2,
            PatternWeight::Safe => -2,
        }
    }
}

/// A single scoring pattern
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PatternRule {
    /// Rule name
    pub name: String,
    /// Human-readable description
    #[serde(default)]
    pub description: String,
    /// Weight class
    #[serde(default)]
    pub weight: PatternWeight,
    /// Regex pattern; flags such as `(?i)` are part of the pattern itself
    pub pattern: String,
    /// Is the rule enabled?
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Compiled regex (not serialized)
    #[serde(skip)]
    compiled: Option<Regex>,
}

fn default_enabled() -> bool {
    true
}

impl PatternRule {
    /// Create a new pattern rule
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        pattern: impl Into<String>,
        weight: PatternWeight,
    ) -> Self {
        let pattern = pattern.into();
        let compiled = Regex::new(&pattern).ok();

        Self {
            name: name.into(),
            description: description.into(),
            weight,
            pattern,
            enabled: true,
            compiled,
        }
    }

    /// Check whether this rule matches the message body or the sender.
    /// Both fields are tested independently; a hit on either counts.
    pub fn matches(&self, body: &str, sender: &str) -> bool {
        if !self.enabled {
            return false;
        }
        if let Some(ref regex) = self.compiled {
            regex.is_match(body) || regex.is_match(sender)
        } else {
            false
        }
    }

    /// Compile the pattern. A malformed regex is a construction-time
    /// defect surfaced here, never a per-classification condition.
    pub fn compile(&mut self) -> anyhow::Result<()> {
        if !self.pattern.is_empty() {
            self.compiled = Some(Regex::new(&self.pattern)?);
        }
        Ok(())
    }
}

/// The canonical built-in pattern table.
///
/// Banks and allow-listed services target the Philippine market, mirroring
/// the upstream product. The all-caps/punctuation rule is intentionally
/// case-sensitive; every other rule carries `(?i)`.
pub fn default_patterns() -> Vec<PatternRule> {
    vec![
        // High risk: +3 each
        PatternRule::new(
            "urgent_action",
            "Urgent call-to-action phrasing",
            r"(?i)(click here|reply (now|immediately)|act now|urgent|limited time)",
            PatternWeight::HighRisk,
        ),
        PatternRule::new(
            "account_threat",
            "Account suspension or closure threats",
            r"(?i)account.*(suspend|clos|block|terminat|deactivat)",
            PatternWeight::HighRisk,
        ),
        PatternRule::new(
            "bank_impersonation",
            "Impersonation of known bank names",
            r"(?i)(BDO|BPI|Security Bank|Metrobank|UnionBank)",
            PatternWeight::HighRisk,
        ),
        PatternRule::new(
            "prize_bait",
            "Prize, lottery, and reward bait",
            r"(?i)(won|winner|prize|claim|reward|congratulation)",
            PatternWeight::HighRisk,
        ),
        PatternRule::new(
            "credential_request",
            "Requests for passwords, PINs, OTPs, or card details",
            r"(?i)(verify.*identity|send.*(password|pin|otp|cvv))",
            PatternWeight::HighRisk,
        ),
        PatternRule::new(
            "money_request",
            "Money transfer and payment requests",
            r"(?i)(send|transfer|payment|fee|charge)",
            PatternWeight::HighRisk,
        ),
        PatternRule::new(
            "legal_threat",
            "Legal action or arrest threats",
            r"(?i)(legal|lawsuit|police|arrest|criminal)",
            PatternWeight::HighRisk,
        ),
        // Suspicious: +2 each
        PatternRule::new(
            "generic_greeting",
            "Generic greeting instead of a real name",
            r"(?i)(dear.*customer|valued.*client)",
            PatternWeight::Suspicious,
        ),
        PatternRule::new(
            "shouting",
            "Excessive punctuation or all-caps runs",
            r"(!+|\?+|[A-Z]{3,})",
            PatternWeight::Suspicious,
        ),
        PatternRule::new(
            "unverified_offer",
            "Unverified promotional offers",
            r"(?i)(offer|promo|discount|deal|save)",
            PatternWeight::Suspicious,
        ),
        PatternRule::new(
            "verification_request",
            "Verification or confirmation requests",
            r"(?i)(verify|confirm|validate|authenticate)",
            PatternWeight::Suspicious,
        ),
        PatternRule::new(
            "link_bait",
            "URL-like tokens and link shorteners",
            r"(?i)(http|www|\.com|\.ph|bit\.ly)",
            PatternWeight::Suspicious,
        ),
        // Safe: -2 each
        PatternRule::new(
            "transaction_receipt",
            "Transaction confirmation language",
            r"(?i)(received|sent|transferred|paid|purchased)",
            PatternWeight::Safe,
        ),
        PatternRule::new(
            "otp_delivery",
            "OTP and password delivery codes",
            r"(?i)([0-9]{4,6}.*code|OTP|password)",
            PatternWeight::Safe,
        ),
        PatternRule::new(
            "known_service",
            "Known legitimate service sender names",
            r"(?i)(GCash|PayMaya|Maya|Globe|Smart|PLDT)",
            PatternWeight::Safe,
        ),
    ]
}

/// Load a pattern table from a YAML file
pub fn load_patterns_from_file(path: &std::path::Path) -> anyhow::Result<Vec<PatternRule>> {
    let content = std::fs::read_to_string(path)?;
    let mut patterns: Vec<PatternRule> = serde_yaml::from_str(&content)?;

    for rule in &mut patterns {
        rule.compile()?;
    }

    Ok(patterns)
}
