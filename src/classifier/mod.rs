//! Message risk classifier
//!
//! Folds a message over the pattern table and the two sender-shape
//! checks to produce an additive risk score, then maps the score to a
//! tier. Classification is a pure function of `(body, sender)`: no
//! state survives between calls and nothing here can fail at runtime.

use std::sync::OnceLock;

use regex::Regex;

use super::patterns::{default_patterns, PatternRule};
use super::{Message, RiskAssessment, RiskTier};

/// Bonus for a sender with a foreign international prefix
pub const INTERNATIONAL_SENDER_BONUS: i32 = 3;
/// Bonus for a bare long numeric sender (anonymous-looking number)
pub const LONG_NUMBER_BONUS: i32 = 2;

/// Bare numeric sender of 11+ digits, optionally `+`-prefixed
const LONG_NUMBER_PATTERN: &str = r"^\+?[0-9]{11,}$";

/// The main classifier holding a compiled pattern table
pub struct Classifier {
    patterns: Vec<PatternRule>,
    home_country_code: String,
    long_number: Option<Regex>,
}

impl Classifier {
    pub fn new(patterns: Vec<PatternRule>) -> Self {
        Self {
            patterns,
            home_country_code: "63".to_string(),
            long_number: Regex::new(LONG_NUMBER_PATTERN).ok(),
        }
    }

    /// Override the home country calling code (default "63")
    pub fn with_home_country_code(mut self, code: impl Into<String>) -> Self {
        self.home_country_code = code.into();
        self
    }

    /// Assess a message and return the full scoring breakdown
    pub fn assess(&self, body: &str, sender: &str) -> RiskAssessment {
        let mut score = 0;
        let mut matched = Vec::new();
        let mut explanations = Vec::new();

        for rule in &self.patterns {
            if rule.matches(body, sender) {
                score += rule.weight.score();
                matched.push(rule.name.clone());
                explanations.push(format!(
                    "{} ({:+}): {}",
                    rule.name,
                    rule.weight.score(),
                    rule.description
                ));
            }
        }

        // Sender-shape bonuses are cumulative with each other and with
        // the pattern sums.
        if self.is_international_sender(sender) {
            score += INTERNATIONAL_SENDER_BONUS;
            explanations.push(format!(
                "international_sender ({:+}): sender outside +{}",
                INTERNATIONAL_SENDER_BONUS, self.home_country_code
            ));
        }
        if self.is_long_number(sender) {
            score += LONG_NUMBER_BONUS;
            explanations.push(format!(
                "long_number ({:+}): bare numeric sender of 11+ digits",
                LONG_NUMBER_BONUS
            ));
        }

        let explanation = if explanations.is_empty() {
            "No patterns matched".to_string()
        } else {
            explanations.join("; ")
        };

        RiskAssessment {
            message: Message::new(body, sender),
            matched_patterns: matched,
            score,
            tier: RiskTier::from_score(score),
            explanation,
        }
    }

    /// Classify a message, returning the tier only
    pub fn classify(&self, body: &str, sender: &str) -> RiskTier {
        self.assess(body, sender).tier
    }

    /// Replace the pattern table
    pub fn reload_patterns(&mut self, patterns: Vec<PatternRule>) {
        self.patterns = patterns;
    }

    /// The active pattern table
    pub fn patterns(&self) -> &[PatternRule] {
        &self.patterns
    }

    /// Sender starts with `+` but not with the home country code
    fn is_international_sender(&self, sender: &str) -> bool {
        match sender.strip_prefix('+') {
            Some(rest) => !rest.starts_with(&self.home_country_code),
            None => false,
        }
    }

    fn is_long_number(&self, sender: &str) -> bool {
        self.long_number
            .as_ref()
            .is_some_and(|re| re.is_match(sender))
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(default_patterns())
    }
}

/// Classify a message against the built-in pattern table.
///
/// This is the fallback entry point used when a record has no stored
/// tier. Total over its input domain: empty, very long, and non-ASCII
/// strings all produce a tier.
pub fn classify(body: &str, sender: &str) -> RiskTier {
    static DEFAULT: OnceLock<Classifier> = OnceLock::new();
    DEFAULT.get_or_init(Classifier::default).classify(body, sender)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_patterns_scores_zero() {
        let classifier = Classifier::new(vec![]);
        let result = classifier.assess("hello", "09171234");
        assert_eq!(result.score, 0);
        assert_eq!(result.tier, RiskTier::Safe);
        assert!(result.matched_patterns.is_empty());
        assert_eq!(result.explanation, "No patterns matched");
    }

    #[test]
    fn test_international_sender_bonus() {
        let classifier = Classifier::new(vec![]);

        // Non-numeric-only form, so the long-number bonus stays out
        let result = classifier.assess("", "+1-202-555-0172");
        assert_eq!(result.score, INTERNATIONAL_SENDER_BONUS);
        assert_eq!(result.tier, RiskTier::Safe);

        // Home country prefix gets no bonus
        assert_eq!(classifier.assess("", "+639171234567").score, LONG_NUMBER_BONUS);
    }

    #[test]
    fn test_sender_bonuses_are_cumulative() {
        let classifier = Classifier::new(vec![]);

        // `+` followed by 11 digits outside the home country: both
        // bonuses apply, even with an empty body.
        let result = classifier.assess("", "+15551234567");
        assert_eq!(result.score, INTERNATIONAL_SENDER_BONUS + LONG_NUMBER_BONUS);
        assert_eq!(result.tier, RiskTier::Suspicious);
    }

    #[test]
    fn test_local_long_number_bonus() {
        let classifier = Classifier::new(vec![]);
        assert_eq!(classifier.assess("", "09171234567").score, LONG_NUMBER_BONUS);
        // 10 digits is below the threshold
        assert_eq!(classifier.assess("", "0917123456").score, 0);
    }

    #[test]
    fn test_home_country_code_override() {
        let classifier = Classifier::new(vec![]).with_home_country_code("1");
        assert_eq!(classifier.assess("", "+44 20 7946 0").score, INTERNATIONAL_SENDER_BONUS);
        assert_eq!(classifier.assess("", "+1 202 555 01").score, 0);
    }

    #[test]
    fn test_high_and_safe_matches_net_arithmetically() {
        let classifier = Classifier::default();
        // prize_bait (+3) nets against transaction_receipt (-2)
        let result = classifier.assess("You received a prize", "somebody");
        assert!(result.matched_patterns.contains(&"prize_bait".to_string()));
        assert!(result
            .matched_patterns
            .contains(&"transaction_receipt".to_string()));
        assert_eq!(result.score, 1);
        assert_eq!(result.tier, RiskTier::Safe);
    }

    #[test]
    fn test_reload_patterns_replaces_table() {
        let mut classifier = Classifier::default();
        // prize_bait +3, shouting +2 against the built-in table
        assert_eq!(
            classifier.classify("You won a prize! Claim now", ""),
            RiskTier::Suspicious
        );

        classifier.reload_patterns(vec![]);
        let result = classifier.assess("You won a prize! Claim now", "");
        assert_eq!(result.score, 0);
        assert_eq!(result.tier, RiskTier::Safe);
        assert!(result.matched_patterns.is_empty());
    }

    #[test]
    fn test_sender_only_match_contributes() {
        let classifier = Classifier::default();
        // bank_impersonation (+3) and shouting (+2) both fire on the
        // sender alone.
        let result = classifier.assess("", "BDO");
        assert_eq!(result.score, 5);
        assert_eq!(result.tier, RiskTier::Suspicious);
    }
}
