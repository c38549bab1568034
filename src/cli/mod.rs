//! CLI command implementations

pub mod logs;
pub mod patterns;
pub mod report;
pub mod scan;
pub mod status;

use dashguard::classifier::Classifier;
use dashguard::patterns::load_patterns_from_file;
use dashguard::{Config, RiskTier};
use tracing::warn;

/// Build a classifier from config. Starts from the built-in table and
/// swaps in the file-backed one when it loads. A malformed pattern file
/// is a construction-time defect, so the load error is surfaced before
/// falling back to the built-in table.
pub fn build_classifier(config: &Config) -> Classifier {
    let mut classifier =
        Classifier::default().with_home_country_code(config.home_country_code.clone());

    if let Some(path) = config.patterns_path.as_deref() {
        match load_patterns_from_file(std::path::Path::new(path)) {
            Ok(patterns) => classifier.reload_patterns(patterns),
            Err(err) => warn!(
                "Failed to load pattern table {}: {:#}; using built-in table",
                path, err
            ),
        }
    }

    classifier
}

/// Icon rendering for a tier: red alert, amber alert, green check
pub fn tier_icon(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::High => "🔴",
        RiskTier::Suspicious => "🟠",
        RiskTier::Safe => "🟢",
    }
}
