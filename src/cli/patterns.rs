//! Pattern management commands

use dashguard::patterns::PatternWeight;
use dashguard::Config;

pub async fn list() -> anyhow::Result<()> {
    println!("📜 Configured Patterns");
    println!("──────────────────────");

    let config = Config::load()?;
    let classifier = super::build_classifier(&config);

    for rule in classifier.patterns() {
        let status = if rule.enabled { "✅" } else { "❌" };
        let weight = match rule.weight {
            PatternWeight::HighRisk => "high_risk",
            PatternWeight::Suspicious => "suspicious",
            PatternWeight::Safe => "safe",
        };
        println!(
            "{} [{}] ({:+}) {} - {}",
            status,
            weight,
            rule.weight.score(),
            rule.name,
            rule.description
        );
    }

    println!("\nTotal: {} patterns", classifier.patterns().len());
    Ok(())
}

pub async fn test(name: &str, body: &str, sender: &str) -> anyhow::Result<()> {
    println!("Testing pattern '{}' against input: {}", name, body);
    println!("────────────────────────────────────");

    let config = Config::load()?;
    let classifier = super::build_classifier(&config);

    if let Some(rule) = classifier.patterns().iter().find(|r| r.name == name) {
        if rule.matches(body, sender) {
            println!("✅ MATCH");
            println!("Weight: {:?} ({:+})", rule.weight, rule.weight.score());
        } else {
            println!("❌ NO MATCH");
        }
    } else {
        println!("Pattern not found: {}", name);
        println!("\nAvailable patterns:");
        for rule in classifier.patterns() {
            println!("  - {}", rule.name);
        }
    }

    Ok(())
}
