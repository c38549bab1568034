//! DashGuard - Scam Message Protection CLI
//!
//! Classifies text messages into risk tiers (high, suspicious, safe)
//! with a rule-based scorer, keeps a local scan log, and tracks
//! community scam reports.

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod cli;

/// DashGuard - Your Protection Against Scams
#[derive(Parser)]
#[command(name = "dashguard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a single message
    Scan {
        /// Message body
        body: String,

        /// Sender identifier (phone number or sender name)
        #[arg(short, long, default_value = "")]
        sender: String,

        /// Save the result to the scan log
        #[arg(long)]
        save: bool,
    },

    /// View recent scanned messages
    Logs {
        /// Number of recent entries to show
        #[arg(short, long, default_value = "20")]
        tail: usize,

        /// Filter by risk tier (high, suspicious, safe)
        #[arg(short, long)]
        risk: Option<String>,

        /// Prune entries older than the configured retention first
        #[arg(long)]
        cleanup: bool,
    },

    /// Community scam reports
    Report {
        #[command(subcommand)]
        action: ReportAction,
    },

    /// Show protection summary
    Status,

    /// Manage the pattern table
    Patterns {
        #[command(subcommand)]
        action: PatternsAction,
    },
}

#[derive(Subcommand)]
enum ReportAction {
    /// Submit a new scam report
    Submit {
        /// Report category: sms or call
        #[arg(short, long, default_value = "sms")]
        category: String,

        /// What happened
        description: String,

        /// Offending phone number or sender name
        #[arg(short, long)]
        number: String,

        /// Severity label (normally assigned by moderation)
        #[arg(long)]
        severity: Option<String>,
    },
    /// List recent reports
    List {
        /// Number of recent entries to show
        #[arg(short, long, default_value = "20")]
        tail: usize,
    },
}

#[derive(Subcommand)]
enum PatternsAction {
    /// List all patterns
    List,
    /// Test a pattern against sample input
    Test {
        /// Pattern name to test
        name: String,
        /// Sample message body
        body: String,
        /// Sample sender
        #[arg(short, long, default_value = "")]
        sender: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Scan { body, sender, save } => {
            cli::scan::run(&body, &sender, save).await?;
        }
        Commands::Logs { tail, risk, cleanup } => {
            cli::logs::run(tail, risk, cleanup).await?;
        }
        Commands::Report { action } => match action {
            ReportAction::Submit {
                category,
                description,
                number,
                severity,
            } => {
                cli::report::submit(&category, &description, &number, severity.as_deref()).await?;
            }
            ReportAction::List { tail } => {
                cli::report::list(tail).await?;
            }
        },
        Commands::Status => {
            cli::status::run().await?;
        }
        Commands::Patterns { action } => match action {
            PatternsAction::List => cli::patterns::list().await?,
            PatternsAction::Test { name, body, sender } => {
                cli::patterns::test(&name, &body, &sender).await?;
            }
        },
    }

    Ok(())
}
