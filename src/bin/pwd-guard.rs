//! Terminal demo: every line read from stdin is one "password changed" event.

use std::time::Duration;

use clap::Parser;
use pwd_guard::{
    breach_message, criterion_hint, strength_label, BreachChecker, BreachStatus, CheckerConfig,
    Language, PasswordSession, RenderSink, SessionOptions, StrengthEvaluation, MAX_SCORE,
};
use secrecy::SecretString;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "pwd-guard", version, about = "Score passwords and look them up in known breaches")]
struct Cli {
    /// Feedback language (en, jp)
    #[arg(long, default_value = "en", value_parser = parse_language)]
    lang: Language,

    /// Range API endpoint, overrides PWD_RANGE_API_URL
    #[arg(long)]
    api_url: Option<String>,

    /// Request timeout in milliseconds, overrides PWD_RANGE_TIMEOUT_MS
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Wait this many milliseconds after the last input before querying
    #[arg(long, default_value_t = 0)]
    debounce_ms: u64,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_language(code: &str) -> Result<Language, String> {
    Language::from_code(code).ok_or_else(|| format!("unsupported language: {code}"))
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pwd_guard=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pwd_guard=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

struct TerminalSink {
    language: Language,
}

impl RenderSink for TerminalSink {
    fn render_strength(&mut self, evaluation: &StrengthEvaluation) {
        let filled = usize::from(evaluation.score.value());
        let bar = format!(
            "{}{}",
            "■".repeat(filled),
            "□".repeat(usize::from(MAX_SCORE) - filled)
        );
        println!(
            "{bar} {:>3}% {} ({})",
            evaluation.score.percent(),
            strength_label(evaluation.strength(), self.language),
            evaluation.color()
        );
        for criterion in &evaluation.missing {
            println!("  - {}", criterion_hint(*criterion, self.language));
        }
    }

    fn render_breach(&mut self, status: Option<&BreachStatus>) {
        if let Some(status) = status {
            println!("{}", breach_message(status, self.language));
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let mut config = CheckerConfig::from_env()?;
    if let Some(url) = cli.api_url {
        config = config.with_api_url(url)?;
    }
    if let Some(ms) = cli.timeout_ms {
        config = config.with_timeout(Duration::from_millis(ms));
    }
    tracing::debug!(api_url = %config.api_url, timeout = ?config.timeout, "using range service");

    let checker = BreachChecker::from_config(&config)?;
    let options = SessionOptions {
        debounce: Duration::from_millis(cli.debounce_ms),
    };
    let mut session = PasswordSession::with_options(
        checker,
        TerminalSink {
            language: cli.lang,
        },
        options,
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line? {
                    Some(line) => {
                        session.on_input(SecretString::new(line.into()));
                    }
                    None => break,
                }
            }
            _ = session.next_update(), if session.is_pending() => {}
        }
    }

    if session.is_pending() {
        session.next_update().await;
    }

    Ok(())
}
