mod source;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use scamlure_agent::{EngineConfig, FlowOutcome, HoneypotEngine, PacingRange};
use scamlure_classifier::KeywordClassifier;
use scamlure_config::ScamLureConfig;
use scamlure_core::FraudClassifier;
use scamlure_llm::{GroqProvider, MockProvider, ProviderRegistry};
use scamlure_logging::NdjsonInteractionLog;

use source::AttackerSource;

#[derive(Parser)]
#[command(name = "scamlure")]
#[command(about = "scamlure: conversational honeypot for scam engagement")]
#[command(version)]
struct Cli {
    /// Path to the YAML config file.
    #[arg(short, long, global = true, default_value = "scamlure.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a single message without engaging.
    Analyze {
        /// The inbound message text.
        message: String,
    },
    /// Interactive chat: type attacker messages on stdin.
    Chat,
    /// Autonomous run against a mock-attacker HTTP source.
    Run {
        /// Endpoint yielding the next attacker message.
        #[arg(long, default_value = "http://localhost:5000/mock_scammer")]
        source: String,
        /// Stop after this many turns.
        #[arg(long)]
        max_turns: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = scamlure_config::load_or_default(&cli.config)?;
    scamlure_logging::init_logger(&config.logging.dir, &config.logging.level);

    match cli.command {
        Commands::Analyze { message } => {
            let verdict = KeywordClassifier::new().analyze(&message);
            println!("{}", serde_json::to_string_pretty(&verdict)?);
        }
        Commands::Chat => {
            let engine = build_engine(&config)?;
            run_chat(&engine).await?;
        }
        Commands::Run { source, max_turns } => {
            let engine = build_engine(&config)?;
            run_autonomous(&engine, &source, max_turns).await;
        }
    }

    Ok(())
}

/// Wire the engine from config: classifier, provider, interaction log.
/// Fails fast on configuration problems before any engagement starts.
fn build_engine(config: &ScamLureConfig) -> Result<HoneypotEngine> {
    let timeout = Duration::from_secs(config.llm.timeout_secs);

    let mut registry = ProviderRegistry::new();
    registry.register("mock", Arc::new(MockProvider::new("mock")));
    if let Some(api_key) = config.llm.api_key.as_deref().filter(|k| !k.trim().is_empty()) {
        let mut groq = GroqProvider::new(api_key, timeout);
        if let Some(base_url) = &config.llm.base_url {
            groq = groq.with_base_url(base_url);
        }
        registry.register("groq", Arc::new(groq));
    }
    let provider = registry.get(&config.llm.provider)?;
    info!(provider = %config.llm.provider, model = %config.llm.model, "generation provider ready");

    let sink = Arc::new(NdjsonInteractionLog::open(&config.logging.interaction_log)?);

    let pacing = &config.engagement.pacing;
    let engine_config = EngineConfig {
        model: config.llm.model.clone(),
        temperature: config.llm.temperature,
        max_tokens: config.llm.max_tokens,
        gateway_timeout: timeout,
        memory_capacity: config.engagement.memory_capacity,
        memory_window: config.engagement.memory_window,
        pacing: pacing.enabled.then_some(PacingRange {
            min_ms: pacing.min_ms,
            max_ms: pacing.max_ms,
        }),
    };

    Ok(HoneypotEngine::new(
        Arc::new(KeywordClassifier::new()),
        provider,
        sink,
        engine_config,
    ))
}

async fn run_chat(engine: &HoneypotEngine) -> Result<()> {
    println!("scamlure interactive chat. Type attacker messages, empty line to quit.\n");
    let stdin = io::stdin();
    loop {
        print!("scammer> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let message = line.trim();
        if message.is_empty() {
            break;
        }

        let outcome = engine.process("interactive", message).await;
        print_outcome(&outcome);
    }
    Ok(())
}

async fn run_autonomous(engine: &HoneypotEngine, endpoint: &str, max_turns: Option<u64>) {
    info!(endpoint, "starting autonomous scam monitoring");
    let source = AttackerSource::new(endpoint);

    let mut turn = 0u64;
    loop {
        if max_turns.is_some_and(|max| turn >= max) {
            info!(turn, "reached max turns, stopping");
            break;
        }
        let Some(message) = source.next_message().await else {
            break;
        };
        turn += 1;

        println!("Scammer: {message}");
        let outcome = engine.process("mock_scammer", &message).await;
        print_outcome(&outcome);
        println!("{}", "-".repeat(60));
    }
    info!(turns = turn, "autonomous run finished");
}

fn print_outcome(outcome: &FlowOutcome) {
    match &outcome.reply {
        Some(reply) => {
            println!("Honeypot: {reply}");
            if let (Some(stage), Some(style)) = (outcome.stage, outcome.style) {
                println!("[score: {} | style: {style} | stage: {stage}]", outcome.score);
            }
        }
        None => {
            println!(
                "[ignored: not classified as scam, confidence {:.2}]",
                outcome.verdict.confidence
            );
        }
    }
}
