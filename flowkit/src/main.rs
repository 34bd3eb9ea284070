//! Flow meta-language toolkit CLI.
//!
//! Renders flow fragments into paradigm-specific syntax, strips foreign
//! structure back down to flow, and reduces nested JSON documents through
//! the fixed 50-round pipeline.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::Value;

use flowkit::catalog::{DOMAINS, KNOWLEDGE, LANGS, SOURCES, VULGA};
use flowkit::core::paradigm::{Paradigm, render, to_flow};
use flowkit::core::pipeline::reduce;
use flowkit::core::shrink::simplify;
use flowkit::io::config::{DemoConfig, load_config};
use flowkit::io::input::read_value;
use flowkit::seed::seed_document;

#[derive(Parser)]
#[command(
    name = "flowkit",
    version,
    about = "Deterministic flow meta-language toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a flow fragment into a paradigm's surface syntax.
    Render {
        /// Target paradigm; unknown names get the comment-wrapped fallback.
        #[arg(short, long)]
        paradigm: String,
        code: String,
    },
    /// Strip structure characters (`;`, `{`, `}`) from paradigm code.
    Strip {
        /// Source paradigm; informational only, the result is the same for all.
        #[arg(short, long, default_value = "flow")]
        paradigm: String,
        code: String,
    },
    /// Reduce a JSON document: 50 shrink/prune rounds plus a final shrink.
    Reduce {
        /// Input JSON file; defaults to the built-in seed document.
        input: Option<PathBuf>,
        /// Pretty-print the reduced value.
        #[arg(long)]
        pretty: bool,
    },
    /// Render the demo fragment across the configured paradigms.
    Demo {
        /// TOML config file; defaults apply when omitted.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Translate a jargon term to plain language (catalog hit or φ-truncation).
    Vulga { text: String },
    /// Print the language catalog as a numbered list.
    Langs,
    /// Print reference sources and knowledge summaries.
    Sources,
}

fn main() {
    flowkit::logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Render { paradigm, code } => {
            println!("{}", render(&code, &paradigm));
            Ok(())
        }
        Command::Strip { paradigm, code } => {
            println!("{}", to_flow(&code, &Paradigm::from(paradigm.as_str())));
            Ok(())
        }
        Command::Reduce { input, pretty } => cmd_reduce(input, pretty),
        Command::Demo { config } => cmd_demo(config),
        Command::Vulga { text } => {
            println!("{}", vulgarize(&text));
            Ok(())
        }
        Command::Langs => {
            cmd_langs();
            Ok(())
        }
        Command::Sources => {
            cmd_sources();
            Ok(())
        }
    }
}

fn cmd_reduce(input: Option<PathBuf>, pretty: bool) -> Result<()> {
    let value = match input {
        Some(path) => read_value(&path)?,
        None => seed_document(),
    };
    let reduced = reduce(value);
    println!("{}", serialize(&reduced, pretty)?);
    Ok(())
}

fn cmd_demo(config: Option<PathBuf>) -> Result<()> {
    let cfg = match config {
        Some(path) => load_config(&path)?,
        None => DemoConfig::default(),
    };
    println!("flow: {}", cfg.code);
    for name in &cfg.paradigms {
        println!("  → {}: {}", name, render(&cfg.code, name));
    }
    Ok(())
}

/// Catalog hit wins; otherwise keep the φ ratio of the words.
fn vulgarize(text: &str) -> String {
    VULGA
        .iter()
        .find(|(term, _)| *term == text)
        .map(|(_, plain)| (*plain).to_string())
        .unwrap_or_else(|| simplify(text))
}

fn cmd_langs() {
    println!("langs: {}", LANGS.len());
    for (i, lang) in LANGS.iter().enumerate() {
        println!("{:2}. {lang}", i + 1);
    }
}

fn cmd_sources() {
    println!("sources: {}", SOURCES.len());
    println!("domains: {}", DOMAINS.len());
    println!("knowledge points: {}", KNOWLEDGE.len());
    for (name, summary) in KNOWLEDGE {
        let short: String = summary.chars().take(50).collect();
        println!("  {name}: {short}...");
    }
}

/// Serialize `value` to JSON, compact by default.
fn serialize(value: &Value, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}
