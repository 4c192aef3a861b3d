// Psicolobo: console chatbot that detects a dominant emotion in free text
// by fuzzy-matching tokens against a small CSV lexicon, with an intent
// engine seam for scripted replies.
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use termcolor::{ColorChoice, StandardStream};

mod chat;
mod nlp;

use chat::{run_chat, BotContext};
use nlp::{detect_emotion, Lexicon, UntrainedEngine};

#[derive(Parser)]
#[command(name = "psicolobo", about = "Lexicon-based emotion detection chatbot (console MVP)")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive chat on stdin/stdout
    Chat {
        #[arg(short, long, default_value = "base_conocimientos.csv")]
        lexicon: PathBuf,
    },
    /// One-shot emotion detection for a piece of text
    Detect {
        #[arg(short, long, default_value = "base_conocimientos.csv")]
        lexicon: PathBuf,
        /// Print the full detection (matches and tally) as JSON
        #[arg(long)]
        json: bool,
        text: String,
    },
}

// An unreadable lexicon degrades to an empty one; the bot keeps running
// and simply never detects anything.
fn load_or_empty(path: &Path) -> Lexicon {
    println!("Cargando base de conocimientos...");
    match Lexicon::load(path) {
        Ok(lexicon) => {
            println!("-> ¡Carga exitosa! Se cargaron {} términos.", lexicon.len());
            lexicon
        }
        Err(e) => {
            eprintln!("ERROR al cargar la base de conocimientos: {}", e);
            Lexicon::default()
        }
    }
}

fn run_chat_command(lexicon_path: &Path) -> Result<()> {
    let ctx = BotContext {
        lexicon: load_or_empty(lexicon_path),
        engine: Box::new(UntrainedEngine),
    };
    let stdin = std::io::stdin();
    let stdout = StandardStream::stdout(ColorChoice::Auto);
    run_chat(stdin.lock(), stdout, &ctx)
}

fn run_detect_command(lexicon_path: &Path, text: &str, json: bool) -> Result<()> {
    let lexicon = load_or_empty(lexicon_path);
    let detection = detect_emotion(text, &lexicon);
    if json {
        println!("{}", serde_json::to_string_pretty(&detection)?);
    } else {
        match detection.dominant {
            Some(dom) => println!("{} (Conteo: {})", dom.emotion, dom.count),
            None => println!("NO_DETECTADA"),
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Chat { lexicon } => run_chat_command(&lexicon)?,
        Commands::Detect {
            lexicon,
            json,
            text,
        } => run_detect_command(&lexicon, &text, json)?,
    }
    Ok(())
}
