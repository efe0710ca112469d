//! parler CLI: practice French conjugation from the terminal.
//!
//! Subcommands:
//!   table <pronoun> <infinitive> [--out <file>]   full tense/structure table
//!   challenge                                     random exercise + answer
//!   speak <text...>                               synthesize and play text

use anyhow::{bail, Context, Result};
use parler_core::{
    export, generate_challenge, generate_table, random_challenge_params, GeminiClient, Pronoun,
    VerbInfo,
};
use parler_voice::Speaker;
use std::io::Write as _;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file if present (before any env::var calls)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[parler] .env not loaded: {} (using system environment)", e);
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Failures are surfaced once; the user retries by re-running the command.
    if let Err(e) = run().await {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("table") => cmd_table(&args[1..]).await,
        Some("challenge") => cmd_challenge().await,
        Some("speak") => cmd_speak(&args[1..]).await,
        _ => {
            print_usage();
            Ok(())
        }
    }
}

fn print_usage() {
    println!("usage: parler-cli <command>");
    println!("  table <pronoun> <infinitive> [--out <file>]");
    println!("  challenge");
    println!("  speak <text...>");
    println!();
    println!("pronouns: {}", join(Pronoun::ALL.map(|p| p.label())));
    println!(
        "verbs: {}",
        join(VerbInfo::catalog().iter().map(|v| v.infinitive.clone()))
    );
}

fn join<I: IntoIterator<Item = S>, S: AsRef<str>>(items: I) -> String {
    items
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

async fn cmd_table(args: &[String]) -> Result<()> {
    let [pronoun_arg, verb_arg, rest @ ..] = args else {
        bail!("usage: table <pronoun> <infinitive> [--out <file>]");
    };
    let pronoun = Pronoun::from_label(pronoun_arg)
        .with_context(|| format!("unknown pronoun {pronoun_arg:?}"))?;
    let verb = VerbInfo::by_infinitive(verb_arg)
        .with_context(|| format!("verb {verb_arg:?} is not in the catalog"))?;
    let out = match rest {
        [] => None,
        [flag, path] if flag.as_str() == "--out" => Some(PathBuf::from(path)),
        _ => bail!("unexpected arguments after the verb; use --out <file>"),
    };

    let client = GeminiClient::from_env()?;
    let groups = generate_table(&client, pronoun, &verb).await?;
    if groups.is_empty() {
        println!("(the service returned no sentences; try again)");
        return Ok(());
    }

    print!("{}", export::table_to_text(pronoun, &verb, &groups));
    if let Some(path) = out {
        export::write_table_file(&path, pronoun, &verb, &groups)?;
        println!("saved to {}", path.display());
    }
    Ok(())
}

async fn cmd_challenge() -> Result<()> {
    let (pronoun, verb, tense, structure) = random_challenge_params();
    println!("Your challenge:");
    println!("  Pronoun:   {pronoun}");
    println!("  Verb:      {}", verb.infinitive);
    println!("  Tense:     {tense}");
    println!("  Structure: {structure}");
    println!();
    print!("Write your sentence, then press Enter to reveal the answer... ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;

    let client = GeminiClient::from_env()?;
    let data = generate_challenge(&client, pronoun, &verb, tense, structure).await?;
    println!("Answer:     {}", data.full_sentence);
    println!("Complement: {}", data.complement);
    Ok(())
}

async fn cmd_speak(args: &[String]) -> Result<()> {
    let text = args.join(" ");
    if text.trim().is_empty() {
        bail!("usage: speak <text...>");
    }
    let client = GeminiClient::from_env()?;
    let speaker = Speaker::new()?;
    speaker.speak(&client, &text).await?;
    Ok(())
}
