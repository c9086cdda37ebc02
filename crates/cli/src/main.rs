//! Interactive console front-end.
//!
//! Prompts for birth details on stdin, runs the same insight pipeline
//! as the HTTP API, and prints either a formatted text block or JSON.
//! Invalid input prints an error to stderr and exits non-zero.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context};
use chrono::NaiveDate;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use starlore_core::{BirthDetails, InsightCache, InsightResponse, Language, Sign};
use starlore_llm::{daily_insight, InsightGenerator, OpenAiClient};

/// Output mode selected at the last prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn parse_or_default(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "starlore_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(err) = run().await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    println!("{}", "=".repeat(60));
    println!("Starlore - Daily Astrological Insights");
    println!("{}", "=".repeat(60));
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let name = prompt(&mut lines, "Enter your name: ")?;
    if name.trim().is_empty() {
        bail!("Name cannot be empty");
    }

    let birth_date_str = prompt(&mut lines, "Enter your birth date (YYYY-MM-DD): ")?;
    let birth_date = NaiveDate::parse_from_str(birth_date_str.trim(), "%Y-%m-%d")
        .context("Invalid date format. Use YYYY-MM-DD")?;

    let birth_place = {
        let value = prompt(&mut lines, "Enter your birth place (optional): ")?;
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_string())
    };

    let language_str = prompt(&mut lines, "Choose language (en/hi) [default: en]: ")?;
    let language = Language::parse_or_default(&language_str);

    let format_str = prompt(&mut lines, "Output format (text/json) [default: text]: ")?;
    let format = OutputFormat::parse_or_default(&format_str);

    println!();
    println!("Generating your personalized insight...");
    println!();

    // Rejects empty names and future dates.
    let details = BirthDetails::new(&name, birth_date, None, birth_place)?;
    let sign = Sign::from_date(details.birth_date);
    tracing::debug!(sign = %sign, language = %language, "Computed zodiac sign");

    // One cache and generator per invocation, wired from the same env
    // vars the server reads.
    let enable_caching = std::env::var("ENABLE_CACHING")
        .map(|v| v.to_lowercase() == "true")
        .unwrap_or(true);
    let cache = InsightCache::new(enable_caching);

    let api_key = std::env::var("OPENAI_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty());
    if api_key.is_none() {
        println!(
            "Note: OpenAI API key not found. Using rule-based insights.\n\
             Set OPENAI_API_KEY environment variable for AI-generated insights.\n"
        );
    }
    let generator = InsightGenerator::new(api_key.map(OpenAiClient::new));

    let insight = daily_insight(&cache, &generator, &details.name, sign, language).await;
    let response = InsightResponse::new(sign, insight, language);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
        OutputFormat::Text => print!("{}", format_text_report(&details.name, sign, &response)),
    }

    Ok(())
}

/// Print a prompt label and read one line. EOF is an error: the
/// interactive session cannot continue without input.
fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, label: &str) -> anyhow::Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    match lines.next() {
        Some(line) => Ok(line?),
        None => bail!("Unexpected end of input"),
    }
}

/// Render the text-mode report block.
fn format_text_report(name: &str, sign: Sign, response: &InsightResponse) -> String {
    let info = sign.info();
    let rule = "=".repeat(60);
    let key_traits = info.traits[..3].join(", ");

    format!(
        "{rule}\n\
         Name: {name}\n\
         Zodiac Sign: {zodiac} ({element})\n\
         Ruling Planet: {planet}\n\
         Key Traits: {key_traits}\n\
         {rule}\n\
         \n\
         Your Daily Insight\n\
         \n\
         {insight}\n\
         \n\
         {rule}\n",
        zodiac = response.zodiac,
        element = info.element,
        planet = info.ruling_planet,
        insight = response.insight,
    )
}
