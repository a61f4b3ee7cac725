use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;

use nebula::catalog::{
    language_for_path, DEFAULT_REVIEW_LANGUAGE, SUPPORTED_LANGUAGES, SUPPORTED_REVIEW_LANGUAGES,
};
use nebula::config::{setup_api_key_interactive, Config};
use nebula::i18n::{text, Text, UiLanguage};
use nebula::llm::{review_code, GeminiClient};
use nebula::render::render_review;

#[derive(Parser, Debug)]
#[command(
    name = "nebula",
    about = "AI-powered code review from your terminal",
    version
)]
struct Args {
    /// File to review ("-" or omitted reads from stdin)
    file: Option<PathBuf>,

    /// Programming language of the code (guessed from the file extension if omitted)
    #[arg(short, long)]
    language: Option<String>,

    /// Language the review feedback is written in
    #[arg(short = 'r', long, default_value = DEFAULT_REVIEW_LANGUAGE)]
    review_language: String,

    /// Language of nebula's own messages (en, ru)
    #[arg(long, default_value = "en")]
    ui_language: String,

    /// Print the raw structured review as JSON instead of rendered text
    #[arg(long)]
    json: bool,

    /// List supported programming and review languages and exit
    #[arg(long)]
    list_languages: bool,

    /// Configure the Gemini API key interactively
    #[arg(long)]
    setup: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.setup {
        setup_api_key_interactive().map_err(|e| anyhow::anyhow!(e))?;
        return Ok(());
    }

    if args.list_languages {
        print_languages();
        return Ok(());
    }

    let ui = UiLanguage::from_code(&args.ui_language).unwrap_or_default();

    let code = read_code(args.file.as_deref())?;
    let language = args.language.clone().unwrap_or_else(|| {
        args.file
            .as_deref()
            .map(|p| language_for_path(p).to_string())
            .unwrap_or_else(|| "other".to_string())
    });

    let config = Config::load();
    let client = GeminiClient::new(&config);

    eprintln!("  {}", text(ui, Text::Analyzing));
    eprintln!("  {}", text(ui, Text::MightTake));

    match review_code(&client, &code, &language, &args.review_language).await {
        Ok(review) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&review)?);
            } else {
                println!("{}", render_review(&review, ui));
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("{}: {}", text(ui, Text::Error), err);
            std::process::exit(1);
        }
    }
}

fn read_code(file: Option<&std::path::Path>) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut code = String::new();
            std::io::stdin()
                .read_to_string(&mut code)
                .context("Failed to read code from stdin")?;
            Ok(code)
        }
    }
}

fn print_languages() {
    println!("Programming languages:");
    for lang in SUPPORTED_LANGUAGES {
        println!("  {:<12} {}", lang.code, lang.label);
    }
    println!();
    println!("Review languages:");
    for lang in SUPPORTED_REVIEW_LANGUAGES {
        println!("  {:<12} {}", lang.code, lang.label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_language_defaults_to_catalog_default() {
        let args = Args::try_parse_from(["nebula"]).unwrap();
        assert_eq!(args.review_language, DEFAULT_REVIEW_LANGUAGE);
    }
}
