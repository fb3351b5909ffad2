use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use focus_sentence::{project, Document, FocusSettings, HighlightRole};

#[derive(Parser, Debug)]
#[command(name = "focus-sentence")]
#[command(about = "Highlight the sentence under the cursor and dim the rest of its line")]
#[command(version)]
struct Args {
    /// JSON settings file (defaults are used when missing)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Read the document from a file
    #[arg(long, conflicts_with = "text", required_unless_present_any = ["text", "write_default_settings"])]
    file: Option<PathBuf>,

    /// Use the given string as the document
    #[arg(long)]
    text: Option<String>,

    /// Absolute cursor offset in characters
    #[arg(long, default_value_t = 0)]
    cursor: usize,

    /// Print spans as JSON
    #[arg(long)]
    json: bool,

    /// Write default settings to this path and exit
    #[arg(long)]
    write_default_settings: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: logs go to stderr so span output on stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    if let Some(path) = &args.write_default_settings {
        FocusSettings::default().save(path).await?;
        println!("Wrote default settings to {}", path.display());
        return Ok(());
    }

    let settings = match &args.settings {
        Some(path) => FocusSettings::load(path).await,
        None => FocusSettings::default(),
    };
    let config = settings.to_config();

    let text = match (&args.file, &args.text) {
        (Some(path), _) => {
            if !path.is_file() {
                anyhow::bail!("Document is not a readable file: {}", path.display());
            }
            tokio::fs::read_to_string(path).await?
        }
        (None, Some(text)) => text.clone(),
        (None, None) => anyhow::bail!("Either --file or --text is required"),
    };

    let doc = Document::new(text);
    let line = doc.line_at(args.cursor)?;
    let spans = project(&line, args.cursor, &config);

    info!("Projected {} spans for cursor {} on line starting at {}", spans.len(), args.cursor, line.start);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&spans)?);
    } else {
        for span in &spans {
            println!(
                "{}\t{}\t{}\t{}",
                span.from,
                span.to,
                span.role.class_name(),
                line.text_between(span.from, span.to)
            );
        }

        if let Some(sentence) = spans.iter().find(|span| span.role == HighlightRole::ActiveSentence) {
            info!(from = sentence.from, to = sentence.to, "Active sentence");
        }
    }

    Ok(())
}
