//! Run one generate-slide request and print the response JSON.
//!
//! Usage: cargo run --bin generate_slide [-- [--out FILE] PROMPT...]
//!
//! Uses `EVENTDECK_GENERATE_URL` when set, otherwise the in-process
//! template generator. With `--out`, the JSON is written to FILE instead
//! of stdout.

use anyhow::Context;
use eventdeck::config::Config;
use eventdeck::error::Error;
use eventdeck::generator::{self, GenerateRequest, GenerateResponse, SlideGenerator};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut out: Option<PathBuf> = None;
    let mut words = Vec::new();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--out" {
            out = Some(args.next().map(PathBuf::from).context("--out needs a file path")?);
        } else {
            words.push(arg);
        }
    }
    let request = GenerateRequest::new(words.join(" "));
    let prompt = request.prompt.as_deref().unwrap_or_default();

    let config = Config::load().context("Failed to load config")?;
    let generator = generator::from_config(&config);

    let slide = generator
        .generate(prompt)
        .await
        .with_context(|| format!("{} generator failed", generator.name()))?;

    let json = serde_json::to_string_pretty(&GenerateResponse { slide })?;
    match out {
        Some(path) => {
            std::fs::write(&path, json).map_err(|e| Error::io(e, path.clone()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
