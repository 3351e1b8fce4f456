use std::io::{IsTerminal, Read};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use machbar_classifier::{Classifier, SAMPLE_REQUESTS, analyze, samples};
use machbar_core::{MachbarError, Result};

use super::render;

/// How `machbar analyze` prints its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum OutputMode {
    Pretty,
    Json,
    ReplyOnly,
}

impl OutputMode {
    /// Flags win over the configured default format.
    pub(super) fn pick(json: bool, reply_only: bool, configured: &str) -> Self {
        if reply_only {
            OutputMode::ReplyOnly
        } else if json || configured == "json" {
            OutputMode::Json
        } else {
            OutputMode::Pretty
        }
    }
}

/// Request text from a canned example, the argument words, or stdin.
pub(super) fn resolve_input(text: Vec<String>, example: Option<usize>) -> Result<String> {
    if let Some(n) = example {
        return samples::sample(n)
            .map(str::to_string)
            .ok_or(MachbarError::ExampleNotFound {
                index: n,
                available: SAMPLE_REQUESTS.len(),
            });
    }
    if text.is_empty() || (text.len() == 1 && text[0] == "-") {
        return read_stdin();
    }
    Ok(text.join(" "))
}

fn read_stdin() -> Result<String> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprintln!("Nachricht des Kunden einfügen, mit Ctrl-D abschließen:");
    }
    let mut buf = String::new();
    stdin.read_to_string(&mut buf)?;
    Ok(buf)
}

pub(super) async fn cmd_analyze(
    classifier: &Classifier,
    input: &str,
    output: OutputMode,
    delay_ms: u64,
) -> Result<()> {
    // Reject before making the user wait.
    let assessment = analyze(classifier, input)?;
    debug!(verdict = %assessment.verdict, "request analyzed");

    if delay_ms > 0 && std::io::stdout().is_terminal() {
        simulate_processing(delay_ms).await;
    }

    match output {
        OutputMode::Pretty => print!("{}", render::assessment(&assessment)),
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&assessment)?),
        OutputMode::ReplyOnly => println!("{}", assessment.reply_draft),
    }
    Ok(())
}

/// Spinner shown while the result is held back.
async fn simulate_processing(delay_ms: u64) {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.yellow} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message("Analysiere Anfrage…");
    pb.enable_steady_tick(Duration::from_millis(80));
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    pb.finish_and_clear();
}

pub(super) fn cmd_examples(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(SAMPLE_REQUESTS)?);
        return Ok(());
    }
    println!("{}", render::examples(SAMPLE_REQUESTS));
    Ok(())
}
