//! Terminal chat REPL.

use std::borrow::Cow::{self, Borrowed, Owned};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tokio::sync::mpsc;

use rsvp_application::{RsvpSession, SessionHandle, SessionOptions, build_engine};
use rsvp_core::Locale;
use rsvp_core::catalog::keys;
use rsvp_core::session::{EntryPoint, MessageRole, OutboundMessage};

use super::load_config;

const TRANSCRIPT_COMMAND: &str = "/transcript";

/// Completes REPL slash commands.
#[derive(Clone)]
struct ChatHelper {
    commands: Vec<String>,
}

impl ChatHelper {
    fn new() -> Self {
        Self {
            commands: vec![TRANSCRIPT_COMMAND.to_string()],
        }
    }
}

impl Helper for ChatHelper {}

impl Completer for ChatHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if !line.starts_with('/') {
            return Ok((0, Vec::new()));
        }

        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Hinter for ChatHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() || !line.starts_with('/') {
            return None;
        }
        self.commands
            .iter()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Highlighter for ChatHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.bright_black().to_string())
    }

    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.cyan().to_string())
        } else {
            Borrowed(line)
        }
    }
}

impl Validator for ChatHelper {}

pub async fn run(config_path: Option<PathBuf>, locale: Option<Locale>, rsvp: bool) -> Result<()> {
    let config = load_config(config_path)?;
    let engine = Arc::new(build_engine(&config)?);

    let entry = if rsvp {
        EntryPoint::authorized()
    } else {
        EntryPoint::unauthorized()
    };
    let options = SessionOptions {
        locale: locale.or(config.default_locale),
        entry,
    };

    println!("{}", "=== RSVP Chat ===".bright_magenta().bold());
    println!(
        "{}",
        format!("Type '{}' to see the conversation so far, or 'quit' to exit.", TRANSCRIPT_COMMAND)
            .bright_black()
    );
    println!();

    let (handle, outbound) = RsvpSession::spawn(engine, options);
    let printer = tokio::spawn(print_messages(outbound));

    let mut rl = Editor::new()?;
    rl.set_helper(Some(ChatHelper::new()));

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                if trimmed == TRANSCRIPT_COMMAND {
                    print_transcript(&handle).await;
                    continue;
                }

                if let Err(e) = handle.send(trimmed).await {
                    eprintln!("{}", format!("Error: {}", e).red());
                    break;
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    let summary = handle.close().await?;
    let _ = printer.await;

    if let Some(state) = summary.state {
        tracing::debug!(
            session_id = %state.id,
            phase = %state.phase,
            names = state.collected_names.len(),
            "chat finished"
        );
    }
    Ok(())
}

async fn print_messages(mut outbound: mpsc::Receiver<OutboundMessage>) {
    while let Some(message) = outbound.recv().await {
        for line in message.plain_text().lines() {
            println!("{}", line.bright_blue());
        }
        println!();

        if ends_conversation(&message.key) {
            println!(
                "{}",
                "The conversation has ended. Type 'quit' to exit.".bright_black()
            );
        }
    }
}

fn ends_conversation(key: &str) -> bool {
    matches!(key, keys::RSVP_SAVED | keys::NO_RSVP | keys::IDLE_TIMEOUT)
}

async fn print_transcript(handle: &SessionHandle) {
    let transcript = match handle.transcript().await {
        Ok(transcript) => transcript,
        Err(e) => {
            eprintln!("{}", format!("Error: {}", e).red());
            return;
        }
    };

    println!("{}", "--- transcript ---".bright_black());
    for entry in transcript {
        let time = entry.timestamp.format("%H:%M:%S").to_string();
        let content = entry
            .content
            .replace("<br>", "\n")
            .replace("<br/>", "\n")
            .replace("<br />", "\n");
        match entry.role {
            MessageRole::User => println!("{} {}", time.bright_black(), content.green()),
            MessageRole::Bot => println!("{} {}", time.bright_black(), content.bright_blue()),
        }
    }
    println!("{}", "------------------".bright_black());
}
