//! One-shot "say" command

use std::error::Error;
use std::io::{self, Write};

use crate::core::chat::{ChatSession, TurnError};

pub async fn run_say(chat: ChatSession, prompt: Vec<String>) -> Result<(), Box<dyn Error>> {
    let prompt = prompt.join(" ");
    if prompt.trim().is_empty() {
        eprintln!("Usage: personabot say <prompt>");
        std::process::exit(1);
    }

    let mut stdout = io::stdout();
    if !say_once(chat, &prompt, &mut stdout).await? {
        std::process::exit(1);
    }
    Ok(())
}

/// Runs a single turn and writes the reply.
///
/// Returns `false` when the turn could not produce a reply: a missing
/// credential, or an inference failure (reported on stderr).
pub async fn say_once<W: Write>(
    mut chat: ChatSession,
    prompt: &str,
    out: &mut W,
) -> Result<bool, Box<dyn Error>> {
    match chat.submit(prompt).await {
        Ok(reply) if reply.is_failed() => {
            eprintln!("❌ {}", reply.text());
            Ok(false)
        }
        Ok(reply) => {
            writeln!(out, "{}", reply.text())?;
            out.flush()?;
            Ok(true)
        }
        Err(err @ TurnError::MissingCredential) => {
            eprintln!("❌ {err}");
            Ok(false)
        }
        Err(err) => Err(err.into()),
    }
}
