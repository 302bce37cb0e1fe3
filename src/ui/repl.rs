//! Line-oriented interactive loop.
//!
//! Reads one line at a time, dispatches slash commands, and runs chat turns
//! to completion before reading the next line.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::commands::{process_input, CommandResult};
use crate::core::chat::ChatSession;
use crate::core::message::Message;
use crate::ui::render::{render_header, render_message};

const PROMPT: &str = "> ";
const THINKING: &str = "Thinking...";

pub async fn run_repl<R, W>(
    chat: &mut ChatSession,
    input: R,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "{}\n", render_header(&chat.view()))?;

    let mut lines = input.lines();
    let mut awaiting_credential = false;

    loop {
        if awaiting_credential {
            write!(out, "API key: ")?;
        } else {
            write!(out, "{PROMPT}")?;
        }
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        if awaiting_credential {
            awaiting_credential = false;
            chat.set_credential(line);
            if chat.view().has_credential {
                writeln!(out, "✅ API key set for this session.")?;
            } else {
                writeln!(out, "⚠️  API key cleared.")?;
            }
            continue;
        }

        match process_input(chat, &line) {
            CommandResult::Handled(text) => writeln!(out, "{text}")?,
            CommandResult::ReadCredential => awaiting_credential = true,
            CommandResult::Quit => break,
            CommandResult::ProcessAsMessage(text) => {
                if text.trim().is_empty() {
                    continue;
                }
                run_turn(chat, &text, out).await?;
            }
        }
    }

    Ok(())
}

async fn run_turn<W: Write>(
    chat: &mut ChatSession,
    text: &str,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    write!(out, "{THINKING}")?;
    out.flush()?;
    let result = chat.submit(text).await;
    // erase the transient indicator
    write!(out, "\r{}\r", " ".repeat(THINKING.len()))?;

    match result {
        Ok(reply) => {
            let personality = chat.view().personality;
            writeln!(
                out,
                "{}\n",
                render_message(&Message::assistant(reply.text()), personality)
            )?;
        }
        Err(err) => writeln!(out, "❌ {err}")?,
    }
    Ok(())
}
