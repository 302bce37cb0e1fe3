//! Slash commands available inside an interactive session.

mod registry;

pub use registry::{all_commands, CommandInvocation};

use crate::core::catalog::{CatalogEntry, ModelRef, Personality};
use crate::core::chat::ChatSession;
use crate::ui::render::render_transcript;

#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    /// The command ran; show this text to the user.
    Handled(String),
    /// Not a command; submit the input as a chat message.
    ProcessAsMessage(String),
    /// Read the next input line as the session's API key.
    ReadCredential,
    Quit,
}

pub fn process_input(chat: &mut ChatSession, input: &str) -> CommandResult {
    let trimmed = input.trim();

    let Some(rest) = trimmed.strip_prefix('/') else {
        return CommandResult::ProcessAsMessage(input.to_string());
    };

    let mut parts = rest.splitn(2, char::is_whitespace);
    let command_name = match parts.next() {
        Some(name) if !name.is_empty() => name,
        _ => return CommandResult::ProcessAsMessage(input.to_string()),
    };
    let args = parts.next().unwrap_or("").trim();

    match registry::find_command(command_name) {
        Some(command) => {
            (command.handler)(chat, CommandInvocation { args })
        }
        None => CommandResult::Handled(format!(
            "Unknown command: /{command_name}. Type /help for a list of commands."
        )),
    }
}

/// Catalog listing with the current entry marked.
pub fn format_catalog<T: CatalogEntry + PartialEq>(
    current: Option<T>,
    detail: impl Fn(T) -> String,
) -> String {
    T::all()
        .iter()
        .map(|&entry| {
            let marker = if Some(entry) == current { "*" } else { " " };
            format!("{marker} {} - {}", entry.display_name(), detail(entry))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn model_detail(model: ModelRef) -> String {
    format!("{} ({})", model.blurb(), model.provider_id())
}

pub fn personality_detail(personality: Personality) -> String {
    personality.description().to_string()
}

pub(super) fn handle_help(
    _chat: &mut ChatSession,
    _invocation: CommandInvocation<'_>,
) -> CommandResult {
    let width = all_commands()
        .iter()
        .map(|command| command.usage.len())
        .max()
        .unwrap_or(0);
    let lines: Vec<String> = all_commands()
        .iter()
        .map(|command| format!("  {:<width$}  {}", command.usage, command.help))
        .collect();
    CommandResult::Handled(format!("Commands:\n{}", lines.join("\n")))
}

pub(super) fn handle_model(
    chat: &mut ChatSession,
    invocation: CommandInvocation<'_>,
) -> CommandResult {
    if invocation.args.is_empty() {
        let current = chat.view().model;
        return CommandResult::Handled(format!(
            "Models:\n{}",
            format_catalog(Some(current), model_detail)
        ));
    }
    match chat.select_model(invocation.args) {
        Ok(model) => CommandResult::Handled(format!("Model set to {model}")),
        Err(err) => CommandResult::Handled(err.to_string()),
    }
}

pub(super) fn handle_personality(
    chat: &mut ChatSession,
    invocation: CommandInvocation<'_>,
) -> CommandResult {
    if invocation.args.is_empty() {
        let current = chat.view().personality;
        return CommandResult::Handled(format!(
            "Personalities:\n{}",
            format_catalog(Some(current), personality_detail)
        ));
    }
    match chat.select_personality(invocation.args) {
        Ok(personality) => CommandResult::Handled(format!(
            "Now chatting with the {personality}: {}",
            personality.description()
        )),
        Err(err) => CommandResult::Handled(err.to_string()),
    }
}

pub(super) fn handle_clear(
    chat: &mut ChatSession,
    _invocation: CommandInvocation<'_>,
) -> CommandResult {
    chat.clear();
    CommandResult::Handled("Conversation cleared.".to_string())
}

pub(super) fn handle_history(
    chat: &mut ChatSession,
    _invocation: CommandInvocation<'_>,
) -> CommandResult {
    let view = chat.view();
    if view.messages.is_empty() {
        return CommandResult::Handled("No messages yet.".to_string());
    }
    CommandResult::Handled(render_transcript(&view))
}

pub(super) fn handle_key(
    chat: &mut ChatSession,
    invocation: CommandInvocation<'_>,
) -> CommandResult {
    if invocation.args.is_empty() {
        return CommandResult::ReadCredential;
    }
    chat.set_credential(invocation.args);
    CommandResult::Handled("API key set for this session.".to_string())
}

pub(super) fn handle_quit(
    _chat: &mut ChatSession,
    _invocation: CommandInvocation<'_>,
) -> CommandResult {
    CommandResult::Quit
}
