//! Plain-text rendering of session data.

use crate::core::catalog::{CatalogEntry, Personality};
use crate::core::chat::SessionView;
use crate::core::message::{Message, Role};

pub fn speaker_label(role: Role, personality: Personality) -> &'static str {
    match role {
        Role::User => "You",
        Role::Assistant => personality.display_name(),
        Role::System => "System",
    }
}

pub fn render_message(message: &Message, personality: Personality) -> String {
    format!(
        "{}: {}",
        speaker_label(message.role, personality),
        message.content
    )
}

pub fn render_header(view: &SessionView<'_>) -> String {
    let mut lines = vec![
        "🤖 Personality Chatbot".to_string(),
        format!(
            "Chatting with: {} ({})",
            view.personality, view.personality_description
        ),
        format!("Model: {} [{}]", view.model, view.model.provider_id()),
        "Type /help for commands, /quit to leave.".to_string(),
    ];
    if !view.has_credential {
        lines.push(
            "⚠️  Please enter your Groq API key with /key to start chatting".to_string(),
        );
    }
    lines.join("\n")
}

/// Stored history for `/history`.
///
/// Messages do not record which personality answered them, so stored
/// assistant turns carry a neutral label rather than the current selection.
pub fn render_transcript(view: &SessionView<'_>) -> String {
    view.messages
        .iter()
        .map(|message| {
            let label = match message.role {
                Role::Assistant => "Assistant",
                role => speaker_label(role, view.personality),
            };
            format!("{label}: {}", message.content)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
