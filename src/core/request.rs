use crate::api::ChatMessage;
use crate::core::message::Message;
use crate::core::session::SessionState;

/// Outbound message list for the next turn: the active personality's system
/// prompt followed by the full stored history, oldest first.
///
/// Nothing is truncated; every turn resends the whole conversation.
pub fn build_request_messages(state: &SessionState) -> Vec<ChatMessage> {
    let system = Message::system(state.selected_personality().system_prompt());
    std::iter::once(&system)
        .chain(state.messages())
        .map(Message::to_api)
        .collect()
}
