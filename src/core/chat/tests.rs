use super::*;
use crate::core::message::Role;
use crate::utils::test_utils::{chef_session as session, StubClient};

const BOIL: &str = "Boil for 8 minutes.";
const RESET: &str = "connection reset by peer";

#[tokio::test]
async fn chef_scenario_appends_user_and_assistant_turns() {
    let stub = StubClient::replying(BOIL);
    let mut chat = session(&stub, Some("gsk-test"));

    let reply = chat
        .submit("How do I boil an egg?")
        .await
        .expect("turn should run");
    assert_eq!(reply, Reply::Completed("Boil for 8 minutes.".to_string()));

    assert_eq!(
        chat.state().messages(),
        &[
            Message::user("How do I boil an egg?"),
            Message::assistant("Boil for 8 minutes."),
        ]
    );

    let calls = stub.calls();
    assert_eq!(calls.len(), 1);
    let call = &calls[0];
    let messages = &call.messages;
    assert_eq!(call.model_id, "llama-3.1-8b-instant");
    assert_eq!(call.credential, "gsk-test");
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, "system");
    assert_eq!(messages[0].content, Personality::Chef.system_prompt());
    assert_eq!(messages[1].role, "user");
    assert_eq!(messages[1].content, "How do I boil an egg?");
}

#[tokio::test]
async fn transport_fault_appends_exactly_one_error_turn() {
    let stub = StubClient::failing(RESET);
    let mut chat = session(&stub, Some("gsk-test"));
    chat.state.append_assistant_turn("earlier reply");
    let before = chat.state().messages().len();

    let reply = chat.submit("Hello?").await.expect("turn should still run");
    assert!(reply.is_failed());
    assert!(reply.text().starts_with(ERROR_MARKER));
    assert!(reply.text().contains("connection reset by peer"));

    let messages = chat.state().messages();
    // one user turn plus one assistant turn
    assert_eq!(messages.len(), before + 2);
    let last = messages.last().expect("assistant turn");
    assert_eq!(last.role, Role::Assistant);
    assert!(last.content.starts_with(ERROR_MARKER));
    assert_eq!(
        messages
            .iter()
            .filter(|m| m.is_assistant() && m.content.starts_with(ERROR_MARKER))
            .count(),
        1
    );
}

#[tokio::test]
async fn session_stays_usable_after_failure() {
    let stub = StubClient::failing(RESET);
    let mut chat = session(&stub, Some("gsk-test"));
    chat.submit("first").await.expect("turn should run");
    chat.submit("second").await.expect("turn should run");

    let calls = stub.calls();
    assert_eq!(calls.len(), 2);
    // the failed reply from the first turn is resent as history
    assert_eq!(calls[1].messages.len(), 4);
    assert!(calls[1].messages[2].content.starts_with(ERROR_MARKER));
}

#[tokio::test]
async fn missing_credential_blocks_turn_without_mutation() {
    let stub = StubClient::replying(BOIL);
    let mut chat = session(&stub, None);

    let err = chat.submit("How do I boil an egg?").await.unwrap_err();
    assert_eq!(err, TurnError::MissingCredential);
    assert!(chat.state().messages().is_empty());
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn empty_submission_is_rejected_before_network() {
    let stub = StubClient::replying(BOIL);
    let mut chat = session(&stub, None);

    let err = chat.submit("   ").await.unwrap_err();
    assert_eq!(err, TurnError::Validation(ValidationError::EmptyMessage));
    assert!(chat.state().messages().is_empty());
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn personality_change_applies_to_next_turn_only() {
    let stub = StubClient::replying(BOIL);
    let mut chat = session(&stub, Some("gsk-test"));
    chat.submit("How do I boil an egg?").await.unwrap();
    let history = chat.state().messages().to_vec();

    chat.select_personality("doctor").unwrap();
    assert_eq!(chat.state().messages(), history.as_slice());

    chat.submit("Is that healthy?").await.unwrap();
    let calls = stub.calls();
    assert_eq!(calls[0].messages[0].content, Personality::Chef.system_prompt());
    assert_eq!(calls[1].messages[0].content, Personality::Doctor.system_prompt());
    assert_eq!(calls[1].messages.len(), 4);
}

#[tokio::test]
async fn model_change_routes_next_call() {
    let stub = StubClient::replying(BOIL);
    let mut chat = session(&stub, Some("gsk-test"));
    assert_eq!(
        chat.select_model("Gemma2-9B-It"),
        Ok(ModelRef::Gemma2_9bIt)
    );
    chat.submit("hi").await.unwrap();
    assert_eq!(stub.calls()[0].model_id, "gemma2-9b-it");
}

#[tokio::test]
async fn credential_added_mid_session_unblocks_turns() {
    let stub = StubClient::replying(BOIL);
    let mut chat = session(&stub, None);
    assert!(chat.submit("hi").await.is_err());

    chat.set_credential("gsk-late");
    assert!(chat.view().has_credential);
    chat.submit("hi").await.unwrap();
    assert_eq!(stub.calls()[0].credential, "gsk-late");
}

#[test]
fn view_reports_selection_and_description() {
    let stub = StubClient::replying(BOIL);
    let mut chat = session(&stub, None);
    chat.clear();
    let view = chat.view();
    assert!(view.messages.is_empty());
    assert_eq!(view.personality, Personality::Chef);
    assert_eq!(
        view.personality_description,
        "Answers cooking and recipe questions only"
    );
    assert_eq!(view.model, ModelRef::Llama31_8bInstant);
    assert!(!view.has_credential);
}

#[test]
fn missing_credential_message_prompts_for_key() {
    assert!(TurnError::MissingCredential
        .to_string()
        .contains("enter your Groq API key"));
}
