//! Turn handling for a single chat session.
//!
//! [`ChatSession`] owns the session's [`SessionState`] and an inference
//! client. It exposes the four user actions (submit, change model, change
//! personality, clear) plus [`ChatSession::view`] for rendering.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::catalog::{ModelRef, Personality};
use crate::core::inference::InferenceClient;
use crate::core::message::Message;
use crate::core::request::build_request_messages;
use crate::core::session::{SessionState, ValidationError};

/// Prefix of assistant turns that stand in for a failed inference call.
pub const ERROR_MARKER: &str = "Error: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnError {
    Validation(ValidationError),
    /// No credential has been supplied for this session.
    MissingCredential,
}

impl fmt::Display for TurnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnError::Validation(err) => write!(f, "{err}"),
            TurnError::MissingCredential => write!(
                f,
                "Please enter your Groq API key to start chatting (use /key or set GROQ_API_KEY)"
            ),
        }
    }
}

impl std::error::Error for TurnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TurnError::Validation(err) => Some(err),
            TurnError::MissingCredential => None,
        }
    }
}

impl From<ValidationError> for TurnError {
    fn from(err: ValidationError) -> Self {
        TurnError::Validation(err)
    }
}

/// Assistant text appended by a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Completed(String),
    /// The inference call failed; the text starts with [`ERROR_MARKER`].
    Failed(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Completed(text) | Reply::Failed(text) => text,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Reply::Failed(_))
    }
}

/// Everything the front end needs to draw the session.
#[derive(Debug, Clone, Copy)]
pub struct SessionView<'a> {
    pub messages: &'a [Message],
    pub model: ModelRef,
    pub personality: Personality,
    pub personality_description: &'static str,
    pub has_credential: bool,
}

pub struct ChatSession {
    state: SessionState,
    client: Arc<dyn InferenceClient>,
}

impl ChatSession {
    pub fn new(state: SessionState, client: Arc<dyn InferenceClient>) -> Self {
        Self { state, client }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Runs one turn and returns the assistant reply that was appended.
    ///
    /// Validation and missing-credential failures leave the conversation
    /// untouched. Once the user turn is accepted an assistant turn is always
    /// appended, carrying [`ERROR_MARKER`] if the inference call failed.
    pub async fn submit(&mut self, text: &str) -> Result<Reply, TurnError> {
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyMessage.into());
        }
        let credential = self
            .state
            .credential()
            .cloned()
            .ok_or(TurnError::MissingCredential)?;

        self.state.append_user_turn(text)?;
        let messages = build_request_messages(&self.state);
        let model = self.state.selected_model();
        debug!(
            model = model.provider_id(),
            personality = %self.state.selected_personality(),
            history = self.state.messages().len(),
            "Submitting turn"
        );

        let reply = match self
            .client
            .complete(model.provider_id(), messages, credential.expose())
            .await
        {
            Ok(text) => Reply::Completed(text),
            Err(err) => {
                warn!(model = model.provider_id(), error = %err, "Inference call failed");
                Reply::Failed(format!("{ERROR_MARKER}{err}"))
            }
        };

        self.state.append_assistant_turn(reply.text());
        Ok(reply)
    }

    pub fn select_model(&mut self, name: &str) -> Result<ModelRef, ValidationError> {
        self.state.select_model(name)
    }

    pub fn select_personality(&mut self, name: &str) -> Result<Personality, ValidationError> {
        self.state.select_personality(name)
    }

    pub fn clear(&mut self) {
        self.state.clear();
    }

    pub fn set_credential(&mut self, secret: impl Into<String>) {
        self.state.set_credential(secret);
    }

    pub fn view(&self) -> SessionView<'_> {
        let personality = self.state.selected_personality();
        SessionView {
            messages: self.state.messages(),
            model: self.state.selected_model(),
            personality,
            personality_description: personality.description(),
            has_credential: self.state.has_credential(),
        }
    }
}

#[cfg(test)]
mod tests;
