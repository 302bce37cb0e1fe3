//! Per-session conversation state.
//!
//! A [`SessionState`] is owned by exactly one chat session and is never
//! shared or persisted. It only ever holds user and assistant turns; the
//! system prompt is derived from the selected personality on each request.

use std::fmt;

use crate::core::catalog::{lookup, CatalogEntry, ModelRef, NotFound, Personality};
use crate::core::message::Message;

/// Input rejected before any state change or network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The submitted text was empty or whitespace only.
    EmptyMessage,
    /// The requested model is not in the model catalog.
    UnknownModel(NotFound),
    /// The requested personality is not in the personality catalog.
    UnknownPersonality(NotFound),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyMessage => write!(f, "Message is empty"),
            ValidationError::UnknownModel(err) | ValidationError::UnknownPersonality(err) => {
                write!(f, "{err}")
            }
        }
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ValidationError::EmptyMessage => None,
            ValidationError::UnknownModel(err) | ValidationError::UnknownPersonality(err) => {
                Some(err)
            }
        }
    }
}

/// Bearer secret for the inference API. Redacted in debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Returns `None` for blank input.
    pub fn new(secret: impl Into<String>) -> Option<Self> {
        let secret = secret.into().trim().to_string();
        if secret.is_empty() {
            None
        } else {
            Some(Self(secret))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

#[derive(Debug, Clone)]
pub struct SessionState {
    messages: Vec<Message>,
    selected_model: ModelRef,
    selected_personality: Personality,
    credential: Option<Credential>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(
            ModelRef::default_entry(),
            Personality::default_entry(),
            None,
        )
    }
}

impl SessionState {
    pub fn new(
        model: ModelRef,
        personality: Personality,
        credential: Option<Credential>,
    ) -> Self {
        Self {
            messages: Vec::new(),
            selected_model: model,
            selected_personality: personality,
            credential,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn selected_model(&self) -> ModelRef {
        self.selected_model
    }

    pub fn selected_personality(&self) -> Personality {
        self.selected_personality
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    pub fn append_user_turn(&mut self, text: impl Into<String>) -> Result<(), ValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyMessage);
        }
        self.messages.push(Message::user(text));
        Ok(())
    }

    /// Appends unconditionally; failed inference calls land here as error text.
    pub fn append_assistant_turn(&mut self, text: impl Into<String>) {
        self.messages.push(Message::assistant(text));
    }

    /// Drops the history. Selections and the credential are kept.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn select_model(&mut self, name: &str) -> Result<ModelRef, ValidationError> {
        let model = lookup::<ModelRef>(name).map_err(ValidationError::UnknownModel)?;
        self.selected_model = model;
        Ok(model)
    }

    pub fn select_personality(&mut self, name: &str) -> Result<Personality, ValidationError> {
        let personality =
            lookup::<Personality>(name).map_err(ValidationError::UnknownPersonality)?;
        self.selected_personality = personality;
        Ok(personality)
    }

    /// Replaces the credential; blank input removes it.
    pub fn set_credential(&mut self, secret: impl Into<String>) {
        self.credential = Credential::new(secret);
    }
}
