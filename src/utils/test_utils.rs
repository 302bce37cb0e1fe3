use std::ffi::OsString;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use tempfile::TempDir;

use crate::core::config::CONFIG_PATH_ENV;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Restores every environment variable it touched when dropped.
///
/// Only use inside [`with_test_config_env`], which serializes access to the
/// process environment.
pub struct TestEnvVarGuard {
    originals: Vec<(String, Option<OsString>)>,
}

impl TestEnvVarGuard {
    pub fn new() -> Self {
        Self {
            originals: Vec::new(),
        }
    }

    fn remember(&mut self, key: &str) {
        if !self.originals.iter().any(|(k, _)| k == key) {
            self.originals.push((key.to_string(), std::env::var_os(key)));
        }
    }

    pub fn set_var(&mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) {
        self.remember(key);
        std::env::set_var(key, value);
    }

    pub fn remove_var(&mut self, key: &str) {
        self.remember(key);
        std::env::remove_var(key);
    }
}

impl Default for TestEnvVarGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TestEnvVarGuard {
    fn drop(&mut self) {
        for (key, value) in self.originals.drain(..).rev() {
            match value {
                Some(value) => std::env::set_var(&key, value),
                None => std::env::remove_var(&key),
            }
        }
    }
}

/// Runs `f` with the config path pointed at a fresh temporary directory.
pub fn with_test_config_env<F, R>(f: F) -> R
where
    F: FnOnce(&Path) -> R,
{
    let _lock = lock_env();
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");

    let mut guard = TestEnvVarGuard::new();
    guard.set_var(CONFIG_PATH_ENV, &config_path);
    let result = f(&config_path);
    drop(guard);
    result
}

/// Inference client double that records every call and answers with a
/// canned reply or a transport failure.
pub struct StubClient {
    reply: Result<String, String>,
    calls: std::sync::Mutex<Vec<StubCall>>,
}

#[derive(Debug, Clone)]
pub struct StubCall {
    pub model_id: String,
    pub messages: Vec<crate::api::ChatMessage>,
    pub credential: String,
}

impl StubClient {
    pub fn replying(text: &str) -> std::sync::Arc<Self> {
        std::sync::Arc::new(Self {
            reply: Ok(text.to_string()),
            calls: std::sync::Mutex::new(Vec::new()),
        })
    }

    pub fn failing(transport_error: &str) -> std::sync::Arc<Self> {
        std::sync::Arc::new(Self {
            reply: Err(transport_error.to_string()),
            calls: std::sync::Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<StubCall> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait::async_trait]
impl crate::core::inference::InferenceClient for StubClient {
    async fn complete(
        &self,
        model_id: &str,
        messages: Vec<crate::api::ChatMessage>,
        credential: &str,
    ) -> Result<String, crate::core::inference::InferenceError> {
        self.calls.lock().expect("calls lock").push(StubCall {
            model_id: model_id.to_string(),
            messages,
            credential: credential.to_string(),
        });
        self.reply
            .clone()
            .map_err(crate::core::inference::InferenceError::Transport)
    }
}

/// Chat session over a stub client, starting with the Chef personality.
pub fn chef_session(
    stub: &std::sync::Arc<StubClient>,
    credential: Option<&str>,
) -> crate::core::chat::ChatSession {
    use crate::core::catalog::{CatalogEntry, ModelRef, Personality};
    use crate::core::session::{Credential, SessionState};

    let state = SessionState::new(
        ModelRef::default_entry(),
        Personality::Chef,
        credential.and_then(Credential::new),
    );
    crate::core::chat::ChatSession::new(state, stub.clone())
}
