use super::*;
use crate::core::catalog::{ModelRef, Personality};
use crate::utils::test_utils::{with_test_config_env, TestEnvVarGuard};

mod test_helpers {
    use super::*;

    /// Parses without taking the env lock; callers must already hold it.
    pub(super) fn parse_args_locked(argv: &[&str]) -> Args {
        Args::try_parse_from(argv)
            .unwrap_or_else(|err| panic!("argv={argv:?} should parse successfully: {err}"))
    }

    /// Parses while holding the env lock, since clap reads `GROQ_API_KEY`.
    pub(super) fn parse_args(argv: &[&str]) -> Args {
        with_test_config_env(|_| parse_args_locked(argv))
    }

    /// Parses with `GROQ_API_KEY` removed so the env fallback cannot leak in.
    pub(super) fn parse_without_env_key(argv: &[&str]) -> Args {
        with_test_config_env(|_| {
            let mut guard = TestEnvVarGuard::new();
            guard.remove_var(API_KEY_ENV);
            parse_args_locked(argv)
        })
    }
}

use test_helpers::{parse_args, parse_args_locked, parse_without_env_key};

#[test]
fn no_subcommand_defaults_to_chat() {
    let args = parse_without_env_key(&["personabot"]);
    assert!(args.command.is_none());
    assert!(args.model.is_none());
    assert!(args.personality.is_none());
    assert!(args.api_key.is_none());
}

#[test]
fn global_flags_parse_before_and_after_subcommand() {
    let argv = [
        "personabot",
        "-m",
        "gemma2-9b-it",
        "chat",
        "-P",
        "travel-guide",
        "--base-url",
        "http://localhost:8080/v1",
    ];
    let args = parse_args(&argv);
    assert_eq!(args.command, Some(Commands::Chat));
    assert_eq!(args.model.as_deref(), Some("gemma2-9b-it"));
    assert_eq!(args.personality.as_deref(), Some("travel-guide"));
    assert_eq!(args.base_url.as_deref(), Some("http://localhost:8080/v1"));
}

#[test]
fn say_collects_trailing_words() {
    let args = parse_args(&["personabot", "say", "how", "do", "I", "boil", "--an-egg"]);
    assert_eq!(
        args.command,
        Some(Commands::Say {
            prompt: vec![
                "how".to_string(),
                "do".to_string(),
                "I".to_string(),
                "boil".to_string(),
                "--an-egg".to_string(),
            ]
        })
    );
}

#[test]
fn set_accepts_multi_word_values_and_bare_form() {
    let args = parse_args(&["personabot", "set", "default-personality", "Travel", "Guide"]);
    assert_eq!(
        args.command,
        Some(Commands::Set {
            key: Some("default-personality".to_string()),
            value: vec!["Travel".to_string(), "Guide".to_string()],
        })
    );

    let args = parse_args(&["personabot", "set"]);
    assert_eq!(
        args.command,
        Some(Commands::Set {
            key: None,
            value: Vec::new(),
        })
    );
}

#[test]
fn unset_requires_a_key() {
    let missing_key = with_test_config_env(|_| Args::try_parse_from(["personabot", "unset"]));
    assert!(missing_key.is_err());
    let args = parse_args(&["personabot", "unset", "base-url"]);
    assert_eq!(
        args.command,
        Some(Commands::Unset {
            key: "base-url".to_string()
        })
    );
}

#[test]
fn api_key_falls_back_to_environment() {
    with_test_config_env(|_| {
        let mut guard = TestEnvVarGuard::new();
        guard.set_var(API_KEY_ENV, "gsk-from-env");
        let args = parse_args_locked(&["personabot", "models"]);
        assert_eq!(args.api_key.as_deref(), Some("gsk-from-env"));

        let args = parse_args_locked(&["personabot", "--api-key", "gsk-flag", "models"]);
        assert_eq!(args.api_key.as_deref(), Some("gsk-flag"));
    });
}

#[test]
fn build_session_prefers_flags_over_config() {
    let args = parse_args(&[
        "personabot",
        "-m",
        "Mixtral-8x7B-32768",
        "--api-key",
        "gsk-test",
    ]);
    let config = Config {
        default_model: Some("Gemma2-9B-It".to_string()),
        default_personality: Some("Chef".to_string()),
        ..Config::default()
    };

    let chat = build_session(&args, &config).expect("session should build");
    let view = chat.view();
    assert_eq!(view.model, ModelRef::Mixtral8x7b32768);
    assert_eq!(view.personality, Personality::Chef);
    assert!(view.has_credential);
    assert!(view.messages.is_empty());
}

#[test]
fn build_session_rejects_unknown_names_and_bad_urls() {
    let config = Config::default();

    let args = parse_args(&["personabot", "-P", "pirate"]);
    let err = build_session(&args, &config).err().expect("unknown personality");
    assert!(err.to_string().contains("Unknown personality 'pirate'"));

    let args = parse_args(&["personabot", "--base-url", "ftp://example.com"]);
    assert!(build_session(&args, &config).is_err());
}

#[test]
fn build_session_validates_base_url_from_config() {
    let args = parse_args(&["personabot"]);
    let config = Config {
        base_url: Some("https://exa mple/v1".to_string()),
        ..Config::default()
    };
    let err = build_session(&args, &config).err().expect("invalid config url");
    assert!(err.to_string().starts_with("Invalid base_url in config"));

    let config = Config {
        base_url: Some("http://localhost:8080/v1/".to_string()),
        request_timeout_secs: Some(0),
        ..Config::default()
    };
    assert!(build_session(&args, &config).is_ok());
}

#[test]
fn blank_api_key_flag_leaves_session_without_credential() {
    let args = parse_args(&["personabot", "--api-key", "   "]);
    let chat = build_session(&args, &Config::default()).expect("session should build");
    assert!(!chat.view().has_credential);
}

#[tokio::test]
async fn prompt_credential_reads_one_trimmed_line() {
    let mut input: &[u8] = b"  gsk-typed  \nHello\n";
    let mut out = Vec::new();

    let key = prompt_credential(&mut input, &mut out)
        .await
        .expect("prompt should run");
    assert_eq!(key.as_deref(), Some("gsk-typed"));
    assert_eq!(input, b"Hello\n");
    assert!(String::from_utf8(out).unwrap().contains("Groq API key"));
}

#[tokio::test]
async fn prompt_credential_allows_blank_and_eof() {
    let mut out = Vec::new();

    let mut blank: &[u8] = b"\n";
    assert_eq!(prompt_credential(&mut blank, &mut out).await.unwrap(), None);

    let mut empty: &[u8] = b"";
    assert_eq!(prompt_credential(&mut empty, &mut out).await.unwrap(), None);
}

#[test]
fn long_version_reports_git_describe_and_sha() {
    assert!(LONG_VERSION.starts_with(env!("CARGO_PKG_VERSION")));
    assert!(LONG_VERSION.contains(env!("VERGEN_GIT_DESCRIBE")));
    assert!(LONG_VERSION.ends_with(concat!(", ", env!("VERGEN_GIT_SHA"), ")")));
}
