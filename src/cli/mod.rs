//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the appropriate commands.

pub mod catalog_list;
pub mod say;
pub mod settings;

use std::error::Error;
use std::io::Write;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::cli::catalog_list::{list_models, list_personalities};
use crate::cli::say::run_say;
use crate::cli::settings::{apply_set, apply_unset, describe_all};
use crate::core::chat::ChatSession;
use crate::core::config::data::Config;
use crate::core::inference::GroqClient;
use crate::core::session::{Credential, SessionState};
use crate::ui::repl::run_repl;
use crate::utils::logging;
use crate::utils::url::validate_base_url;

/// Environment variable read for the API key when `--api-key` is absent.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_DESCRIBE"),
    ", ",
    env!("VERGEN_GIT_SHA"),
    ")"
);

#[derive(Parser)]
#[command(name = "personabot")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Chat with a personality-driven assistant backed by Groq")]
#[command(
    long_about = "Personabot is a terminal chatbot that answers in the voice of a chosen \
personality (Math Teacher, Doctor, Travel Guide, Chef, Tech Support, General Assistant). \
Each turn sends the whole conversation to a Groq-hosted model.\n\n\
Authentication:\n\
  Pass --api-key, set GROQ_API_KEY, or enter the key when prompted.\n\
  The key lives in memory only and is never written to disk.\n\n\
Environment Variables:\n\
  GROQ_API_KEY          Your Groq API key\n\
  PERSONABOT_CONFIG     Alternate config file path\n\
  PERSONABOT_LOG        Log filter directive (default: warn)\n\n\
Commands:\n\
  /help                 List chat commands\n\
  /model [name]         Show or switch the model\n\
  /personality [name]   Show or switch the personality\n\
  /clear                Clear the conversation\n\
  /history              Show the conversation so far\n\
  /key [value]          Set the API key for this session\n\
  /quit                 Leave the chat"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Model to chat with (display name or provider id)
    #[arg(short = 'm', long, global = true, value_name = "MODEL")]
    pub model: Option<String>,

    /// Personality to chat with (display name or slug)
    #[arg(short = 'P', long, global = true, value_name = "PERSONALITY")]
    pub personality: Option<String>,

    /// Groq API key for this session
    #[arg(long, global = true, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Override the API base URL
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive chat (default)
    Chat,
    /// Send a single prompt and print the reply
    Say {
        /// Prompt text; multiple words are joined with spaces
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        prompt: Vec<String>,
    },
    /// List available models
    Models,
    /// List available personalities
    Personalities,
    /// Set configuration values, or show them all when no key is given
    Set {
        /// Configuration key to set
        key: Option<String>,
        /// Value to set for the key (can be multiple words)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Unset configuration values
    Unset {
        /// Configuration key to unset
        key: String,
    },
}

pub fn main() -> Result<(), Box<dyn Error>> {
    logging::init();
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    let mut args = Args::parse();

    match args.command.take().unwrap_or(Commands::Chat) {
        Commands::Chat => {
            let config = Config::load()?;
            let mut chat = build_session(&args, &config)?;
            let mut stdin = BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();

            if !chat.view().has_credential {
                if let Some(key) = prompt_credential(&mut stdin, &mut stdout).await? {
                    chat.set_credential(key);
                }
            }
            run_repl(&mut chat, &mut stdin, &mut stdout).await
        }
        Commands::Say { prompt } => {
            let config = Config::load()?;
            let chat = build_session(&args, &config)?;
            run_say(chat, prompt).await
        }
        Commands::Models => list_models(&Config::load()?),
        Commands::Personalities => list_personalities(&Config::load()?),
        Commands::Set { key, value } => {
            let Some(key) = key else {
                let config = Config::load()?;
                println!("Current configuration:");
                for line in describe_all(&config) {
                    println!("{line}");
                }
                return Ok(());
            };
            match apply_set(&key, &value) {
                Ok(message) => println!("{message}"),
                Err(err) => {
                    err.print();
                    std::process::exit(err.exit_code());
                }
            }
            Ok(())
        }
        Commands::Unset { key } => {
            match apply_unset(&key) {
                Ok(message) => println!("{message}"),
                Err(err) => {
                    err.print();
                    std::process::exit(err.exit_code());
                }
            }
            Ok(())
        }
    }
}

/// Builds a session from CLI flags layered over the config file.
///
/// Flags win over config values; unset values fall back to the catalog
/// defaults and the public Groq endpoint.
pub fn build_session(args: &Args, config: &Config) -> Result<ChatSession, Box<dyn Error>> {
    let model = config.resolve_model(args.model.as_deref())?;
    let personality = config.resolve_personality(args.personality.as_deref())?;
    let base_url = match args.base_url.as_deref() {
        Some(url) => validate_base_url(url)?,
        None => validate_base_url(config.base_url_or_default())
            .map_err(|err| format!("Invalid base_url in config: {err}"))?,
    };

    debug!(
        model = model.provider_id(),
        personality = %personality,
        base_url = %base_url,
        "Starting session"
    );

    let client = GroqClient::new(base_url, config.request_timeout())?;
    let state = SessionState::new(
        model,
        personality,
        args.api_key.clone().and_then(Credential::new),
    );
    Ok(ChatSession::new(state, Arc::new(client)))
}

/// Asks for the API key once before the chat starts.
///
/// A blank answer is accepted; turns then report the missing key until
/// `/key` is used. Returns `None` on blank input or end of input.
pub async fn prompt_credential<R, W>(
    input: &mut R,
    out: &mut W,
) -> Result<Option<String>, Box<dyn Error>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write!(out, "Enter your Groq API key (leave blank to skip): ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line).await? == 0 {
        writeln!(out)?;
        return Ok(None);
    }
    let key = line.trim();
    Ok((!key.is_empty()).then(|| key.to_string()))
}

#[cfg(test)]
mod tests;
