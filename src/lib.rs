//! Personabot is a terminal chatbot that answers in the voice of a chosen
//! personality, forwarding each conversation to an OpenAI-compatible chat
//! completions API (Groq by default).
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the personality and model catalogs, the per-session
//!   conversation state, request assembly, the inference client, and config.
//! - [`ui`] renders the transcript and runs the line-based interactive loop.
//! - [`commands`] implements slash-command parsing and execution used by the
//!   interactive loop.
//! - [`api`] defines the chat completion payloads sent over the wire.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`], which builds a [`core::chat::ChatSession`]
//! and hands it to [`ui::repl`] or the one-shot `say` command.

pub mod api;
pub mod cli;
pub mod commands;
pub mod core;
pub mod ui;
pub mod utils;
