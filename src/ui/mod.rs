//! Terminal front end: rendering helpers and the interactive loop.

pub mod render;
pub mod repl;
