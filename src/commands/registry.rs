use super::CommandResult;
use crate::core::chat::ChatSession;

pub type CommandHandler = fn(&mut ChatSession, CommandInvocation<'_>) -> CommandResult;

pub struct Command {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub usage: &'static str,
    pub help: &'static str,
    pub handler: CommandHandler,
}

#[derive(Clone, Copy)]
pub struct CommandInvocation<'a> {
    pub args: &'a str,
}

pub fn all_commands() -> &'static [Command] {
    COMMANDS
}

pub fn find_command(name: &str) -> Option<&'static Command> {
    all_commands().iter().find(|command| {
        command.name.eq_ignore_ascii_case(name)
            || command
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(name))
    })
}

const COMMANDS: &[Command] = &[
    Command {
        name: "help",
        aliases: &[],
        usage: "/help",
        help: "Show available commands.",
        handler: super::handle_help,
    },
    Command {
        name: "model",
        aliases: &[],
        usage: "/model [name]",
        help: "List models, or switch to the named model.",
        handler: super::handle_model,
    },
    Command {
        name: "personality",
        aliases: &["persona"],
        usage: "/personality [name]",
        help: "List personalities, or switch to the named personality.",
        handler: super::handle_personality,
    },
    Command {
        name: "clear",
        aliases: &[],
        usage: "/clear",
        help: "Clear the conversation history.",
        handler: super::handle_clear,
    },
    Command {
        name: "history",
        aliases: &[],
        usage: "/history",
        help: "Show the conversation so far.",
        handler: super::handle_history,
    },
    Command {
        name: "key",
        aliases: &[],
        usage: "/key [api-key]",
        help: "Set the API key for this session (prompts when omitted).",
        handler: super::handle_key,
    },
    Command {
        name: "quit",
        aliases: &["exit"],
        usage: "/quit",
        help: "Leave the chat.",
        handler: super::handle_quit,
    },
];
