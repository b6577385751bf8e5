use super::CommandResult;
use crate::core::app::App;

pub type CommandHandler = fn(&mut App, CommandInvocation<'_>) -> CommandResult;

pub struct Command {
    pub name: &'static str,
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
    all_commands()
        .iter()
        .find(|command| command.name.eq_ignore_ascii_case(name))
}

const COMMANDS: &[Command] = &[
    Command {
        name: "help",
        usage: "/help",
        help: "Show available commands and key bindings.",
        handler: super::handle_help,
    },
    Command {
        name: "reset",
        usage: "/reset",
        help: "Clear the conversation and cancel any pending reply.",
        handler: super::handle_reset,
    },
    Command {
        name: "back",
        usage: "/back",
        help: "Return to the mode selector, keeping the conversation.",
        handler: super::handle_back,
    },
    Command {
        name: "model",
        usage: "/model [name]",
        help: "List models or switch to one for the next reply.",
        handler: super::handle_model,
    },
    Command {
        name: "temp",
        usage: "/temp <value>",
        help: "Show or set the temperature (0.0 to 1.0).",
        handler: super::handle_temp,
    },
    Command {
        name: "mode",
        usage: "/mode",
        help: "Show the active mode and its instructions.",
        handler: super::handle_mode,
    },
    Command {
        name: "quit",
        usage: "/quit",
        help: "Exit the workbench.",
        handler: super::handle_quit,
    },
];
