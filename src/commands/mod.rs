//! Slash commands typed into the chat input.

mod registry;

pub use registry::{all_commands, CommandInvocation};

use crate::core::app::App;
use crate::core::session::parse_temperature;

pub enum CommandResult {
    Continue,
    ProcessAsMessage(String),
}

pub fn process_input(app: &mut App, input: &str) -> CommandResult {
    let trimmed = input.trim();

    let Some(rest) = trimmed.strip_prefix('/') else {
        return CommandResult::ProcessAsMessage(input.to_string());
    };

    let mut parts = rest.splitn(2, char::is_whitespace);
    let command_name = match parts.next() {
        Some(name) if !name.is_empty() => name,
        _ => return CommandResult::ProcessAsMessage(input.to_string()),
    };
    let args = parts.next().unwrap_or("").trim();

    if let Some(command) = registry::find_command(command_name) {
        let invocation = CommandInvocation { args };
        (command.handler)(app, invocation)
    } else {
        CommandResult::ProcessAsMessage(input.to_string())
    }
}

const KEY_HELP: &str = "\
## Keys
- `Enter` send, `Alt+Enter` new line
- `Esc` back to the selector, `Ctrl+R` reset, `Ctrl+C` quit
- `F2` / `Shift+F2` next / previous model
- `F3` / `F4` temperature down / up
- `PgUp` / `PgDn` / `Home` / `End` scroll";

pub(super) fn handle_help(app: &mut App, _invocation: CommandInvocation<'_>) -> CommandResult {
    let mut help_md = String::from("## Commands\n");
    for command in all_commands() {
        help_md.push_str(&format!("- `{}`: {}\n", command.usage, command.help));
    }
    help_md.push('\n');
    help_md.push_str(KEY_HELP);
    app.conversation().add_info(help_md);
    CommandResult::Continue
}

pub(super) fn handle_reset(app: &mut App, _invocation: CommandInvocation<'_>) -> CommandResult {
    app.reset_conversation();
    CommandResult::Continue
}

pub(super) fn handle_back(app: &mut App, _invocation: CommandInvocation<'_>) -> CommandResult {
    app.back_to_selector();
    CommandResult::Continue
}

pub(super) fn handle_model(app: &mut App, invocation: CommandInvocation<'_>) -> CommandResult {
    if invocation.args.is_empty() {
        let listing = app
            .session
            .models
            .iter()
            .map(|model| {
                if *model == app.session.settings.model {
                    format!("- **{model}** (current)")
                } else {
                    format!("- {model}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n");
        app.conversation().add_info(format!("Models:\n{listing}"));
        return CommandResult::Continue;
    }

    match app.session.set_model(invocation.args) {
        Ok(()) => {
            let model = app.session.settings.model.clone();
            app.ui.set_status(format!("Model: {model}"));
        }
        Err(message) => app.ui.set_status(message),
    }
    CommandResult::Continue
}

pub(super) fn handle_temp(app: &mut App, invocation: CommandInvocation<'_>) -> CommandResult {
    if invocation.args.is_empty() {
        let current = app.session.settings.temperature;
        app.ui
            .set_status(format!("Temperature: {current:.2} (usage: /temp <value>)"));
        return CommandResult::Continue;
    }

    match parse_temperature(invocation.args) {
        Ok(value) => {
            app.session.set_temperature(value);
            app.ui.set_status(format!("Temperature: {value:.2}"));
        }
        Err(message) => app.ui.set_status(format!("Invalid temperature: {message}")),
    }
    CommandResult::Continue
}

pub(super) fn handle_mode(app: &mut App, _invocation: CommandInvocation<'_>) -> CommandResult {
    let Some(mode) = app.session.mode() else {
        app.ui.set_status("No mode selected");
        return CommandResult::Continue;
    };
    let text = match mode.system_prompt() {
        Some(prompt) => format!("Mode: **{}**\n\n{}", mode.label(), prompt),
        None => format!(
            "Mode: **{}**\n\nMessages are sent without extra instructions.",
            mode.label()
        ),
    };
    app.conversation().add_info(text);
    CommandResult::Continue
}

pub(super) fn handle_quit(app: &mut App, _invocation: CommandInvocation<'_>) -> CommandResult {
    app.request_exit();
    CommandResult::Continue
}

#[cfg(test)]
mod tests;
