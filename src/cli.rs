//! Command-line argument parsing for the demo shell
//!
//! Supports:
//! - Theme override
//! - One-shot command scripts (semicolon-separated shell commands)
//! - Printing rendered markup after each command

use clap::Parser;

/// An interactive expression-building surface
#[derive(Parser, Debug)]
#[command(name = "exprpad", version, about = "An interactive expression-building surface")]
pub struct CliArgs {
    /// Commands to run instead of the interactive prompt,
    /// separated by `;` (e.g. "prop speed; op +; prop pressure; show")
    #[arg(value_name = "COMMANDS")]
    pub commands: Option<String>,

    /// Theme id override (e.g. "default-dark")
    #[arg(long, value_name = "ID")]
    pub theme: Option<String>,

    /// Print the rendered markup after every command
    #[arg(short = 'm', long)]
    pub markup: bool,
}

impl CliArgs {
    /// Split the one-shot command string into individual shell commands
    pub fn script(&self) -> Option<Vec<String>> {
        self.commands.as_ref().map(|line| {
            line.split(';')
                .map(str::trim)
                .filter(|cmd| !cmd.is_empty())
                .map(String::from)
                .collect()
        })
    }
}
