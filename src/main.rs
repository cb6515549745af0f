//! Interactive demo shell for the expression editor.
//!
//! Plays the roles of the external collaborators: the property picker
//! (`prop`), the toolbar (`op`, `fn`), and the raw editing surface the user
//! types into (`type`, `select`, `blur`, `focus`). Everything funnels into
//! the same editing core a real host would drive.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use exprpad::cli::CliArgs;
use exprpad::config::EditorConfig;
use exprpad::editor::{ExpressionEditor, HeadlessSurface, Operator, Selection};
use exprpad::theme::{self, Theme};

enum Outcome {
    Continue,
    Quit,
}

struct Shell {
    editor: ExpressionEditor<HeadlessSurface>,
    config: EditorConfig,
    theme: Theme,
    show_markup: bool,
}

impl Shell {
    fn new(config: EditorConfig, theme: Theme, show_markup: bool) -> Self {
        let mut editor = ExpressionEditor::new(HeadlessSurface::new());
        editor.mount();
        Self {
            editor,
            config,
            theme,
            show_markup,
        }
    }

    fn run_command(&mut self, line: &str) -> Outcome {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return Outcome::Continue;
        };
        let rest = line[command.len()..].trim();

        match command {
            "prop" => {
                if !self.config.properties.iter().any(|p| p == rest) {
                    println!(
                        "Unknown property {:?} (picker offers: {})",
                        rest,
                        self.config.properties.join(", ")
                    );
                } else {
                    self.editor.insert_property(rest);
                    self.print_document();
                }
            }
            "op" => match rest.parse::<Operator>() {
                Ok(op) => {
                    self.editor.insert_operator(op);
                    self.print_document();
                }
                Err(e) => println!("{e}"),
            },
            "fn" => {
                if !self.config.functions.iter().any(|f| f == rest) {
                    println!(
                        "Unknown function {:?} (toolbar offers: {})",
                        rest,
                        self.config.functions.join(", ")
                    );
                } else {
                    self.editor.insert_function(rest);
                    self.print_document();
                }
            }
            "type" => {
                let event = self.editor.surface.user_types(rest);
                self.editor.handle_event(event);
                self.print_document();
            }
            "select" => match parse_selection(rest) {
                Some(selection) => {
                    let event = self.editor.surface.user_selects(selection);
                    self.editor.handle_event(event);
                    self.print_document();
                }
                None => println!("Usage: select <index> [length]"),
            },
            "blur" => {
                let event = self.editor.surface.user_blurs();
                self.editor.handle_event(event);
                println!("(surface blurred)");
            }
            "focus" => {
                let event = self.editor.surface.user_focuses();
                self.editor.handle_event(event);
                self.print_document();
            }
            "show" => self.print_document(),
            "markup" => {
                println!("{}", self.editor.rendered_markup(&self.theme));
            }
            "dump" => match serde_json::to_string_pretty(&self.editor.state_dump()) {
                Ok(json) => println!("{json}"),
                Err(e) => println!("Failed to dump state: {e}"),
            },
            "help" => self.print_help(),
            "quit" | "exit" => return Outcome::Quit,
            other => println!("Unknown command: {other} (try 'help')"),
        }

        if self.show_markup {
            println!("{}", self.editor.rendered_markup(&self.theme));
        }
        Outcome::Continue
    }

    fn print_document(&self) {
        println!("|{}|", self.editor.plain_text());
        if let Some(selection) = self.editor.focus_state().last_range {
            let marker = if selection.is_caret() {
                "^".to_string()
            } else {
                "~".repeat(selection.length.max(1))
            };
            println!(" {}{}", " ".repeat(selection.index), marker);
        }
    }

    fn print_help(&self) {
        println!("Commands:");
        println!("  prop <name>           insert a property ({})", self.config.properties.join(", "));
        println!("  op <+|-|/>            insert an operator");
        println!("  fn <name>             insert/wrap a function ({})", self.config.functions.join(", "));
        println!("  type <text>           simulate raw typing at the selection");
        println!("  select <index> [len]  move the selection");
        println!("  blur / focus          simulate focus changes");
        println!("  show / markup / dump  inspect the document");
        println!("  quit                  leave the shell");
    }
}

fn parse_selection(rest: &str) -> Option<Selection> {
    let mut parts = rest.split_whitespace();
    let index = parts.next()?.parse().ok()?;
    let length = match parts.next() {
        Some(len) => len.parse().ok()?,
        None => 0,
    };
    Some(Selection::new(index, length))
}

fn main() -> Result<()> {
    exprpad::tracing::init();
    let args = CliArgs::parse();

    let config = EditorConfig::load();
    let theme_id = args.theme.clone().unwrap_or_else(|| config.theme.clone());
    let theme = theme::load_theme(&theme_id).unwrap_or_else(|e| {
        tracing::warn!("{}, falling back to built-in colors", e);
        Theme::fallback()
    });

    let script = args.script();
    let mut shell = Shell::new(config, theme, args.markup);

    match script {
        Some(commands) => {
            for command in commands {
                if let Outcome::Quit = shell.run_command(&command) {
                    break;
                }
            }
        }
        None => {
            println!("exprpad - build your expression here (try 'help')");
            let stdin = io::stdin();
            loop {
                print!("> ");
                io::stdout().flush()?;
                let mut line = String::new();
                if stdin.lock().read_line(&mut line)? == 0 {
                    break;
                }
                if let Outcome::Quit = shell.run_command(line.trim()) {
                    break;
                }
            }
        }
    }

    Ok(())
}
