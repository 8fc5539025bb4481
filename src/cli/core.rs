use std::io;

use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;
use thiserror::Error;
use tracing::debug;

use crate::cli::output;
use crate::cli::render::{self, FormLine, FORM_TITLE};
use crate::cli::wizard;
use crate::config::{Config, ConfigManager};
use crate::errors::OrderError;
use crate::order::{FieldEvent, FieldName, OrderForm};

/// Errors that terminate the shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("Prompt failed: {0}")]
    Dialoguer(#[from] dialoguer::Error),
    #[error(transparent)]
    Order(#[from] OrderError),
}

/// Errors reported for a single command; the shell keeps running.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error("{0}")]
    InvalidArguments(String),
    #[error("Unknown command `{name}`{}", hint(.suggestion))]
    UnknownCommand {
        name: String,
        suggestion: Option<String>,
    },
    #[error("`{0}` needs an interactive terminal")]
    Unavailable(&'static str),
    #[error("Prompt failed: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}

fn hint(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map(|name| format!(" (did you mean `{name}`?)"))
        .unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Name, usage, description.
pub const COMMANDS: &[(&str, &str, &str)] = &[
    ("name", "name [full name]", "Type into the full name field"),
    ("size", "size [S|M|L]", "Choose a size (no argument picks the empty option)"),
    ("add", "add <topping>", "Check a topping"),
    ("remove", "remove <topping>", "Uncheck a topping"),
    ("toppings", "toppings", "List toppings and their state"),
    ("show", "show", "Show the whole form"),
    ("submit", "submit", "Place the order"),
    ("wizard", "wizard", "Fill the form step by step"),
    ("config", "config", "Show configuration"),
    ("version", "version", "Show build information"),
    ("help", "help", "List commands"),
    ("exit", "exit", "Leave the shell"),
];

pub struct ShellContext {
    pub mode: CliMode,
    pub running: bool,
    pub last_command: Option<String>,
    pub(crate) form: OrderForm,
    pub(crate) theme: ColorfulTheme,
    config: Config,
    config_path: String,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let manager = ConfigManager::new()?;
        let config = manager.load()?;
        let config_path = manager.path().display().to_string();
        Self::with_config(mode, config, config_path)
    }

    pub fn with_config(
        mode: CliMode,
        config: Config,
        config_path: impl Into<String>,
    ) -> Result<Self, CliError> {
        let plain = config.plain_output || std::env::var_os("NO_COLOR").is_some();
        output::set_preferences(output::OutputPreferences { plain_mode: plain });

        let form = OrderForm::new(config.catalog()?);
        Ok(Self {
            mode,
            running: true,
            last_command: None,
            form,
            theme: ColorfulTheme::default(),
            config,
            config_path: config_path.into(),
        })
    }

    pub fn form(&self) -> &OrderForm {
        &self.form
    }

    pub fn prompt(&self) -> String {
        if self.form.is_submit_disabled() {
            "pizza> ".to_string()
        } else {
            "pizza (ready)> ".to_string()
        }
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = COMMANDS.iter().map(|(name, _, _)| *name).collect();
        names.push("quit");
        names
    }

    pub fn report_error(&mut self, err: CommandError) -> Result<(), CliError> {
        debug!(command = ?self.last_command, error = %err, "command failed");
        output::error(err);
        Ok(())
    }

    pub fn print_warning(&self, message: &str) {
        output::warning(message);
    }

    pub fn confirm_exit(&self) -> Result<bool, CliError> {
        dialoguer::Confirm::with_theme(&self.theme)
            .with_prompt("Leave the order form?")
            .default(true)
            .interact()
            .map_err(CliError::from)
    }

    pub fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        match command {
            "name" => self.cmd_name(args),
            "size" => self.cmd_size(args),
            "add" => self.cmd_topping(args, true),
            "remove" => self.cmd_topping(args, false),
            "toppings" => {
                self.print_toppings();
                Ok(LoopControl::Continue)
            }
            "show" => {
                self.print_form();
                Ok(LoopControl::Continue)
            }
            "submit" => self.cmd_submit(),
            "wizard" => self.cmd_wizard(),
            "config" => {
                self.print_config();
                Ok(LoopControl::Continue)
            }
            "version" => {
                print_version();
                Ok(LoopControl::Continue)
            }
            "help" => {
                print_help();
                Ok(LoopControl::Continue)
            }
            "exit" | "quit" => Ok(LoopControl::Exit),
            _ => Err(CommandError::UnknownCommand {
                name: raw.to_string(),
                suggestion: self.suggest_command(command),
            }),
        }
    }

    fn suggest_command(&self, input: &str) -> Option<String> {
        self.command_names()
            .into_iter()
            .map(|name| (levenshtein(input, name), name))
            .filter(|(distance, _)| *distance <= 2)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, name)| name.to_string())
    }

    fn cmd_name(&mut self, args: &[&str]) -> Result<LoopControl, CommandError> {
        let value = args.join(" ");
        self.form
            .handle_change(FieldEvent::text(FieldName::FullName.key(), value))?;
        self.print_field_feedback(FieldName::FullName);
        Ok(LoopControl::Continue)
    }

    fn cmd_size(&mut self, args: &[&str]) -> Result<LoopControl, CommandError> {
        if args.len() > 1 {
            return Err(CommandError::InvalidArguments(
                "usage: size [S|M|L]".to_string(),
            ));
        }
        let value = args.first().copied().unwrap_or("");
        self.form
            .handle_change(FieldEvent::select(FieldName::Size.key(), value))?;
        self.print_field_feedback(FieldName::Size);
        Ok(LoopControl::Continue)
    }

    fn cmd_topping(&mut self, args: &[&str], checked: bool) -> Result<LoopControl, CommandError> {
        if args.is_empty() {
            let usage = if checked {
                "usage: add <topping>"
            } else {
                "usage: remove <topping>"
            };
            return Err(CommandError::InvalidArguments(usage.to_string()));
        }
        let input = args.join(" ");
        let label = self
            .form
            .catalog()
            .resolve(&input)
            .map(str::to_string)
            .unwrap_or(input);
        self.form
            .handle_change(FieldEvent::checkbox(label, checked))?;
        self.print_toppings();
        Ok(LoopControl::Continue)
    }

    fn cmd_submit(&mut self) -> Result<LoopControl, CommandError> {
        match self.form.submit() {
            Ok(message) => output::success(message),
            Err(OrderError::SubmitDisabled) => {
                output::warning("Submit is disabled.");
                let data = self.form.data();
                for field in FieldName::ALL {
                    let value = data.field_value(field);
                    if let Err(error) = self.form.schema().validate_field(field, value) {
                        output::warning(format!("{field}: {error}"));
                    }
                }
            }
            Err(err) => return Err(err.into()),
        }
        Ok(LoopControl::Continue)
    }

    fn cmd_wizard(&mut self) -> Result<LoopControl, CommandError> {
        if self.mode == CliMode::Script {
            return Err(CommandError::Unavailable("wizard"));
        }
        wizard::run(self)?;
        self.print_form();
        Ok(LoopControl::Continue)
    }

    fn print_field_feedback(&self, field: FieldName) {
        let message = self.form.errors().message(field);
        if !message.is_empty() {
            output::warning(message);
        }
        self.print_submit_state();
    }

    fn print_submit_state(&self) {
        output::info(
            FormLine::Submit {
                enabled: !self.form.is_submit_disabled(),
            }
            .text(),
        );
    }

    pub fn print_toppings(&self) {
        for line in render::topping_lines(&self.form) {
            output::line(line);
        }
        self.print_submit_state();
    }

    pub fn print_form(&self) {
        output::section(FORM_TITLE);
        for line in render::form_lines(&self.form) {
            match &line {
                FormLine::Banner(text) => output::success(text),
                FormLine::Error(_) => output::warning(line.text()),
                _ => output::line(line.text()),
            }
        }
    }

    fn print_config(&self) {
        output::info(format!("Config file: {}", self.config_path));
        output::info(format!(
            "Plain output: {}",
            if self.config.plain_output { "on" } else { "off" }
        ));
        output::info("Toppings:");
        for option in self.form.catalog().options() {
            output::line(format!("  {}. {}", option.id, option.label));
        }
    }
}

fn print_help() {
    output::section("Commands");
    for (_, usage, description) in COMMANDS {
        output::line(format!("  {usage:<20} {description}"));
    }
}

fn print_version() {
    output::info(format!(
        "pizza_order {} ({} {}, built {})",
        env!("CARGO_PKG_VERSION"),
        env!("PIZZA_ORDER_BUILD_HASH"),
        env!("PIZZA_ORDER_BUILD_STATUS"),
        env!("PIZZA_ORDER_BUILD_TIMESTAMP"),
    ));
    output::info(format!(
        "{} / {} / {}",
        env!("PIZZA_ORDER_BUILD_TARGET"),
        env!("PIZZA_ORDER_BUILD_PROFILE"),
        env!("PIZZA_ORDER_BUILD_RUSTC"),
    ));
}
