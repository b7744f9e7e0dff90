//! Install command implementation.
//!
//! The `bottle install` command installs one stack binary via Homebrew or
//! Cargo. The (binary, method) pair is already validated by clap; this
//! command confirms with the user (installing mutates the host system),
//! runs the installer under its deadline, and renders the outcome.

use crate::cli::args::InstallArgs;
use crate::error::Result;
use crate::ops::install::{self, InstallContext, InstallOutcome};
use crate::ui::{Prompt, PromptType, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The install command implementation.
pub struct InstallCommand {
    args: InstallArgs,
}

impl InstallCommand {
    /// Create a new install command.
    pub fn new(args: InstallArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &InstallArgs {
        &self.args
    }

    fn confirm(&self, ui: &mut dyn UserInterface) -> Result<bool> {
        if self.args.yes || !ui.is_interactive() {
            return Ok(true);
        }

        let prompt = Prompt {
            key: format!("install_{}", self.args.binary.binary()),
            question: format!(
                "Install {} via {}?",
                self.args.binary.binary(),
                self.args.method
            ),
            prompt_type: PromptType::Confirm,
            default: Some("yes".to_string()),
        };

        Ok(ui.prompt(&prompt)?.as_bool().unwrap_or(false))
    }

    /// Execute with an explicit installer context (tests inject fakes here).
    fn execute_with(
        &self,
        ui: &mut dyn UserInterface,
        ctx: &InstallContext<'_>,
    ) -> Result<CommandResult> {
        let tool = self.args.binary;
        let method = self.args.method;

        if !self.confirm(ui)? {
            ui.warning(&format!("Skipped installing {}", tool.binary()));
            return Ok(CommandResult::failure(1));
        }

        let mut spinner =
            ui.start_spinner(&format!("Installing {} via {}...", tool.binary(), method));

        let report = install::run(tool, method, ctx);

        match &report.outcome {
            InstallOutcome::Installed { output } => {
                spinner.finish_success(&format!("{} installed via {}", tool.binary(), method));
                if ui.output_mode().shows_command_output() && !output.is_empty() {
                    ui.message(output);
                }
                Ok(CommandResult::success())
            }
            InstallOutcome::Failed { detail } => {
                spinner.finish_error(&format!("{} installation failed", tool.binary()));
                ui.show_error_block(&report.command(), detail);
                Ok(CommandResult::failure(1))
            }
        }
    }
}

impl Command for InstallCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.execute_with(ui, &install::default_context())
    }
}
