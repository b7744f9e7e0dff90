//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::{BottleError, Result};

use super::{OutputMode, Prompt, PromptResult, PromptType, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `BOTTLE_PROMPT_*` environment variables or the
/// prompt's default; a prompt with neither is an error rather than a hang.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with("BOTTLE_PROMPT_"))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let is_confirm = matches!(prompt.prompt_type, PromptType::Confirm);

        let env_key = format!("BOTTLE_PROMPT_{}", prompt.key.to_uppercase());
        let answer = self
            .env_overrides
            .get(&env_key)
            .cloned()
            .or_else(|| prompt.default.clone());

        match answer {
            Some(value) if is_confirm => {
                let val = matches!(value.as_str(), "true" | "yes" | "y" | "1");
                Ok(PromptResult::Bool(val))
            }
            Some(value) => Ok(PromptResult::String(value)),
            None => Err(BottleError::PromptUnavailable {
                key: prompt.key.clone(),
            }),
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("  {}", message);
        }
        Box::new(NoopSpinner)
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn show_error_block(&mut self, command: &str, output: &str) {
        eprintln!("    ┌─ Command ──────────────────────────");
        eprintln!("    │ {}", command);
        if !output.is_empty() {
            eprintln!("    ├─ Output ───────────────────────────");
            for line in output.lines() {
                eprintln!("    │ {}", line);
            }
        }
        eprintln!("    └────────────────────────────────────");
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that does nothing (for non-interactive mode).
struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn finish_error(&mut self, msg: &str) {
        println!("✗ {}", msg);
    }

    fn finish_skipped(&mut self, msg: &str) {
        println!("○ {}", msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_is_not_interactive() {
        let ui = NonInteractiveUI::new(OutputMode::Normal);
        assert!(!ui.is_interactive());
    }

    #[test]
    fn prompt_uses_default() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let prompt = Prompt {
            key: "confirm_install".to_string(),
            question: "Install?".to_string(),
            prompt_type: PromptType::Confirm,
            default: Some("yes".to_string()),
        };

        let result = ui.prompt(&prompt).unwrap();
        assert_eq!(result.as_bool(), Some(true));
    }

    #[test]
    fn prompt_fails_without_default() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let prompt = Prompt {
            key: "confirm_install".to_string(),
            question: "Install?".to_string(),
            prompt_type: PromptType::Confirm,
            default: None,
        };

        assert!(ui.prompt(&prompt).is_err());
    }

    #[test]
    fn prompt_uses_env_override() {
        let mut overrides = HashMap::new();
        overrides.insert("BOTTLE_PROMPT_CONFIRM_INSTALL".to_string(), "no".to_string());

        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);
        let prompt = Prompt {
            key: "confirm_install".to_string(),
            question: "Install?".to_string(),
            prompt_type: PromptType::Confirm,
            default: Some("yes".to_string()),
        };

        let result = ui.prompt(&prompt).unwrap();
        assert_eq!(result.as_bool(), Some(false));
    }

    #[test]
    fn input_prompt_returns_string() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let prompt = Prompt {
            key: "name".to_string(),
            question: "Name?".to_string(),
            prompt_type: PromptType::Input,
            default: Some("default_value".to_string()),
        };

        assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "default_value");
    }
}
