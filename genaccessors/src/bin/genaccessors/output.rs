use colored::Colorize;

use crate::theme::{ICONS, THEME};

/// Global CLI options that affect status output
#[derive(Clone, Debug, Default)]
pub struct GlobalOptions {
    pub quiet: bool,
    pub verbose: bool,
    pub no_color: bool,
}

/// Status messages for the CLI.
///
/// Everything goes to stderr: stdout is reserved for the generated module.
pub struct OutputManager {
    pub options: GlobalOptions,
}

impl OutputManager {
    pub fn new(options: GlobalOptions) -> Self {
        Self { options }
    }

    fn decorate(&self, icon: &str, message: &str, color: colored::Color) -> String {
        if self.options.no_color {
            format!("{icon} {message}")
        } else {
            format!("{} {}", icon.color(color), message.color(color))
        }
    }

    /// Display a success message with color and icon
    pub fn success(&self, message: &str) {
        if !self.options.quiet {
            eprintln!("{}", self.decorate(ICONS.success, message, THEME.success));
        }
    }

    /// Display an error message; never suppressed by `--quiet`
    pub fn error(&self, message: &str) {
        eprintln!("{}", self.decorate(ICONS.error, message, THEME.error));
    }

    /// Display a warning message
    pub fn warning(&self, message: &str) {
        if !self.options.quiet {
            eprintln!("{}", self.decorate(ICONS.warning, message, THEME.warning));
        }
    }

    /// Display info message with color and icon
    pub fn info(&self, message: &str) {
        if !self.options.quiet {
            eprintln!("{}", self.decorate(ICONS.info, message, THEME.info));
        }
    }

    /// Display verbose information (only if verbose mode is enabled)
    pub fn verbose(&self, message: &str) {
        if self.options.verbose && !self.options.quiet {
            eprintln!("{}", self.decorate(ICONS.arrow, message, THEME.muted));
        }
    }

    /// Display a key-value pair in verbose mode
    pub fn key_value(&self, key: &str, value: &str) {
        if !self.options.verbose || self.options.quiet {
            return;
        }
        let output = if self.options.no_color {
            format!("  {key}: {value}")
        } else {
            format!(
                "  {}: {}",
                key.color(THEME.key).bold(),
                value.color(THEME.value)
            )
        };
        eprintln!("{output}");
    }
}
