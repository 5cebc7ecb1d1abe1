use std::fmt::Write;

use crate::error::Result;
use crate::linter::{LintMode, LintSummary, Violation};

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    mode: LintMode,
}

impl TextFormatter {
    #[must_use]
    pub fn new(color: ColorMode, mode: LintMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(color),
            mode,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                // Check if stdout is a TTY
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_violation(&self, violation: &Violation, output: &mut String) {
        let code = self.paint(violation.code, ansi::RED);
        let _ = writeln!(
            output,
            "{}:{code}:{}: {}",
            violation.file, violation.line, violation.message
        );
    }

    fn format_summary_line(&self, summary: &LintSummary) -> String {
        let reads = if summary.pairs > 0 {
            format!("{} reads ({} pairs)", summary.reads, summary.pairs)
        } else {
            format!("{} reads", summary.reads)
        };

        if summary.has_violations() {
            let count = summary.violations.len();
            let noun = if count == 1 { "violation" } else { "violations" };
            let icon = self.paint("✗", ansi::RED);
            format!("{icon} {reads} checked, {count} {noun} found")
        } else {
            let icon = self.paint("✓", ansi::GREEN);
            format!("{icon} {reads} checked, 0 violations found")
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, summary: &LintSummary) -> Result<String> {
        let mut output = String::new();

        match self.mode {
            LintMode::Error => {
                // In error mode the run stopped at this violation; the
                // long form replaces the summary line.
                if let Some(violation) = summary.violations.first() {
                    let _ = writeln!(output, "{}", violation.detailed());
                    return Ok(output);
                }
            }
            LintMode::Report => {
                for violation in &summary.violations {
                    self.format_violation(violation, &mut output);
                }
            }
        }

        let _ = writeln!(output, "{}", self.format_summary_line(summary));
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
