use serde::Serialize;

use crate::error::Result;
use crate::linter::{LintSummary, Violation};

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    violations: Vec<JsonViolation>,
}

#[derive(Serialize)]
struct Summary {
    reads: u64,
    pairs: u64,
    violations: usize,
    passed: bool,
}

#[derive(Serialize)]
struct JsonViolation {
    file: String,
    line: u64,
    readname: String,
    code: String,
    message: String,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, summary: &LintSummary) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                reads: summary.reads,
                pairs: summary.pairs,
                violations: summary.violations.len(),
                passed: !summary.has_violations(),
            },
            violations: summary.violations.iter().map(convert_violation).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_violation(violation: &Violation) -> JsonViolation {
    JsonViolation {
        file: violation.file.clone(),
        line: violation.line,
        readname: violation.readname.clone(),
        code: violation.code.to_string(),
        message: violation.message.clone(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
