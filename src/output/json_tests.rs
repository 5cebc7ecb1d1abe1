use super::*;

fn sample_summary() -> LintSummary {
    LintSummary {
        reads: 4,
        pairs: 2,
        violations: vec![Violation {
            file: "r1.fastq".to_string(),
            line: 8,
            readname: "@b".to_string(),
            code: "P001",
            message: "Read names do not match.".to_string(),
        }],
    }
}

#[test]
fn json_output_is_valid_and_pretty() {
    let output = JsonFormatter.format(&sample_summary()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert!(value.is_object());
    // Pretty printing spans multiple lines.
    assert!(output.contains('\n'));
}

#[test]
fn json_summary_carries_counts_and_status() {
    let output = JsonFormatter.format(&sample_summary()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["summary"]["reads"], 4);
    assert_eq!(value["summary"]["pairs"], 2);
    assert_eq!(value["summary"]["violations"], 1);
    assert_eq!(value["summary"]["passed"], false);
}

#[test]
fn json_violations_carry_location_and_message() {
    let output = JsonFormatter.format(&sample_summary()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    let violation = &value["violations"][0];
    assert_eq!(violation["file"], "r1.fastq");
    assert_eq!(violation["line"], 8);
    assert_eq!(violation["readname"], "@b");
    assert_eq!(violation["code"], "P001");
    assert_eq!(violation["message"], "Read names do not match.");
}

#[test]
fn json_clean_summary_has_empty_violations() {
    let summary = LintSummary {
        reads: 2,
        pairs: 0,
        violations: Vec::new(),
    };
    let output = JsonFormatter.format(&summary).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["summary"]["passed"], true);
    assert_eq!(value["violations"].as_array().unwrap().len(), 0);
}
