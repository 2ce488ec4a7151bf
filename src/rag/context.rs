//! RAG context builder
//!
//! Serializes a student query and a set of ranked colleges into the flat
//! text block consumed by the generation service. Pure formatting: no
//! filtering, no truncation — the caller controls which records are
//! passed (the CLI passes exactly the one the student selected).

use crate::data::FieldValue;
use crate::ranking::{Query, RankedRecord};
use crate::utils::{field_label, format_currency};

/// Render a field value for the context block. Numeric values with an
/// absolute value above 999 are formatted as currency; everything else
/// is rendered as-is.
fn format_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(t) => t.clone(),
        FieldValue::Flag(b) => if *b { "Yes" } else { "No" }.to_string(),
        FieldValue::Number(n) if n.abs() > 999.0 => format_currency(*n),
        FieldValue::Number(n) => {
            if n.fract() == 0.0 {
                format!("{:.0}", n)
            } else {
                format!("{}", n)
            }
        }
    }
}

/// Build the RAG context from the student profile and selected records.
///
/// Two labeled blocks: one `- Label: value` line per non-empty query
/// field, then per record a `College: <name>` header followed by one
/// line per remaining dataset field.
pub fn build_context(query: &Query, records: &[RankedRecord]) -> String {
    let mut student_lines = vec!["Student Profile:".to_string()];
    for (name, value) in query.profile_fields() {
        student_lines.push(format!("- {}: {}", field_label(name), format_value(&value)));
    }
    let student_text = student_lines.join("\n");

    let college_blocks: Vec<String> = records
        .iter()
        .map(|ranked| {
            let mut lines = vec![format!("College: {}", ranked.record.name)];
            for (label, value) in ranked.record.fields() {
                lines.push(format!("- {}: {}", label, format_value(&value)));
            }
            lines.join("\n")
        })
        .collect();
    let colleges_text = college_blocks.join("\n\n");

    format!(
        "=== STUDENT PROFILE ===\n{}\n\n=== COLLEGE DATA ===\n{}\n",
        student_text, colleges_text
    )
}
