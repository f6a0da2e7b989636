//! Human-readable summary renderer for comparison results.

use std::collections::BTreeSet;

use crate::diff::key::display_ordinal;
use crate::diff::model::{AlignedItem, ComparisonResult, ModifiedMinister};
use crate::model::Minister;

const PLACEHOLDER: &str = "—";

/// Render a Markdown summary of a [`ComparisonResult`].
///
/// Intended for review workflows. It is informational only and carries
/// nothing the structured result does not.
pub fn render_human_summary(result: &ComparisonResult) -> String {
    let mut out = String::new();

    out.push_str("## Gazette Comparison\n\n");

    if result.is_empty() {
        out.push_str("_No structural changes detected._\n");
        return out;
    }

    out.push_str(&format!("**Changes**: {}\n\n", result.change_count()));

    render_minister_list(&mut out, "Added Ministries", &result.added_ministers);
    render_minister_list(&mut out, "Removed Ministries", &result.removed_ministers);

    for modified in &result.modified_ministers {
        render_modified(&mut out, modified);
    }

    let has_standalone = !result.added_departments.is_empty()
        || !result.removed_departments.is_empty()
        || !result.added_laws.is_empty()
        || !result.removed_laws.is_empty()
        || !result.added_functions.is_empty()
        || !result.removed_functions.is_empty();
    if has_standalone {
        out.push_str("### Standalone Changes\n\n");
        push_set(&mut out, "Added departments", &result.added_departments);
        push_set(&mut out, "Removed departments", &result.removed_departments);
        push_set(&mut out, "Added laws", &result.added_laws);
        push_set(&mut out, "Removed laws", &result.removed_laws);
        push_set(&mut out, "Added functions", &result.added_functions);
        push_set(&mut out, "Removed functions", &result.removed_functions);
        out.push('\n');
    }

    out
}

fn render_minister_list(out: &mut String, title: &str, ministers: &[Minister]) {
    if ministers.is_empty() {
        return;
    }
    out.push_str(&format!("### {} ({})\n\n", title, ministers.len()));
    for (index, minister) in ministers.iter().enumerate() {
        out.push_str(&format!(
            "- **{}** {}\n",
            display_ordinal(minister, index),
            minister.name
        ));
    }
    out.push('\n');
}

fn render_modified(out: &mut String, modified: &ModifiedMinister) {
    out.push_str(&format!("### Modified: {}\n\n", modified.name));

    push_items(out, "Departments", &modified.departments_added, &modified.departments_removed);
    push_items(out, "Laws", &modified.laws_added, &modified.laws_removed);
    push_items(out, "Functions", &modified.functions_added, &modified.functions_removed);
    out.push('\n');

    if let Some(alignment) = &modified.alignment {
        push_alignment(out, "Departments", &alignment.departments);
        push_alignment(out, "Laws", &alignment.laws);
        push_alignment(out, "Functions", &alignment.functions);
    }
}

fn push_items(out: &mut String, label: &str, added: &BTreeSet<String>, removed: &BTreeSet<String>) {
    if added.is_empty() && removed.is_empty() {
        return;
    }
    out.push_str(&format!("- **{}**\n", label));
    for item in added {
        out.push_str(&format!("  - `+` {}\n", item));
    }
    for item in removed {
        out.push_str(&format!("  - `-` {}\n", item));
    }
}

fn push_set(out: &mut String, label: &str, items: &BTreeSet<String>) {
    if items.is_empty() {
        return;
    }
    let joined: Vec<&str> = items.iter().map(String::as_str).collect();
    out.push_str(&format!("- **{}** ({}): {}\n", label, items.len(), joined.join(", ")));
}

fn push_alignment(out: &mut String, label: &str, rows: &[AlignedItem]) {
    if rows.is_empty() {
        return;
    }
    out.push_str(&format!("| {} | Base | Amendment |\n|---|---|---|\n", label));
    for (index, row) in rows.iter().enumerate() {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            index + 1,
            row.base_cell().unwrap_or(PLACEHOLDER),
            row.amendment_cell().unwrap_or(PLACEHOLDER)
        ));
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_renders_no_change_line() {
        let summary = render_human_summary(&ComparisonResult::default());
        assert!(summary.starts_with("## Gazette Comparison"));
        assert!(summary.contains("_No structural changes detected._"));
    }

    #[test]
    fn test_added_ministry_uses_positional_ordinal_when_unnumbered() {
        let result = ComparisonResult {
            added_ministers: vec![Minister::new(None, "Heritage")],
            ..ComparisonResult::default()
        };
        let summary = render_human_summary(&result);
        assert!(summary.contains("### Added Ministries (1)"));
        assert!(summary.contains("- **01** Heritage"));
    }

    #[test]
    fn test_standalone_sets_are_joined() {
        let mut result = ComparisonResult::default();
        result.removed_laws.insert("Excise Act".to_string());
        result.removed_laws.insert("Customs Ordinance".to_string());

        let summary = render_human_summary(&result);
        assert!(summary.contains("- **Removed laws** (2): Customs Ordinance, Excise Act"));
    }
}
