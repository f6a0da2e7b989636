#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{minister, structure};
use gazette_core::diff::{compare, compare_with_options, render_human_summary, CompareOptions};

#[test]
fn test_summary_of_identical_snapshots() {
    let s = structure("2412/08", vec![minister(Some("01"), "Finance", &["Treasury"])]);
    let summary = render_human_summary(&compare(&s, &s));
    assert_eq!(summary, "## Gazette Comparison\n\n_No structural changes detected._\n");
}

#[test]
fn test_summary_lists_each_section() {
    let base = structure(
        "2289/43",
        vec![
            minister(Some("01"), "Finance", &["Treasury"]),
            minister(Some("07"), "Fisheries", &[]),
        ],
    );
    let amendment = structure(
        "2297/78",
        vec![
            minister(Some("01"), "Finance", &["Treasury", "Customs"]),
            minister(Some("15"), "Transport", &["Roads"]),
        ],
    )
    .with_laws(["Motor Traffic Act"]);

    let summary = render_human_summary(&compare(&base, &amendment));

    assert!(summary.contains("**Changes**: 4"));
    assert!(summary.contains("### Added Ministries (1)\n\n- **15** Transport"));
    assert!(summary.contains("### Removed Ministries (1)\n\n- **07** Fisheries"));
    assert!(summary.contains("### Modified: Finance"));
    assert!(summary.contains("  - `+` Customs"));
    assert!(summary.contains("- **Added laws** (1): Motor Traffic Act"));
}

#[test]
fn test_summary_renders_alignment_with_placeholders() {
    let base = structure("a", vec![minister(Some("01"), "Finance", &["Excise", "Treasury"])]);
    let amendment = structure("b", vec![minister(Some("01"), "Finance", &["Customs", "Treasury"])]);

    let result = compare_with_options(&base, &amendment, &CompareOptions::default().with_alignment(true));
    let summary = render_human_summary(&result);

    assert!(summary.contains("| Departments | Base | Amendment |"));
    assert!(summary.contains("| 1 | — | Customs |"));
    assert!(summary.contains("| 2 | Excise | — |"));
    assert!(summary.contains("| 3 | Treasury | Treasury |"));
}
