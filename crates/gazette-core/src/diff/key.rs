//! Composite ministry keys and display ordinals.
//!
//! Identity and presentation position are separate values: [`normalize_key`]
//! is the only thing used to match ministries across snapshots, while
//! [`display_ordinal`] may fall back to list position for rendering.

use crate::model::structure::effective_number;
use crate::model::Minister;

/// Left-pad an ordinal to two characters with `0`
fn pad_ordinal(number: &str) -> String {
    format!("{:0>2}", number)
}

/// Build the composite key `"{padded number}-{name}"`
///
/// The ordinal is trimmed before padding, so `" 3"` and `"3"` key alike.
/// A missing ordinal, the `"Unknown"` sentinel and a blank ordinal all
/// contribute an empty string, so such ministries match by name alone.
/// The name is used as given. Never fails.
pub fn normalize_key(number: Option<&str>, name: &str) -> String {
    let padded = effective_number(number)
        .map(pad_ordinal)
        .unwrap_or_default();
    format!("{}-{}", padded, name)
}

/// Ordinal shown next to a ministry in rendered lists
///
/// Uses the ministry's own number when present, else `index + 1`.
/// Not an identity: list positions are not stable between gazettes.
pub fn display_ordinal(minister: &Minister, index: usize) -> String {
    match minister.effective_number() {
        Some(n) => pad_ordinal(n),
        None => format!("{:02}", index + 1),
    }
}

/// Numeric value of an ordinal for presentation sorting
///
/// Non-numeric, sentinel and missing ordinals yield `None`.
pub fn ordinal_value(number: Option<&str>) -> Option<u64> {
    effective_number(number).and_then(|n| n.parse::<u64>().ok())
}
