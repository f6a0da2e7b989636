//! Per-ministry reconciliation.
//!
//! Ministries are matched purely by composite key. A ministry renumbered or
//! renamed between gazettes therefore surfaces as one removal plus one
//! addition; nothing here tries to infer that the two are the same unit.

use std::collections::{BTreeMap, BTreeSet};

use crate::diff::model::{AlignedItem, MinisterAlignment, ModifiedMinister};
use crate::diff::set_delta::diff;
use crate::model::{GovernmentStructure, Minister};

/// Ministry-level part of a comparison
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MinisterDelta {
    pub added: Vec<Minister>,
    pub removed: Vec<Minister>,
    pub modified: Vec<ModifiedMinister>,
}

/// Index ministries by composite key
///
/// Snapshots that passed boundary validation have unique keys. If a
/// duplicate slips through, the first occurrence wins and a warning is logged.
pub fn index_by_key<'a>(gazette_id: &str, ministers: &'a [Minister]) -> BTreeMap<String, &'a Minister> {
    let mut index = BTreeMap::new();
    for minister in ministers {
        let key = minister.key();
        if index.contains_key(&key) {
            tracing::warn!(
                gazette_id = gazette_id,
                minister_key = %key,
                "duplicate ministry key; keeping first occurrence"
            );
            continue;
        }
        index.insert(key, minister);
    }
    index
}

/// Compare one shared ministry
///
/// Returns `None` when departments, laws and functions are all unchanged.
pub fn compare_minister(key: &str, base: &Minister, amendment: &Minister) -> Option<ModifiedMinister> {
    let departments = diff(&base.departments, &amendment.departments);
    let laws = diff(&base.laws, &amendment.laws);
    let functions = diff(&base.functions, &amendment.functions);

    if !departments.is_changed() && !laws.is_changed() && !functions.is_changed() {
        return None;
    }

    Some(ModifiedMinister {
        key: key.to_string(),
        number: amendment.number.clone(),
        name: amendment.name.clone(),
        departments_added: departments.added,
        departments_removed: departments.removed,
        functions_added: functions.added,
        functions_removed: functions.removed,
        laws_added: laws.added,
        laws_removed: laws.removed,
        alignment: None,
    })
}

fn align_items(base: &BTreeSet<String>, amendment: &BTreeSet<String>) -> Vec<AlignedItem> {
    base.union(amendment)
        .map(|item| AlignedItem {
            item: item.clone(),
            in_base: base.contains(item),
            in_amendment: amendment.contains(item),
        })
        .collect()
}

/// Build the side-by-side alignment for one shared ministry
pub fn align(base: &Minister, amendment: &Minister) -> MinisterAlignment {
    MinisterAlignment {
        departments: align_items(&base.departments, &amendment.departments),
        laws: align_items(&base.laws, &amendment.laws),
        functions: align_items(&base.functions, &amendment.functions),
    }
}

/// Alignment for every ministry key present in both snapshots, modified or not
pub fn align_ministers(
    base: &GovernmentStructure,
    amendment: &GovernmentStructure,
) -> BTreeMap<String, MinisterAlignment> {
    let base_index = index_by_key(&base.gazette_id, &base.ministers);
    let amendment_index = index_by_key(&amendment.gazette_id, &amendment.ministers);

    base_index
        .iter()
        .filter_map(|(key, b)| {
            amendment_index
                .get(key)
                .map(|a| (key.clone(), align(b, a)))
        })
        .collect()
}

/// Ministry-level comparison of two snapshots
///
/// Output lists are in key order; presentation ordering is applied later by
/// the assembler.
pub fn reconcile_ministers(
    base: &GovernmentStructure,
    amendment: &GovernmentStructure,
    include_alignment: bool,
) -> MinisterDelta {
    let base_index = index_by_key(&base.gazette_id, &base.ministers);
    let amendment_index = index_by_key(&amendment.gazette_id, &amendment.ministers);

    let mut delta = MinisterDelta::default();

    for (key, amendment_minister) in &amendment_index {
        if !base_index.contains_key(key) {
            delta.added.push((*amendment_minister).clone());
        }
    }

    for (key, base_minister) in &base_index {
        match amendment_index.get(key) {
            None => delta.removed.push((*base_minister).clone()),
            Some(amendment_minister) => {
                if let Some(mut modified) = compare_minister(key, base_minister, amendment_minister) {
                    if include_alignment {
                        modified.alignment = Some(align(base_minister, amendment_minister));
                    }
                    delta.modified.push(modified);
                }
            }
        }
    }

    delta
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finance(departments: &[&str]) -> Minister {
        Minister::new(Some("01"), "Finance").with_departments(departments.iter().copied())
    }

    #[test]
    fn test_unchanged_ministry_is_not_reported() {
        assert!(compare_minister("01-Finance", &finance(&["Treasury"]), &finance(&["Treasury"])).is_none());
    }

    #[test]
    fn test_law_only_change_marks_modified() {
        let base = finance(&["Treasury"]);
        let amendment = finance(&["Treasury"]).with_laws(["Finance Act"]);

        let modified = compare_minister("01-Finance", &base, &amendment).unwrap();
        assert!(modified.departments_added.is_empty());
        assert_eq!(modified.laws_added.len(), 1);
    }

    #[test]
    fn test_alignment_is_sorted_union_with_presence() {
        let base = finance(&["Treasury", "Excise"]);
        let amendment = finance(&["Treasury", "Customs"]);

        let alignment = align(&base, &amendment);
        let rows: Vec<(&str, bool, bool)> = alignment
            .departments
            .iter()
            .map(|r| (r.item.as_str(), r.in_base, r.in_amendment))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Customs", false, true),
                ("Excise", true, false),
                ("Treasury", true, true),
            ]
        );
    }

    #[test]
    fn test_align_ministers_covers_unchanged_and_modified_shared_keys() {
        let base = GovernmentStructure::new("2289/43")
            .with_minister(finance(&["Treasury"]))
            .with_minister(Minister::new(Some("02"), "Health").with_departments(["Hospitals"]))
            .with_minister(Minister::new(Some("03"), "Ports"));
        let amendment = GovernmentStructure::new("2297/78")
            .with_minister(finance(&["Treasury", "Customs"]))
            .with_minister(Minister::new(Some("02"), "Health").with_departments(["Hospitals"]));

        let alignments = align_ministers(&base, &amendment);
        let keys: Vec<&str> = alignments.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["01-Finance", "02-Health"]);

        assert_eq!(alignments["01-Finance"].departments.len(), 2);
        let health = &alignments["02-Health"].departments;
        assert_eq!(health.len(), 1);
        assert!(health[0].in_base && health[0].in_amendment);
    }

    #[test]
    fn test_duplicate_key_keeps_first() {
        let ministers = vec![finance(&["Treasury"]), finance(&["Customs"])];
        let index = index_by_key("g", &ministers);
        assert_eq!(index.len(), 1);
        assert!(index["01-Finance"].departments.contains("Treasury"));
    }
}
