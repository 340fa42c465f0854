use areas::{AreaRecord, FilterCriteria, GroupField};

use crate::selection::SelectionSet;

/// Rows shown per dashboard render.
pub const TOP_N: usize = 10;

/// Applies the dropdown criteria and then the selection, in the fixed
/// order modality → secondary (phase/use) → UF → selection. An empty
/// criteria list or an empty selection is a pass-through on that axis.
pub fn filter_candidates<'a>(
    records: &'a [AreaRecord],
    criteria: &FilterCriteria,
    secondary: GroupField,
    selection: &SelectionSet,
) -> Vec<&'a AreaRecord> {
    records
        .iter()
        .filter(|r| passes(r, GroupField::Modality, &criteria.modality))
        .filter(|r| passes(r, secondary, &criteria.secondary))
        .filter(|r| passes(r, GroupField::Uf, &criteria.uf))
        .filter(|r| selection.is_empty() || selection.contains(&r.name))
        .collect()
}

fn passes(record: &AreaRecord, field: GroupField, allowed: &[String]) -> bool {
    if allowed.is_empty() {
        return true;
    }
    match field.value(record) {
        Some(value) => allowed.iter().any(|a| a == value),
        None => false,
    }
}

/// Top `n` candidates by threat metric, descending.
///
/// The sort is stable: candidates with equal metric values keep their
/// dataset (rank) order. Candidates without the metric cannot be ranked
/// and drop out.
pub fn top_by_threat<'a>(candidates: &[&'a AreaRecord], n: usize) -> Vec<&'a AreaRecord> {
    let mut ranked: Vec<&AreaRecord> = candidates
        .iter()
        .copied()
        .filter(|r| r.threat_km2.is_some())
        .collect();
    ranked.sort_by(|a, b| {
        b.threat_km2
            .partial_cmp(&a.threat_km2)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(n);
    ranked
}
