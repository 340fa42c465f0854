use std::collections::BTreeSet;

use serde::Serialize;

use crate::record::{AreaRecord, GroupField};

/// Valid values for each filter control, derived once from the loaded
/// dataset: sorted distinct non-null values per column.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterOptions {
    pub modalities: Vec<String>,
    pub secondary: Vec<String>,
    pub ufs: Vec<String>,
}

impl FilterOptions {
    /// `secondary` names the variant's phase/use column.
    pub fn derive(records: &[AreaRecord], secondary: GroupField) -> Self {
        Self {
            modalities: distinct_sorted(records, GroupField::Modality),
            secondary: distinct_sorted(records, secondary),
            ufs: distinct_sorted(records, GroupField::Uf),
        }
    }
}

fn distinct_sorted(records: &[AreaRecord], field: GroupField) -> Vec<String> {
    let set: BTreeSet<&str> = records.iter().filter_map(|r| field.value(r)).collect();
    set.into_iter().map(str::to_string).collect()
}
