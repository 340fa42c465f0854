use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::geometry::AreaShape;

/// One row of a protected-area table.
///
/// `name` is unique within a dataset and already normalized (uppercase,
/// diacritics folded). Numeric metrics are optional: an absent value means
/// the upstream table had no figure for that area, never zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaRecord {
    pub name: String,
    pub uf: Option<String>,
    pub modality: Option<String>,
    /// Legal phase of an Indigenous Land (Regularizada, Declarada, ...).
    pub phase: Option<String>,
    /// Use class of a Conservation Unit (Uso Sustentavel, Protecao Integral).
    pub land_use: Option<String>,
    pub category: Option<String>,
    /// Precomputed ordering value; stabilizes the initial sort only.
    pub rank: i64,
    /// Deforestation threat/pressure area in km². Ranking metric.
    pub threat_km2: Option<f64>,
    pub heat_spots: Option<i64>,
    pub car_count: Option<i64>,
    pub car_area_km2: Option<f64>,
    pub road_km: Option<f64>,
}

/// A grouping/filter column of [`AreaRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupField {
    Name,
    Uf,
    Modality,
    Phase,
    Use,
    Category,
}

impl GroupField {
    pub fn value<'a>(&self, record: &'a AreaRecord) -> Option<&'a str> {
        match self {
            GroupField::Name => Some(record.name.as_str()),
            GroupField::Uf => record.uf.as_deref(),
            GroupField::Modality => record.modality.as_deref(),
            GroupField::Phase => record.phase.as_deref(),
            GroupField::Use => record.land_use.as_deref(),
            GroupField::Category => record.category.as_deref(),
        }
    }
}

/// A fully loaded dashboard dataset: the table rows plus the boundary
/// shapes, both sorted by rank ascending at construction.
///
/// Immutable after construction; shared read-only across sessions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    areas: Vec<AreaRecord>,
    shapes: Vec<AreaShape>,
    shape_index: BTreeMap<String, usize>,
}

impl Dataset {
    pub fn new(mut areas: Vec<AreaRecord>, mut shapes: Vec<AreaShape>) -> Self {
        areas.sort_by_key(|a| a.rank);
        shapes.sort_by_key(|s| s.rank);
        let shape_index = shapes
            .iter()
            .enumerate()
            .map(|(idx, s)| (s.name.clone(), idx))
            .collect();
        Self {
            areas,
            shapes,
            shape_index,
        }
    }

    pub fn areas(&self) -> &[AreaRecord] {
        &self.areas
    }

    pub fn shapes(&self) -> &[AreaShape] {
        &self.shapes
    }

    /// Boundary shape for a normalized area name, if the boundary dataset
    /// has one. Areas without a shape simply do not render on the map.
    pub fn shape(&self, name: &str) -> Option<&AreaShape> {
        self.shape_index.get(name).map(|&idx| &self.shapes[idx])
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{AreaRecord, Dataset, GroupField};
    use crate::geometry::{AreaGeometry, AreaShape, GeoPoint};

    fn record(name: &str, rank: i64, threat: Option<f64>) -> AreaRecord {
        AreaRecord {
            name: name.to_string(),
            uf: Some("PA".to_string()),
            modality: Some("Terra Indigena".to_string()),
            phase: Some("Regularizada".to_string()),
            land_use: None,
            category: None,
            rank,
            threat_km2: threat,
            heat_spots: Some(10),
            car_count: Some(3),
            car_area_km2: Some(12.5),
            road_km: Some(4.2),
        }
    }

    fn shape(name: &str, rank: i64) -> AreaShape {
        AreaShape {
            name: name.to_string(),
            rank,
            geometry: AreaGeometry::Polygon(vec![vec![
                GeoPoint::new(-55.0, -14.0),
                GeoPoint::new(-54.0, -14.0),
                GeoPoint::new(-54.0, -13.0),
                GeoPoint::new(-55.0, -14.0),
            ]]),
        }
    }

    #[test]
    fn dataset_sorts_by_rank_on_construction() {
        let ds = Dataset::new(
            vec![
                record("AREA B", 2, Some(5.0)),
                record("AREA A", 1, Some(9.0)),
            ],
            vec![shape("AREA B", 2), shape("AREA A", 1)],
        );
        assert_eq!(ds.areas()[0].name, "AREA A");
        assert_eq!(ds.shapes()[0].name, "AREA A");
    }

    #[test]
    fn shape_lookup_by_name() {
        let ds = Dataset::new(vec![record("AREA A", 1, None)], vec![shape("AREA A", 1)]);
        assert!(ds.shape("AREA A").is_some());
        assert!(ds.shape("AREA Z").is_none());
    }

    #[test]
    fn group_field_reads_the_right_column() {
        let r = record("AREA A", 1, Some(1.0));
        assert_eq!(GroupField::Name.value(&r), Some("AREA A"));
        assert_eq!(GroupField::Uf.value(&r), Some("PA"));
        assert_eq!(GroupField::Phase.value(&r), Some("Regularizada"));
        assert_eq!(GroupField::Use.value(&r), None);
    }
}
