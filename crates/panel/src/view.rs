//! View projection: pure mapping from a ranked top-10 subset (plus the
//! current selection, for highlighting) to the chart and table payloads a
//! rendering client consumes. No state of its own.

use areas::{AreaRecord, Dataset, GroupField};
use serde::Serialize;

use crate::selection::SelectionSet;
use crate::variant::DashboardVariant;

/// Bar fill when the area is currently selected.
pub const HIGHLIGHT_COLOR: &str = "green";
/// Bar fill otherwise.
pub const BASE_COLOR: &str = "DarkSeaGreen";
/// Sequential scale of the choropleth fill.
pub const COLOR_SCALE: &str = "YlOrRd";
/// Placeholder for a metric the upstream table has no figure for.
pub const MISSING_VALUE: &str = "n/d";

pub const MAP_CENTER_LAT: f64 = -14.0;
pub const MAP_CENTER_LON: f64 = -55.0;
pub const MAP_ZOOM: u32 = 3;
pub const MAP_STYLE: &str = "open-street-map";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    /// Bars are ordered descending by value; the renderer flips the axis
    /// so the largest bar sits on top.
    pub y_axis_reversed: bool,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub name: String,
    pub value_km2: f64,
    /// Text drawn on the bar, e.g. `98.21 km²`.
    pub label: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Choropleth {
    pub title: String,
    pub color_scale: &'static str,
    /// GeoJSON property the renderer joins locations on.
    pub feature_key: &'static str,
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u32,
    pub style: &'static str,
    pub regions: Vec<Region>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub name: String,
    pub value_km2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<Slice>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub label: String,
    /// The variant's secondary category (phase, use, modality or UF).
    pub category: Option<String>,
    pub value_km2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub title: String,
    pub columns: [&'static str; 5],
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub name: String,
    pub heat_spots: String,
    pub car_count: String,
    pub car_area: String,
    pub road_length: String,
}

pub const TABLE_COLUMNS: [&str; 5] = [
    "Nome",
    "Focos de Calor",
    "Nº de CAR",
    "Área de CAR",
    "Estradas Não Oficiais",
];

pub fn bar_chart(
    top: &[&AreaRecord],
    selection: &SelectionSet,
    variant: &DashboardVariant,
) -> BarChart {
    let bars = top
        .iter()
        .map(|r| {
            let value = r.threat_km2.unwrap_or(0.0);
            Bar {
                name: r.name.clone(),
                value_km2: value,
                label: format!("{value:.2} km²"),
                color: if selection.contains(&r.name) {
                    HIGHLIGHT_COLOR
                } else {
                    BASE_COLOR
                },
            }
        })
        .collect();

    BarChart {
        title: variant.bar_title.to_string(),
        x_title: "Área (km²)".to_string(),
        y_title: variant.area_label.to_string(),
        y_axis_reversed: true,
        bars,
    }
}

/// Areas without a boundary shape are omitted, not errors: they simply do
/// not render on the map.
pub fn choropleth(top: &[&AreaRecord], dataset: &Dataset, variant: &DashboardVariant) -> Choropleth {
    let regions = top
        .iter()
        .filter(|r| dataset.shape(&r.name).is_some())
        .map(|r| Region {
            name: r.name.clone(),
            value_km2: r.threat_km2.unwrap_or(0.0),
        })
        .collect();

    Choropleth {
        title: variant.map_title.to_string(),
        color_scale: COLOR_SCALE,
        feature_key: "properties.NOME",
        center_lat: MAP_CENTER_LAT,
        center_lon: MAP_CENTER_LON,
        zoom: MAP_ZOOM,
        style: MAP_STYLE,
        regions,
    }
}

/// Proportional breakdown of the threat metric, grouped by `primary`.
/// Slice values are summed per primary label, first-seen order; the slice
/// carries the `category` value of the group's first record. Records
/// without a primary label are skipped.
pub fn pie_chart(
    top: &[&AreaRecord],
    primary: GroupField,
    category: GroupField,
    title: &str,
) -> PieChart {
    let mut slices: Vec<Slice> = Vec::new();
    for record in top {
        let Some(label) = primary.value(record) else {
            continue;
        };
        let value = record.threat_km2.unwrap_or(0.0);
        match slices.iter().position(|s| s.label == label) {
            Some(idx) => slices[idx].value_km2 += value,
            None => slices.push(Slice {
                label: label.to_string(),
                category: category.value(record).map(str::to_string),
                value_km2: value,
            }),
        }
    }

    PieChart {
        title: title.to_string(),
        slices,
    }
}

pub fn table_view(top: &[&AreaRecord], variant: &DashboardVariant) -> TableView {
    let rows = top
        .iter()
        .map(|r| TableRow {
            name: r.name.clone(),
            heat_spots: fmt_count(r.heat_spots),
            car_count: fmt_count(r.car_count),
            car_area: fmt_unit(r.car_area_km2, "km²"),
            road_length: fmt_unit(r.road_km, "km"),
        })
        .collect();

    TableView {
        title: variant.table_title.to_string(),
        columns: TABLE_COLUMNS,
        rows,
    }
}

fn fmt_count(value: Option<i64>) -> String {
    match value {
        Some(n) => n.to_string(),
        None => MISSING_VALUE.to_string(),
    }
}

fn fmt_unit(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{v:.2} {unit}"),
        None => MISSING_VALUE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{BASE_COLOR, HIGHLIGHT_COLOR, bar_chart, choropleth, pie_chart, table_view};
    use crate::selection::SelectionSet;
    use crate::variant::VARIANTS;
    use areas::{AreaGeometry, AreaRecord, AreaShape, Dataset, GeoPoint, GroupField};
    use pretty_assertions::assert_eq;

    fn record(name: &str, uf: &str, threat: Option<f64>) -> AreaRecord {
        AreaRecord {
            name: name.to_string(),
            uf: Some(uf.to_string()),
            modality: Some("Terra Indigena".to_string()),
            phase: Some("Regularizada".to_string()),
            land_use: None,
            category: None,
            rank: 1,
            threat_km2: threat,
            heat_spots: Some(12),
            car_count: None,
            car_area_km2: Some(30.456),
            road_km: None,
        }
    }

    fn shape(name: &str) -> AreaShape {
        AreaShape {
            name: name.to_string(),
            rank: 1,
            geometry: AreaGeometry::Polygon(vec![vec![
                GeoPoint::new(-55.0, -14.0),
                GeoPoint::new(-54.0, -14.0),
                GeoPoint::new(-54.0, -13.0),
                GeoPoint::new(-55.0, -14.0),
            ]]),
        }
    }

    #[test]
    fn bar_chart_highlights_selected_names() {
        let a = record("AREA A", "PA", Some(9.0));
        let b = record("AREA B", "PA", Some(5.0));
        let mut selection = SelectionSet::new();
        selection.insert("AREA B");

        let chart = bar_chart(&[&a, &b], &selection, &VARIANTS[0]);
        assert!(chart.y_axis_reversed);
        assert_eq!(chart.bars[0].color, BASE_COLOR);
        assert_eq!(chart.bars[1].color, HIGHLIGHT_COLOR);
        assert_eq!(chart.bars[0].label, "9.00 km²");
    }

    #[test]
    fn choropleth_omits_names_without_a_shape() {
        let a = record("AREA A", "PA", Some(9.0));
        let b = record("AREA B", "PA", Some(5.0));
        let ds = Dataset::new(vec![a.clone(), b.clone()], vec![shape("AREA A")]);

        let map = choropleth(&[&a, &b], &ds, &VARIANTS[0]);
        assert_eq!(map.regions.len(), 1);
        assert_eq!(map.regions[0].name, "AREA A");
        assert_eq!(map.feature_key, "properties.NOME");
    }

    #[test]
    fn pie_sums_per_primary_label() {
        let a = record("AREA A", "PA", Some(9.0));
        let b = record("AREA B", "PA", Some(5.0));
        let c = record("AREA C", "MA", Some(2.0));

        let pie = pie_chart(&[&a, &b, &c], GroupField::Uf, GroupField::Phase, "t");
        assert_eq!(pie.slices.len(), 2);
        assert_eq!(pie.slices[0].label, "PA");
        assert_eq!(pie.slices[0].value_km2, 14.0);
        assert_eq!(pie.slices[0].category.as_deref(), Some("Regularizada"));
        assert_eq!(pie.slices[1].label, "MA");
    }

    #[test]
    fn table_guards_missing_numerics() {
        let a = record("AREA A", "PA", Some(9.0));
        let table = table_view(&[&a], &VARIANTS[0]);
        let row = &table.rows[0];
        assert_eq!(row.heat_spots, "12");
        assert_eq!(row.car_count, "n/d");
        assert_eq!(row.car_area, "30.46 km²");
        assert_eq!(row.road_length, "n/d");
    }

    #[test]
    fn empty_top_renders_empty_payloads() {
        let ds = Dataset::new(vec![], vec![]);
        let selection = SelectionSet::new();
        let v = &VARIANTS[0];

        assert!(bar_chart(&[], &selection, v).bars.is_empty());
        assert!(choropleth(&[], &ds, v).regions.is_empty());
        assert!(
            pie_chart(&[], GroupField::Uf, GroupField::Phase, "t")
                .slices
                .is_empty()
        );
        assert!(table_view(&[], v).rows.is_empty());
    }
}
