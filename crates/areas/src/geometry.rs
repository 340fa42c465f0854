#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lon_deg: f64,
    pub lat_deg: f64,
}

impl GeoPoint {
    pub fn new(lon_deg: f64, lat_deg: f64) -> Self {
        Self { lon_deg, lat_deg }
    }
}

/// Boundary geometry of a protected area.
///
/// Only the surface types a choropleth can fill. Rings follow GeoJSON
/// conventions: the first ring is the exterior, the rest are holes.
#[derive(Debug, Clone, PartialEq)]
pub enum AreaGeometry {
    Polygon(Vec<Vec<GeoPoint>>),
    MultiPolygon(Vec<Vec<Vec<GeoPoint>>>),
}

/// One boundary feature, keyed by the same normalized name as the table.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaShape {
    pub name: String,
    pub rank: i64,
    pub geometry: AreaGeometry,
}
