//! Boundary dataset parsing: GeoJSON FeatureCollection → [`AreaShape`]s.
//!
//! Only surface geometries are accepted (a choropleth cannot fill points
//! or lines). Feature names are normalized here so that every name inside
//! the process is already uppercase/ASCII-folded.

use areas::{AreaGeometry, AreaShape, GeoPoint, normalize_name};
use serde_json::{Map, Value};

#[derive(Debug)]
pub enum BoundaryError {
    NotAFeatureCollection,
    InvalidFeature { index: usize, reason: String },
}

impl std::fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundaryError::NotAFeatureCollection => {
                write!(f, "expected GeoJSON FeatureCollection")
            }
            BoundaryError::InvalidFeature { index, reason } => {
                write!(f, "invalid feature at index {index}: {reason}")
            }
        }
    }
}

impl std::error::Error for BoundaryError {}

pub fn parse_boundaries(payload: &str) -> Result<Vec<AreaShape>, BoundaryError> {
    let value: Value =
        serde_json::from_str(payload).map_err(|e| BoundaryError::InvalidFeature {
            index: 0,
            reason: format!("JSON parse error: {e}"),
        })?;
    parse_boundaries_value(&value)
}

pub fn parse_boundaries_value(value: &Value) -> Result<Vec<AreaShape>, BoundaryError> {
    let obj = value
        .as_object()
        .ok_or(BoundaryError::NotAFeatureCollection)?;
    let ty = obj
        .get("type")
        .and_then(|v| v.as_str())
        .ok_or(BoundaryError::NotAFeatureCollection)?;
    if ty != "FeatureCollection" {
        return Err(BoundaryError::NotAFeatureCollection);
    }

    let features_val = obj
        .get("features")
        .and_then(|v| v.as_array())
        .ok_or(BoundaryError::NotAFeatureCollection)?;

    let mut shapes = Vec::with_capacity(features_val.len());
    for (index, feat_val) in features_val.iter().enumerate() {
        let feat_obj = feat_val.as_object().ok_or(BoundaryError::InvalidFeature {
            index,
            reason: "feature must be an object".to_string(),
        })?;

        let feat_type = feat_obj.get("type").and_then(|v| v.as_str()).ok_or(
            BoundaryError::InvalidFeature {
                index,
                reason: "feature missing type".to_string(),
            },
        )?;
        if feat_type != "Feature" {
            return Err(BoundaryError::InvalidFeature {
                index,
                reason: format!("unexpected feature type: {feat_type}"),
            });
        }

        let properties = feat_obj
            .get("properties")
            .and_then(|v| v.as_object())
            .ok_or(BoundaryError::InvalidFeature {
                index,
                reason: "feature missing properties".to_string(),
            })?;

        let raw_name = properties
            .get("NOME")
            .and_then(|v| v.as_str())
            .ok_or(BoundaryError::InvalidFeature {
                index,
                reason: "properties missing NOME".to_string(),
            })?;
        let name = normalize_name(raw_name);
        if name.is_empty() {
            return Err(BoundaryError::InvalidFeature {
                index,
                reason: "empty NOME".to_string(),
            });
        }

        let rank = properties
            .get("RANK")
            .and_then(as_i64_lenient)
            .ok_or(BoundaryError::InvalidFeature {
                index,
                reason: "properties missing RANK".to_string(),
            })?;

        let geometry_val = feat_obj
            .get("geometry")
            .ok_or(BoundaryError::InvalidFeature {
                index,
                reason: "feature missing geometry".to_string(),
            })?;
        let geometry = parse_geometry(geometry_val)
            .map_err(|reason| BoundaryError::InvalidFeature { index, reason })?;

        shapes.push(AreaShape {
            name,
            rank,
            geometry,
        });
    }

    Ok(shapes)
}

/// Emits the shapes back as a GeoJSON FeatureCollection for the map client.
/// Feature key is `properties.NOME`, matching the choropleth join.
pub fn boundaries_to_geojson_value(shapes: &[AreaShape]) -> Value {
    let mut root = Map::new();
    root.insert(
        "type".to_string(),
        Value::String("FeatureCollection".to_string()),
    );

    let mut features: Vec<Value> = Vec::with_capacity(shapes.len());
    for shape in shapes {
        let mut props = Map::new();
        props.insert("NOME".to_string(), Value::String(shape.name.clone()));
        props.insert("RANK".to_string(), Value::from(shape.rank));

        let mut fobj = Map::new();
        fobj.insert("type".to_string(), Value::String("Feature".to_string()));
        fobj.insert("properties".to_string(), Value::Object(props));
        fobj.insert(
            "geometry".to_string(),
            geometry_to_geojson_value(&shape.geometry),
        );
        features.push(Value::Object(fobj));
    }

    root.insert("features".to_string(), Value::Array(features));
    Value::Object(root)
}

fn geometry_to_geojson_value(geom: &AreaGeometry) -> Value {
    let mut obj = Map::new();
    match geom {
        AreaGeometry::Polygon(rings) => {
            obj.insert("type".to_string(), Value::String("Polygon".to_string()));
            obj.insert("coordinates".to_string(), Value::Array(rings_coords(rings)));
        }
        AreaGeometry::MultiPolygon(polys) => {
            obj.insert(
                "type".to_string(),
                Value::String("MultiPolygon".to_string()),
            );
            let coords = polys
                .iter()
                .map(|poly| Value::Array(rings_coords(poly)))
                .collect();
            obj.insert("coordinates".to_string(), Value::Array(coords));
        }
    }
    Value::Object(obj)
}

fn rings_coords(rings: &[Vec<GeoPoint>]) -> Vec<Value> {
    rings
        .iter()
        .map(|ring| Value::Array(ring.iter().map(point_coords).collect()))
        .collect()
}

fn point_coords(p: &GeoPoint) -> Value {
    Value::Array(vec![Value::from(p.lon_deg), Value::from(p.lat_deg)])
}

fn parse_geometry(value: &Value) -> Result<AreaGeometry, String> {
    let obj = value
        .as_object()
        .ok_or("geometry must be an object".to_string())?;
    let ty = obj
        .get("type")
        .and_then(|v| v.as_str())
        .ok_or("geometry missing type".to_string())?;

    let coords = obj
        .get("coordinates")
        .ok_or("geometry missing coordinates".to_string())?;

    match ty {
        "Polygon" => Ok(AreaGeometry::Polygon(parse_polygon(coords)?)),
        "MultiPolygon" => Ok(AreaGeometry::MultiPolygon(parse_multi_polygon(coords)?)),
        other => Err(format!("unsupported geometry type: {other}")),
    }
}

fn parse_point(coords: &Value) -> Result<GeoPoint, String> {
    let arr = coords
        .as_array()
        .ok_or("position must be an array".to_string())?;
    if arr.len() < 2 {
        return Err("position must have [lon, lat]".to_string());
    }
    let lon = arr[0].as_f64().ok_or("lon must be a number".to_string())?;
    let lat = arr[1].as_f64().ok_or("lat must be a number".to_string())?;
    Ok(GeoPoint::new(lon, lat))
}

fn parse_ring(coords: &Value) -> Result<Vec<GeoPoint>, String> {
    let arr = coords
        .as_array()
        .ok_or("ring must be an array".to_string())?;
    let mut out = Vec::with_capacity(arr.len());
    for item in arr {
        out.push(parse_point(item)?);
    }
    Ok(out)
}

fn parse_polygon(coords: &Value) -> Result<Vec<Vec<GeoPoint>>, String> {
    let rings = coords
        .as_array()
        .ok_or("Polygon coordinates must be an array of rings".to_string())?;
    let mut out = Vec::with_capacity(rings.len());
    for ring in rings {
        out.push(parse_ring(ring)?);
    }
    Ok(out)
}

fn parse_multi_polygon(coords: &Value) -> Result<Vec<Vec<Vec<GeoPoint>>>, String> {
    let polys = coords
        .as_array()
        .ok_or("MultiPolygon coordinates must be an array of polygons".to_string())?;
    let mut out = Vec::with_capacity(polys.len());
    for poly in polys {
        out.push(parse_polygon(poly)?);
    }
    Ok(out)
}

pub(crate) fn as_i64_lenient(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| value.as_f64().map(|f| f as i64))
}

#[cfg(test)]
mod tests {
    use super::{BoundaryError, boundaries_to_geojson_value, parse_boundaries};
    use areas::AreaGeometry;

    const COLLECTION: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"NOME": "Araribóia", "RANK": 2},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[-46.5, -5.5], [-46.0, -5.5], [-46.0, -5.0], [-46.5, -5.5]]]
                }
            },
            {
                "type": "Feature",
                "properties": {"NOME": "Alto Rio Guamá", "RANK": 1.0},
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [[[[-47.0, -1.5], [-46.8, -1.5], [-46.8, -1.2], [-47.0, -1.5]]]]
                }
            }
        ]
    }"#;

    #[test]
    fn parses_polygons_and_normalizes_names() {
        let shapes = parse_boundaries(COLLECTION).expect("parse boundaries");
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].name, "ARARIBOIA");
        assert_eq!(shapes[1].name, "ALTO RIO GUAMA");
        assert_eq!(shapes[1].rank, 1);
        assert!(matches!(shapes[0].geometry, AreaGeometry::Polygon(_)));
        assert!(matches!(shapes[1].geometry, AreaGeometry::MultiPolygon(_)));
    }

    #[test]
    fn rejects_non_collections() {
        let err = parse_boundaries(r#"{"type": "Feature"}"#).unwrap_err();
        assert!(matches!(err, BoundaryError::NotAFeatureCollection));
    }

    #[test]
    fn rejects_non_surface_geometry() {
        let payload = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {"NOME": "X", "RANK": 1},
                "geometry": {"type": "Point", "coordinates": [-46.0, -5.0]}
            }]
        }"#;
        let err = parse_boundaries(payload).unwrap_err();
        match err {
            BoundaryError::InvalidFeature { index, reason } => {
                assert_eq!(index, 0);
                assert!(reason.contains("unsupported geometry type"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn export_round_trips_names_and_count() {
        let shapes = parse_boundaries(COLLECTION).expect("parse boundaries");
        let value = boundaries_to_geojson_value(&shapes);
        let features = value["features"].as_array().expect("features array");
        assert_eq!(features.len(), 2);
        assert_eq!(features[0]["properties"]["NOME"], "ARARIBOIA");
        assert_eq!(features[0]["geometry"]["type"], "Polygon");
    }
}
