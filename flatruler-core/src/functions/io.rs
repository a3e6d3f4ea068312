//! WKT and GeoJSON adapters for feeding geometries to a [`Ruler`](crate::Ruler).

use geo::{Geometry, LineString, Point};
use geozero::{ToGeo, ToJson, ToWkt};
use serde_json::Value;

use crate::error::{Result, RulerError};
use crate::types::BBox;

// ── Deserialization helpers ──────────────────────────────────────────────────

fn geom_from_text(wkt: &str) -> Result<Geometry<f64>> {
    Ok(geozero::wkt::Wkt(wkt.as_bytes()).to_geo()?)
}

fn geom_from_geojson(json: &str) -> Result<Geometry<f64>> {
    Ok(geozero::geojson::GeoJson(json).to_geo()?)
}

fn require_point(geom: Geometry<f64>) -> Result<Point<f64>> {
    match geom {
        Geometry::Point(p) => Ok(p),
        _ => Err(RulerError::WrongType("Point")),
    }
}

fn require_line(geom: Geometry<f64>) -> Result<LineString<f64>> {
    match geom {
        Geometry::LineString(ls) => Ok(ls),
        _ => Err(RulerError::WrongType("LineString")),
    }
}

/// Exterior first, then holes, as [`Ruler::area`](crate::Ruler::area) expects.
fn require_rings(geom: Geometry<f64>) -> Result<Vec<LineString<f64>>> {
    match geom {
        Geometry::Polygon(poly) => {
            let (exterior, interiors) = poly.into_inner();
            let mut rings = vec![exterior];
            rings.extend(interiors);
            Ok(rings)
        }
        _ => Err(RulerError::WrongType("Polygon")),
    }
}

// ── Readers ──────────────────────────────────────────────────────────────────

/// # Example
///
/// ```
/// use flatruler_core::functions::io::point_from_wkt;
///
/// let p = point_from_wkt("POINT(-77.03 38.88)").unwrap();
/// assert_eq!(p.x(), -77.03);
/// ```
pub fn point_from_wkt(wkt: &str) -> Result<Point<f64>> {
    require_point(geom_from_text(wkt)?)
}

/// # Example
///
/// ```
/// use flatruler_core::functions::io::line_from_wkt;
/// use flatruler_core::Ruler;
///
/// let line = line_from_wkt("LINESTRING(30 38,30.1 38,30.1 38.1)").unwrap();
/// let ruler = Ruler::new(38.0).unwrap();
/// assert!(ruler.line_distance(&line) > 0.0);
/// ```
pub fn line_from_wkt(wkt: &str) -> Result<LineString<f64>> {
    require_line(geom_from_text(wkt)?)
}

/// # Example
///
/// ```
/// use flatruler_core::functions::io::line_from_geojson;
///
/// let line = line_from_geojson(r#"{"type":"LineString","coordinates":[[179.9,32.7],[-179.9,32.9]]}"#)
///     .unwrap();
/// assert_eq!(line.0.len(), 2);
/// ```
pub fn line_from_geojson(json: &str) -> Result<LineString<f64>> {
    require_line(geom_from_geojson(json)?)
}

/// Polygon rings from WKT.
///
/// # Example
///
/// ```
/// use flatruler_core::functions::io::rings_from_wkt;
///
/// let rings = rings_from_wkt("POLYGON((0 0,4 0,4 4,0 4,0 0),(1 1,2 1,2 2,1 1))").unwrap();
/// assert_eq!(rings.len(), 2);
/// ```
pub fn rings_from_wkt(wkt: &str) -> Result<Vec<LineString<f64>>> {
    require_rings(geom_from_text(wkt)?)
}

/// Polygon rings from a GeoJSON `Polygon` geometry.
///
/// # Example
///
/// ```
/// use flatruler_core::functions::io::rings_from_geojson;
/// use flatruler_core::Ruler;
///
/// let rings = rings_from_geojson(
///     r#"{"type":"Polygon","coordinates":[[[0,0],[0.1,0],[0.1,0.1],[0,0.1],[0,0]]]}"#,
/// )
/// .unwrap();
/// assert!(Ruler::new(0.0).unwrap().area(&rings) > 0.0);
/// ```
pub fn rings_from_geojson(json: &str) -> Result<Vec<LineString<f64>>> {
    require_rings(geom_from_geojson(json)?)
}

// ── Writers ──────────────────────────────────────────────────────────────────

/// # Example
///
/// ```
/// use flatruler_core::functions::io::{line_from_wkt, line_to_wkt};
///
/// let line = line_from_wkt("LINESTRING(0 0,1 1)").unwrap();
/// assert!(line_to_wkt(&line).unwrap().starts_with("LINESTRING"));
/// ```
pub fn line_to_wkt(line: &LineString<f64>) -> Result<String> {
    Ok(Geometry::LineString(line.clone()).to_wkt()?)
}

/// # Example
///
/// ```
/// use flatruler_core::functions::io::{line_from_geojson, line_to_geojson};
///
/// let json = r#"{"type":"LineString","coordinates":[[1,2],[3,4]]}"#;
/// let line = line_from_geojson(json).unwrap();
/// assert_eq!(line_from_geojson(&line_to_geojson(&line).unwrap()).unwrap(), line);
/// ```
pub fn line_to_geojson(line: &LineString<f64>) -> Result<String> {
    Ok(Geometry::LineString(line.clone()).to_json()?)
}

// ── GeoJSON bbox ─────────────────────────────────────────────────────────────

fn bbox_number(value: &Value) -> Result<f64> {
    value
        .as_f64()
        .ok_or_else(|| RulerError::InvalidInput(format!("bbox entry is not a number: {value}")))
}

/// Read the `bbox` member of a GeoJSON object.
///
/// Both the 2D form `[w, s, e, n]` and the 3D form
/// `[w, s, zmin, e, n, zmax]` are accepted. A west edge greater than the
/// east edge is kept as-is: it marks a box across the antimeridian.
///
/// # Example
///
/// ```
/// use flatruler_core::functions::io::bbox_from_geojson;
///
/// let json = r#"{"type":"Feature","bbox":[179.9,32.7,-179.9,32.9],"geometry":null,"properties":{}}"#;
/// let bbox = bbox_from_geojson(json).unwrap();
/// assert!(bbox.crosses_antimeridian());
/// ```
pub fn bbox_from_geojson(json: &str) -> Result<BBox> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| RulerError::InvalidInput(format!("invalid GeoJSON: {e}")))?;
    let entries = value
        .get("bbox")
        .and_then(Value::as_array)
        .ok_or_else(|| RulerError::InvalidInput("GeoJSON object has no bbox array".to_string()))?;
    let n = entries
        .iter()
        .map(bbox_number)
        .collect::<Result<Vec<f64>>>()?;
    match n.as_slice() {
        &[west, south, east, north] | &[west, south, _, east, north, _] => {
            Ok(BBox::new(west, south, east, north))
        }
        _ => Err(RulerError::InvalidInput(format!(
            "bbox must have 4 or 6 entries, got {}",
            n.len()
        ))),
    }
}

/// `[west,south,east,north]` as a JSON array, ready for a GeoJSON `bbox` member.
///
/// # Example
///
/// ```
/// use flatruler_core::functions::io::bbox_to_geojson;
/// use flatruler_core::BBox;
///
/// assert_eq!(bbox_to_geojson(BBox::new(1.0, 2.0, 3.5, 4.0)), "[1.0,2.0,3.5,4.0]");
/// ```
pub fn bbox_to_geojson(bbox: BBox) -> String {
    serde_json::json!(bbox.to_array()).to_string()
}
