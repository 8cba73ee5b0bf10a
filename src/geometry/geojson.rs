// GeoJSON feature records
// Only Polygon and MultiPolygon geometries are turned into regions

use nalgebra_glm as glm;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::region::{Region, Ring, Shape};
use crate::error::GlobeError;

/// Property keys that may carry a display name, checked in order
const NAME_KEYS: [&str; 4] = ["name", "NAME", "ADMIN", "admin"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
    pub geometry: GeometryRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeometryRecord {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub coordinates: Value,
}

impl FeatureCollection {
    pub fn from_json(json: &str) -> Result<Self, GlobeError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Feature {
    pub fn name(&self) -> Option<&str> {
        let properties = self.properties.as_ref()?;
        NAME_KEYS
            .iter()
            .find_map(|key| properties.get(*key).and_then(Value::as_str))
    }

    pub fn shape(&self) -> Result<Shape, GlobeError> {
        match self.geometry.kind.as_str() {
            "Polygon" => {
                let rings: Vec<Vec<Vec<f64>>> =
                    serde_json::from_value(self.geometry.coordinates.clone())?;
                Ok(Shape::Polygon(polygon(rings)?))
            }
            "MultiPolygon" => {
                let polygons: Vec<Vec<Vec<Vec<f64>>>> =
                    serde_json::from_value(self.geometry.coordinates.clone())?;
                let polygons = polygons
                    .into_iter()
                    .map(polygon)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Shape::MultiPolygon(polygons))
            }
            other => Err(GlobeError::UnsupportedGeometry(other.to_string())),
        }
    }

    pub fn region(&self) -> Result<Region, GlobeError> {
        Ok(Region::new(self.shape()?))
    }
}

fn polygon(rings: Vec<Vec<Vec<f64>>>) -> Result<Vec<Ring>, GlobeError> {
    rings
        .into_iter()
        .map(|ring| ring.iter().map(|p| position(p)).collect::<Result<Ring, _>>())
        .collect()
}

/// Longitude and latitude; altitude and anything past it is dropped
fn position(raw: &[f64]) -> Result<glm::DVec2, GlobeError> {
    match raw {
        [lon, lat, ..] => Ok(glm::vec2(*lon, *lat)),
        _ => Err(GlobeError::InvalidPosition { len: raw.len() }),
    }
}
