// Earthquake event feed (USGS FDSN event service, GeoJSON format)

use log::info;
use nalgebra_glm as glm;
use serde::{Deserialize, Serialize};

use crate::error::GlobeError;
use crate::scene::Projector;
use crate::settings::FeedSettings;

const FEED_BASE_URL: &str = "https://earthquake.usgs.gov/fdsnws/event/1/query";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuakeCollection {
    pub features: Vec<Quake>,
}

/// The subset of event fields the globe uses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quake {
    pub id: String,
    pub properties: QuakeProperties,
    pub geometry: QuakeGeometry,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuakeProperties {
    /// URL with further details about this event
    pub detail: String,
    pub place: Option<String>,
    /// Milliseconds since the Unix epoch
    pub time: i64,
    pub mag: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuakeGeometry {
    /// Longitude, latitude, depth in km
    pub coordinates: [f64; 3],
}

impl Quake {
    pub fn location(&self) -> glm::DVec2 {
        let [lon, lat, _] = self.geometry.coordinates;
        glm::vec2(lon, lat)
    }

    pub fn depth(&self) -> f64 {
        self.geometry.coordinates[2]
    }

    pub fn magnitude(&self) -> f32 {
        self.properties.mag.unwrap_or(0.0)
    }

    /// Marker position on the globe surface
    pub fn position(&self, projector: &impl Projector) -> glm::Vec3 {
        projector.project(&self.location())
    }
}

pub fn build_url(start_date: &str, min_magnitude: f32) -> String {
    format!("{FEED_BASE_URL}?format=geojson&starttime={start_date}&minmagnitude={min_magnitude}")
}

pub fn parse_feed(json: &str) -> Result<Vec<Quake>, GlobeError> {
    let collection: QuakeCollection = serde_json::from_str(json)?;
    Ok(collection.features)
}

/// Download the events matching `settings`
pub async fn fetch_earthquakes(settings: &FeedSettings) -> Result<Vec<Quake>, GlobeError> {
    let url = build_url(&settings.start_date, settings.min_magnitude);
    info!("Fetching earthquakes from {url}");

    let response = reqwest::get(&url).await?;

    if !response.status().is_success() {
        return Err(GlobeError::Network(format!(
            "HTTP {} from {}",
            response.status(),
            url
        )));
    }

    let body = response.text().await?;
    let quakes = parse_feed(&body)?;
    info!("Loaded {} earthquakes", quakes.len());
    Ok(quakes)
}
