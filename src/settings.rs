use log::warn;
use serde::{Deserialize, Serialize};

use crate::easing::Easing;

pub const CONFY_APP_NAME: &str = "globevis-rs";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusSettings {
    pub focus_scale: f32,
    pub focus_duration: f32,
    pub focus_easing: Easing,
    pub unfocus_scale: f32,
    pub unfocus_duration: f32,
    pub unfocus_easing: Easing,
}

impl Default for FocusSettings {
    fn default() -> Self {
        Self {
            focus_scale: 1.02,
            focus_duration: 0.5,
            focus_easing: Easing::EaseInCubic,
            unfocus_scale: 1.0,
            unfocus_duration: 0.25,
            unfocus_easing: Easing::Linear,
        }
    }
}

impl FocusSettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "focus").unwrap_or_default()
    }

    pub fn save(&self) {
        if let Err(e) = confy::store(CONFY_APP_NAME, "focus", self) {
            warn!("failed to store focus settings: {e}");
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedSettings {
    pub enabled: bool,
    pub start_date: String,
    pub min_magnitude: f32,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            start_date: "2024-01-01".to_string(),
            min_magnitude: 4.5,
        }
    }
}

impl FeedSettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "feed").unwrap_or_default()
    }

    pub fn save(&self) {
        if let Err(e) = confy::store(CONFY_APP_NAME, "feed", self) {
            warn!("failed to store feed settings: {e}");
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSettings {
    /// Seconds per simulated frame
    pub frame_dt: f32,
    /// Frames spent hovering each country
    pub hover_frames: u32,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            frame_dt: 1.0 / 60.0,
            hover_frames: 45,
        }
    }
}

impl SimulationSettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "simulation").unwrap_or_default()
    }

    pub fn save(&self) {
        if let Err(e) = confy::store(CONFY_APP_NAME, "simulation", self) {
            warn!("failed to store simulation settings: {e}");
        }
    }
}

// Aggregate struct for convenience
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub focus: FocusSettings,
    pub feed: FeedSettings,
    pub simulation: SimulationSettings,
}

impl Settings {
    pub fn load() -> Self {
        Self {
            focus: FocusSettings::load(),
            feed: FeedSettings::load(),
            simulation: SimulationSettings::load(),
        }
    }

    pub fn save(&self) {
        self.focus.save();
        self.feed.save();
        self.simulation.save();
    }
}
