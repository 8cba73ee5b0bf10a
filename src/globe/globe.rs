use log::{debug, info, warn};
use nalgebra_glm as glm;

use super::country::{Country, CountryId};
use crate::animation::{Animation, Scheduler};
use crate::easing::Easing;
use crate::error::GlobeError;
use crate::geometry::{FeatureCollection, Region, RegionIndex};
use crate::quake::Quake;
use crate::scene::{Projector, SharedNode, shared_node};
use crate::settings::FocusSettings;

pub struct Globe {
    pub node: SharedNode,
    countries: Vec<Country>,
    index: RegionIndex<CountryId>,
    hovered: Option<CountryId>,
    spin_anim: Option<Animation>,
}

impl Globe {
    pub fn from_collection(
        collection: &FeatureCollection,
        projector: &impl Projector,
    ) -> Result<Self, GlobeError> {
        let mut globe = Self {
            node: shared_node(),
            countries: Vec::new(),
            index: RegionIndex::default(),
            hovered: None,
            spin_anim: None,
        };
        globe.load(collection, projector)?;
        Ok(globe)
    }

    /// Replace every country and rebuild the index.
    ///
    /// Focus animations of the outgoing countries are stopped first.
    pub fn reload(
        &mut self,
        collection: &FeatureCollection,
        projector: &impl Projector,
        scheduler: &mut Scheduler,
    ) -> Result<(), GlobeError> {
        for country in &self.countries {
            country.stop_animations(scheduler);
        }
        self.hovered = None;
        self.load(collection, projector)
    }

    fn load(
        &mut self,
        collection: &FeatureCollection,
        projector: &impl Projector,
    ) -> Result<(), GlobeError> {
        let mut countries = Vec::with_capacity(collection.features.len());
        let mut regions: Vec<(CountryId, Region)> = Vec::with_capacity(collection.features.len());

        for (feature_idx, feature) in collection.features.iter().enumerate() {
            let region = match feature.region() {
                Ok(region) => region,
                Err(e @ GlobeError::UnsupportedGeometry(_)) => {
                    warn!("Skipping feature {feature_idx}: {e}");
                    continue;
                }
                Err(e) => return Err(e),
            };

            let id = countries.len();
            let name = feature
                .name()
                .map(str::to_string)
                .unwrap_or_else(|| format!("feature-{feature_idx}"));
            let properties = feature.properties.clone().unwrap_or_default();

            countries.push(Country::new(id, name, properties, region.outlines(projector)));
            regions.push((id, region));
        }

        self.index = RegionIndex::build(regions)?;
        self.countries = countries;

        let vertices: usize = self.index.entries().iter().map(|(_, r)| r.vertex_count()).sum();
        info!(
            "Globe loaded: {} countries, {} boundary vertices",
            self.countries.len(),
            vertices
        );
        Ok(())
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn country(&self, id: CountryId) -> Option<&Country> {
        self.countries.get(id)
    }

    pub fn country_by_name(&self, name: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.name == name)
    }

    pub fn region(&self, id: CountryId) -> Option<&Region> {
        self.index.region(&id)
    }

    pub fn hovered(&self) -> Option<CountryId> {
        self.hovered
    }

    /// Country under a (longitude, latitude) point, topmost first
    pub fn select_country(&self, coord: &glm::DVec2) -> Option<CountryId> {
        self.index.query(coord).copied()
    }

    /// Country under a point on the (unrotated) globe surface
    pub fn select_at(&self, position: &glm::Vec3, projector: &impl Projector) -> Option<CountryId> {
        self.select_country(&projector.unproject(position))
    }

    pub fn country_of(&self, quake: &Quake) -> Option<&Country> {
        self.select_country(&quake.location())
            .and_then(|id| self.country(id))
    }

    /// Move hover emphasis to whatever lies under `coord`.
    ///
    /// Returns the hovered country after the move.
    pub fn hover(
        &mut self,
        coord: Option<&glm::DVec2>,
        scheduler: &mut Scheduler,
        settings: &FocusSettings,
    ) -> Result<Option<CountryId>, GlobeError> {
        let selected = coord.and_then(|c| self.select_country(c));
        if selected == self.hovered {
            return Ok(selected);
        }

        // Hover is only released once the unfocus has actually started
        if let Some(previous) = self.hovered {
            self.countries[previous].unfocus(scheduler, settings)?;
            self.hovered = None;
        }

        if let Some(id) = selected {
            let country = &mut self.countries[id];
            debug!("Hover: {}", country.name);
            country.focus(scheduler, settings)?;
        }

        self.hovered = selected;
        Ok(selected)
    }

    pub fn scale(&self, scale: f32) {
        self.node.borrow_mut().set_uniform_scale(scale);
    }

    pub fn rotate(&self, angle: f32) {
        self.node.borrow_mut().rotation.y = angle;
    }

    pub fn get_scale(&self) -> f32 {
        self.node.borrow().scale.x
    }

    pub fn get_rotation(&self) -> f32 {
        self.node.borrow().rotation.y
    }

    /// One full turn from the current angle, replacing any spin in progress
    pub fn spin(
        &mut self,
        scheduler: &mut Scheduler,
        duration: f32,
        easing: Easing,
    ) -> Result<(), GlobeError> {
        let anim = Animation::spin(self.node.clone(), duration, self.get_rotation(), easing)?;
        if let Some(previous) = self.spin_anim.take() {
            previous.stop(scheduler);
        }
        anim.play(scheduler);
        self.spin_anim = Some(anim);
        Ok(())
    }
}
