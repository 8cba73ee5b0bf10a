use nalgebra_glm as glm;
use serde_json::{Map, Value};

use crate::animation::{Animation, Scheduler};
use crate::error::GlobeError;
use crate::scene::{SharedNode, shared_node};
use crate::settings::FocusSettings;

/// Position of a country in its globe, in feature order
pub type CountryId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    Normal,
    Highlighted,
}

/// One selectable country: scene node, border lines and focus animations.
///
/// Its region lives in the globe's index under the same id.
#[derive(Debug)]
pub struct Country {
    pub id: CountryId,
    pub name: String,
    pub properties: Map<String, Value>,
    pub node: SharedNode,
    pub outlines: Vec<Vec<glm::Vec3>>,
    border: BorderStyle,
    focus_anim: Option<Animation>,
    unfocus_anim: Option<Animation>,
}

impl Country {
    pub fn new(
        id: CountryId,
        name: String,
        properties: Map<String, Value>,
        outlines: Vec<Vec<glm::Vec3>>,
    ) -> Self {
        Self {
            id,
            name,
            properties,
            node: shared_node(),
            outlines,
            border: BorderStyle::Normal,
            focus_anim: None,
            unfocus_anim: None,
        }
    }

    pub fn scale(&self, scale: f32) {
        self.node.borrow_mut().set_uniform_scale(scale);
    }

    pub fn get_scale(&self) -> f32 {
        self.node.borrow().scale.x
    }

    pub fn border(&self) -> BorderStyle {
        self.border
    }

    pub fn focus_animation(&self) -> Option<&Animation> {
        self.focus_anim.as_ref()
    }

    pub fn unfocus_animation(&self) -> Option<&Animation> {
        self.unfocus_anim.as_ref()
    }

    /// Grow towards the highlighted scale and switch to highlighted borders
    pub fn focus(
        &mut self,
        scheduler: &mut Scheduler,
        settings: &FocusSettings,
    ) -> Result<(), GlobeError> {
        let anim = Animation::scale(
            self.node.clone(),
            settings.focus_duration,
            self.get_scale(),
            settings.focus_scale,
            settings.focus_easing,
        )?;

        self.stop_animations(scheduler);
        anim.play(scheduler);
        self.focus_anim = Some(anim);

        self.border = BorderStyle::Highlighted;
        Ok(())
    }

    /// Shrink back to the resting scale and restore normal borders
    pub fn unfocus(
        &mut self,
        scheduler: &mut Scheduler,
        settings: &FocusSettings,
    ) -> Result<(), GlobeError> {
        let anim = Animation::scale(
            self.node.clone(),
            settings.unfocus_duration,
            self.get_scale(),
            settings.unfocus_scale,
            settings.unfocus_easing,
        )?;

        self.stop_animations(scheduler);
        anim.play(scheduler);
        self.unfocus_anim = Some(anim);

        self.border = BorderStyle::Normal;
        Ok(())
    }

    // At most one scale animation may write to the node at a time
    pub(crate) fn stop_animations(&self, scheduler: &mut Scheduler) {
        for anim in [&self.focus_anim, &self.unfocus_anim].into_iter().flatten() {
            anim.stop(scheduler);
        }
    }
}
