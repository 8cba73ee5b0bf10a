use nalgebra_glm as glm;

/// Axis-aligned box in (longitude, latitude) degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: glm::DVec2,
    pub max: glm::DVec2,
}

impl BoundingBox {
    /// Inverted box that contains nothing until a point is added
    pub fn empty() -> Self {
        Self {
            min: glm::vec2(f64::INFINITY, f64::INFINITY),
            max: glm::vec2(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a glm::DVec2>) -> Self {
        points.into_iter().fold(Self::empty(), |mut bbox, p| {
            bbox.expand(p);
            bbox
        })
    }

    pub fn expand(&mut self, p: &glm::DVec2) {
        self.min.x = self.min.x.min(p.x); // Min longitude
        self.min.y = self.min.y.min(p.y); // Min latitude
        self.max.x = self.max.x.max(p.x); // Max longitude
        self.max.y = self.max.y.max(p.y); // Max latitude
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Inclusive on every edge
    pub fn contains_point(&self, p: &glm::DVec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn size(&self) -> glm::DVec2 {
        if self.is_empty() {
            return glm::vec2(0.0, 0.0);
        }
        self.max - self.min
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}
