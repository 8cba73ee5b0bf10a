// Region containment
// Polygon / MultiPolygon boundaries with a precomputed bounding box

use nalgebra_glm as glm;

use super::bounding_box::BoundingBox;
use crate::scene::Projector;

/// Implicitly closed loop of (longitude, latitude) pairs
pub type Ring = Vec<glm::DVec2>;

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Rings of a single polygon, outer shell first
    Polygon(Vec<Ring>),
    /// Polygons, each an ordered list of rings
    MultiPolygon(Vec<Vec<Ring>>),
}

impl Shape {
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Polygon(_) => "Polygon",
            Shape::MultiPolygon(_) => "MultiPolygon",
        }
    }

    /// Every ring of the shape, in declaration order
    pub fn rings(&self) -> Box<dyn Iterator<Item = &Ring> + '_> {
        match self {
            Shape::Polygon(rings) => Box::new(rings.iter()),
            Shape::MultiPolygon(polygons) => Box::new(polygons.iter().flatten()),
        }
    }
}

/// Immutable geographic boundary
#[derive(Debug, Clone)]
pub struct Region {
    shape: Shape,
    bounding_box: BoundingBox,
}

impl Region {
    pub fn new(shape: Shape) -> Self {
        let bounding_box = Self::compute_bounding_box(&shape);
        Self {
            shape,
            bounding_box,
        }
    }

    fn compute_bounding_box(shape: &Shape) -> BoundingBox {
        BoundingBox::from_points(shape.rings().flatten())
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bounding_box
    }

    pub fn contains_point_in_bounding_box(&self, p: &glm::DVec2) -> bool {
        self.bounding_box.contains_point(p)
    }

    /// True as soon as any single ring winds around `p`.
    ///
    /// Rings are tested independently: a hole ring is not subtracted from
    /// its shell, so a point inside a hole still reports as contained.
    pub fn contains_point(&self, p: &glm::DVec2) -> bool {
        self.shape.rings().any(|ring| winding_number(p, ring) != 0)
    }

    /// Each ring as a closed 3D polyline (first vertex repeated at the end)
    pub fn outlines(&self, projector: &impl Projector) -> Vec<Vec<glm::Vec3>> {
        self.shape
            .rings()
            .filter(|ring| !ring.is_empty())
            .map(|ring| {
                let mut points: Vec<glm::Vec3> =
                    ring.iter().map(|coord| projector.project(coord)).collect();
                points.push(points[0]);
                points
            })
            .collect()
    }

    pub fn vertex_count(&self) -> usize {
        self.shape.rings().map(Vec::len).sum()
    }
}

/// Signed number of times `ring` wraps around `p`
pub fn winding_number(p: &glm::DVec2, ring: &[glm::DVec2]) -> i32 {
    let n = ring.len();
    let mut winding = 0;

    for i in 0..n {
        let p1 = &ring[i];
        let p2 = &ring[(i + 1) % n];

        if p1.y <= p.y {
            // Upward crossing with p strictly left of the edge
            if p2.y > p.y && is_left(p1, p2, p) > 0.0 {
                winding += 1;
            }
        } else if p2.y <= p.y && is_left(p1, p2, p) < 0.0 {
            // Downward crossing with p strictly right of the edge
            winding -= 1;
        }
    }

    winding
}

/// > 0 when `p` is left of the line p1→p2, < 0 when right, 0 when on it
fn is_left(p1: &glm::DVec2, p2: &glm::DVec2, p: &glm::DVec2) -> f64 {
    (p2.x - p1.x) * (p.y - p1.y) - (p.x - p1.x) * (p2.y - p1.y)
}

#[cfg(test)]
pub(crate) fn square(x: f64, y: f64, size: f64) -> Ring {
    vec![
        glm::vec2(x, y),
        glm::vec2(x + size, y),
        glm::vec2(x + size, y + size),
        glm::vec2(x, y + size),
    ]
}
