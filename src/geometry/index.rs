// Two-phase spatial lookup over owned regions

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use nalgebra_glm as glm;

use super::region::Region;
use crate::error::GlobeError;

/// Regions keyed by owning entity, in insertion order.
///
/// Later entries are drawn on top and win when several regions contain the
/// same point.
#[derive(Debug, Clone)]
pub struct RegionIndex<K> {
    entries: Vec<(K, Region)>,
}

impl<K> Default for RegionIndex<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone + Debug> RegionIndex<K> {
    pub fn build(entries: impl IntoIterator<Item = (K, Region)>) -> Result<Self, GlobeError> {
        let entries: Vec<(K, Region)> = entries.into_iter().collect();

        let mut seen = HashSet::with_capacity(entries.len());
        for (key, _) in &entries {
            if !seen.insert(key.clone()) {
                return Err(GlobeError::DuplicateEntity(format!("{key:?}")));
            }
        }

        Ok(Self { entries })
    }
}

impl<K> RegionIndex<K> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(K, Region)] {
        &self.entries
    }

    pub fn region(&self, key: &K) -> Option<&Region>
    where
        K: PartialEq,
    {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, region)| region)
    }

    /// Phase 1: entries whose bounding box holds `p`, in insertion order
    pub fn candidates(&self, p: &glm::DVec2) -> Vec<&(K, Region)> {
        self.entries
            .iter()
            .filter(|(_, region)| region.contains_point_in_bounding_box(p))
            .collect()
    }

    /// Topmost entity whose region contains `p`
    pub fn query(&self, p: &glm::DVec2) -> Option<&K> {
        let candidates = self.candidates(p);

        // Outside every bounding box
        if candidates.is_empty() {
            return None;
        }

        candidates
            .into_iter()
            .rev()
            .find(|(_, region)| region.contains_point(p))
            .map(|(key, _)| key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::region::{Shape, square};

    fn square_region(x: f64, y: f64, size: f64) -> Region {
        Region::new(Shape::Polygon(vec![square(x, y, size)]))
    }

    #[test]
    fn test_disjoint_squares() {
        let index = RegionIndex::build([
            (1, square_region(0.0, 0.0, 1.0)),
            (2, square_region(5.0, 5.0, 1.0)),
        ])
        .unwrap();

        assert_eq!(index.query(&glm::vec2(0.5, 0.5)), Some(&1));
        assert_eq!(index.query(&glm::vec2(5.5, 5.5)), Some(&2));
        assert_eq!(index.query(&glm::vec2(3.0, 3.0)), None);
    }

    #[test]
    fn test_later_entry_wins_overlap() {
        let index = RegionIndex::build([
            ("under", square_region(0.0, 0.0, 4.0)),
            ("over", square_region(1.0, 1.0, 2.0)),
        ])
        .unwrap();

        assert_eq!(index.query(&glm::vec2(2.0, 2.0)), Some(&"over"));
        assert_eq!(index.query(&glm::vec2(0.5, 0.5)), Some(&"under"));
    }

    #[test]
    fn test_candidates_skip_far_regions() {
        let index = RegionIndex::build([
            (1, square_region(0.0, 0.0, 1.0)),
            (2, square_region(5.0, 5.0, 1.0)),
        ])
        .unwrap();

        assert!(index.candidates(&glm::vec2(20.0, 20.0)).is_empty());
        let near = index.candidates(&glm::vec2(5.5, 5.5));
        assert_eq!(near.len(), 1);
        assert_eq!(near[0].0, 2);
    }

    #[test]
    fn test_bounding_box_hit_without_containment() {
        // Triangle fills only the lower-right half of its box
        let triangle = Region::new(Shape::Polygon(vec![vec![
            glm::vec2(0.0, 0.0),
            glm::vec2(4.0, 0.0),
            glm::vec2(4.0, 4.0),
        ]]));
        let index = RegionIndex::build([(7, triangle)]).unwrap();

        let p = glm::vec2(0.5, 3.5);
        assert_eq!(index.candidates(&p).len(), 1);
        assert_eq!(index.query(&p), None);
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let result = RegionIndex::build([
            ("fr", square_region(0.0, 0.0, 1.0)),
            ("fr", square_region(2.0, 0.0, 1.0)),
        ]);
        assert!(matches!(result, Err(GlobeError::DuplicateEntity(_))));
    }

    #[test]
    fn test_empty_index() {
        let index: RegionIndex<u32> = RegionIndex::default();
        assert!(index.is_empty());
        assert_eq!(index.query(&glm::vec2(0.0, 0.0)), None);
    }
}
