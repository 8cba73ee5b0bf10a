// Geographic hit-testing
// Regions, their bounding boxes, and the index that picks among them

pub mod bounding_box;
pub mod geojson;
pub mod index;
pub mod region;

pub use bounding_box::BoundingBox;
pub use geojson::*;
pub use index::RegionIndex;
pub use region::{Region, Ring, Shape, winding_number};
