//! Country picking and hover animation for an interactive earthquake globe.
//!
//! Country boundaries are indexed for point lookups (bounding-box filter,
//! then winding-number containment); selection changes start eased scale
//! transitions that a single [`animation::Scheduler`] advances every frame.

pub mod animation;
pub mod easing;
pub mod error;
pub mod geometry;
pub mod globe;
pub mod quake;
pub mod scene;
pub mod settings;

pub use error::GlobeError;
