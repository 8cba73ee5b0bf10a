// Render-side stand-ins
// The real scene graph lives outside this crate; these carry the values it reads

mod node;
mod projector;

pub use node::*;
pub use projector::*;
