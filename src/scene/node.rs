use std::cell::RefCell;
use std::rc::Rc;

use nalgebra_glm as glm;

/// Transform of an externally rendered object
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub scale: glm::Vec3,
    pub rotation: glm::Vec3,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            scale: glm::vec3(1.0, 1.0, 1.0),
            rotation: glm::vec3(0.0, 0.0, 0.0),
        }
    }
}

impl Node {
    pub fn set_uniform_scale(&mut self, scale: f32) {
        self.scale = glm::vec3(scale, scale, scale);
    }
}

/// Node shared between its owner and the animations writing into it
pub type SharedNode = Rc<RefCell<Node>>;

pub fn shared_node() -> SharedNode {
    Rc::new(RefCell::new(Node::default()))
}
