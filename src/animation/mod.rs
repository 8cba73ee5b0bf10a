// Tween animation module
// Eased scalar transitions advanced by a shared per-frame scheduler

pub mod interpolation;
pub mod scheduler;
pub mod tween;

pub use interpolation::*;
pub use scheduler::Scheduler;
pub use tween::*;
