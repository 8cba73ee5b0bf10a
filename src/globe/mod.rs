mod country;
mod globe;

pub use country::*;
pub use globe::*;
