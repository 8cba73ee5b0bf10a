use nalgebra_glm as glm;

/// Maps (longitude, latitude) degrees to render space and back
pub trait Projector {
    fn project(&self, lon_lat: &glm::DVec2) -> glm::Vec3;

    fn unproject(&self, position: &glm::Vec3) -> glm::DVec2;
}

/// Sphere centred on the origin, Y up, longitude 90° facing +X
#[derive(Debug, Clone, Copy)]
pub struct SphereProjector {
    pub radius: f64,
}

impl SphereProjector {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Default for SphereProjector {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Projector for SphereProjector {
    fn project(&self, lon_lat: &glm::DVec2) -> glm::Vec3 {
        let lambda = (lon_lat.x - 90.0).to_radians();
        let phi = lon_lat.y.to_radians();
        let r = self.radius;
        glm::vec3(
            (r * phi.cos() * lambda.cos()) as f32,
            (r * phi.sin()) as f32,
            (-r * phi.cos() * lambda.sin()) as f32,
        )
    }

    fn unproject(&self, position: &glm::Vec3) -> glm::DVec2 {
        let (x, y, z) = (position.x as f64, position.y as f64, position.z as f64);
        let length = (x * x + y * y + z * z).sqrt();
        if length == 0.0 {
            return glm::vec2(0.0, 0.0);
        }

        let phi = (y / length).clamp(-1.0, 1.0).asin();
        let lambda = (-z).atan2(x);

        let mut lon = lambda.to_degrees() + 90.0;
        if lon > 180.0 {
            lon -= 360.0;
        }
        glm::vec2(lon, phi.to_degrees())
    }
}
