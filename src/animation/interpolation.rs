// Interpolation utilities

/// Linear interpolation for scalars
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

pub fn clamp_unit(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}
