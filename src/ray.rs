use crate::aliases::Vec3;

/// A ray together with the path state accumulated along its bounces.
///
/// The direction is not required to be normalized on storage; every
/// geometric test re-normalizes it before use.
#[derive(Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    /// Multiplicative color weight surviving along the path so far.
    /// Starts at (1,1,1); each bounce multiplies in a reflectance factor.
    pub throughput: Vec3,
    pub bounce_count: u32,
    pub last_bounce_diffuse: bool,
}

impl Ray {
    pub fn new(origin: &Vec3, direction: &Vec3) -> Self {
        Ray {
            origin: *origin,
            direction: *direction,
            throughput: Vec3::new(1.0, 1.0, 1.0),
            bounce_count: 0,
            last_bounce_diffuse: false,
        }
    }
    pub fn evaluate(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }
}
