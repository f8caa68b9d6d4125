pub mod glossy;

use crate::aliases::{RandGen, Vec3};
use crate::intersection::Intersection;
use crate::ray::Ray;
use crate::scene::Scene;

pub trait Material: Send + Sync {
    /// Chooses a scattering mode stochastically and rewrites the ray in
    /// place as the next bounce: new origin (offset off the surface), new
    /// direction, throughput multiplied by the mode's reflectance factor,
    /// bounce metadata updated.
    fn sample_ray_and_update_radiance(
        &self,
        ray: &mut Ray,
        hit: &Intersection,
        rng: &mut RandGen,
    );
    /// Radiance reaching the hit point directly from the scene's light
    /// sources, summed over every light that passes a shadow-ray visibility
    /// test.
    fn get_direct_lighting(&self, hit: &Intersection, scene: &Scene, rng: &mut RandGen) -> Vec3;
    /// Color contributed at path termination: the ray's accumulated
    /// throughput combined with local direct lighting.
    fn color_of_last_bounce(
        &self,
        ray: &Ray,
        hit: &Intersection,
        scene: &Scene,
        rng: &mut RandGen,
    ) -> Vec3;
    /// Emitted radiance. Nonzero marks the owning geometry as a light
    /// source.
    fn emission(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, 0.0)
    }
    /// Divisor applied to this material's emission based on the distance at
    /// which it was seen.
    fn light_attenuation_factor(&self, _distance: f32) -> f32 {
        1.0
    }
}
