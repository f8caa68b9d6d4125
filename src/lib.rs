//! Intersection and light-transport core of a recursive ray tracer.
//!
//! The crate finds where a ray first strikes scene geometry and carries
//! light backward along bounced rays: geometry exposes `intersect`,
//! materials expose stochastic scattering (`sample_ray_and_update_radiance`)
//! and direct-light shading (`get_direct_lighting`, `color_of_last_bounce`),
//! and `Scene` answers closest-hit and shadow-ray queries. Camera rays,
//! image output and the recursive bounce loop belong to the driver on top.

pub mod aliases;
pub mod geometry;
pub mod intersection;
pub mod material;
pub mod onb;
pub mod ray;
pub mod sampling;
pub mod scene;
