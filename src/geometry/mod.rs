pub mod sphere;
pub mod triangle;

use crate::aliases::{RandGen, Vec3};
use crate::intersection::Intersection;
use crate::material::Material;
use crate::ray::Ray;
use thiserror::Error;

/// A scene-owned primitive.
///
/// Light sources are ordinary geometry; what marks an instance as emissive
/// is its material's emission value, not a separate primitive kind.
pub trait Geometry: Send + Sync {
    /// Tests the ray against this primitive and returns the intersections at
    /// strictly positive distance along the normalized ray direction.
    /// An empty list means no hit.
    fn intersect<'s>(&'s self, ray: &Ray) -> Vec<Intersection<'s>>;
    /// Samples a point on the surface. Used by the direct-lighting estimator
    /// when this primitive acts as a light source.
    fn surface_point(&self, rng: &mut RandGen) -> Vec3;
    /// The material resolved into this primitive's intersection records.
    fn material(&self) -> &dyn Material;
}

/// Degenerate primitives are rejected at construction; intersection tests
/// assume well-formed inputs and never fail.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("sphere radius must be positive, got {radius}")]
    DegenerateSphere { radius: f32 },
    #[error("triangle vertices are collinear")]
    DegenerateTriangle,
}

/// Identity comparison between scene-owned geometry instances.
pub fn same_geometry(a: &dyn Geometry, b: &dyn Geometry) -> bool {
    a as *const dyn Geometry as *const u8 == b as *const dyn Geometry as *const u8
}
