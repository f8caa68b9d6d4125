use crate::aliases::Vec3;
use crate::geometry::Geometry;
use crate::material::Material;

/// Result of a single ray/geometry test.
///
/// Only ever produced for hits at strictly positive distance; "no hit" is an
/// empty result list, never a sentinel record. The geometry and material
/// references borrow from the scene that owns the instances.
#[derive(Clone, Copy)]
pub struct Intersection<'a> {
    /// Distance along the (normalized) ray direction.
    pub t: f32,
    /// World-space hit point.
    pub point: Vec3,
    /// Unit surface normal, oriented by the primitive's definition. Not
    /// guaranteed to face the ray.
    pub normal: Vec3,
    pub geometry: &'a dyn Geometry,
    pub material: &'a dyn Material,
}

impl<'a> Intersection<'a> {
    /// Picks the smaller-t record out of a candidate list.
    pub fn closest(candidates: &[Intersection<'a>]) -> Option<Intersection<'a>> {
        let mut res: Option<Intersection<'a>> = None;
        for cand in candidates {
            match res {
                Some(ref best) if best.t <= cand.t => {}
                _ => res = Some(*cand),
            }
        }
        res
    }
}
