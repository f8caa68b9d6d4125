use crate::aliases::{RandGen, Vec3};
use crate::geometry::{Geometry, GeometryError};
use crate::intersection::Intersection;
use crate::material::Material;
use crate::ray::Ray;
use crate::sampling::uniform_unit_vector;
use std::sync::Arc;

pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<dyn Material>,
}

impl Sphere {
    pub fn new(
        center: &Vec3,
        radius: f32,
        material: Arc<dyn Material>,
    ) -> Result<Self, GeometryError> {
        if !(radius > 0.0) {
            return Err(GeometryError::DegenerateSphere { radius: radius });
        }
        Ok(Sphere {
            center: *center,
            radius: radius,
            material: material,
        })
    }
    pub fn center(&self) -> &Vec3 {
        &self.center
    }
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Geometry for Sphere {
    /// Solves t^2 + 2Bt + C = 0 against the normalized ray direction and
    /// keeps the smallest strictly positive root. A ray starting inside the
    /// sphere gets its exit point; callers wanting entry-only semantics must
    /// filter externally.
    fn intersect<'s>(&'s self, ray: &Ray) -> Vec<Intersection<'s>> {
        let mut intersections = Vec::new();

        let ro = ray.origin;
        let rd = ray.direction.normalize();

        let oc = ro - self.center;
        let b = rd.dot(&oc);
        let discriminant = b * b - oc.dot(&oc) + self.radius * self.radius;
        if discriminant < 0.0 {
            return intersections;
        }

        let sqrt_discriminant = discriminant.sqrt();
        let t1 = -b + sqrt_discriminant;
        let t2 = -b - sqrt_discriminant;

        // Only intersections in front of the ray origin count.
        let t = if t1 > 0.0 && t2 > 0.0 {
            t1.min(t2)
        } else if t1 > 0.0 {
            t1
        } else if t2 > 0.0 {
            t2
        } else {
            return intersections; // both roots behind the origin
        };

        let point = ro + t * rd;
        let normal = (point - self.center).normalize();
        intersections.push(Intersection {
            t: t,
            point: point,
            normal: normal,
            geometry: self,
            material: self.material.as_ref(),
        });
        intersections
    }
    fn surface_point(&self, rng: &mut RandGen) -> Vec3 {
        self.center + self.radius * uniform_unit_vector(rng)
    }
    fn material(&self) -> &dyn Material {
        self.material.as_ref()
    }
}
