use crate::aliases::{RandGen, Vec3};
use crate::geometry::{Geometry, GeometryError};
use crate::intersection::Intersection;
use crate::material::Material;
use crate::ray::Ray;
use rand::Rng;
use std::sync::Arc;

/// Barycentric tolerance. Deliberately lenient: points slightly outside the
/// triangle are accepted so that adjacent triangles sharing an edge do not
/// show gap artifacts.
pub const EPSILON: f32 = 1.0e-4;

pub struct Triangle {
    vertices: [Vec3; 3],
    vertex_normals: [Vec3; 3],
    normal: Vec3, // unit face normal, normalize((v1-v0) x (v2-v0))
    material: Arc<dyn Material>,
}

impl Triangle {
    pub fn new(
        vertices: &[Vec3; 3],
        vertex_normals: &[Vec3; 3],
        material: Arc<dyn Material>,
    ) -> Result<Self, GeometryError> {
        let e1 = vertices[1] - vertices[0];
        let e2 = vertices[2] - vertices[0];
        let n = e1.cross(&e2);
        if n.norm() == 0.0 {
            return Err(GeometryError::DegenerateTriangle);
        }
        Ok(Triangle {
            vertices: *vertices,
            vertex_normals: *vertex_normals,
            normal: n.normalize(),
            material: material,
        })
    }
    pub fn vertices(&self) -> &[Vec3; 3] {
        &self.vertices
    }
    /// Per-vertex normals as given at construction. The intersection test
    /// reports the flat face normal; no interpolation is performed.
    pub fn vertex_normals(&self) -> &[Vec3; 3] {
        &self.vertex_normals
    }
}

impl Geometry for Triangle {
    /// Möller–Trumbore against the normalized ray direction.
    fn intersect<'s>(&'s self, ray: &Ray) -> Vec<Intersection<'s>> {
        let mut intersections = Vec::new();

        let v0 = self.vertices[0];
        let v1 = self.vertices[1];
        let v2 = self.vertices[2];

        let ray_origin = ray.origin;
        let ray_dir = ray.direction.normalize();

        let edge1 = v1 - v0;
        let edge2 = v2 - v0;

        let h = ray_dir.cross(&edge2);
        let a = edge1.dot(&h);

        // ray parallel to the triangle plane
        if a.abs() < EPSILON {
            return intersections;
        }

        let inv_a = 1.0 / a;
        let s = ray_origin - v0;
        let u = inv_a * s.dot(&h);
        if u < -EPSILON || u > 1.0 + EPSILON {
            return intersections;
        }

        let q = s.cross(&edge1);
        let v = inv_a * ray_dir.dot(&q);
        if v < -EPSILON || u + v > 1.0 + EPSILON {
            return intersections;
        }

        let t = inv_a * edge2.dot(&q);
        if t > 0.0 {
            intersections.push(Intersection {
                t: t,
                point: ray_origin + t * ray_dir,
                normal: self.normal,
                geometry: self,
                material: self.material.as_ref(),
            });
        }
        intersections
    }
    fn surface_point(&self, rng: &mut RandGen) -> Vec3 {
        // uniform barycentric sample
        let r1 = rng.gen::<f32>().sqrt();
        let r2 = rng.gen::<f32>();
        (1.0 - r1) * self.vertices[0]
            + r1 * (1.0 - r2) * self.vertices[1]
            + r1 * r2 * self.vertices[2]
    }
    fn material(&self) -> &dyn Material {
        self.material.as_ref()
    }
}
