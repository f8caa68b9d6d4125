use crate::aliases::{RandGen, Vec3};
use crate::geometry::same_geometry;
use crate::intersection::Intersection;
use crate::material::Material;
use crate::ray::Ray;
use crate::sampling::{align_with_normal, cosine_hemisphere_direction, reflect};
use crate::scene::Scene;
use rand::Rng;

/// Offset applied to a scattered ray's origin along the surface normal, so
/// the next bounce does not immediately re-hit the surface it left.
const SCATTER_OFFSET: f32 = 1.0e-3;
/// Offset applied to a shadow ray's origin.
const SHADOW_OFFSET: f32 = 1.0e-5;

/// A material mixing diffuse and mirror-specular reflection.
///
/// `shininess` is the probability that a scattering event is specular.
/// Reflectance channels are expected in [0,1]; values outside that range are
/// passed through unchecked and make throughput grow, which is a modeling
/// error on the caller's side.
pub struct Glossy {
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub shininess: f32,
    pub emission: Vec3,
    /// Polynomial falloff coefficients (constant, linear, quadratic); the
    /// attenuation at distance d is k0 + k1*d + k2*d^2.
    attenuation: [f32; 3],
}

impl Glossy {
    pub fn new(diffuse: &Vec3, specular: &Vec3, shininess: f32) -> Self {
        Glossy {
            diffuse: *diffuse,
            specular: *specular,
            shininess: shininess,
            emission: Vec3::new(0.0, 0.0, 0.0),
            attenuation: [1.0, 0.0, 0.0],
        }
    }
    /// A light-source material: pure emitter, no reflectance.
    pub fn emissive(emission: &Vec3) -> Self {
        Glossy {
            diffuse: Vec3::new(0.0, 0.0, 0.0),
            specular: Vec3::new(0.0, 0.0, 0.0),
            shininess: 0.0,
            emission: *emission,
            attenuation: [1.0, 0.0, 0.0],
        }
    }
    pub fn with_attenuation(mut self, constant: f32, linear: f32, quadratic: f32) -> Self {
        self.attenuation = [constant, linear, quadratic];
        self
    }
}

impl Material for Glossy {
    fn sample_ray_and_update_radiance(
        &self,
        ray: &mut Ray,
        hit: &Intersection,
        rng: &mut RandGen,
    ) {
        let rho = rng.gen::<f32>();
        let normal = hit.normal;
        let point = hit.point;

        if rho > self.shininess {
            // Diffuse bounce: cosine-weighted hemisphere sample, rotated so
            // its up-axis matches the surface normal.
            let local = cosine_hemisphere_direction(rng);
            let new_dir = align_with_normal(&local, &normal);

            let w_diffuse = self.diffuse * normal.dot(&new_dir).max(0.0);
            ray.throughput = ray.throughput.component_mul(&w_diffuse);

            ray.origin = point + SCATTER_OFFSET * normal;
            ray.direction = new_dir;
            ray.last_bounce_diffuse = true;
        } else {
            // Specular bounce: exact mirror reflection.
            let v = -ray.direction.normalize();
            let reflection_dir = reflect(&v, &normal);

            ray.throughput = ray.throughput.component_mul(&self.specular);

            ray.origin = point + SCATTER_OFFSET * normal;
            ray.direction = reflection_dir;
            ray.last_bounce_diffuse = false;
        }
        ray.bounce_count += 1;
    }

    fn get_direct_lighting(&self, hit: &Intersection, scene: &Scene, rng: &mut RandGen) -> Vec3 {
        let mut cumulative_direct_light = Vec3::new(0.0, 0.0, 0.0);
        for light in &scene.light_sources {
            // the intersection itself may be on a light source
            if same_geometry(light.as_ref(), hit.geometry) {
                continue;
            }

            let light_pos = light.surface_point(rng);
            let light_dir = (light_pos - hit.point).normalize();

            let offset_pt = hit.point + SHADOW_OFFSET * hit.normal;
            let shadow_ray = Ray::new(&offset_pt, &light_dir);

            // The light is visible only if nothing occludes it first.
            let hits = scene.collect_hits(&shadow_ray);
            let closest = match Intersection::closest(&hits) {
                Some(closest) => closest,
                None => continue,
            };
            if !same_geometry(closest.geometry, light.as_ref()) {
                continue;
            }

            let light_emission = light.material().emission();
            let direct_light = light_emission * hit.normal.dot(&light_dir).max(0.0);
            let attenuation_factor = light.material().light_attenuation_factor(closest.t);
            cumulative_direct_light += direct_light / attenuation_factor;
        }
        cumulative_direct_light
    }

    fn color_of_last_bounce(
        &self,
        ray: &Ray,
        hit: &Intersection,
        scene: &Scene,
        rng: &mut RandGen,
    ) -> Vec3 {
        // Only the diffuse-weighted fraction of the surface takes a direct
        // term at the terminal bounce.
        let direct_diffuse_light = self.get_direct_lighting(hit, scene, rng);
        (1.0 - self.shininess)
            * ray
                .throughput
                .component_mul(&self.diffuse)
                .component_mul(&direct_diffuse_light)
    }

    fn emission(&self) -> Vec3 {
        self.emission
    }

    fn light_attenuation_factor(&self, distance: f32) -> f32 {
        self.attenuation[0] + self.attenuation[1] * distance + self.attenuation[2] * distance * distance
    }
}
