use crate::aliases::Vec3;
use crate::geometry::Geometry;
use crate::intersection::Intersection;
use crate::ray::Ray;
use log::{debug, warn};
use std::sync::Arc;

/// Read-only aggregate of the geometry being rendered.
///
/// Light sources are not a separate primitive kind: any model whose material
/// carries nonzero emission is also registered in `light_sources`, which the
/// direct-lighting estimator iterates. Queries never mutate the scene, so a
/// driver may share it across workers for the duration of a frame.
pub struct Scene {
    pub models: Vec<Arc<dyn Geometry>>,
    pub light_sources: Vec<Arc<dyn Geometry>>,
}

impl Scene {
    pub fn new(models: Vec<Arc<dyn Geometry>>) -> Self {
        let mut scene = Scene {
            models: Vec::new(),
            light_sources: Vec::new(),
        };
        for model in models {
            scene.add_model(model);
        }
        if scene.light_sources.is_empty() {
            warn!("scene built without emissive geometry; direct lighting is zero");
        }
        scene
    }
    pub fn add_model(&mut self, model: Arc<dyn Geometry>) {
        let emission = model.material().emission();
        if emission != Vec3::new(0.0, 0.0, 0.0) {
            debug!("registering light source, emission = {:?}", emission);
            self.light_sources.push(model.clone());
        }
        self.models.push(model);
    }
    /// Every intersection of the ray against every model, in model order.
    /// This is the hit list a shadow ray is resolved from.
    pub fn collect_hits<'s>(&'s self, ray: &Ray) -> Vec<Intersection<'s>> {
        let mut hits = Vec::new();
        for model in &self.models {
            hits.extend(model.intersect(ray));
        }
        hits
    }
    /// Globally closest hit across all models, by minimum t.
    pub fn closest_hit<'s>(&'s self, ray: &Ray) -> Option<Intersection<'s>> {
        Intersection::closest(&self.collect_hits(ray))
    }
}
