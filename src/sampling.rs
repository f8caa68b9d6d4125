use crate::aliases::{RandGen, Vec3};
use crate::onb::Onb;
use rand::Rng;
use std::f32::consts::PI;

/// Cosine-weighted direction on the unit hemisphere, in a local frame whose
/// up-axis is the y (index 1) component.
pub fn cosine_hemisphere_direction(rng: &mut RandGen) -> Vec3 {
    let s = rng.gen::<f32>();
    let t = rng.gen::<f32>();
    let u = 2.0 * PI * s;
    let v = (1.0 - t).sqrt();
    Vec3::new(v * u.cos(), t.sqrt(), v * u.sin())
}

/// Rotates a local-frame sample (y-up) so that its up-axis coincides with
/// the given surface normal.
pub fn align_with_normal(local: &Vec3, normal: &Vec3) -> Vec3 {
    let onb = Onb::build_from_w(normal);
    onb.local_to_global_vec(&Vec3::new(local[0], local[2], local[1]))
}

/// Uniformly distributed unit vector.
pub fn uniform_unit_vector(rng: &mut RandGen) -> Vec3 {
    loop {
        let p = Vec3::new(
            2.0 * rng.gen::<f32>() - 1.0,
            2.0 * rng.gen::<f32>() - 1.0,
            2.0 * rng.gen::<f32>() - 1.0,
        );
        let norm = p.norm();
        if 0.0 < norm && norm < 1.0 {
            return p / norm;
        }
    }
}

/// Mirror reflection of `v` about `normal`, where `v` points away from the
/// surface. The result is normalized.
pub fn reflect(v: &Vec3, normal: &Vec3) -> Vec3 {
    (2.0 * normal.dot(v) * normal - v).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aliases::Vec3;

    #[test]
    fn cosine_samples_stay_in_upper_hemisphere() {
        const SAMPLE_CNT: usize = 10000;
        let mut rng = rand::thread_rng();
        let normal = Vec3::new(0.0, 0.0, 1.0);
        for _ in 0..SAMPLE_CNT {
            let local = cosine_hemisphere_direction(&mut rng);
            assert!((local.norm() - 1.0).abs() < 1.0e-4);
            let world = align_with_normal(&local, &normal);
            assert!(world.dot(&normal) >= 0.0);
        }
    }

    #[test]
    fn cosine_samples_average_to_two_thirds() {
        // E[cos] of a cosine-weighted hemisphere distribution is 2/3.
        const SAMPLE_CNT: usize = 100000;
        let mut rng = rand::thread_rng();
        let mut sum = 0.0f32;
        for _ in 0..SAMPLE_CNT {
            sum += cosine_hemisphere_direction(&mut rng)[1];
        }
        let mean = sum / SAMPLE_CNT as f32;
        println!("[cosine_samples_average_to_two_thirds] mean: {}", mean);
        assert!((mean - 2.0 / 3.0).abs() < 0.01);
    }

    #[test]
    fn reflect_mirrors_about_normal() {
        let normal = Vec3::new(0.0, 1.0, 0.0);
        let v = Vec3::new(-1.0, 1.0, 0.0).normalize(); // toward the surface inverted
        let r = reflect(&v, &normal);
        assert!((r - Vec3::new(1.0, 1.0, 0.0).normalize()).norm() < 1.0e-6);
        assert!((r.norm() - 1.0).abs() < 1.0e-6);
    }
}
