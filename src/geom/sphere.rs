use crate::geom::prim::Shape;

use crate::core::{Ray, Vec4};

/// Unit sphere centered at the origin.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Sphere {}

impl Shape for Sphere {
    fn tag(&self) -> &'static str {
        "sphere"
    }

    fn local_intersect(&self, ray: &Ray) -> Vec<f64> {
        let d = &ray.direction;
        let sphere_to_ray = ray.origin - Vec4::origin();

        // Solve |O + tD|^2 = 1 for t.
        let a = d.dot(d);
        let b = 2.0 * d.dot(&sphere_to_ray);
        let c = sphere_to_ray.dot(&sphere_to_ray) - 1.0;
        let discriminant = (b * b) - (4.0 * a * c);
        if discriminant < 0.0 {
            return vec![];
        }

        let sqrt_discriminant = f64::sqrt(discriminant);
        let t1 = (-b - sqrt_discriminant) / (2.0 * a);
        let t2 = (-b + sqrt_discriminant) / (2.0 * a);
        if t1 < 0.0 && t2 < 0.0 {
            // Entirely behind the ray.
            return vec![];
        }
        vec![t1, t2]
    }

    fn local_normal_at(&self, point: &Vec4) -> Vec4 {
        *point - Vec4::origin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn intersect(origin: Vec4, direction: Vec4) -> Vec<f64> {
        Sphere {}.local_intersect(&Ray::new(origin, direction))
    }

    #[test]
    fn ray_through_center() {
        let xs = intersect(Vec4::point(0.0, 0.0, -5.0), Vec4::vector(0.0, 0.0, 1.0));
        assert_eq!(xs, vec![4.0, 6.0]);
    }

    #[test]
    fn tangent_ray() {
        let xs = intersect(Vec4::point(0.0, 1.0, -5.0), Vec4::vector(0.0, 0.0, 1.0));
        assert_eq!(xs, vec![5.0, 5.0]);
    }

    #[test]
    fn ray_misses() {
        let xs = intersect(Vec4::point(0.0, 2.0, -5.0), Vec4::vector(0.0, 0.0, 1.0));
        assert!(xs.is_empty());
    }

    #[test]
    fn ray_from_inside() {
        let xs = intersect(Vec4::origin(), Vec4::vector(0.0, 0.0, 1.0));
        assert_eq!(xs, vec![-1.0, 1.0]);
    }

    #[test]
    fn sphere_behind_ray() {
        let xs = intersect(Vec4::point(0.0, 0.0, 5.0), Vec4::vector(0.0, 0.0, 1.0));
        assert!(xs.is_empty());
    }

    #[test]
    fn normals_on_axes() {
        let s = Sphere {};
        assert_eq!(s.local_normal_at(&Vec4::point(1.0, 0.0, 0.0)), Vec4::vector(1.0, 0.0, 0.0));
        assert_eq!(s.local_normal_at(&Vec4::point(0.0, 1.0, 0.0)), Vec4::vector(0.0, 1.0, 0.0));
        assert_eq!(s.local_normal_at(&Vec4::point(0.0, 0.0, 1.0)), Vec4::vector(0.0, 0.0, 1.0));
    }

    #[test]
    fn normal_at_nonaxial_point() {
        let k = f64::sqrt(3.0) / 3.0;
        let n = Sphere {}.local_normal_at(&Vec4::point(k, k, k));
        assert_abs_diff_eq!(n, Vec4::vector(k, k, k), epsilon = 1e-12);
        assert_abs_diff_eq!(n.magnitude(), 1.0, epsilon = 1e-12);
    }
}
