use crate::geom::prim::{Shape, ShapeParams};

use crate::core;
use crate::core::{Ray, Vec4};

/**
 * Radius-1 cylinder around the y axis, cut to the open interval (minimum, maximum).
 * Infinite bounds give an unbounded cylinder. When `closed`, the cut ends are
 * capped with disks.
 */
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cylinder {
    pub minimum: f64,
    pub maximum: f64,
    pub closed: bool,
}

impl Default for Cylinder {
    fn default() -> Cylinder {
        Cylinder {
            minimum: f64::NEG_INFINITY,
            maximum: f64::INFINITY,
            closed: false,
        }
    }
}

impl Cylinder {
    pub fn new(minimum: f64, maximum: f64, closed: bool) -> Cylinder {
        Cylinder {minimum: minimum, maximum: maximum, closed: closed}
    }

    pub fn from_params(params: &ShapeParams) -> Cylinder {
        Cylinder {
            minimum: params.minimum.unwrap_or(f64::NEG_INFINITY),
            maximum: params.maximum.unwrap_or(f64::INFINITY),
            closed: params.closed.unwrap_or(false),
        }
    }

    /// Whether the ray at `t` lies within the unit radius.
    fn within_cap(ray: &Ray, t: f64) -> bool {
        let x = ray.origin.x + t * ray.direction.x;
        let z = ray.origin.z + t * ray.direction.z;
        (x * x) + (z * z) <= 1.0
    }

    fn intersect_caps(&self, ray: &Ray, xs: &mut Vec<f64>) {
        if !self.closed || ray.direction.y.abs() < core::EPSILON {
            return;
        }
        for &bound in &[self.minimum, self.maximum] {
            let t = (bound - ray.origin.y) / ray.direction.y;
            if Self::within_cap(ray, t) {
                xs.push(t);
            }
        }
    }
}

fn finite(x: f64) -> Option<f64> {
    if x.is_finite() { Some(x) } else { None }
}

impl Shape for Cylinder {
    fn tag(&self) -> &'static str {
        "cylinder"
    }

    fn params(&self) -> ShapeParams {
        ShapeParams {
            minimum: finite(self.minimum),
            maximum: finite(self.maximum),
            closed: Some(self.closed),
        }
    }

    fn local_intersect(&self, ray: &Ray) -> Vec<f64> {
        let o = &ray.origin;
        let d = &ray.direction;
        let mut xs = Vec::new();

        let a = (d.x * d.x) + (d.z * d.z);
        if a.abs() >= core::EPSILON {
            let b = (2.0 * o.x * d.x) + (2.0 * o.z * d.z);
            let c = (o.x * o.x) + (o.z * o.z) - 1.0;
            let discriminant = (b * b) - (4.0 * a * c);
            if discriminant < 0.0 {
                return xs;
            }

            let sqrt_discriminant = f64::sqrt(discriminant);
            let t0 = (-b - sqrt_discriminant) / (2.0 * a);
            let t1 = (-b + sqrt_discriminant) / (2.0 * a);
            for &t in &[t0.min(t1), t0.max(t1)] {
                let y = o.y + t * d.y;
                if self.minimum < y && y < self.maximum {
                    xs.push(t);
                }
            }
        }

        self.intersect_caps(ray, &mut xs);
        xs
    }

    fn local_normal_at(&self, point: &Vec4) -> Vec4 {
        let on_cap = self.closed && (point.x * point.x) + (point.z * point.z) < 1.0;
        if on_cap && point.y >= self.maximum - core::EPSILON {
            Vec4::vector(0.0, 1.0, 0.0)
        }
        else if on_cap && point.y <= self.minimum + core::EPSILON {
            Vec4::vector(0.0, -1.0, 0.0)
        }
        else {
            Vec4::vector(point.x, 0.0, point.z)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn intersect(cyl: &Cylinder, origin: Vec4, direction: Vec4) -> Vec<f64> {
        let direction = direction.normalized().unwrap();
        cyl.local_intersect(&Ray::new(origin, direction))
    }

    #[test]
    fn default_is_infinite_and_open() {
        let cyl = Cylinder::default();
        assert_eq!(cyl.minimum, f64::NEG_INFINITY);
        assert_eq!(cyl.maximum, f64::INFINITY);
        assert!(!cyl.closed);
        assert_eq!(cyl.params(), ShapeParams {minimum: None, maximum: None, closed: Some(false)});
    }

    #[test]
    fn ray_misses() {
        let cyl = Cylinder::default();
        let cases = [
            (Vec4::point(1.0, 0.0, 0.0), Vec4::vector(0.0, 1.0, 0.0)),
            (Vec4::origin(), Vec4::vector(0.0, 1.0, 0.0)),
            (Vec4::point(0.0, 0.0, -5.0), Vec4::vector(1.0, 1.0, 1.0)),
        ];
        for &(origin, direction) in &cases {
            assert!(intersect(&cyl, origin, direction).is_empty());
        }
    }

    #[test]
    fn ray_hits_wall() {
        let cyl = Cylinder::default();
        let cases = [
            (Vec4::point(1.0, 0.0, -5.0), Vec4::vector(0.0, 0.0, 1.0), 5.0, 5.0),
            (Vec4::point(0.0, 0.0, -5.0), Vec4::vector(0.0, 0.0, 1.0), 4.0, 6.0),
            (Vec4::point(0.5, 0.0, -5.0), Vec4::vector(0.1, 1.0, 1.0), 6.80798, 7.08872),
        ];
        for &(origin, direction, t0, t1) in &cases {
            let xs = intersect(&cyl, origin, direction);
            assert_eq!(xs.len(), 2);
            assert_abs_diff_eq!(xs[0], t0, epsilon = 1e-5);
            assert_abs_diff_eq!(xs[1], t1, epsilon = 1e-5);
        }
    }

    #[test]
    fn wall_normals() {
        let cyl = Cylinder::default();
        assert_eq!(cyl.local_normal_at(&Vec4::point(1.0, 0.0, 0.0)), Vec4::vector(1.0, 0.0, 0.0));
        assert_eq!(cyl.local_normal_at(&Vec4::point(0.0, 5.0, -1.0)), Vec4::vector(0.0, 0.0, -1.0));
        assert_eq!(cyl.local_normal_at(&Vec4::point(0.0, -2.0, 1.0)), Vec4::vector(0.0, 0.0, 1.0));
        assert_eq!(cyl.local_normal_at(&Vec4::point(-1.0, 1.0, 0.0)), Vec4::vector(-1.0, 0.0, 0.0));
    }

    #[test]
    fn truncated_bounds_are_exclusive() {
        let cyl = Cylinder::new(1.0, 2.0, false);
        let cases = [
            (Vec4::point(0.0, 1.5, 0.0), Vec4::vector(0.1, 1.0, 0.0), 0),
            (Vec4::point(0.0, 3.0, -5.0), Vec4::vector(0.0, 0.0, 1.0), 0),
            (Vec4::point(0.0, 0.0, -5.0), Vec4::vector(0.0, 0.0, 1.0), 0),
            (Vec4::point(0.0, 2.0, -5.0), Vec4::vector(0.0, 0.0, 1.0), 0),
            (Vec4::point(0.0, 1.0, -5.0), Vec4::vector(0.0, 0.0, 1.0), 0),
            (Vec4::point(0.0, 1.5, -2.0), Vec4::vector(0.0, 0.0, 1.0), 2),
        ];
        for &(origin, direction, count) in &cases {
            assert_eq!(intersect(&cyl, origin, direction).len(), count, "ray from {}", origin);
        }
    }

    #[test]
    fn closed_caps() {
        let cyl = Cylinder::new(1.0, 2.0, true);
        let cases = [
            (Vec4::point(0.0, 3.0, 0.0), Vec4::vector(0.0, -1.0, 0.0)),
            (Vec4::point(0.0, 3.0, -2.0), Vec4::vector(0.0, -1.0, 2.0)),
            (Vec4::point(0.0, 4.0, -2.0), Vec4::vector(0.0, -1.0, 1.0)),
            (Vec4::point(0.0, 0.0, -2.0), Vec4::vector(0.0, 1.0, 2.0)),
            (Vec4::point(0.0, -1.0, -2.0), Vec4::vector(0.0, 1.0, 1.0)),
        ];
        for &(origin, direction) in &cases {
            assert_eq!(intersect(&cyl, origin, direction).len(), 2, "ray from {}", origin);
        }
    }

    #[test]
    fn cap_normals() {
        let cyl = Cylinder::new(1.0, 2.0, true);
        let cases = [
            (Vec4::point(0.0, 1.0, 0.0), Vec4::vector(0.0, -1.0, 0.0)),
            (Vec4::point(0.5, 1.0, 0.0), Vec4::vector(0.0, -1.0, 0.0)),
            (Vec4::point(0.0, 1.0, 0.5), Vec4::vector(0.0, -1.0, 0.0)),
            (Vec4::point(0.0, 2.0, 0.0), Vec4::vector(0.0, 1.0, 0.0)),
            (Vec4::point(0.5, 2.0, 0.0), Vec4::vector(0.0, 1.0, 0.0)),
            (Vec4::point(0.0, 2.0, 0.5), Vec4::vector(0.0, 1.0, 0.0)),
        ];
        for &(point, normal) in &cases {
            assert_eq!(cyl.local_normal_at(&point), normal);
        }
    }

    #[test]
    fn open_rim_uses_wall_normal() {
        let cyl = Cylinder::new(1.0, 2.0, false);
        let x = 1.0 - 1e-9;
        assert_eq!(cyl.local_normal_at(&Vec4::point(x, 2.0, 0.0)), Vec4::vector(x, 0.0, 0.0));
        assert_eq!(cyl.local_normal_at(&Vec4::point(0.0, 1.0, -x)), Vec4::vector(0.0, 0.0, -x));
    }

    #[test]
    fn params_round_trip() {
        let cyl = Cylinder::new(-1.0, 3.0, true);
        assert_eq!(Cylinder::from_params(&cyl.params()), cyl);
        assert_eq!(Cylinder::from_params(&ShapeParams::default()), Cylinder::default());
    }
}
