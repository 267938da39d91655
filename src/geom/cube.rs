use crate::geom::prim::Shape;

use crate::core;
use crate::core::{Ray, Vec4};

/// Axis-aligned cube spanning [-1, 1] on every axis.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Cube {}

/// Entry and exit t of the slab between -1 and 1 along one axis.
fn check_axis(origin: f64, direction: f64) -> (f64, f64) {
    let tmin_numerator = -1.0 - origin;
    let tmax_numerator = 1.0 - origin;

    let (tmin, tmax) = if direction.abs() >= core::EPSILON {
        (tmin_numerator / direction, tmax_numerator / direction)
    }
    else {
        (tmin_numerator * f64::INFINITY, tmax_numerator * f64::INFINITY)
    };

    if tmin > tmax { (tmax, tmin) } else { (tmin, tmax) }
}

impl Shape for Cube {
    fn tag(&self) -> &'static str {
        "cube"
    }

    fn local_intersect(&self, ray: &Ray) -> Vec<f64> {
        let (xtmin, xtmax) = check_axis(ray.origin.x, ray.direction.x);
        let (ytmin, ytmax) = check_axis(ray.origin.y, ray.direction.y);
        let (ztmin, ztmax) = check_axis(ray.origin.z, ray.direction.z);

        let tmin = xtmin.max(ytmin).max(ztmin);
        let tmax = xtmax.min(ytmax).min(ztmax);
        if tmin > tmax {
            return vec![];
        }
        vec![tmin, tmax]
    }

    fn local_normal_at(&self, point: &Vec4) -> Vec4 {
        let maxc = point.x.abs().max(point.y.abs()).max(point.z.abs());
        if maxc == point.x.abs() {
            Vec4::vector(point.x, 0.0, 0.0)
        }
        else if maxc == point.y.abs() {
            Vec4::vector(0.0, point.y, 0.0)
        }
        else {
            Vec4::vector(0.0, 0.0, point.z)
        }
    }
}
