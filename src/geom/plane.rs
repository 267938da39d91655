use crate::geom::prim::Shape;

use crate::core;
use crate::core::{Ray, Vec4};

/// The xz plane through the origin, facing +y.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Plane {}

impl Shape for Plane {
    fn tag(&self) -> &'static str {
        "plane"
    }

    fn local_intersect(&self, ray: &Ray) -> Vec<f64> {
        if ray.direction.y.abs() < core::EPSILON {
            // Parallel or coplanar.
            return vec![];
        }
        vec![-ray.origin.y / ray.direction.y]
    }

    fn local_normal_at(&self, _: &Vec4) -> Vec4 {
        Vec4::y_axis()
    }
}
