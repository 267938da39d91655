use crate::core::matrix::Mat4;
use crate::core::vector::Vec4;

use std::fmt;
use std::fmt::Display;

#[derive(Copy, Clone, Debug)]
pub struct Ray {
    pub origin: Vec4,
    pub direction: Vec4,
}

impl Ray {
    pub fn new(origin: Vec4, direction: Vec4) -> Ray {
        Ray {origin: origin, direction: direction}
    }

    /// The point `t` direction-lengths along the ray.
    pub fn position(&self, t: f64) -> Vec4 {
        self.origin + self.direction * t
    }

    /// Maps the ray through `m`. The direction is not renormalized, so `t`
    /// values stay comparable between the two spaces.
    pub fn transform(&self, m: &Mat4) -> Ray {
        Ray::new(*m * self.origin, *m * self.direction)
    }
}

impl Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Ray {{origin: {}, direction: {}}}", self.origin, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_walks_along_direction() {
        let r = Ray::new(Vec4::point(2.0, 3.0, 4.0), Vec4::vector(1.0, 0.0, 0.0));
        assert_eq!(r.position(0.0), Vec4::point(2.0, 3.0, 4.0));
        assert_eq!(r.position(-1.0), Vec4::point(1.0, 3.0, 4.0));
        assert_eq!(r.position(2.5), Vec4::point(4.5, 3.0, 4.0));
    }

    #[test]
    fn translating_moves_origin_only() {
        let r = Ray::new(Vec4::point(1.0, 2.0, 3.0), Vec4::vector(0.0, 1.0, 0.0));
        let r2 = r.transform(&Mat4::translation(3.0, 4.0, 5.0));
        assert_eq!(r2.origin, Vec4::point(4.0, 6.0, 8.0));
        assert_eq!(r2.direction, Vec4::vector(0.0, 1.0, 0.0));
    }

    #[test]
    fn scaling_stretches_direction() {
        let r = Ray::new(Vec4::point(1.0, 2.0, 3.0), Vec4::vector(0.0, 1.0, 0.0));
        let r2 = r.transform(&Mat4::scaling(2.0, 3.0, 4.0));
        assert_eq!(r2.origin, Vec4::point(2.0, 6.0, 12.0));
        assert_eq!(r2.direction, Vec4::vector(0.0, 3.0, 0.0));
    }
}
