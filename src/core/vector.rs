use crate::core::math;
use crate::error::{Error, Result};

use approx::AbsDiffEq;
use std::fmt;
use std::fmt::Display;
use std::ops::{Add, Sub, Mul, Div, Neg};

/**
 * A homogeneous 3D tuple. Points carry w = 1 and vectors carry w = 0, so that a
 * single 4x4 matrix can translate points while leaving directions untouched.
 */
#[derive(Copy, Clone, Debug)]
pub struct Vec4 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Vec4 {
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Vec4 {
        Vec4 {x: x, y: y, z: z, w: w}
    }

    pub fn point(x: f64, y: f64, z: f64) -> Vec4 {
        Self::new(x, y, z, 1.0)
    }

    pub fn vector(x: f64, y: f64, z: f64) -> Vec4 {
        Self::new(x, y, z, 0.0)
    }

    pub fn origin() -> Vec4 {
        Self::point(0.0, 0.0, 0.0)
    }

    pub fn zero() -> Vec4 {
        Self::vector(0.0, 0.0, 0.0)
    }

    pub fn x_axis() -> Vec4 {
        Self::vector(1.0, 0.0, 0.0)
    }

    pub fn y_axis() -> Vec4 {
        Self::vector(0.0, 1.0, 0.0)
    }

    pub fn z_axis() -> Vec4 {
        Self::vector(0.0, 0.0, 1.0)
    }

    pub fn is_point(&self) -> bool {
        math::is_nearly_equal(self.w, 1.0)
    }

    pub fn is_vector(&self) -> bool {
        math::is_nearly_zero(self.w)
    }

    /// Drops the w component, e.g. after an inverse-transpose left junk in it.
    pub fn as_vector(&self) -> Vec4 {
        Self::vector(self.x, self.y, self.z)
    }

    pub fn dot(&self, other: &Vec4) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    pub fn cross(&self, other: &Vec4) -> Vec4 {
        Self::vector(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x)
    }

    pub fn magnitude(&self) -> f64 {
        f64::sqrt(self.dot(self))
    }

    /**
     * Scales the vector to unit length. Fails on a zero-length vector instead of
     * producing NaNs.
     */
    pub fn normalized(&self) -> Result<Vec4> {
        let length = self.magnitude();
        if math::is_nearly_zero(length) {
            return Err(Error::ZeroVector);
        }
        Ok(*self / length)
    }

    /**
     * Mirrors the vector about a normal, as GLSL reflect.
     *
     * @param n the normal at the surface over which to reflect
     * @returns the outgoing reflection vector
     */
    pub fn reflect(&self, n: &Vec4) -> Vec4 {
        *self - *n * (2.0 * self.dot(n))
    }
}

impl Display for Vec4 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

impl AbsDiffEq for Vec4 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        math::EPSILON
    }

    fn abs_diff_eq(&self, other: &Vec4, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
            && self.w.abs_diff_eq(&other.w, epsilon)
    }
}

impl PartialEq for Vec4 {
    fn eq(&self, other: &Vec4) -> bool {
        self.abs_diff_eq(other, Self::default_epsilon())
    }
}

impl Add for Vec4 {
    type Output = Vec4;
    fn add(mut self, _rhs: Vec4) -> Vec4 {
        self.x = self.x + _rhs.x;
        self.y = self.y + _rhs.y;
        self.z = self.z + _rhs.z;
        self.w = self.w + _rhs.w;
        self
    }
}

impl Sub for Vec4 {
    type Output = Vec4;
    fn sub(mut self, _rhs: Vec4) -> Vec4 {
        self.x = self.x - _rhs.x;
        self.y = self.y - _rhs.y;
        self.z = self.z - _rhs.z;
        self.w = self.w - _rhs.w;
        self
    }
}

impl Mul<f64> for Vec4 {
    type Output = Vec4;
    fn mul(mut self, _rhs: f64) -> Vec4 {
        self.x = self.x * _rhs;
        self.y = self.y * _rhs;
        self.z = self.z * _rhs;
        self.w = self.w * _rhs;
        self
    }
}

impl Mul<Vec4> for f64 {
    type Output = Vec4;
    fn mul(self, _rhs: Vec4) -> Vec4 { _rhs * self }
}

impl Div<f64> for Vec4 {
    type Output = Vec4;
    fn div(mut self, _rhs: f64) -> Vec4 {
        self.x = self.x / _rhs;
        self.y = self.y / _rhs;
        self.z = self.z / _rhs;
        self.w = self.w / _rhs;
        self
    }
}

impl Neg for Vec4 {
    type Output = Vec4;
    fn neg(mut self) -> Vec4 {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
        self.w = -self.w;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_unit(rng: &mut StdRng) -> Vec4 {
        loop {
            let v = Vec4::vector(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0));
            let length = v.magnitude();
            if length > 0.1 && length <= 1.0 {
                return v / length;
            }
        }
    }

    #[test]
    fn point_and_vector_differ_in_w() {
        let p = Vec4::point(4.3, -4.2, 3.1);
        let v = Vec4::vector(4.3, -4.2, 3.1);
        assert!(p.is_point() && !p.is_vector());
        assert!(v.is_vector() && !v.is_point());
        assert!((p - v).is_point());
    }

    #[test]
    fn subtracting_points_yields_vector() {
        let v = Vec4::point(3.0, 2.0, 1.0) - Vec4::point(5.0, 6.0, 7.0);
        assert_eq!(v, Vec4::vector(-2.0, -4.0, -6.0));
    }

    #[test]
    fn cross_product_follows_right_hand_rule() {
        let a = Vec4::vector(1.0, 2.0, 3.0);
        let b = Vec4::vector(2.0, 3.0, 4.0);
        assert_eq!(a.cross(&b), Vec4::vector(-1.0, 2.0, -1.0));
        assert_eq!(b.cross(&a), Vec4::vector(1.0, -2.0, 1.0));
        assert_eq!(a.dot(&b), 20.0);
    }

    #[test]
    fn normalized_has_unit_length() {
        let v = Vec4::vector(1.0, 2.0, 3.0).normalized().unwrap();
        assert_abs_diff_eq!(v.magnitude(), 1.0, epsilon = math::EPSILON);
    }

    #[test]
    fn normalizing_zero_vector_fails() {
        assert!(matches!(Vec4::zero().normalized(), Err(Error::ZeroVector)));
    }

    #[test]
    fn reflect_about_slanted_normal() {
        let s = f64::sqrt(2.0) / 2.0;
        let v = Vec4::vector(0.0, -1.0, 0.0);
        let n = Vec4::vector(s, s, 0.0);
        assert_abs_diff_eq!(v.reflect(&n), Vec4::vector(1.0, 0.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn reflection_of_unit_vectors_stays_unit() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = random_unit(&mut rng);
            let n = random_unit(&mut rng);
            let r = v.reflect(&n).normalized().unwrap();
            assert_abs_diff_eq!(r.magnitude(), 1.0, epsilon = math::EPSILON);
            assert_abs_diff_eq!(v.reflect(&n).magnitude(), 1.0, epsilon = 1e-9);
        }
    }
}
