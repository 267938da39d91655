use crate::core::math;
use crate::core::vector::Vec4;
use crate::error::{Error, Result};

use approx::AbsDiffEq;
use std::fmt;
use std::fmt::Display;
use std::ops::{Mul, Index, IndexMut};

/**
 * A 4x4 matrix in row-major order. Matrices act on column vectors, so
 * `a * b * v` applies `b` first; a model transform composed as
 * `translation * rotation * scaling` scales, then rotates, then translates.
 */
#[derive(Copy, Clone, Debug)]
pub struct Mat4 {
    storage: [[f64; 4]; 4],
}

impl Mat4 {
    pub const fn new(data: [[f64; 4]; 4]) -> Mat4 {
        Mat4 {storage: data}
    }

    pub fn zero() -> Mat4 {
        Self::new([[0.0; 4]; 4])
    }

    pub fn identity() -> Mat4 {
        Self::scaling(1.0, 1.0, 1.0)
    }

    pub fn translation(x: f64, y: f64, z: f64) -> Mat4 {
        Self::new([
            [1.0, 0.0, 0.0, x],
            [0.0, 1.0, 0.0, y],
            [0.0, 0.0, 1.0, z],
            [0.0, 0.0, 0.0, 1.0]])
    }

    pub fn scaling(x: f64, y: f64, z: f64) -> Mat4 {
        Self::new([
            [x, 0.0, 0.0, 0.0],
            [0.0, y, 0.0, 0.0],
            [0.0, 0.0, z, 0.0],
            [0.0, 0.0, 0.0, 1.0]])
    }

    /** Rotation about the x axis by `r` radians (left-handed, as seen looking down the axis). */
    pub fn rotation_x(r: f64) -> Mat4 {
        let (sin, cos) = r.sin_cos();
        Self::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, cos, -sin, 0.0],
            [0.0, sin, cos, 0.0],
            [0.0, 0.0, 0.0, 1.0]])
    }

    pub fn rotation_y(r: f64) -> Mat4 {
        let (sin, cos) = r.sin_cos();
        Self::new([
            [cos, 0.0, sin, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-sin, 0.0, cos, 0.0],
            [0.0, 0.0, 0.0, 1.0]])
    }

    pub fn rotation_z(r: f64) -> Mat4 {
        let (sin, cos) = r.sin_cos();
        Self::new([
            [cos, -sin, 0.0, 0.0],
            [sin, cos, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0]])
    }

    /** Euler rotation applying x, then y, then z. */
    pub fn rotation(x: f64, y: f64, z: f64) -> Mat4 {
        Self::rotation_z(z) * Self::rotation_y(y) * Self::rotation_x(x)
    }

    /**
     * Shear where each component moves in proportion to the other two,
     * e.g. `xy` moves x in proportion to y.
     */
    pub fn shearing(xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Mat4 {
        Self::new([
            [1.0, xy, xz, 0.0],
            [yx, 1.0, yz, 0.0],
            [zx, zy, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0]])
    }

    /**
     * World-to-eye transform for an eye at `from` looking towards `to`. Fails if
     * `from` and `to` coincide or `up` is parallel to the line of sight.
     */
    pub fn view_transform(from: Vec4, to: Vec4, up: Vec4) -> Result<Mat4> {
        let forward = (to - from).normalized()?;
        let left = forward.cross(&up.normalized()?);
        if left.magnitude() < math::EPSILON {
            return Err(Error::ZeroVector);
        }
        let true_up = left.cross(&forward);
        let orientation = Self::new([
            [left.x, left.y, left.z, 0.0],
            [true_up.x, true_up.y, true_up.z, 0.0],
            [-forward.x, -forward.y, -forward.z, 0.0],
            [0.0, 0.0, 0.0, 1.0]]);
        Ok(orientation * Self::translation(-from.x, -from.y, -from.z))
    }

    pub fn rows(&self) -> [[f64; 4]; 4] {
        self.storage
    }

    pub fn transposed(&self) -> Mat4 {
        let mut output = Mat4::zero();
        for row in 0..4 {
            for col in 0..4 {
                output[row][col] = self[col][row];
            }
        }
        output
    }

    fn get_determinant3(&self, r: [usize; 3], c: [usize; 3]) -> f64 {
          self[r[0]][c[0]] * self[r[1]][c[1]] * self[r[2]][c[2]]
        + self[r[0]][c[1]] * self[r[1]][c[2]] * self[r[2]][c[0]]
        + self[r[0]][c[2]] * self[r[1]][c[0]] * self[r[2]][c[1]]
        - self[r[0]][c[0]] * self[r[1]][c[2]] * self[r[2]][c[1]]
        - self[r[0]][c[1]] * self[r[1]][c[0]] * self[r[2]][c[2]]
        - self[r[0]][c[2]] * self[r[1]][c[1]] * self[r[2]][c[0]]
    }

    /** Determinant of the 3x3 submatrix left after removing `row` and `col`. */
    pub fn minor(&self, row: usize, col: usize) -> f64 {
        let others = |skip: usize| {
            let mut out = [0usize; 3];
            let mut cursor = 0;
            for i in (0..4).filter(|&i| i != skip) {
                out[cursor] = i;
                cursor += 1;
            }
            out
        };
        self.get_determinant3(others(row), others(col))
    }

    pub fn cofactor(&self, row: usize, col: usize) -> f64 {
        let minor = self.minor(row, col);
        if (row + col) % 2 == 0 { minor } else { -minor }
    }

    pub fn determinant(&self) -> f64 {
        (0..4).map(|col| self[0][col] * self.cofactor(0, col)).sum()
    }

    /**
     * Inverse via the adjugate. A singular matrix is an error rather than a
     * matrix full of infinities.
     */
    pub fn inverted(&self) -> Result<Mat4> {
        let det = self.determinant();
        if det.abs() < f64::EPSILON {
            return Err(Error::SingularMatrix {determinant: det});
        }

        let rcp = 1.0 / det;
        let mut output = Mat4::zero();
        for row in 0..4 {
            for col in 0..4 {
                // Transposed on the way out.
                output[col][row] = self.cofactor(row, col) * rcp;
            }
        }
        Ok(output)
    }
}

impl Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut output = String::new();
        output.push_str("(");
        for row in 0..4 {
            output.push_str("(");
            for col in 0..4 {
                output.push_str(&self[row][col].to_string());
                if col != 3 {
                    output.push_str(", ");
                }
            }
            output.push_str(")");
            if row != 3 {
                output.push_str(", ");
            }
        }
        output.push_str(")");
        write!(f, "{}", output)
    }
}

impl AbsDiffEq for Mat4 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        math::EPSILON
    }

    fn abs_diff_eq(&self, other: &Mat4, epsilon: f64) -> bool {
        (0..4).all(|row| (0..4).all(|col| self[row][col].abs_diff_eq(&other[row][col], epsilon)))
    }
}

impl PartialEq for Mat4 {
    fn eq(&self, other: &Mat4) -> bool {
        self.abs_diff_eq(other, Self::default_epsilon())
    }
}

impl Mul for Mat4 {
    type Output = Mat4;
    fn mul(self, _rhs: Mat4) -> Mat4 {
        let mut output = Mat4::zero();
        for row in 0..4 {
            for col in 0..4 {
                output[row][col] = (0..4).map(|k| self[row][k] * _rhs[k][col]).sum();
            }
        }
        output
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;
    fn mul(self, v: Vec4) -> Vec4 {
        let m = &self.storage;
        Vec4::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z + m[0][3] * v.w,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z + m[1][3] * v.w,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z + m[2][3] * v.w,
            m[3][0] * v.x + m[3][1] * v.y + m[3][2] * v.z + m[3][3] * v.w)
    }
}

impl Index<usize> for Mat4 {
    type Output = [f64; 4];

    fn index(&self, index: usize) -> &[f64; 4] {
        &self.storage[index]
    }
}

impl IndexMut<usize> for Mat4 {
    fn index_mut(&mut self, index: usize) -> &mut [f64; 4] {
        &mut self.storage[index]
    }
}
