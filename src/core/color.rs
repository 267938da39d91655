use crate::core::math;

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Display;
use std::ops::{Add, Sub, Mul};

/// Linear RGB color with channels nominally in [0, 1]. Shading may exceed 1;
/// clamping only happens when pixels are quantized for output.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

pub const BLACK: Color = Color {r: 0.0, g: 0.0, b: 0.0};
pub const DARK_GREY: Color = Color {r: 0.2, g: 0.2, b: 0.2};
pub const WHITE: Color = Color {r: 1.0, g: 1.0, b: 1.0};
pub const RED: Color = Color {r: 1.0, g: 0.0, b: 0.0};
pub const GREEN: Color = Color {r: 0.0, g: 1.0, b: 0.0};
pub const BLUE: Color = Color {r: 0.0, g: 0.0, b: 1.0};
pub const PURPLE: Color = Color {r: 1.0, g: 0.0, b: 1.0};
pub const YELLOW: Color = Color {r: 1.0, g: 1.0, b: 0.0};

impl Color {
    pub fn new(r: f64, g: f64, b: f64) -> Color {
        Color {r: r, g: g, b: b}
    }

    pub fn is_black(&self) -> bool {
        *self == BLACK
    }

    /// Quantizes each channel to 0-255, clamping out-of-range values.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let quantize = |c: f64| (math::clamp_unit(c) * 255.0).round() as u8;
        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }
}

impl Default for Color {
    fn default() -> Color {
        BLACK
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

impl AbsDiffEq for Color {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        math::EPSILON
    }

    fn abs_diff_eq(&self, other: &Color, epsilon: f64) -> bool {
        self.r.abs_diff_eq(&other.r, epsilon)
            && self.g.abs_diff_eq(&other.g, epsilon)
            && self.b.abs_diff_eq(&other.b, epsilon)
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Color) -> bool {
        self.abs_diff_eq(other, Self::default_epsilon())
    }
}

impl Add for Color {
    type Output = Color;
    fn add(self, _rhs: Color) -> Color {
        Color::new(self.r + _rhs.r, self.g + _rhs.g, self.b + _rhs.b)
    }
}

impl Sub for Color {
    type Output = Color;
    fn sub(self, _rhs: Color) -> Color {
        Color::new(self.r - _rhs.r, self.g - _rhs.g, self.b - _rhs.b)
    }
}

impl Mul<f64> for Color {
    type Output = Color;
    fn mul(self, _rhs: f64) -> Color {
        Color::new(self.r * _rhs, self.g * _rhs, self.b * _rhs)
    }
}

/// Hadamard product, used to filter light by a surface color.
impl Mul for Color {
    type Output = Color;
    fn mul(self, _rhs: Color) -> Color {
        Color::new(self.r * _rhs.r, self.g * _rhs.g, self.b * _rhs.b)
    }
}
