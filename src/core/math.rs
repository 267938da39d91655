/** Tolerance used for all floating point comparisons in the core. */
pub const EPSILON: f64 = 1.0e-6;

pub fn clamp<T: PartialOrd>(x: T, a: T, b: T) -> T {
    if x < a {
        a
    }
    else if x > b {
        b
    }
    else {
        x
    }
}

pub fn clamp_unit(x: f64) -> f64 {
    clamp(x, 0.0, 1.0)
}

/**
 * Linearly interpolates between x and y. Where a = 0, x is returned, and
 * where a = 1, y is returned. If a < 0 or a > 1, this function will
 * extrapolate.
 */
pub fn lerp(x: f64, y: f64, a: f64) -> f64 {
    x + a * (y - x)
}

/**
 * Determines whether a number is zero, within EPSILON.
 */
pub fn is_nearly_zero(x: f64) -> bool {
    f64::abs(x) < EPSILON
}

/**
 * Determines whether two numbers are equal, within EPSILON.
 */
pub fn is_nearly_equal(x: f64, y: f64) -> bool {
    is_nearly_zero(x - y)
}

pub fn row_col(index: usize, width: usize) -> (usize, usize) {
    (index / width, index % width)
}

pub fn index(row: usize, col: usize, width: usize) -> usize {
    row * width + col
}
