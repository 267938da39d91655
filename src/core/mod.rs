mod camera;
pub use self::camera::Camera;

mod color;
pub use self::color::*;

mod math;
pub use self::math::*;

mod matrix;
pub use self::matrix::Mat4;

mod ray;
pub use self::ray::Ray;

mod vector;
pub use self::vector::Vec4;

mod xform;
pub use self::xform::{Trs, Xform};
