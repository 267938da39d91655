use crate::core::{Color, Vec4};

/// A point light source with no size, radiating `intensity` in every direction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vec4,
    pub intensity: Color,
}

impl PointLight {
    pub fn new(position: Vec4, intensity: Color) -> PointLight {
        PointLight {position: position, intensity: intensity}
    }
}
