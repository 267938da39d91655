use crate::core;
use crate::core::{Color, Mat4, Trs, Vec4, Xform};
use crate::error::{Error, Result};
use crate::geom::Object;

use std::fmt;
use std::sync::Arc;

/// A color function over pattern space. Implementations must be pure: the same
/// point always yields the same color.
pub trait Pattern : Send + Sync + fmt::Debug {
    /// Name used in scene records.
    fn tag(&self) -> &'static str;
    /// Reference colors, in the order the record stores them.
    fn colors(&self) -> Vec<Color>;
    fn pattern_at(&self, point: &Vec4) -> Color;
}

fn is_even(x: f64) -> bool {
    x.floor().rem_euclid(2.0) == 0.0
}

#[derive(Debug)]
pub struct Solid {
    pub color: Color,
}

impl Pattern for Solid {
    fn tag(&self) -> &'static str { "solid" }
    fn colors(&self) -> Vec<Color> { vec![self.color] }
    fn pattern_at(&self, _: &Vec4) -> Color {
        self.color
    }
}

/// Alternates between `a` and `b` in unit-wide bands along x.
#[derive(Debug)]
pub struct Stripe {
    pub a: Color,
    pub b: Color,
}

impl Pattern for Stripe {
    fn tag(&self) -> &'static str { "stripe" }
    fn colors(&self) -> Vec<Color> { vec![self.a, self.b] }
    fn pattern_at(&self, point: &Vec4) -> Color {
        if is_even(point.x) { self.a } else { self.b }
    }
}

/// Blends from `a` to `b` over each unit of x, then starts over.
#[derive(Debug)]
pub struct Gradient {
    pub a: Color,
    pub b: Color,
}

impl Pattern for Gradient {
    fn tag(&self) -> &'static str { "gradient" }
    fn colors(&self) -> Vec<Color> { vec![self.a, self.b] }
    fn pattern_at(&self, point: &Vec4) -> Color {
        let fraction = point.x - point.x.floor();
        Color::new(
            core::lerp(self.a.r, self.b.r, fraction),
            core::lerp(self.a.g, self.b.g, fraction),
            core::lerp(self.a.b, self.b.b, fraction))
    }
}

/// Concentric unit-wide rings around the y axis.
#[derive(Debug)]
pub struct Ring {
    pub a: Color,
    pub b: Color,
}

impl Pattern for Ring {
    fn tag(&self) -> &'static str { "ring" }
    fn colors(&self) -> Vec<Color> { vec![self.a, self.b] }
    fn pattern_at(&self, point: &Vec4) -> Color {
        let radius = f64::sqrt(point.x * point.x + point.z * point.z);
        if is_even(radius) { self.a } else { self.b }
    }
}

/// 3D checkerboard of unit cubes.
#[derive(Debug)]
pub struct Checker {
    pub a: Color,
    pub b: Color,
}

impl Pattern for Checker {
    fn tag(&self) -> &'static str { "checker" }
    fn colors(&self) -> Vec<Color> { vec![self.a, self.b] }
    fn pattern_at(&self, point: &Vec4) -> Color {
        if is_even(point.x.floor() + point.y.floor() + point.z.floor()) { self.a } else { self.b }
    }
}

/// Builds the pattern a record names. Unknown tags are an error, never a default.
pub fn pattern_from_tag(tag: &str, colors: &[Color]) -> Result<Box<dyn Pattern>> {
    let expected = if tag == "solid" { 1 } else { 2 };
    let pattern: Box<dyn Pattern> = match (tag, colors) {
        ("solid", &[color]) => Box::new(Solid {color: color}),
        ("stripe", &[a, b]) => Box::new(Stripe {a: a, b: b}),
        ("gradient", &[a, b]) => Box::new(Gradient {a: a, b: b}),
        ("ring", &[a, b]) => Box::new(Ring {a: a, b: b}),
        ("checker", &[a, b]) => Box::new(Checker {a: a, b: b}),
        ("solid", _) | ("stripe", _) | ("gradient", _) | ("ring", _) | ("checker", _) => {
            return Err(Error::InvalidRecord(format!(
                "{} pattern takes {} colors, got {}", tag, expected, colors.len())));
        },
        _ => {
            log::debug!("unknown pattern tag {:?}", tag);
            return Err(Error::UnknownPattern(tag.to_string()));
        },
    };
    Ok(pattern)
}

/// A pattern placed in its own space, nested inside the space of whatever
/// object it is painted on. Textures are shared between materials through
/// `Arc` and never change once built.
#[derive(Debug)]
pub struct Texture {
    pattern: Box<dyn Pattern>,
    xform: Xform,
}

impl Texture {
    pub fn new<P: Pattern + 'static>(pattern: P) -> Texture {
        Self::from_boxed(Box::new(pattern))
    }

    pub fn from_boxed(pattern: Box<dyn Pattern>) -> Texture {
        Texture {pattern: pattern, xform: Xform::identity()}
    }

    pub fn with_transform(mut self, mat: Mat4) -> Result<Texture> {
        self.xform = Xform::new(mat)?;
        Ok(self)
    }

    pub fn with_trs(mut self, trs: Trs) -> Result<Texture> {
        self.xform = Xform::from_trs(trs)?;
        Ok(self)
    }

    pub fn with_xform(mut self, xform: Xform) -> Texture {
        self.xform = xform;
        self
    }

    pub fn shared(self) -> Arc<Texture> {
        Arc::new(self)
    }

    pub fn pattern(&self) -> &dyn Pattern {
        self.pattern.as_ref()
    }

    pub fn xform(&self) -> &Xform {
        &self.xform
    }

    /// Color of `object` at a world-space point: world to object space, then
    /// object to pattern space.
    pub fn color_at(&self, object: &Object, world_point: Vec4) -> Color {
        let object_point = object.world_to_object(world_point);
        let pattern_point = self.xform.untransform(object_point);
        self.pattern.pattern_at(&pattern_point)
    }
}

impl PartialEq for Texture {
    fn eq(&self, other: &Texture) -> bool {
        self.pattern.tag() == other.pattern.tag()
            && self.pattern.colors() == other.pattern.colors()
            && self.xform == other.xform
    }
}
