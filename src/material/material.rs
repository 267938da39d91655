use crate::material::lights::PointLight;
use crate::material::pattern::Texture;

use crate::core;
use crate::core::{Color, Vec4};
use crate::error::{Error, Result};
use crate::geom::Object;

use std::sync::Arc;

/// Phong surface description. The scalar fields are kept physically plausible:
/// ambient, diffuse and specular stay in [0, 1] and shininess stays non-negative
/// (bad values are rejected), while reflectiveness, transparency and refractive
/// index are clamped into range.
#[derive(Clone, Debug)]
pub struct Material {
    color: Color,
    ambient: f64,
    diffuse: f64,
    specular: f64,
    shininess: f64,
    reflectiveness: f64,
    transparency: f64,
    refractive_index: f64,
    pattern: Option<Arc<Texture>>,
}

fn reject(field: &'static str, value: f64) -> Error {
    log::warn!("rejecting material {} = {}, keeping previous value", field, value);
    Error::InvalidMaterial {field: field, value: value}
}

fn check_unit(field: &'static str, value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    }
    else {
        Err(reject(field, value))
    }
}

fn at_least_zero(value: f64) -> f64 {
    if value >= 0.0 { value } else { 0.0 }
}

impl Default for Material {
    fn default() -> Material {
        Material {
            color: core::WHITE,
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.0,
            reflectiveness: 0.0,
            transparency: 0.0,
            refractive_index: 1.0,
            pattern: None,
        }
    }
}

impl Material {
    pub fn builder() -> MaterialBuilder {
        MaterialBuilder::new()
    }

    /// Clear glass: fully transparent with the refractive index of window glass.
    pub fn glass() -> Material {
        let mut material = Material::default();
        material.set_transparency(1.0).set_refractive_index(1.5);
        material
    }

    pub fn color(&self) -> Color { self.color }
    pub fn ambient(&self) -> f64 { self.ambient }
    pub fn diffuse(&self) -> f64 { self.diffuse }
    pub fn specular(&self) -> f64 { self.specular }
    pub fn shininess(&self) -> f64 { self.shininess }
    pub fn reflectiveness(&self) -> f64 { self.reflectiveness }
    pub fn transparency(&self) -> f64 { self.transparency }
    pub fn refractive_index(&self) -> f64 { self.refractive_index }

    pub fn pattern(&self) -> Option<&Arc<Texture>> {
        self.pattern.as_ref()
    }

    pub fn set_color(&mut self, color: Color) -> &mut Self {
        self.color = color;
        self
    }

    pub fn set_ambient(&mut self, ambient: f64) -> Result<&mut Self> {
        self.ambient = check_unit("ambient", ambient)?;
        Ok(self)
    }

    pub fn set_diffuse(&mut self, diffuse: f64) -> Result<&mut Self> {
        self.diffuse = check_unit("diffuse", diffuse)?;
        Ok(self)
    }

    pub fn set_specular(&mut self, specular: f64) -> Result<&mut Self> {
        self.specular = check_unit("specular", specular)?;
        Ok(self)
    }

    pub fn set_shininess(&mut self, shininess: f64) -> Result<&mut Self> {
        if !(shininess >= 0.0) {
            return Err(reject("shininess", shininess));
        }
        self.shininess = shininess;
        Ok(self)
    }

    pub fn set_reflectiveness(&mut self, reflectiveness: f64) -> &mut Self {
        self.reflectiveness = core::clamp_unit(at_least_zero(reflectiveness));
        self
    }

    pub fn set_transparency(&mut self, transparency: f64) -> &mut Self {
        self.transparency = at_least_zero(transparency);
        self
    }

    pub fn set_refractive_index(&mut self, refractive_index: f64) -> &mut Self {
        self.refractive_index = at_least_zero(refractive_index);
        self
    }

    /// Replaces the pattern. Patterns are shared, so a change in look means a
    /// new texture rather than an edit to the old one.
    pub fn set_pattern(&mut self, pattern: Option<Arc<Texture>>) -> &mut Self {
        self.pattern = pattern;
        self
    }

    /// Surface color at a world-space point, before any lighting.
    pub fn surface_color(&self, object: &Object, point: Vec4) -> Color {
        match self.pattern {
            Some(ref texture) => texture.color_at(object, point),
            None => self.color,
        }
    }

    /**
     * Phong lighting of a single point by a single light. Nothing is clamped;
     * highlights may exceed 1.0 and are left for the image writer to deal with.
     *
     * @param light     the light source
     * @param object    the object hit, for pattern lookup
     * @param point     the world-space point being lit
     * @param eye       unit vector from the point toward the eye
     * @param normal    unit surface normal at the point
     * @param in_shadow whether something blocks the light
     */
    pub fn lighting(&self, light: &PointLight, object: &Object, point: Vec4, eye: Vec4,
            normal: Vec4, in_shadow: bool) -> Result<Color>
    {
        let effective_color = self.surface_color(object, point) * light.intensity;
        let ambient = effective_color * self.ambient;
        if in_shadow {
            return Ok(ambient);
        }

        let lightv = (light.position - point).normalized()?;
        let light_dot_normal = lightv.dot(&normal);
        if light_dot_normal < 0.0 {
            // Light is on the other side of the surface.
            return Ok(ambient);
        }

        let diffuse = effective_color * self.diffuse * light_dot_normal;
        let reflectv = (-lightv).reflect(&normal);
        let reflect_dot_eye = reflectv.dot(&eye);
        let specular = if reflect_dot_eye <= 0.0 {
            core::BLACK
        }
        else {
            light.intensity * (self.specular * reflect_dot_eye.powf(self.shininess))
        };

        Ok(ambient + diffuse + specular)
    }
}

impl PartialEq for Material {
    fn eq(&self, other: &Material) -> bool {
        let same_pattern = match (&self.pattern, &other.pattern) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b) || **a == **b,
            (None, None) => true,
            _ => false,
        };
        self.color == other.color
            && self.ambient == other.ambient
            && self.diffuse == other.diffuse
            && self.specular == other.specular
            && self.shininess == other.shininess
            && self.reflectiveness == other.reflectiveness
            && self.transparency == other.transparency
            && self.refractive_index == other.refractive_index
            && same_pattern
    }
}

/// Collects material fields and validates them all at once in `build`.
pub struct MaterialBuilder {
    _color: Color,
    _ambient: f64,
    _diffuse: f64,
    _specular: f64,
    _shininess: f64,
    _reflectiveness: f64,
    _transparency: f64,
    _refractive_index: f64,
    _pattern: Option<Arc<Texture>>,
}

impl MaterialBuilder {
    pub fn new() -> MaterialBuilder {
        let defaults = Material::default();
        MaterialBuilder {
            _color: defaults.color,
            _ambient: defaults.ambient,
            _diffuse: defaults.diffuse,
            _specular: defaults.specular,
            _shininess: defaults.shininess,
            _reflectiveness: defaults.reflectiveness,
            _transparency: defaults.transparency,
            _refractive_index: defaults.refractive_index,
            _pattern: None,
        }
    }

    /// Fails with the first out-of-range field.
    pub fn build(&self) -> Result<Material> {
        let mut material = Material::default();
        material.set_ambient(self._ambient)?;
        material.set_diffuse(self._diffuse)?;
        material.set_specular(self._specular)?;
        material.set_shininess(self._shininess)?;
        material.set_color(self._color)
                .set_reflectiveness(self._reflectiveness)
                .set_transparency(self._transparency)
                .set_refractive_index(self._refractive_index)
                .set_pattern(self._pattern.clone());
        Ok(material)
    }

    pub fn color(&mut self, val: Color) -> &mut Self {
        self._color = val;
        self
    }

    pub fn ambient(&mut self, val: f64) -> &mut Self {
        self._ambient = val;
        self
    }

    pub fn diffuse(&mut self, val: f64) -> &mut Self {
        self._diffuse = val;
        self
    }

    pub fn specular(&mut self, val: f64) -> &mut Self {
        self._specular = val;
        self
    }

    pub fn shininess(&mut self, val: f64) -> &mut Self {
        self._shininess = val;
        self
    }

    pub fn reflectiveness(&mut self, val: f64) -> &mut Self {
        self._reflectiveness = val;
        self
    }

    pub fn transparency(&mut self, val: f64) -> &mut Self {
        self._transparency = val;
        self
    }

    pub fn refractive_index(&mut self, val: f64) -> &mut Self {
        self._refractive_index = val;
        self
    }

    pub fn pattern(&mut self, val: Arc<Texture>) -> &mut Self {
        self._pattern = Some(val);
        self
    }
}

impl Default for MaterialBuilder {
    fn default() -> MaterialBuilder {
        Self::new()
    }
}
