use crate::geom::intersection::{Intersection, Intersections};
use crate::geom::{Cube, Cylinder, Plane, Sphere};

use crate::core::{Mat4, Ray, Trs, Vec4, Xform};
use crate::error::{Error, Result};
use crate::material::Material;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Variant parameters beyond the transform. Only cylinders use these today;
/// `None` bounds mean the cylinder is unbounded in that direction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,
}

pub trait Shape : Send + Sync + fmt::Debug {
    /// Name used in scene records.
    fn tag(&self) -> &'static str;
    fn params(&self) -> ShapeParams {
        ShapeParams::default()
    }
    /**
     * Intersects a ray given in the shape's own space. Returns every t at which the
     * ray crosses the surface, in any order; negative values are kept because
     * refraction needs to know what the ray origin sits inside.
     * The ray direction is not necessarily unit length.
     */
    fn local_intersect(&self, ray: &Ray) -> Vec<f64>;
    /// Normal at a point on the surface, in the shape's own space. Need not be unit length.
    fn local_normal_at(&self, point: &Vec4) -> Vec4;
}

/// Builds a shape from its record tag and parameters.
pub fn shape_from_tag(tag: &str, params: &ShapeParams) -> Result<Box<dyn Shape>> {
    match tag {
        "sphere" => Ok(Box::new(Sphere {})),
        "plane" => Ok(Box::new(Plane {})),
        "cube" => Ok(Box::new(Cube {})),
        "cylinder" => Ok(Box::new(Cylinder::from_params(params))),
        _ => {
            log::debug!("unknown shape tag {:?}", tag);
            Err(Error::UnknownShape(tag.to_string()))
        }
    }
}

/// A shape placed in the world with its own transform and material.
#[derive(Debug)]
pub struct Object {
    shape: Box<dyn Shape>,
    xform: Xform,
    material: Material,
}

impl Object {
    pub fn new<S: Shape + 'static>(shape: S) -> Object {
        Self::from_boxed(Box::new(shape))
    }

    pub fn from_boxed(shape: Box<dyn Shape>) -> Object {
        Object {
            shape: shape,
            xform: Xform::identity(),
            material: Material::default(),
        }
    }

    pub fn sphere() -> Object {
        Self::new(Sphere {})
    }

    pub fn plane() -> Object {
        Self::new(Plane {})
    }

    pub fn cube() -> Object {
        Self::new(Cube {})
    }

    /// Infinite open cylinder.
    pub fn cylinder() -> Object {
        Self::new(Cylinder::default())
    }

    /// Unit sphere made of `Material::glass()`.
    pub fn glass_sphere() -> Object {
        Self::sphere().with_material(Material::glass())
    }

    pub fn with_transform(mut self, mat: Mat4) -> Result<Object> {
        self.set_transform(mat)?;
        Ok(self)
    }

    pub fn with_trs(mut self, trs: Trs) -> Result<Object> {
        self.set_trs(trs)?;
        Ok(self)
    }

    pub fn with_material(mut self, material: Material) -> Object {
        self.material = material;
        self
    }

    /// On error the previous transform stays in place.
    pub fn set_transform(&mut self, mat: Mat4) -> Result<()> {
        self.xform = Xform::new(mat)?;
        Ok(())
    }

    pub fn set_trs(&mut self, trs: Trs) -> Result<()> {
        self.xform = Xform::from_trs(trs)?;
        Ok(())
    }

    pub fn set_xform(&mut self, xform: Xform) {
        self.xform = xform;
    }

    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }

    pub fn shape(&self) -> &dyn Shape {
        self.shape.as_ref()
    }

    pub fn xform(&self) -> &Xform {
        &self.xform
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn material_mut(&mut self) -> &mut Material {
        &mut self.material
    }

    pub fn world_to_object(&self, world_point: Vec4) -> Vec4 {
        self.xform.untransform(world_point)
    }

    /// Intersections of a world-space ray with this object, sorted by t.
    pub fn intersect(&self, ray: &Ray) -> Intersections<'_> {
        let local_ray = self.xform.untransform_ray(ray);
        let list = self.shape.local_intersect(&local_ray)
                .into_iter()
                .map(|t| Intersection::new(t, self))
                .collect();
        Intersections::new(list)
    }

    /// Unit world-space normal at a world-space point on the surface.
    pub fn normal_at(&self, world_point: Vec4) -> Result<Vec4> {
        let local_point = self.world_to_object(world_point);
        let local_normal = self.shape.local_normal_at(&local_point);
        self.xform.transform_normal(local_normal)
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Object) -> bool {
        self.shape.tag() == other.shape.tag()
            && self.shape.params() == other.shape.params()
            && self.xform == other.xform
            && self.material == other.material
    }
}
