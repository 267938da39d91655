use crate::core::matrix::Mat4;
use crate::core::ray::Ray;
use crate::core::vector::Vec4;
use crate::error::Result;

use serde::{Deserialize, Serialize};

/// Translation, Euler rotation (radians) and scale, composed as
/// `translation * rotation * scaling`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trs {
    pub translation: [f64; 3],
    pub rotation: [f64; 3],
    pub scale: [f64; 3],
}

impl Default for Trs {
    fn default() -> Trs {
        Trs {
            translation: [0.0; 3],
            rotation: [0.0; 3],
            scale: [1.0; 3],
        }
    }
}

impl Trs {
    pub fn matrix(&self) -> Mat4 {
        let [tx, ty, tz] = self.translation;
        let [rx, ry, rz] = self.rotation;
        let [sx, sy, sz] = self.scale;
        Mat4::translation(tx, ty, tz) * Mat4::rotation(rx, ry, rz) * Mat4::scaling(sx, sy, sz)
    }
}

/// An object-to-world transform together with its cached inverse and
/// inverse-transpose. Only invertible matrices can become an `Xform`.
#[derive(Clone, Debug)]
pub struct Xform {
    mat: Mat4,
    inv_mat: Mat4,
    inv_transpose: Mat4,
    trs: Option<Trs>,
}

impl Xform {
    pub fn identity() -> Xform {
        Xform {
            mat: Mat4::identity(),
            inv_mat: Mat4::identity(),
            inv_transpose: Mat4::identity(),
            trs: Some(Trs::default()),
        }
    }

    pub fn new(mat: Mat4) -> Result<Xform> {
        let inv_mat = mat.inverted().map_err(|err| {
            log::debug!("rejecting transform {}: {}", mat, err);
            err
        })?;
        Ok(Xform {
            mat: mat,
            inv_mat: inv_mat,
            inv_transpose: inv_mat.transposed(),
            trs: None,
        })
    }

    pub fn from_trs(trs: Trs) -> Result<Xform> {
        let mut xform = Self::new(trs.matrix())?;
        xform.trs = Some(trs);
        Ok(xform)
    }

    pub fn matrix(&self) -> &Mat4 {
        &self.mat
    }

    pub fn inverse(&self) -> &Mat4 {
        &self.inv_mat
    }

    pub fn inverse_transpose(&self) -> &Mat4 {
        &self.inv_transpose
    }

    /// The components this transform was built from, if it was built from components.
    pub fn trs(&self) -> Option<&Trs> {
        self.trs.as_ref()
    }

    pub fn transform(&self, v: Vec4) -> Vec4 {
        self.mat * v
    }

    pub fn untransform(&self, v: Vec4) -> Vec4 {
        self.inv_mat * v
    }

    /// Maps a local-space normal to world space. Normals go through the
    /// inverse-transpose, which does not preserve length.
    pub fn transform_normal(&self, n: Vec4) -> Result<Vec4> {
        (self.inv_transpose * n).as_vector().normalized()
    }

    pub fn untransform_ray(&self, r: &Ray) -> Ray {
        r.transform(&self.inv_mat)
    }
}

impl Default for Xform {
    fn default() -> Xform {
        Self::identity()
    }
}

impl PartialEq for Xform {
    fn eq(&self, other: &Xform) -> bool {
        self.mat == other.mat
    }
}
