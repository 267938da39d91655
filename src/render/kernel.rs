use crate::core::{Ray, Vec4};
use crate::error::Result;
use crate::geom::{Intersections, Object};

use std::ptr;

/// The distance to push the origin of each secondary ray off the surface, so the
/// ray does not find the surface it starts on.
pub const RAY_PUSH_DIST: f64 = 1.0e-5;

/// The objects a ray is inside at some point along it, innermost last.
/// Objects are told apart by address, so two equal-looking spheres still count
/// as two containers.
#[derive(Debug, Default)]
pub struct Containers<'a> {
    inside: Vec<&'a Object>,
}

impl<'a> Containers<'a> {
    pub fn new() -> Containers<'a> {
        Containers {inside: Vec::new()}
    }

    /// Entering an object pushes it; leaving it removes it.
    pub fn toggle(&mut self, object: &'a Object) {
        match self.inside.iter().position(|o| ptr::eq(*o, object)) {
            Some(i) => {
                self.inside.remove(i);
            },
            None => {
                self.inside.push(object);
            }
        }
    }

    pub fn contains(&self, object: &Object) -> bool {
        self.inside.iter().any(|o| ptr::eq(*o, object))
    }

    pub fn len(&self) -> usize {
        self.inside.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inside.is_empty()
    }

    /// Refractive index of the innermost container, or of vacuum when there is none.
    pub fn refractive_index(&self) -> f64 {
        match self.inside.last() {
            Some(object) => object.material().refractive_index(),
            None => 1.0,
        }
    }
}

/// Refractive indices on the incoming (n1) and outgoing (n2) side of
/// intersection `hit_index`, found by walking the ray's intersections in order.
pub fn refractive_indices(xs: &Intersections, hit_index: usize) -> (f64, f64) {
    let mut containers = Containers::new();
    let mut n1 = 1.0;
    for (i, x) in xs.iter().enumerate() {
        if i == hit_index {
            n1 = containers.refractive_index();
        }
        containers.toggle(x.object);
        if i == hit_index {
            return (n1, containers.refractive_index());
        }
    }
    (n1, 1.0)
}

/// Everything about a ray/surface hit that shading needs, computed once.
#[derive(Debug)]
pub struct Computations<'a> {
    pub t: f64,
    pub object: &'a Object,
    pub point: Vec4,
    /// `point` pushed off the surface along the normal, for shadow and reflection rays.
    pub over_point: Vec4,
    /// `point` pushed into the surface, for refraction rays.
    pub under_point: Vec4,
    pub eye: Vec4,
    /// Faces the eye; flipped when the hit is on the inside of the surface.
    pub normal: Vec4,
    pub reflect: Vec4,
    pub inside: bool,
    pub n1: f64,
    pub n2: f64,
}

impl<'a> Computations<'a> {
    pub fn prepare(xs: &Intersections<'a>, hit_index: usize, ray: &Ray) -> Result<Computations<'a>> {
        let hit = xs[hit_index];
        let point = ray.position(hit.t);
        let eye = -ray.direction;
        let mut normal = hit.object.normal_at(point)?;
        let inside = normal.dot(&eye) < 0.0;
        if inside {
            normal = -normal;
        }
        let (n1, n2) = refractive_indices(xs, hit_index);

        Ok(Computations {
            t: hit.t,
            object: hit.object,
            point: point,
            over_point: point + normal * RAY_PUSH_DIST,
            under_point: point - normal * RAY_PUSH_DIST,
            eye: eye,
            normal: normal,
            reflect: ray.direction.reflect(&normal),
            inside: inside,
            n1: n1,
            n2: n2,
        })
    }

    /// Schlick's approximation of the Fresnel reflectance at this hit.
    pub fn schlick(&self) -> f64 {
        let mut cos = self.eye.dot(&self.normal);
        if self.n1 > self.n2 {
            let n = self.n1 / self.n2;
            let sin2_t = n * n * (1.0 - cos * cos);
            if sin2_t > 1.0 {
                // Total internal reflection.
                return 1.0;
            }
            cos = f64::sqrt(1.0 - sin2_t);
        }
        let r0 = ((self.n1 - self.n2) / (self.n1 + self.n2)).powi(2);
        r0 + (1.0 - r0) * (1.0 - cos).powi(5)
    }

    /// Direction of the refracted ray by Snell's law, or `None` under total internal reflection.
    pub fn refracted_direction(&self) -> Option<Vec4> {
        let n_ratio = self.n1 / self.n2;
        let cos_i = self.eye.dot(&self.normal);
        let sin2_t = n_ratio * n_ratio * (1.0 - cos_i * cos_i);
        if sin2_t > 1.0 {
            return None;
        }
        let cos_t = f64::sqrt(1.0 - sin2_t);
        Some(self.normal * (n_ratio * cos_i - cos_t) - self.eye * n_ratio)
    }
}
