mod film;
pub use self::film::Film;

mod integrators;
pub use self::integrators::*;

mod kernel;
pub use self::kernel::{refractive_indices, Computations, Containers, RAY_PUSH_DIST};

mod stage;
pub use self::stage::Stage;

mod world;
pub use self::world::World;

use crate::core::{Color, Ray, Vec4};
use crate::error::Result;
use crate::geom::{Intersections, Object};
use crate::material::PointLight;

/// Every intersection of `ray` with the objects of `world`, in ascending t.
pub fn intersect<'a>(ray: &Ray, world: &'a World) -> Intersections<'a> {
    world.intersect(ray)
}

/// Color seen along `ray`, following reflection and refraction at most `max_depth` times.
pub fn shade(ray: &Ray, world: &World, lights: &[PointLight], max_depth: usize) -> Result<Color> {
    WhittedIntegrator::new(max_depth).shade(ray, world, lights)
}

/// Unit world-space normal of `object` at `world_point`.
pub fn normal_at(object: &Object, world_point: Vec4) -> Result<Vec4> {
    object.normal_at(world_point)
}
