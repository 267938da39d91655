use crate::render::kernel::Computations;
use crate::render::world::World;

use crate::core;
use crate::core::{Color, Ray};
use crate::error::Result;
use crate::material::PointLight;

// Computes the light reaching the eye by way of a given ray.
// Integrators only read the world, so a single integrator can serve every
// render thread at once.
pub trait Integrator : Sync + Send {
    fn integrate(&self, ray: &Ray, world: &World) -> Result<Color>;
}

/// Flat surface color of whatever the ray hits first. Handy for checking
/// geometry and patterns without lighting getting in the way.
pub struct DisplayColorIntegrator {
}

impl Integrator for DisplayColorIntegrator {
    fn integrate(&self, ray: &Ray, world: &World) -> Result<Color> {
        let xs = world.intersect(ray);
        match xs.hit() {
            Some(hit) => {
                let point = ray.position(hit.t);
                Ok(hit.object.material().surface_color(hit.object, point))
            },
            None => Ok(core::BLACK)
        }
    }
}

/**
 * Whitted-style recursive ray tracer: Phong lighting with hard shadows from every
 * light, plus mirror reflection and refraction followed for at most `max_depth`
 * bounces.
 */
pub struct WhittedIntegrator {
    pub max_depth: usize,
}

impl WhittedIntegrator {
    pub fn new(max_depth: usize) -> WhittedIntegrator {
        WhittedIntegrator {max_depth: max_depth}
    }

    /// Traces `ray` against `world` lit by `lights`, which need not be the world's own.
    pub fn shade(&self, ray: &Ray, world: &World, lights: &[PointLight]) -> Result<Color> {
        self.color_at(world, lights, ray, self.max_depth)
    }

    pub fn color_at(&self, world: &World, lights: &[PointLight], ray: &Ray, remaining: usize)
        -> Result<Color>
    {
        let xs = world.intersect(ray);
        match xs.hit_index() {
            Some(hit_index) => {
                let comps = Computations::prepare(&xs, hit_index, ray)?;
                self.shade_hit(world, lights, &comps, remaining)
            },
            None => Ok(core::BLACK)
        }
    }

    pub fn shade_hit(&self, world: &World, lights: &[PointLight], comps: &Computations,
            remaining: usize) -> Result<Color>
    {
        let material = comps.object.material();

        let mut surface = core::BLACK;
        for light in lights {
            let in_shadow = world.is_shadowed(light, comps.over_point)?;
            surface = surface + material.lighting(
                    light, comps.object, comps.over_point, comps.eye, comps.normal, in_shadow)?;
        }

        let reflected = self.reflected_color(world, lights, comps, remaining)?;
        let refracted = self.refracted_color(world, lights, comps, remaining)?;

        if material.reflectiveness() > 0.0 && material.transparency() > 0.0 {
            let reflectance = comps.schlick();
            Ok(surface + reflected * reflectance + refracted * (1.0 - reflectance))
        }
        else {
            Ok(surface + reflected + refracted)
        }
    }

    pub fn reflected_color(&self, world: &World, lights: &[PointLight], comps: &Computations,
            remaining: usize) -> Result<Color>
    {
        let reflectiveness = comps.object.material().reflectiveness();
        if remaining == 0 || reflectiveness == 0.0 {
            return Ok(core::BLACK);
        }

        let reflect_ray = Ray::new(comps.over_point, comps.reflect);
        let color = self.color_at(world, lights, &reflect_ray, remaining - 1)?;
        Ok(color * reflectiveness)
    }

    pub fn refracted_color(&self, world: &World, lights: &[PointLight], comps: &Computations,
            remaining: usize) -> Result<Color>
    {
        let transparency = comps.object.material().transparency();
        if remaining == 0 || transparency == 0.0 {
            return Ok(core::BLACK);
        }

        match comps.refracted_direction() {
            Some(direction) => {
                let refract_ray = Ray::new(comps.under_point, direction);
                let color = self.color_at(world, lights, &refract_ray, remaining - 1)?;
                Ok(color * transparency)
            },
            None => Ok(core::BLACK)
        }
    }
}

impl Integrator for WhittedIntegrator {
    fn integrate(&self, ray: &Ray, world: &World) -> Result<Color> {
        self.shade(ray, world, world.lights())
    }
}
