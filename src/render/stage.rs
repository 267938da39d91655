use crate::render::film::Film;
use crate::render::integrators::Integrator;
use crate::render::world::World;

use crate::core;
use crate::core::Camera;
use crate::error::Result;

use rayon::prelude::*;
use std::time::Instant;

/// Owns the world and the thread pool that renders it.
pub struct Stage {
    world: World,
    pool: rayon::ThreadPool,
}

impl Stage {
    pub fn new(world: World, threads: usize) -> Result<Stage> {
        let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
        log::info!("stage ready: {} objects, {} lights, {} threads",
                world.objects().len(), world.lights().len(), pool.current_num_threads());
        Ok(Stage {world: world, pool: pool})
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Renders one camera ray per pixel into `film`, which should match the camera's size.
    pub fn trace(&self, camera: &Camera, integrator: &dyn Integrator, film: &mut Film)
        -> Result<()>
    {
        let start = Instant::now();
        let width = film.width;
        let world = &self.world;
        self.pool.install(|| {
            film.pixels_mut().par_iter_mut().enumerate().try_for_each(|(i, pixel)| -> Result<()> {
                let (row, col) = core::row_col(i, width);
                let ray = camera.compute_ray(col, row)?;
                *pixel = integrator.integrate(&ray, world)?;
                Ok(())
            })
        })?;

        let duration = start.elapsed();
        log::info!("traced {}x{} in {:.3} sec", film.width, film.height, duration.as_secs_f64());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, Vec4};
    use crate::render::integrators::WhittedIntegrator;
    use crate::render::world::default_world;
    use approx::assert_abs_diff_eq;

    #[test]
    fn renders_center_pixel() {
        let stage = Stage::new(default_world(), 2).unwrap();
        assert_eq!(stage.threads(), 2);
        let mut camera = Camera::new(11, 11, std::f64::consts::FRAC_PI_2);
        camera.look_at(Vec4::point(0.0, 0.0, -5.0), Vec4::origin(), Vec4::vector(0.0, 1.0, 0.0))
                .unwrap();
        let mut film = Film::new(11, 11);
        stage.trace(&camera, &WhittedIntegrator::new(5), &mut film).unwrap();
        assert_abs_diff_eq!(film.pixel_at(5, 5), Color::new(0.38066, 0.47583, 0.28550),
                epsilon = 1e-4);
        assert_eq!(film.pixel_at(0, 0), core::BLACK);
    }

    #[test]
    fn thread_count_does_not_change_image() {
        let mut camera = Camera::new(16, 9, 1.2);
        camera.look_at(Vec4::point(0.0, 1.0, -5.0), Vec4::origin(), Vec4::vector(0.0, 1.0, 0.0))
                .unwrap();
        let integrator = WhittedIntegrator::new(3);

        let mut single = Film::new(16, 9);
        Stage::new(default_world(), 1).unwrap().trace(&camera, &integrator, &mut single).unwrap();
        let mut many = Film::new(16, 9);
        Stage::new(default_world(), 4).unwrap().trace(&camera, &integrator, &mut many).unwrap();
        assert_eq!(single.pixels(), many.pixels());
    }
}
