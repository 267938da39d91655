use coalray::core;
use coalray::geom;
use coalray::material;
use coalray::record;
use coalray::render;
use coalray::RenderOptions;

use std::env;
use std::fs;
use std::f64::consts::PI;
use std::time::Instant;

fn demo_world() -> coalray::Result<render::World> {
    let mut world = render::World::new();

    let checkers = material::Texture::new(material::Checker {a: core::WHITE, b: core::DARK_GREY})
            .shared();
    let floor = material::Material::builder()
            .specular(0.0)
            .reflectiveness(0.2)
            .pattern(checkers)
            .build()?;
    world.add_object(geom::Object::plane().with_material(floor));

    let stripes = material::Texture::new(material::Stripe {a: core::RED, b: core::YELLOW})
            .with_transform(core::Mat4::scaling(0.2, 0.2, 0.2) * core::Mat4::rotation_z(PI / 4.0))?
            .shared();
    let striped = material::Material::builder().pattern(stripes).diffuse(0.7).build()?;
    world.add_object(geom::Object::sphere()
            .with_transform(core::Mat4::translation(-1.5, 1.0, 0.5))?
            .with_material(striped));

    world.add_object(geom::Object::glass_sphere()
            .with_transform(core::Mat4::translation(0.5, 1.0, -0.5))?);

    let blue = material::Material::builder()
            .color(core::BLUE)
            .specular(0.3)
            .shininess(50.0)
            .build()?;
    world.add_object(geom::Object::new(geom::Cylinder::new(0.0, 1.5, true))
            .with_transform(core::Mat4::translation(2.0, 0.0, 1.5) *
                    core::Mat4::scaling(0.5, 1.0, 0.5))?
            .with_material(blue));

    let mirror = material::Material::builder()
            .color(core::BLACK)
            .diffuse(0.1)
            .reflectiveness(0.9)
            .build()?;
    world.add_object(geom::Object::cube()
            .with_transform(core::Mat4::translation(-0.5, 0.5, 3.0) *
                    core::Mat4::rotation_y(0.5) * core::Mat4::scaling(0.5, 0.5, 0.5))?
            .with_material(mirror));

    world.add_light(material::PointLight::new(core::Vec4::point(-10.0, 10.0, -10.0), core::WHITE));
    Ok(world)
}

fn run() -> coalray::Result<()> {
    let args: Vec<String> = env::args().collect();
    let options = RenderOptions::from_env();
    log::info!("options: max depth {}, {} threads", options.max_depth, options.threads);

    let world = match args.get(1) {
        Some(path) => {
            log::info!("loading scene from {}", path);
            record::world_from_json(&fs::read_to_string(path)?)?
        },
        None => demo_world()?
    };
    let output = args.get(2).cloned().unwrap_or_else(|| "coalray.ppm".to_string());

    let height: usize = 360;
    let mut camera = core::Camera::new(height * 16 / 9, height, PI / 3.0);
    camera.look_at(core::Vec4::point(0.0, 2.5, -6.0), core::Vec4::point(0.0, 1.0, 0.0),
            core::Vec4::y_axis())?;
    log::info!("aspect ratio: {:.3}, width: {}, height: {}",
            camera.aspect_ratio(), camera.hsize, camera.vsize);

    let stage = render::Stage::new(world, options.threads)?;
    let integrator = render::WhittedIntegrator::new(options.max_depth);
    let mut film = render::Film::new(camera.hsize, camera.vsize);

    let start = Instant::now();
    stage.trace(&camera, &integrator, &mut film)?;
    let mut file = fs::File::create(&output)?;
    film.write_ppm(&mut file)?;
    log::info!("wrote {} [total: {:.3} sec]", output, start.elapsed().as_secs_f64());
    Ok(())
}

pub fn main() {
    env_logger::init();
    if let Err(err) = run() {
        log::error!("{}", err);
        std::process::exit(1);
    }
}
