#![allow(dead_code)]

use coalray::core::{Color, Mat4, Vec4, WHITE};
use coalray::geom::Object;
use coalray::material::{Material, PointLight};
use coalray::render::World;

/// Two concentric spheres lit from the upper left front.
pub fn default_world() -> World {
    let mut world = World::new();
    let outer = Material::builder()
            .color(Color::new(0.8, 1.0, 0.6))
            .diffuse(0.7)
            .specular(0.2)
            .build()
            .unwrap();
    world.add_object(Object::sphere().with_material(outer))
         .add_object(Object::sphere().with_transform(Mat4::scaling(0.5, 0.5, 0.5)).unwrap())
         .add_light(PointLight::new(Vec4::point(-10.0, 10.0, -10.0), WHITE));
    world
}

/// A floor plane one unit below the origin.
pub fn floor(material: Material) -> Object {
    Object::plane()
        .with_transform(Mat4::translation(0.0, -1.0, 0.0))
        .unwrap()
        .with_material(material)
}

/// A red ball under the floor, visible only through it.
pub fn ball_below() -> Object {
    let red = Material::builder()
            .color(Color::new(1.0, 0.0, 0.0))
            .ambient(0.5)
            .build()
            .unwrap();
    Object::sphere()
        .with_transform(Mat4::translation(0.0, -3.5, -0.5))
        .unwrap()
        .with_material(red)
}
