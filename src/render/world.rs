use crate::core::{Ray, Vec4};
use crate::error::Result;
use crate::geom::{Intersections, Object};
use crate::material::PointLight;

/// The scene: objects in insertion order plus the lights that illuminate them.
#[derive(Debug, Default)]
pub struct World {
    objects: Vec<Object>,
    lights: Vec<PointLight>,
}

impl World {
    pub fn new() -> World {
        World {objects: Vec::new(), lights: Vec::new()}
    }

    pub fn add_object(&mut self, object: Object) -> &mut Self {
        self.objects.push(object);
        self
    }

    pub fn add_light(&mut self, light: PointLight) -> &mut Self {
        self.lights.push(light);
        self
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut [Object] {
        &mut self.objects
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    pub fn lights_mut(&mut self) -> &mut Vec<PointLight> {
        &mut self.lights
    }

    /// Intersections of the ray with every object, in ascending t.
    pub fn intersect(&self, ray: &Ray) -> Intersections<'_> {
        let mut xs = Intersections::empty();
        for object in &self.objects {
            xs.extend(object.intersect(ray));
        }
        xs
    }

    /// Whether anything lies between `point` and the light.
    pub fn is_shadowed(&self, light: &PointLight, point: Vec4) -> Result<bool> {
        let to_light = light.position - point;
        let distance = to_light.magnitude();
        let ray = Ray::new(point, to_light.normalized()?);
        let xs = self.intersect(&ray);
        Ok(match xs.hit() {
            Some(hit) => hit.t < distance,
            None => false,
        })
    }
}

/// Two concentric spheres lit from the upper left, shared by the render tests.
#[cfg(test)]
pub(crate) fn default_world() -> World {
    use crate::core::{Color, Mat4, WHITE};
    use crate::material::Material;

    let mut world = World::new();
    let outer = Material::builder()
            .color(Color::new(0.8, 1.0, 0.6))
            .diffuse(0.7)
            .specular(0.2)
            .build().unwrap();
    world.add_object(Object::sphere().with_material(outer))
         .add_object(Object::sphere().with_transform(Mat4::scaling(0.5, 0.5, 0.5)).unwrap())
         .add_light(PointLight::new(Vec4::point(-10.0, 10.0, -10.0), WHITE));
    world
}
