//! JSON scene records. Each shape, material, pattern and light maps to one
//! JSON object; a world is a list of shape records plus a list of lights.

use crate::core::{Color, Mat4, Trs, Vec4, Xform};
use crate::error::{Error, Result};
use crate::geom::{shape_from_tag, Object, ShapeParams};
use crate::material::{pattern_from_tag, Material, PointLight, Texture};
use crate::render::World;

use serde::{Deserialize, Serialize};

/// A transform as translation/rotation/scale triples, or as a raw matrix when it
/// was not built from components. Missing triples take their identity value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct XformRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<[f64; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<[f64; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<[f64; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matrix: Option<[[f64; 4]; 4]>,
}

impl XformRecord {
    pub fn from_xform(xform: &Xform) -> XformRecord {
        match xform.trs() {
            Some(trs) => XformRecord {
                translation: Some(trs.translation),
                rotation: Some(trs.rotation),
                scale: Some(trs.scale),
                matrix: None,
            },
            None => XformRecord {
                matrix: Some(xform.matrix().rows()),
                ..XformRecord::default()
            }
        }
    }

    pub fn to_xform(&self) -> Result<Xform> {
        let has_trs = self.translation.is_some() || self.rotation.is_some() || self.scale.is_some();
        match self.matrix {
            Some(_) if has_trs => {
                Err(Error::InvalidRecord("transform has both a matrix and components".to_string()))
            },
            Some(rows) => Xform::new(Mat4::new(rows)),
            None => {
                let defaults = Trs::default();
                Xform::from_trs(Trs {
                    translation: self.translation.unwrap_or(defaults.translation),
                    rotation: self.rotation.unwrap_or(defaults.rotation),
                    scale: self.scale.unwrap_or(defaults.scale),
                })
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatternRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub colors: Vec<Color>,
    #[serde(flatten)]
    pub xform: XformRecord,
}

impl PatternRecord {
    pub fn from_texture(texture: &Texture) -> PatternRecord {
        PatternRecord {
            kind: texture.pattern().tag().to_string(),
            colors: texture.pattern().colors(),
            xform: XformRecord::from_xform(texture.xform()),
        }
    }

    pub fn to_texture(&self) -> Result<Texture> {
        let pattern = pattern_from_tag(&self.kind, &self.colors)?;
        Ok(Texture::from_boxed(pattern).with_xform(self.xform.to_xform()?))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialRecord {
    pub color: Color,
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
    pub shininess: f64,
    pub reflectiveness: f64,
    pub transparency: f64,
    pub refractive_index: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<PatternRecord>,
}

impl Default for MaterialRecord {
    fn default() -> MaterialRecord {
        MaterialRecord::from_material(&Material::default())
    }
}

impl MaterialRecord {
    pub fn from_material(material: &Material) -> MaterialRecord {
        MaterialRecord {
            color: material.color(),
            ambient: material.ambient(),
            diffuse: material.diffuse(),
            specular: material.specular(),
            shininess: material.shininess(),
            reflectiveness: material.reflectiveness(),
            transparency: material.transparency(),
            refractive_index: material.refractive_index(),
            pattern: material.pattern().map(|texture| PatternRecord::from_texture(texture)),
        }
    }

    /// Rebuilds the material, with the same validation as the setters.
    pub fn to_material(&self) -> Result<Material> {
        let mut builder = Material::builder();
        builder.color(self.color)
               .ambient(self.ambient)
               .diffuse(self.diffuse)
               .specular(self.specular)
               .shininess(self.shininess)
               .reflectiveness(self.reflectiveness)
               .transparency(self.transparency)
               .refractive_index(self.refractive_index);
        if let Some(ref pattern) = self.pattern {
            builder.pattern(pattern.to_texture()?.shared());
        }
        builder.build()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub xform: XformRecord,
    #[serde(flatten)]
    pub params: ShapeParams,
    #[serde(default)]
    pub material: MaterialRecord,
}

impl ShapeRecord {
    pub fn from_object(object: &Object) -> ShapeRecord {
        ShapeRecord {
            kind: object.shape().tag().to_string(),
            xform: XformRecord::from_xform(object.xform()),
            params: object.shape().params(),
            material: MaterialRecord::from_material(object.material()),
        }
    }

    pub fn to_object(&self) -> Result<Object> {
        let shape = shape_from_tag(&self.kind, &self.params)?;
        let mut object = Object::from_boxed(shape).with_material(self.material.to_material()?);
        object.set_xform(self.xform.to_xform()?);
        Ok(object)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightRecord {
    pub position: [f64; 3],
    pub intensity: Color,
}

impl LightRecord {
    pub fn from_light(light: &PointLight) -> LightRecord {
        let p = &light.position;
        LightRecord {position: [p.x, p.y, p.z], intensity: light.intensity}
    }

    pub fn to_light(&self) -> PointLight {
        let [x, y, z] = self.position;
        PointLight::new(Vec4::point(x, y, z), self.intensity)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldRecord {
    pub objects: Vec<ShapeRecord>,
    pub lights: Vec<LightRecord>,
}

impl WorldRecord {
    pub fn from_world(world: &World) -> WorldRecord {
        WorldRecord {
            objects: world.objects().iter().map(ShapeRecord::from_object).collect(),
            lights: world.lights().iter().map(LightRecord::from_light).collect(),
        }
    }

    pub fn to_world(&self) -> Result<World> {
        let mut world = World::new();
        for record in &self.objects {
            world.add_object(record.to_object()?);
        }
        for record in &self.lights {
            world.add_light(record.to_light());
        }
        Ok(world)
    }
}

pub fn object_to_json(object: &Object) -> Result<String> {
    Ok(serde_json::to_string_pretty(&ShapeRecord::from_object(object))?)
}

pub fn object_from_json(json: &str) -> Result<Object> {
    let record: ShapeRecord = serde_json::from_str(json)?;
    record.to_object()
}

pub fn world_to_json(world: &World) -> Result<String> {
    Ok(serde_json::to_string_pretty(&WorldRecord::from_world(world))?)
}

pub fn world_from_json(json: &str) -> Result<World> {
    let record: WorldRecord = serde_json::from_str(json)?;
    let world = record.to_world()?;
    log::debug!("loaded world: {} objects, {} lights", world.objects().len(), world.lights().len());
    Ok(world)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BLACK, WHITE};
    use crate::geom::Cylinder;
    use crate::material::Ring;
    use serde_json::json;

    #[test]
    fn sphere_record_layout() {
        let mut material = Material::default();
        material.set_diffuse(0.5).unwrap();
        let trs = Trs {translation: [1.0, 2.0, 3.0], ..Trs::default()};
        let sphere = Object::sphere().with_trs(trs).unwrap().with_material(material);

        let value: serde_json::Value = serde_json::from_str(&object_to_json(&sphere).unwrap()).unwrap();
        assert_eq!(value["type"], "sphere");
        assert_eq!(value["translation"], json!([1.0, 2.0, 3.0]));
        assert_eq!(value["scale"], json!([1.0, 1.0, 1.0]));
        assert_eq!(value["material"]["diffuse"], json!(0.5));
        assert!(value.get("matrix").is_none());
        assert!(value["material"].get("pattern").is_none());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let object = object_from_json(r#"{"type": "plane"}"#).unwrap();
        assert_eq!(object, Object::plane());

        let object = object_from_json(r#"{"type": "sphere", "scale": [2, 2, 2]}"#).unwrap();
        assert_eq!(*object.xform().matrix(), Mat4::scaling(2.0, 2.0, 2.0));
    }

    #[test]
    fn raw_matrix_round_trips() {
        let m = Mat4::scaling(1.0, 0.5, 1.0) * Mat4::rotation_z(0.3);
        let sphere = Object::sphere().with_transform(m).unwrap();
        let json = object_to_json(&sphere).unwrap();
        assert!(json.contains("matrix"));
        assert_eq!(object_from_json(&json).unwrap(), sphere);
    }

    #[test]
    fn cylinder_and_pattern_round_trip() {
        let ring = Texture::new(Ring {a: WHITE, b: BLACK})
                .with_trs(Trs {scale: [0.25, 0.25, 0.25], ..Trs::default()}).unwrap()
                .shared();
        let mut material = Material::default();
        material.set_pattern(Some(ring)).set_reflectiveness(0.3);
        let cylinder = Object::new(Cylinder::new(0.0, 2.0, true)).with_material(material);

        let back = object_from_json(&object_to_json(&cylinder).unwrap()).unwrap();
        assert_eq!(back, cylinder);
        assert_eq!(back.shape().params().maximum, Some(2.0));
    }

    #[test]
    fn infinite_cylinder_omits_bounds() {
        let json = object_to_json(&Object::cylinder()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("minimum").is_none());
        assert!(value.get("maximum").is_none());
        assert_eq!(value["closed"], json!(false));
        assert_eq!(object_from_json(&json).unwrap(), Object::cylinder());
    }

    #[test]
    fn unknown_tags_are_errors() {
        assert!(matches!(object_from_json(r#"{"type": "teapot"}"#),
                Err(Error::UnknownShape(_))));
        let json = r#"{"type": "sphere", "material": {"pattern": {"type": "perlin", "colors": []}}}"#;
        assert!(matches!(object_from_json(json), Err(Error::UnknownPattern(_))));
    }

    #[test]
    fn bad_records_are_errors() {
        assert!(matches!(object_from_json("{"), Err(Error::Json(_))));
        assert!(matches!(object_from_json(r#"{"type": "cube", "scale": [0, 1, 1]}"#),
                Err(Error::SingularMatrix {..})));
        assert!(matches!(object_from_json(r#"{"type": "cube", "material": {"ambient": 3}}"#),
                Err(Error::InvalidMaterial {field: "ambient", ..})));
        let both = r#"{"type": "cube", "scale": [1, 1, 1],
                "matrix": [[1,0,0,0],[0,1,0,0],[0,0,1,0],[0,0,0,1]]}"#;
        assert!(matches!(object_from_json(both), Err(Error::InvalidRecord(_))));
    }

    #[test]
    fn world_round_trip() {
        let mut world = World::new();
        world.add_object(Object::glass_sphere())
             .add_object(Object::plane().with_transform(Mat4::translation(0.0, -1.0, 0.0)).unwrap())
             .add_light(PointLight::new(Vec4::point(-10.0, 10.0, -10.0), WHITE));
        let back = world_from_json(&world_to_json(&world).unwrap()).unwrap();
        assert_eq!(back.objects(), world.objects());
        assert_eq!(back.lights(), world.lights());
    }
}
