mod lights;
pub use self::lights::PointLight;

mod material;
pub use self::material::{Material, MaterialBuilder};

mod pattern;
pub use self::pattern::*;
