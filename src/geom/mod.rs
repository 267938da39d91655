mod cube;
pub use self::cube::Cube;

mod cylinder;
pub use self::cylinder::Cylinder;

mod intersection;
pub use self::intersection::{Intersection, Intersections};

mod plane;
pub use self::plane::Plane;

mod prim;
pub use self::prim::{shape_from_tag, Object, Shape, ShapeParams};

mod sphere;
pub use self::sphere::Sphere;
