//! A Whitted-style ray tracer: transformable shapes, procedural patterns, Phong
//! materials, and recursive reflection and refraction.

pub mod config;
pub mod core;
pub mod error;
pub mod geom;
pub mod material;
pub mod record;
pub mod render;

pub use crate::config::RenderOptions;
pub use crate::error::{Error, Result};
