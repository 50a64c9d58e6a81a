pub mod collection;
pub mod error;
pub mod geometry;
pub mod index;
pub mod math;
pub mod morph;
pub mod render;
pub mod tessellation;

pub use error::{MorphisError, Result};
