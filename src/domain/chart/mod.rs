//! Chart aggregate: renderable models, axis sharing and the builder.

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::*;
pub use value_objects::*;
