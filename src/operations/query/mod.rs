mod area;
mod bounding_box;
mod is_valid;
mod volume;

pub use area::Area;
pub use bounding_box::{Aabb, AabbPlaneRelation, BoundingBox};
pub use is_valid::IsClosed;
pub use volume::Volume;
