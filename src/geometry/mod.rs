pub mod aabb;
pub mod arc;
pub mod line;
pub mod ray;
pub mod segment;
pub mod shape;

pub use aabb::Aabb;
pub use arc::Arc;
pub use line::Line;
pub use ray::{Ray, RayPart, SvgAttributes};
pub use segment::Segment;
pub use shape::Shape;
