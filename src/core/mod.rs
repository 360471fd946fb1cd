mod marker;
mod position;

pub use marker::{BoundaryMarkers, MarkerClass};
pub use position::PositionMove;
