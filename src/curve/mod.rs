mod arc;
mod spiral;

pub use arc::{sort_ccw, ArcDefinition};
pub use spiral::SpiralDefinition;
