mod child_registry;
mod marker_sync;
mod render_coordinator;
mod visualization;
mod visualization_config;

pub use visualization::Visualization;
pub use visualization_config::VisualizationConfig;
