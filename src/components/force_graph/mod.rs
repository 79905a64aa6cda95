mod component;
mod render;
pub mod scale;
mod state;
mod types;

pub use component::ForceGraphCanvas;
pub use types::{EdgeDirection, GraphDataset, GraphEdge, GraphNode};
