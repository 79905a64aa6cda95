use std::collections::BTreeMap;

use crate::client::wire::ElementId;

/// Edge drawing direction. The backend only produces directed edges, so the
/// only variant points from `from` to `to`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EdgeDirection {
	#[default]
	Forward,
}

/// A decoded graph node in the shape the canvas widget consumes.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: ElementId,
	pub label: String,
	/// Grouping key for coloring; always equal to `label`.
	pub group: String,
	pub properties: BTreeMap<String, String>,
	/// Scaling attribute: when present, node radius interpolates between the
	/// widget's size bounds. Not populated by the query pipeline.
	pub value: Option<f64>,
}

/// A decoded graph edge, drawn with an arrowhead at `to`.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphEdge {
	pub id: ElementId,
	pub from: ElementId,
	pub to: ElementId,
	pub label: String,
	pub group: String,
	pub properties: BTreeMap<String, String>,
	pub direction: EdgeDirection,
}

/// A full renderable dataset. Every successful query replaces the widget's
/// dataset wholesale; there is no incremental merge.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphDataset {
	pub nodes: Vec<GraphNode>,
	pub edges: Vec<GraphEdge>,
}
