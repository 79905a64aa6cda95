use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::scale::{self, ValueRange};
use super::types::{GraphDataset, GraphEdge, GraphNode};
use crate::client::wire::ElementId;

const COLORS: &[&str] = &[
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

pub const HIT_MARGIN: f64 = 6.0;

/// Per-node display data carried inside the physics graph.
#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub label: String,
	pub color: String,
	pub radius: f64,
	pub properties: Vec<(String, String)>,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
	pub highlight_t: f64,
}

/// Mutable widget state for one dataset. A new dataset means a new state;
/// there is no merging of an old simulation into a new one.
pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	edges: Vec<(DefaultNodeIdx, DefaultNodeIdx)>,
}

/// Collapse duplicate ids, keeping the last occurrence in its first position.
fn dedupe_last_wins<T>(items: &[T], id_of: impl Fn(&T) -> &ElementId) -> Vec<&T> {
	let mut by_id: HashMap<&ElementId, usize> = HashMap::new();
	let mut kept: Vec<&T> = Vec::new();
	for item in items {
		match by_id.get(id_of(item)) {
			Some(&slot) => kept[slot] = item,
			None => {
				by_id.insert(id_of(item), kept.len());
				kept.push(item);
			}
		}
	}
	kept
}

impl ForceGraphState {
	pub fn new(data: &GraphDataset, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});

		let nodes: Vec<&GraphNode> = dedupe_last_wins(&data.nodes, |n| &n.id);
		let edges: Vec<&GraphEdge> = dedupe_last_wins(&data.edges, |e| &e.id);
		let range = ValueRange::of(nodes.iter().map(|n| n.value));

		// Groups get palette colors in order of first appearance, so the
		// same dataset always colors the same way.
		let mut group_colors: HashMap<&str, &str> = HashMap::new();
		let mut id_to_idx = HashMap::new();

		for (i, node) in nodes.iter().enumerate() {
			let next = COLORS[group_colors.len() % COLORS.len()];
			let color = *group_colors.entry(node.group.as_str()).or_insert(next);
			let angle = (i as f64) * 2.0 * PI / nodes.len().max(1) as f64;
			let (x, y) = (
				(width / 2.0 + 100.0 * angle.cos()) as f32,
				(height / 2.0 + 100.0 * angle.sin()) as f32,
			);

			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					label: node.label.clone(),
					color: color.to_string(),
					radius: scale::radius_for(node.value, range),
					properties: node
						.properties
						.iter()
						.map(|(k, v)| (k.clone(), v.clone()))
						.collect(),
				},
			});
			id_to_idx.insert(&node.id, idx);
		}

		let mut resolved = Vec::new();
		for edge in &edges {
			if let (Some(&src), Some(&tgt)) = (id_to_idx.get(&edge.from), id_to_idx.get(&edge.to))
			{
				graph.add_edge(src, tgt, EdgeData::default());
				resolved.push((src, tgt));
			}
		}

		Self {
			graph,
			edges: resolved,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
			animation_running: true,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			if (dx * dx + dy * dy).sqrt() < node.data.user_data.radius + HIT_MARGIN {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hover.node == node {
			return;
		}
		self.hover.node = node;
		self.hover.neighbors.clear();

		if let Some(idx) = node {
			for &(src, tgt) in &self.edges {
				if src == idx {
					self.hover.neighbors.insert(tgt);
				} else if tgt == idx {
					self.hover.neighbors.insert(src);
				}
			}
		}
	}

	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx) || self.hover.neighbors.contains(&idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some()
	}

	pub fn hovered_info(&self) -> Option<(f64, f64, NodeInfo)> {
		let idx = self.hover.node?;
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some((node.x() as f64, node.y() as f64, node.data.user_data.clone()));
			}
		});
		found
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);

		let target = if self.hover.node.is_some() { 1.0 } else { 0.0 };
		self.hover.highlight_t += (target - self.hover.highlight_t) * 1.8 * dt as f64;
		if self.hover.highlight_t < 0.01 && self.hover.node.is_none() {
			self.hover.highlight_t = 0.0;
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn id(s: &str) -> ElementId {
		ElementId::from(s)
	}

	fn node(uid: &str, group: &str) -> GraphNode {
		GraphNode {
			id: id(uid),
			label: group.to_string(),
			group: group.to_string(),
			properties: Default::default(),
			value: None,
		}
	}

	fn edge(uid: &str, from: &str, to: &str) -> GraphEdge {
		GraphEdge {
			id: id(uid),
			from: id(from),
			to: id(to),
			label: "KNOWS".into(),
			group: "KNOWS".into(),
			properties: Default::default(),
			direction: Default::default(),
		}
	}

	#[test]
	fn duplicate_node_ids_keep_the_last_occurrence() {
		let nodes = vec![node("a", "X"), node("b", "Y"), node("a", "Z")];
		let kept = dedupe_last_wins(&nodes, |n| &n.id);
		assert_eq!(kept.len(), 2);
		assert_eq!(kept[0].group, "Z");
		assert_eq!(kept[1].group, "Y");
	}

	#[test]
	fn state_builds_nodes_and_resolves_edges() {
		let data = GraphDataset {
			nodes: vec![node("a", "Person"), node("b", "Person")],
			edges: vec![edge("e", "a", "b")],
		};
		let state = ForceGraphState::new(&data, 800.0, 600.0);
		assert_eq!(state.edges.len(), 1);

		let mut count = 0;
		state.graph.visit_nodes(|_| count += 1);
		assert_eq!(count, 2);
	}

	#[test]
	fn edges_to_unknown_nodes_are_skipped() {
		let data = GraphDataset {
			nodes: vec![node("a", "Person")],
			edges: vec![edge("e", "a", "missing")],
		};
		let state = ForceGraphState::new(&data, 800.0, 600.0);
		assert!(state.edges.is_empty());
	}

	#[test]
	fn same_group_shares_a_color() {
		let data = GraphDataset {
			nodes: vec![node("a", "Person"), node("b", "Person"), node("c", "City")],
			edges: vec![],
		};
		let state = ForceGraphState::new(&data, 800.0, 600.0);
		let mut colors = Vec::new();
		state
			.graph
			.visit_nodes(|n| colors.push(n.data.user_data.color.clone()));
		assert_eq!(colors[0], colors[1]);
		assert_ne!(colors[0], colors[2]);
	}

	#[test]
	fn hover_collects_neighbors() {
		let data = GraphDataset {
			nodes: vec![node("a", "P"), node("b", "P"), node("c", "P")],
			edges: vec![edge("e1", "a", "b"), edge("e2", "c", "a")],
		};
		let mut state = ForceGraphState::new(&data, 800.0, 600.0);
		let mut first = None;
		state.graph.visit_nodes(|n| {
			if first.is_none() {
				first = Some(n.index());
			}
		});
		state.set_hover(first);
		assert!(state.has_active_highlight());
		assert_eq!(state.hover.neighbors.len(), 2);
	}
}
