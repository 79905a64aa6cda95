//! Conversion of raw query results into the renderable dataset.

use std::collections::BTreeMap;

use log::debug;

use super::decode::{DecodeError, decode_property};
use super::wire::{RawGraphElement, RawGraphResult};
use crate::components::force_graph::{EdgeDirection, GraphDataset, GraphEdge, GraphNode};

fn decode_properties(
	raw: &BTreeMap<String, String>,
) -> Result<BTreeMap<String, String>, DecodeError> {
	raw.iter()
		.map(|(key, value)| Ok((key.clone(), decode_property(value)?)))
		.collect()
}

/// Convert a raw query result into a [`GraphDataset`], decoding every
/// property value along the way.
///
/// Input order is preserved in both collections. A single decode failure
/// fails the whole conversion; no partial dataset is ever returned.
pub fn convert(raw: RawGraphResult) -> Result<GraphDataset, DecodeError> {
	let mut dataset = GraphDataset::default();

	for element in &raw.nodes {
		debug!("converting node {element:?}");
		dataset.nodes.push(GraphNode {
			id: element.uid.clone(),
			label: element.label.clone(),
			group: element.label.clone(),
			properties: decode_properties(&element.properties)?,
			value: None,
		});
	}

	for element in &raw.edges {
		debug!("converting edge {element:?}");
		dataset.edges.push(convert_edge(element)?);
	}

	Ok(dataset)
}

fn convert_edge(element: &RawGraphElement) -> Result<GraphEdge, DecodeError> {
	// The backend always populates endpoints on edges; a missing endpoint
	// points the edge at itself rather than dropping the element.
	let from = element.source_uid.clone().unwrap_or_else(|| element.uid.clone());
	let to = element.target_uid.clone().unwrap_or_else(|| element.uid.clone());
	Ok(GraphEdge {
		id: element.uid.clone(),
		from,
		to,
		label: element.label.clone(),
		group: element.label.clone(),
		properties: decode_properties(&element.properties)?,
		direction: EdgeDirection::Forward,
	})
}
