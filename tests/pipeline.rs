//! Native tests for the ingestion pipeline: raw endpoint JSON through
//! property decoding into the renderable dataset.
//!
//! The network-facing paths (gloo-net requests) are browser-only and are not
//! exercised here; everything below the request boundary is plain Rust and
//! runs under `cargo test`.

use graph_explorer::client::convert::convert;
use graph_explorer::client::error::ClientError;
use graph_explorer::client::wire::{ElementId, RawGraphResult, StatsSnapshot};
use graph_explorer::components::force_graph::{EdgeDirection, GraphDataset};

fn convert_json(body: &str) -> Result<GraphDataset, ClientError> {
	let raw: RawGraphResult =
		serde_json::from_str(body).map_err(|e| ClientError::Transport(e.to_string()))?;
	Ok(convert(raw)?)
}

#[test]
fn full_graph_body_with_no_keys_renders_an_empty_dataset() {
	// `{}` is a valid full-graph response and must reach the render sink as
	// an empty dataset, not be skipped.
	let dataset = convert_json("{}").unwrap();
	assert!(dataset.nodes.is_empty());
	assert!(dataset.edges.is_empty());
}

#[test]
fn person_node_with_base64_name_decodes_to_alice() {
	let dataset = convert_json(
		r#"{"nodes":[{"uid":1,"label":"Person","properties":{"name":"QWxpY2U="}}],"edges":[]}"#,
	)
	.unwrap();

	assert_eq!(dataset.nodes.len(), 1);
	assert!(dataset.edges.is_empty());

	let node = &dataset.nodes[0];
	assert_eq!(node.id, ElementId::Num(1));
	assert_eq!(node.label, "Person");
	assert_eq!(node.group, "Person");
	assert_eq!(node.properties.get("name").map(String::as_str), Some("Alice"));
}

#[test]
fn a_small_graph_converts_end_to_end() {
	let dataset = convert_json(
		r#"{
			"nodes": [
				{"uid": "a", "label": "Person", "properties": {"name": "QWxpY2U="}},
				{"uid": "b", "label": "Person", "properties": {"name": "Qm9i"}},
				{"uid": "c", "label": "City", "properties": {}}
			],
			"edges": [
				{"uid": "e1", "label": "KNOWS", "source_uid": "a", "target_uid": "b"},
				{"uid": "e2", "label": "LIVES_IN", "source_uid": "b", "target_uid": "c"}
			]
		}"#,
	)
	.unwrap();

	assert_eq!(dataset.nodes.len(), 3);
	assert_eq!(dataset.edges.len(), 2);
	assert_eq!(dataset.nodes[1].properties.get("name").unwrap(), "Bob");

	let e1 = &dataset.edges[0];
	assert_eq!(e1.from, ElementId::from("a"));
	assert_eq!(e1.to, ElementId::from("b"));
	assert_eq!(e1.direction, EdgeDirection::Forward);
}

#[test]
fn one_undecodable_property_poisons_the_whole_response() {
	let result = convert_json(
		r#"{
			"nodes": [
				{"uid": 1, "label": "Person", "properties": {"name": "QWxpY2U="}},
				{"uid": 2, "label": "Person", "properties": {"name": "!!not-base64!!"}}
			]
		}"#,
	);
	assert!(matches!(result, Err(ClientError::Decode(_))));
}

#[test]
fn http_error_bodies_reach_the_user_verbatim() {
	let err = ClientError::Http {
		status: 400,
		message: "syntax error at line 2".into(),
	};
	assert_eq!(err.user_message(), "syntax error at line 2");
}

#[test]
fn stats_snapshot_parses_the_documented_wire_fields() {
	let snapshot: StatsSnapshot = serde_json::from_str(
		r#"{
			"start_time": "2024-01-01T00:00:00Z",
			"num_cpu": 8,
			"num_goroutines": 42,
			"total_memory_alloc": 1048576,
			"node_count": 10,
			"edge_count": 15
		}"#,
	)
	.unwrap();

	assert_eq!(
		snapshot,
		StatsSnapshot {
			start_time: "2024-01-01T00:00:00Z".into(),
			num_cpu: 8,
			num_goroutines: 42,
			total_memory_alloc: 1_048_576,
			node_count: 10,
			edge_count: 15,
		}
	);
}
