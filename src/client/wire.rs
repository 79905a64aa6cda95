//! Wire-format types for the query and stats endpoints.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

/// Opaque element identifier. The backend emits either a JSON string or a
/// number depending on how the element was created, so both are accepted.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum ElementId {
	Num(u64),
	Text(String),
}

impl fmt::Display for ElementId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ElementId::Num(n) => write!(f, "{n}"),
			ElementId::Text(s) => f.write_str(s),
		}
	}
}

impl From<&str> for ElementId {
	fn from(s: &str) -> Self {
		ElementId::Text(s.to_string())
	}
}

impl From<u64> for ElementId {
	fn from(n: u64) -> Self {
		ElementId::Num(n)
	}
}

/// One raw graph element. Nodes and edges share this shape; only edges carry
/// `source_uid`/`target_uid`. Property values are base64-encoded.
#[derive(Clone, Debug, Deserialize)]
pub struct RawGraphElement {
	pub uid: ElementId,
	pub label: String,
	#[serde(default)]
	pub properties: BTreeMap<String, String>,
	pub source_uid: Option<ElementId>,
	pub target_uid: Option<ElementId>,
}

/// The query endpoint's response body. A missing `nodes` or `edges` key means
/// an empty list, never an error.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawGraphResult {
	#[serde(default)]
	pub nodes: Vec<RawGraphElement>,
	#[serde(default)]
	pub edges: Vec<RawGraphElement>,
}

/// Server runtime statistics. Field names are the wire contract and must
/// match the stats endpoint exactly.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StatsSnapshot {
	pub start_time: String,
	pub num_cpu: u32,
	pub num_goroutines: u32,
	pub total_memory_alloc: u64,
	pub node_count: u64,
	pub edge_count: u64,
}
